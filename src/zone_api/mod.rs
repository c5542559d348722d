pub mod dispatcher;
pub mod error;
pub mod models;
pub mod zone_client;
