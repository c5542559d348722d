pub mod config;
pub mod zone_api;

pub use crate::zone_api::dispatcher::{Dispatcher, HttpDispatcher};
pub use crate::zone_api::error::ApiError;
pub use crate::zone_api::models::managed_header::{ManagedHeader, ManagedHeaders};
pub use crate::zone_api::models::request::list_managed_headers_params::ListManagedHeadersParams;
pub use crate::zone_api::models::request::update_managed_headers_params::UpdateManagedHeadersParams;
pub use crate::zone_api::zone_client::{ZoneApiTrait, ZoneClient};
