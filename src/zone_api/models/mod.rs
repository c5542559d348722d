pub mod request;
pub mod response;

pub mod managed_header;
