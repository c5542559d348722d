pub mod list_managed_headers_params;
pub mod update_managed_headers_params;
