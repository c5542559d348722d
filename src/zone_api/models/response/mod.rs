pub mod managed_headers_response;
