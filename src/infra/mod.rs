pub mod api_key_provider;
pub mod http_client;
