pub mod factory;
pub mod http;
