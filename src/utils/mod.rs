//! Utility modules

pub mod http_interceptor;

pub use http_interceptor::{HttpInterceptor, HttpRequestContext, LoggingInterceptor};
