pub mod config;
pub mod demo;
pub mod http;
pub mod runtime;
pub mod vendor;
