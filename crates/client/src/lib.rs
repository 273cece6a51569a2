#![forbid(unsafe_code)]

mod config;
mod error;
mod http;
mod services;
mod transport;

pub use config::*;
pub use error::*;
pub use http::*;
pub use services::*;
pub use transport::*;

#[cfg(test)]
mod tests;
