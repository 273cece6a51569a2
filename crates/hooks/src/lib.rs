#![forbid(unsafe_code)]

//! Stateful handles over the resource services.
//!
//! A [`Query`] owns one `{data, loading, error}` triple and refetches on demand; a
//! [`Mutation`] posts and records the outcome. Pages wire several of them together
//! and derive their selection state from whatever the handles currently hold.

mod forms;
mod mutation;
mod pages;
mod query;
pub mod render;

pub mod daos;
pub mod proposals;
pub mod tasks;

pub use forms::*;
pub use mutation::*;
pub use pages::*;
pub use query::*;

use dao_ops_client::ClientError;

pub const UNEXPECTED_ERROR: &str = "Unexpected error";

/// Collapses any failure into the single line a view shows.
pub fn error_message(err: &ClientError) -> String {
    let message = err.message();
    if message.trim().is_empty() {
        UNEXPECTED_ERROR.to_string()
    } else {
        message
    }
}
