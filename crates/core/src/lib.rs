#![forbid(unsafe_code)]

pub mod board;
pub mod form;
pub mod model;

pub use board::*;
pub use form::*;
pub use model::*;
