#![forbid(unsafe_code)]

mod board;
mod daos;

pub use board::*;
pub use daos::*;
