#![forbid(unsafe_code)]

mod entity;
mod inputs;
mod payloads;
mod responses;
mod status;

pub use entity::*;
pub use inputs::*;
pub use payloads::*;
pub use responses::*;
pub use status::*;
