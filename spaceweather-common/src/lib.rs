//! Wire types shared between the spaceweather backend and its clients.

pub mod types;

pub use types::*;
