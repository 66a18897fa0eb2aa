//! REST API surface for the HR backend

mod crud;
mod module;
pub mod response;

pub use module::*;
