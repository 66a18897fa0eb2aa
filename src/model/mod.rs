//! Typed models

mod form;
mod record;
mod record_serde;
mod value;

pub use form::*;
pub use record::*;
pub use value::*;
