//! Application state module

mod field;
mod form_state;
mod values;

pub use field::*;
pub use form_state::*;
pub use values::*;
