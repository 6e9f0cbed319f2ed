//! Turns field and member metadata into report lines.
//!
//! Both renderers derive the modifier symbol the same way (see
//! [`ModifierSymbol`](crate::ModifierSymbol)) and fail the whole call on a
//! bitmask they can't map.

mod field;
mod member;

pub use field::{FieldLine, RenderedValue, render_field};
pub use member::{MemberLine, render_member};
