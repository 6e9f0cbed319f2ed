//! objscope - print the shape of a value
//!
//! A small debugging aid that renders an object's type structure as text:
//! its name and identity, declared superclass and interfaces, every field with
//! its current value, and its constructors and methods with visibility,
//! signatures and declared failures.
//!
//! Type metadata is generated at compile time by `#[derive(Inspect)]` and
//! `#[objscope::members]`, and read at runtime through the object-safe
//! [`Inspect`] trait.
//!
//! ```rust,ignore
//! use objscope::Inspect;
//!
//! #[derive(Inspect)]
//! pub struct Pet {
//!     age: i32,
//!     name: String,
//! }
//!
//! let cat = Pet { age: 7, name: "Cat".into() };
//! objscope::print_info(Some(&cat))?;
//! ```
//!
//! See `demos/pet.rs` for a complete example.

mod config;
mod debugger;
mod error;
mod inspect;
mod modifier;
mod reader;
mod report;
mod type_info;

pub mod render;

pub use config::Config;
pub use debugger::{Debugger, SimpleDebugger, describe, print_info, write_info};
pub use error::{AccessError, Error};
pub use inspect::{Inspect, Members, identity_hash};
pub use modifier::{ModifierSymbol, Modifiers};
pub use reader::TypeMetadata;
pub use render::{FieldLine, MemberLine, RenderedValue};
pub use report::ObjectReport;
pub use type_info::{
    FieldAccessor, FieldInfo, FieldKind, FieldValue, MemberInfo, Param, TypeInfo, downcast_owner,
};

#[cfg(feature = "macros")]
pub use objscope_macros::{Inspect, members};

pub type Result<T = ()> = std::result::Result<T, Error>;
