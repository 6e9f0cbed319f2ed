//! Procedural macros generating objscope type metadata.
//!
//! - `#[derive(Inspect)]`: implements `objscope::Inspect` for a struct: type
//!   name, superclass, interfaces, and one scoped value accessor per field.
//! - `#[members]`: on an inherent `impl` block, implements `objscope::Members`
//!   listing its constructors, methods and associated constants.
//!
//! Usage:
//! ```rust,ignore
//! use objscope::Inspect;
//!
//! #[derive(Clone, Inspect)]
//! #[inspect(implements(Clone), members)]
//! pub struct Pet {
//!     age: i32,
//!     name: String,
//!     #[inspect(debug)]
//!     tags: Vec<Option<String>>,
//! }
//!
//! #[objscope::members]
//! impl Pet {
//!     pub const SPECIES: &'static str = "cat";
//!
//!     pub fn new(age: i32, name: String) -> Result<Self, PetError> { /* ... */ }
//!
//!     #[throws(PetError)]
//!     pub fn set_age(&mut self, age: i32) { /* ... */ }
//!
//!     #[inspect(skip)]
//!     fn internal(&self) {}
//! }
//! ```
use proc_macro::TokenStream;
use proc_macro2::Span;
use syn::{DeriveInput, ItemImpl, parse_macro_input};

mod attrs;
mod field;
mod inspect;
mod members;
mod types;

/// Derives `objscope::Inspect` for a struct.
///
/// Struct options, in `#[inspect(...)]`:
/// - `extends = Type`: reported superclass.
/// - `implements(TraitA, TraitB)`: reported interfaces. Checked at compile
///   time for non-generic types.
/// - `members`: the type has a `#[members]` impl block. Without it an empty
///   `Members` impl is generated.
/// - `hash = path`: `fn(&Self) -> u64` reported instead of the identity hash.
///
/// Field options: `#[inspect(skip)]`, `#[inspect(debug)]`.
#[proc_macro_derive(Inspect, attributes(inspect))]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    inspect::derive(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Implements `objscope::Members` from an inherent `impl` block.
///
/// Every fn and associated const is listed in declaration order unless marked
/// `#[inspect(skip)]`. Extra failures of a fn can be declared with
/// `#[throws(ErrorA, ErrorB)]`.
#[proc_macro_attribute]
pub fn members(args: TokenStream, input: TokenStream) -> TokenStream {
    if !args.is_empty() {
        return syn::Error::new(Span::call_site(), "#[members] takes no arguments")
            .into_compile_error()
            .into();
    }
    let item = parse_macro_input!(input as ItemImpl);
    members::expand(item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
