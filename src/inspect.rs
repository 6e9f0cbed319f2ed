use std::any::Any;
use std::hash::{DefaultHasher, Hash, Hasher};

use crate::{FieldInfo, MemberInfo, TypeInfo};

/// A value whose shape can be reported.
///
/// Usually derived:
///
/// ```rust,ignore
/// use objscope::Inspect;
///
/// #[derive(Inspect)]
/// #[inspect(implements(Clone), members)]
/// #[derive(Clone)]
/// pub struct Pet {
///     age: i32,
///     name: String,
///     children: Vec<Pet>,
/// }
///
/// #[objscope::members]
/// impl Pet {
///     pub fn new(age: i32, name: String) -> Self { /* ... */ }
///     pub fn age(&self) -> i32 { self.age }
/// }
/// ```
///
/// The trait is object safe: the debugger works on `&dyn Inspect`.
pub trait Inspect: Any {
    /// Metadata of the concrete type, built fresh on every call.
    fn type_info(&self) -> TypeInfo;

    fn as_any(&self) -> &dyn Any;

    /// Hash reported as the object's identity.
    ///
    /// Defaults to [`identity_hash`]. Value types may override it, in which
    /// case two equal values report the same hash.
    fn hash_code(&self) -> u64 {
        identity_hash(self)
    }
}

/// Constructors, methods and associated constants of a type.
///
/// Implemented by `#[objscope::members]` on an inherent `impl` block, or as
/// an empty impl by `#[derive(Inspect)]` when the type has no such block.
pub trait Members {
    fn constructors() -> Vec<MemberInfo> {
        Vec::new()
    }

    fn methods() -> Vec<MemberInfo> {
        Vec::new()
    }

    fn constants() -> Vec<FieldInfo> {
        Vec::new()
    }
}

/// Stable hash of the value's address.
///
/// The same object hashes the same for as long as it doesn't move.
pub fn identity_hash<T: ?Sized>(value: &T) -> u64 {
    let address = value as *const T as *const () as usize;
    let mut hasher = DefaultHasher::new();
    address.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_hash_is_stable() {
        let value = 42u8;
        assert_eq!(identity_hash(&value), identity_hash(&value));
    }

    #[test]
    fn test_identity_hash_differs_between_objects() {
        let values = [1u32, 1u32];
        assert_ne!(identity_hash(&values[0]), identity_hash(&values[1]));
    }

    #[test]
    fn test_identity_hash_ignores_metadata() {
        let text = String::from("abc");
        let as_str: &str = &text;
        let as_dyn: &dyn std::fmt::Display = &text;
        assert_eq!(identity_hash(as_str), identity_hash(text.as_bytes()));
        assert_eq!(identity_hash(as_dyn), identity_hash(&text));
    }
}
