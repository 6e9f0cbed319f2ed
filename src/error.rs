#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Couldn't read the value of field '{field}': {source}")]
    FieldAccess {
        field: &'static str,
        source: AccessError,
    },

    #[error("Unsupported modifier mode {0:#06x}")]
    UnsupportedModifier(u32),

    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of a single field accessor.
///
/// Accessors are scoped to the type that declared the field, so handing one
/// a different owner, or getting back a value of the wrong shape, is the only
/// way a read can go wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("owner is not a `{expected}`")]
    OwnerMismatch { expected: &'static str },

    #[error("declared as {declared} but read a {found} value")]
    KindMismatch {
        declared: &'static str,
        found: &'static str,
    },
}

impl Error {
    pub(crate) fn field_access(field: &'static str, source: AccessError) -> Self {
        Error::FieldAccess { field, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_access_message_names_field_and_cause() {
        let err = Error::field_access(
            "age",
            AccessError::OwnerMismatch {
                expected: "demo::Pet",
            },
        );
        assert_eq!(
            err.to_string(),
            "Couldn't read the value of field 'age': owner is not a `demo::Pet`"
        );
    }

    #[test]
    fn test_unsupported_modifier_message_is_hex() {
        assert_eq!(
            Error::UnsupportedModifier(0x100).to_string(),
            "Unsupported modifier mode 0x0100"
        );
    }
}
