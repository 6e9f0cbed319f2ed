use std::any::Any;
use std::fmt::Display;

use crate::{AccessError, Members, Modifiers};

/// Reads the current value of one field from its owner.
///
/// Generated per field by `#[derive(Inspect)]`. The accessor downcasts the
/// owner to the declaring type and borrows nothing but its own field, which
/// is what lets the report include private state without exposing it any
/// further.
pub type FieldAccessor = fn(&dyn Any) -> Result<FieldValue, AccessError>;

/// Shape of a field's declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Primitive value: integers, floats, `bool`, `char`, `()`.
    Scalar,
    /// `Vec<T>`, `[T; N]`, boxed slices and the like.
    Array { element: &'static str },
    /// Anything else, rendered through its own text conversion.
    Reference,
}

impl FieldKind {
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Scalar => "scalar",
            FieldKind::Array { .. } => "array",
            FieldKind::Reference => "reference",
        }
    }
}

/// Value read by a [`FieldAccessor`], already converted to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(String),
    Array(Vec<String>),
    Reference(String),
    /// `None` in an optional reference or array field.
    Null,
}

impl FieldValue {
    pub fn scalar(value: &impl Display) -> Self {
        FieldValue::Scalar(value.to_string())
    }

    pub fn reference(value: &impl Display) -> Self {
        FieldValue::Reference(value.to_string())
    }

    pub fn array<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        FieldValue::Array(elements.into_iter().map(|e| e.to_string()).collect())
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldValue::Scalar(_) => "scalar",
            FieldValue::Array(_) => "array",
            FieldValue::Reference(_) => "reference",
            FieldValue::Null => "null",
        }
    }
}

/// Downcast helper used by generated accessors.
pub fn downcast_owner<T: Any>(owner: &dyn Any) -> Result<&T, AccessError> {
    owner
        .downcast_ref::<T>()
        .ok_or(AccessError::OwnerMismatch {
            expected: std::any::type_name::<T>(),
        })
}

/// A declared field, instance or associated constant.
#[derive(Debug, Clone)]
pub struct FieldInfo {
    pub name: &'static str,
    pub type_name: &'static str,
    pub kind: FieldKind,
    pub modifiers: Modifiers,
    accessor: FieldAccessor,
}

impl FieldInfo {
    pub fn new(
        name: &'static str,
        type_name: &'static str,
        kind: FieldKind,
        modifiers: Modifiers,
        accessor: FieldAccessor,
    ) -> Self {
        Self {
            name,
            type_name,
            kind,
            modifiers,
            accessor,
        }
    }

    /// Read the field's value from `owner`.
    pub fn read(&self, owner: &dyn Any) -> Result<FieldValue, AccessError> {
        (self.accessor)(owner)
    }
}

/// One parameter of a constructor or method.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Param {
    pub name: &'static str,
    pub type_name: &'static str,
}

/// A declared constructor or method.
///
/// Constructors carry no return type. A method without an explicit one
/// returns `()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberInfo {
    pub name: &'static str,
    pub return_type: Option<&'static str>,
    pub params: Vec<Param>,
    pub throws: Vec<&'static str>,
    pub modifiers: Modifiers,
}

impl MemberInfo {
    pub fn constructor(name: &'static str, modifiers: Modifiers) -> Self {
        Self {
            name,
            return_type: None,
            params: Vec::new(),
            throws: Vec::new(),
            modifiers,
        }
    }

    pub fn method(name: &'static str, return_type: &'static str, modifiers: Modifiers) -> Self {
        Self {
            return_type: Some(return_type),
            ..Self::constructor(name, modifiers)
        }
    }

    pub fn param(mut self, name: &'static str, type_name: &'static str) -> Self {
        self.params.push(Param { name, type_name });
        self
    }

    pub fn throws(mut self, type_name: &'static str) -> Self {
        self.throws.push(type_name);
        self
    }

    pub fn is_constructor(&self) -> bool {
        self.return_type.is_none()
    }
}

/// Type metadata of an inspectable value.
///
/// Everything is kept in declaration order; nothing downstream re-sorts it.
#[derive(Debug, Clone)]
pub struct TypeInfo {
    pub name: &'static str,
    pub superclass: Option<&'static str>,
    pub interfaces: Vec<&'static str>,
    pub fields: Vec<FieldInfo>,
    pub constructors: Vec<MemberInfo>,
    pub methods: Vec<MemberInfo>,
    pub implicit_constructor: Option<MemberInfo>,
}

impl TypeInfo {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            superclass: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            implicit_constructor: None,
        }
    }

    pub fn extends(mut self, superclass: &'static str) -> Self {
        self.superclass = Some(superclass);
        self
    }

    pub fn implements(mut self, interfaces: &[&'static str]) -> Self {
        self.interfaces.extend_from_slice(interfaces);
        self
    }

    pub fn with_fields(mut self, fields: Vec<FieldInfo>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn with_constructors(mut self, constructors: Vec<MemberInfo>) -> Self {
        self.constructors.extend(constructors);
        self
    }

    pub fn with_methods(mut self, methods: Vec<MemberInfo>) -> Self {
        self.methods.extend(methods);
        self
    }

    /// Append the associated constants, constructors and methods of `M`.
    pub fn with_members<M: Members>(self) -> Self {
        self.with_fields(M::constants())
            .with_constructors(M::constructors())
            .with_methods(M::methods())
    }

    /// Constructor reported when the type declares none of its own.
    pub fn with_implicit_constructor(mut self, constructor: MemberInfo) -> Self {
        self.implicit_constructor = Some(constructor);
        self
    }
}
