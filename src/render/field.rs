use std::any::Any;
use std::fmt::{self, Write};

use tracing::trace;

use crate::{AccessError, Config, Error, FieldInfo, FieldKind, FieldValue, ModifierSymbol, Result};

/// Formatted value of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum RenderedValue {
    /// Scalar or reference value, as its own text form.
    Text { text: String },
    /// Array elements, each as its own text form. `len` counts every element,
    /// including the ones dropped by [`Config::max_array_elements`].
    Array {
        element_type: &'static str,
        len: usize,
        elements: Vec<String>,
    },
    Null,
}

/// One line of the `Fields:` section.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldLine {
    pub modifier: ModifierSymbol,
    pub name: &'static str,
    pub type_name: &'static str,
    pub value: RenderedValue,
}

impl FieldLine {
    pub(crate) fn write_to(&self, out: &mut impl Write, indent: &str) -> fmt::Result {
        write!(out, "[{}] {}: ", self.modifier, self.name)?;
        match &self.value {
            RenderedValue::Text { text } => write!(out, "{} = {}", self.type_name, text),
            RenderedValue::Null => write!(out, "{} = null", self.type_name),
            RenderedValue::Array {
                element_type,
                len,
                elements,
            } => {
                write!(out, "array[{len}] of {element_type} {{")?;
                if *len == 0 {
                    return out.write_char('}');
                }
                for (index, element) in elements.iter().enumerate() {
                    write!(out, "\n{indent}{indent}[{index}] = {element}")?;
                }
                let omitted = len - elements.len();
                if omitted > 0 {
                    write!(out, "\n{indent}{indent}... ({omitted} more)")?;
                }
                write!(out, "\n{indent}}}")
            }
        }
    }
}

impl fmt::Display for FieldLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f, "\t")
    }
}

/// Read one field of `owner` and format it.
///
/// The declared kind decides the layout. A value whose shape disagrees
/// with it is reported as a failed read.
pub fn render_field(field: &FieldInfo, owner: &dyn Any, config: &Config) -> Result<FieldLine> {
    let modifier = field.modifiers.symbol()?;
    let value = field
        .read(owner)
        .map_err(|source| Error::field_access(field.name, source))?;

    let value = match (field.kind, value) {
        (FieldKind::Scalar, FieldValue::Scalar(text))
        | (FieldKind::Reference, FieldValue::Reference(text)) => RenderedValue::Text { text },
        (FieldKind::Reference | FieldKind::Array { .. }, FieldValue::Null) => RenderedValue::Null,
        (FieldKind::Array { element }, FieldValue::Array(mut elements)) => {
            let len = elements.len();
            if let Some(limit) = config.max_array_elements {
                elements.truncate(limit);
            }
            RenderedValue::Array {
                element_type: element,
                len,
                elements,
            }
        }
        (kind, value) => {
            return Err(Error::field_access(
                field.name,
                AccessError::KindMismatch {
                    declared: kind.label(),
                    found: value.label(),
                },
            ));
        }
    };

    trace!(field = field.name, kind = field.kind.label(), "Field rendered");
    Ok(FieldLine {
        modifier,
        name: field.name,
        type_name: field.type_name,
        value,
    })
}
