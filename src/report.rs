use std::fmt;

use tracing::debug;

use crate::render::{FieldLine, MemberLine, render_field, render_member};
use crate::{Config, Inspect, Result, TypeMetadata};

/// Structured description of one object.
///
/// Built in one pass by [`ObjectReport::build`] and rendered through
/// `Display`:
///
/// ```text
/// Class : demo::Pet
/// Object: 1468449135447396401
/// Implements: Clone
/// Inherits from: core::any::Any
/// Fields:
///     [-] age: i32 = 7
///     ...
/// Constructors:
///     [+] new(age: i32, name: String)
/// Methods:
///     [+] i32 age()
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ObjectReport {
    pub class_name: &'static str,
    pub identity_hash: u64,
    pub interfaces: Vec<&'static str>,
    pub superclass: &'static str,
    pub fields: Vec<FieldLine>,
    pub constructors: Vec<MemberLine>,
    pub methods: Vec<MemberLine>,
    #[cfg_attr(feature = "serde", serde(skip))]
    indent: String,
}

impl ObjectReport {
    /// Collect the metadata of `instance` and render every member.
    ///
    /// Fails on the first field that can't be read or member whose modifiers
    /// can't be mapped; no partial report is ever returned.
    pub fn build(instance: &dyn Inspect, config: &Config) -> Result<Self> {
        let meta = TypeMetadata::read(instance, config);
        let owner = instance.as_any();

        let fields = meta
            .fields
            .iter()
            .map(|field| render_field(field, owner, config))
            .collect::<Result<Vec<_>>>()?;
        let constructors = meta
            .constructors
            .iter()
            .map(render_member)
            .collect::<Result<Vec<_>>>()?;
        let methods = meta
            .methods
            .iter()
            .map(render_member)
            .collect::<Result<Vec<_>>>()?;

        debug!(
            class = meta.class_name,
            fields = fields.len(),
            constructors = constructors.len(),
            methods = methods.len(),
            "Object report assembled"
        );

        Ok(Self {
            class_name: meta.class_name,
            identity_hash: instance.hash_code(),
            interfaces: meta.interfaces,
            superclass: meta.superclass,
            fields,
            constructors,
            methods,
            indent: config.indent.clone(),
        })
    }

    /// Serialize the structured report (not its text form) as pretty JSON.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn write_section<T>(
        &self,
        f: &mut fmt::Formatter<'_>,
        title: &str,
        lines: &[T],
        write_line: impl Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    ) -> fmt::Result {
        write!(f, "\n{title}:\n{}", self.indent)?;
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                write!(f, "\n{}", self.indent)?;
            }
            write_line(line, f)?;
        }
        Ok(())
    }
}

impl fmt::Display for ObjectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class : {}", self.class_name)?;
        write!(f, "\nObject: {}", self.identity_hash)?;
        write!(f, "\nImplements: {}", self.interfaces.join(", "))?;
        write!(f, "\nInherits from: {}", self.superclass)?;
        self.write_section(f, "Fields", &self.fields, |line, f| {
            line.write_to(f, &self.indent)
        })?;
        self.write_section(f, "Constructors", &self.constructors, |line, f| {
            write!(f, "{line}")
        })?;
        self.write_section(f, "Methods", &self.methods, |line, f| {
            write!(f, "{line}")
        })
    }
}
