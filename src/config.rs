/// Rendering configuration for the debugger.
///
/// The defaults produce the standard report layout. Use the builder methods
/// to change them.
///
/// # Examples
///
/// ```rust
/// use objscope::Config;
///
/// let config = Config::default()
///     .with_indent("    ")               // Spaces instead of tabs
///     .with_max_array_elements(8);       // Don't list huge arrays in full
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix of every line in the field, constructor and method sections.
    /// Array elements are indented twice.
    /// Default: `"\t"`
    pub indent: String,

    /// Maximum number of elements listed per array field.
    /// The remainder is summarised in a single `... (N more)` line.
    /// Default: `None` (list everything)
    pub max_array_elements: Option<usize>,

    /// Superclass reported for types that don't declare one.
    /// Default: `"core::any::Any"`
    pub root_type_name: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            indent: "\t".to_string(),
            max_array_elements: None,
            root_type_name: "core::any::Any",
        }
    }
}

impl Config {
    /// Set the section indentation.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Limit the number of elements listed per array field.
    pub fn with_max_array_elements(mut self, limit: usize) -> Self {
        self.max_array_elements = Some(limit);
        self
    }

    /// Set the superclass reported for types without an explicit one.
    pub fn with_root_type_name(mut self, name: &'static str) -> Self {
        self.root_type_name = name;
        self
    }
}
