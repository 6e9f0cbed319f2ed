use std::io::{self, Write};

use tracing::warn;

use crate::{Config, Inspect, ObjectReport, Result};

/// Renders object reports and delivers them to a sink.
///
/// `None` stands for a missing object: it is not an error, it simply has no
/// report.
pub trait Debugger {
    /// Full report of `instance` as text, or `None` for a missing object.
    fn instance_info(&self, instance: Option<&dyn Inspect>) -> Result<Option<String>>;

    /// Write the report, followed by a newline, to `sink`.
    ///
    /// A missing object is written as `null`.
    fn write_instance_info(&self, sink: &mut dyn Write, instance: Option<&dyn Inspect>) -> Result {
        let info = self.instance_info(instance)?;
        writeln!(sink, "{}", info.as_deref().unwrap_or("null"))?;
        Ok(())
    }

    /// Print the report to standard output.
    fn print_instance_info(&self, instance: Option<&dyn Inspect>) -> Result {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_instance_info(&mut lock, instance)
    }
}

/// Default [`Debugger`]: builds an [`ObjectReport`] and renders it.
#[derive(Debug, Clone, Default)]
pub struct SimpleDebugger {
    config: Config,
}

impl SimpleDebugger {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Structured report of `instance`, or `None` for a missing object.
    pub fn report(&self, instance: Option<&dyn Inspect>) -> Result<Option<ObjectReport>> {
        let Some(instance) = instance else {
            return Ok(None);
        };
        ObjectReport::build(instance, &self.config)
            .inspect_err(|e| warn!(error = %e, "Introspection aborted"))
            .map(Some)
    }
}

impl Debugger for SimpleDebugger {
    fn instance_info(&self, instance: Option<&dyn Inspect>) -> Result<Option<String>> {
        Ok(self.report(instance)?.map(|report| report.to_string()))
    }
}

/// Describe `instance` with the default configuration.
///
/// ```rust,ignore
/// let text = objscope::describe(Some(&cat))?.unwrap();
/// assert!(text.starts_with("Class : "));
/// assert_eq!(objscope::describe(None)?, None);
/// ```
pub fn describe(instance: Option<&dyn Inspect>) -> Result<Option<String>> {
    SimpleDebugger::default().instance_info(instance)
}

/// Print the description of `instance` to standard output.
pub fn print_info(instance: Option<&dyn Inspect>) -> Result {
    SimpleDebugger::default().print_instance_info(instance)
}

/// Write the description of `instance` to an arbitrary sink.
pub fn write_info(sink: &mut dyn Write, instance: Option<&dyn Inspect>) -> Result {
    SimpleDebugger::default().write_instance_info(sink, instance)
}
