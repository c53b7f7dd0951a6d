//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use landing_infra::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("stackId: NextLandingPipelineStack");
//! ui.success("Wrote manifest");
//!
//! assert!(ui.messages().contains(&"stackId: NextLandingPipelineStack".to_string()));
//! assert!(ui.successes().contains(&"Wrote manifest".to_string()));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    fields: Vec<(String, String, String)>,
    details: Vec<(String, String, String)>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured `(key, value, source)` report lines.
    pub fn fields(&self) -> &[(String, String, String)] {
        &self.fields
    }

    /// Get all captured `(key, value, source)` detail lines.
    pub fn details(&self) -> &[(String, String, String)] {
        &self.details
    }

    /// Look up a captured report line by key.
    pub fn field(&self, key: &str) -> Option<(&str, &str)> {
        self.fields
            .iter()
            .find(|(k, _, _)| k == key)
            .map(|(_, v, s)| (v.as_str(), s.as_str()))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn field(&mut self, key: &str, _width: usize, value: &str, source: &str) {
        self.fields
            .push((key.to_string(), value.to_string(), source.to_string()));
    }

    fn detail(&mut self, key: &str, _width: usize, value: &str, source: &str) {
        self.details
            .push((key.to_string(), value.to_string(), source.to_string()));
    }
}
