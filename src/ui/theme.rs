//! Styling for status lines and context reports.

use console::Style;

/// Styles applied by [`crate::ui::TerminalUI`].
#[derive(Debug, Clone)]
pub struct InfraTheme {
    ok: Style,
    warn: Style,
    fail: Style,
    label: Style,
    origin: Style,
}

impl InfraTheme {
    /// Colored theme.
    pub fn new() -> Self {
        Self {
            ok: Style::new().green(),
            warn: Style::new().yellow(),
            fail: Style::new().red().bold(),
            label: Style::new().cyan(),
            origin: Style::new().dim(),
        }
    }

    /// Unstyled theme for pipes and `--no-color`.
    pub fn plain() -> Self {
        Self {
            ok: Style::new(),
            warn: Style::new(),
            fail: Style::new(),
            label: Style::new(),
            origin: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        marked(&self.ok, "✓", msg)
    }

    pub fn format_warning(&self, msg: &str) -> String {
        marked(&self.warn, "!", msg)
    }

    pub fn format_error(&self, msg: &str) -> String {
        marked(&self.fail, "✗", msg)
    }

    /// One `field  value  (source)` line, with the field padded to `width`.
    pub fn format_field(&self, key: &str, width: usize, value: &str, source: &str) -> String {
        format!(
            "{}  {}  {}",
            self.label.apply_to(format!("{key:<width$}")),
            value,
            self.origin.apply_to(format!("({source})")),
        )
    }
}

fn marked(style: &Style, mark: &str, msg: &str) -> String {
    style.apply_to(format!("{mark} {msg}")).to_string()
}

/// Colors are off when `NO_COLOR` is set or stdout is not a terminal.
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::Term::stdout().is_term()
}
