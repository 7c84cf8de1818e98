use colored::*;
use std::fmt::Display;

/// Icon and color scheme of a log message.
pub enum LogType {
    Success,
    Info,
    Warning,
}

/// Builder for the small tree-shaped summaries the commands print after a
/// mutation.
pub struct LogBuilder<'a> {
    log_type: LogType,
    message: String,
    details: Vec<(&'a str, Box<dyn Display>)>,
}

impl<'a> LogBuilder<'a> {
    pub fn new(log_type: LogType, message: impl Display) -> Self {
        Self {
            log_type,
            message: message.to_string(),
            details: Vec::new(),
        }
    }

    /// Adds a detail line (a "branch"); chainable.
    pub fn with_branch(mut self, label: &'a str, value: impl Display + 'static) -> Self {
        self.details.push((label, Box::new(value)));
        self
    }

    /// Adds a branch only when `value` is `Some`.
    pub fn with_optional_branch<T: Display + 'static>(
        self,
        label: &'a str,
        value: Option<T>,
    ) -> Self {
        if let Some(val) = value {
            self.with_branch(label, val)
        } else {
            self
        }
    }

    pub fn print(self) {
        let (symbol, color) = match self.log_type {
            LogType::Success => ("✔", "green"),
            LogType::Info => ("❯", "blue"),
            LogType::Warning => ("!", "yellow"),
        };

        println!(
            "\n{} {}",
            symbol.color(color).bold(),
            self.message.color(color).bold()
        );

        let count = self.details.len();
        for (i, (label, value)) in self.details.iter().enumerate() {
            let prefix = if i == count - 1 { "  ╰─" } else { "  ├─" };
            let padded_label = format!("{label}:");
            println!("{} {:<10} {}", prefix.dimmed(), padded_label.bold(), value);
        }
    }
}
