//! Output formatting for CLI commands

use std::io::IsTerminal;

use crossterm::style::{Color, Stylize};
use serde::{Deserialize, Serialize};

/// Output format
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// ANSI coloring that can be switched off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Colors only when requested and stdout is a terminal
    pub fn for_stdout(requested: bool) -> Self {
        Self::new(requested && std::io::stdout().is_terminal())
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, Color::Red)
    }

    pub fn good(&self, text: &str) -> String {
        self.paint(text, Color::Green)
    }

    pub fn note(&self, text: &str) -> String {
        self.paint(text, Color::Yellow)
    }

    pub fn accent(&self, text: &str) -> String {
        self.paint(text, Color::Cyan)
    }
}

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    palette: Palette,
}

impl Output {
    pub fn new(format: OutputFormat, palette: Palette) -> Self {
        Self { format, palette }
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Prints a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Text => println!("{}", self.palette.good(message)),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({
                        "success": true,
                        "message": message
                    })
                );
            }
        }
    }

    /// Prints a warning (text only, JSON callers report warnings in their data)
    pub fn warn(&self, message: &str) {
        if self.format == OutputFormat::Text {
            eprintln!("{}", self.palette.note(message));
        }
    }

    /// Prints structured data
    pub fn data<T: Serialize>(&self, data: &T) {
        match self.format {
            OutputFormat::Text => {
                if let Ok(json) = serde_json::to_string_pretty(data) {
                    println!("{}", json);
                }
            }
            OutputFormat::Json => {
                if let Ok(json) = serde_json::to_string(data) {
                    println!("{}", json);
                }
            }
        }
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Emits a debug message (visible with --verbose or RUST_LOG=debug)
    pub fn verbose(&self, message: &str) {
        tracing::debug!("{}", message);
    }

    /// Emits a debug message tagged with the command it belongs to
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        tracing::debug!(context, "{}", message);
    }
}
