pub mod json;
pub mod text;

use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn emit<T: Serialize>(&self, text_line: &str, json_value: &T) -> AppResult<()> {
        self.emit_lines(&[text_line.to_string()], json_value)
    }

    pub fn emit_lines<T: Serialize>(&self, text_lines: &[String], json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => text::print_lines(text_lines),
            OutputMode::Json => json::print(json_value),
        }
    }

    /// Emits `json_value` on stderr in JSON mode and nothing in text mode.
    pub fn emit_side_report<T: Serialize>(&self, json_value: &T) -> AppResult<()> {
        match self.mode {
            OutputMode::Text => Ok(()),
            OutputMode::Json => json::eprint(json_value),
        }
    }
}
