use std::fmt;

use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

use super::color::Color;

/// The semantic class of a message.
///
/// Every level is bound to one fixed color. The text prepended to the
/// message depends on the [`PrefixStyle`] it is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Level {
    Success,
    Error,
    Warning,
    Info,
    Debug,
}

impl Level {
    /// The color every message of this level is painted in.
    pub const fn color(self) -> Color {
        match self {
            Level::Success => Color::Green,
            Level::Error => Color::Red,
            Level::Warning => Color::Yellow,
            Level::Info => Color::Blue,
            Level::Debug => Color::Purple,
        }
    }
}

/// **PrefixStyle**
///
/// Selects one of the two independent level tables:
///
/// | level   | verbose name | verbose label  | compact name | compact label |
/// |---------|--------------|----------------|--------------|---------------|
/// | success | `success`    | `[Success] `   | `ok`         | `ok: `        |
/// | error   | `error`      | `[Error] `     | `err`        | `err: `       |
/// | warning | `warning`    | `[Warning] `   | `warn`       | `warn: `      |
/// | info    | `info`       | `[Info] `      | `inf`        | `info: `      |
/// | debug   | `debug`      | `[Debug] `     | `dbg`        | `debug: `     |
///
/// A style only recognizes its own names: `"ok"` is not a verbose level
/// and `"success"` is not a compact one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
pub enum PrefixStyle {
    #[default]
    Verbose,
    Compact,
}

impl PrefixStyle {
    /// The name a level is known by in this style's table.
    pub const fn name(self, level: Level) -> &'static str {
        match (self, level) {
            (PrefixStyle::Verbose, Level::Success) => "success",
            (PrefixStyle::Verbose, Level::Error) => "error",
            (PrefixStyle::Verbose, Level::Warning) => "warning",
            (PrefixStyle::Verbose, Level::Info) => "info",
            (PrefixStyle::Verbose, Level::Debug) => "debug",
            (PrefixStyle::Compact, Level::Success) => "ok",
            (PrefixStyle::Compact, Level::Error) => "err",
            (PrefixStyle::Compact, Level::Warning) => "warn",
            (PrefixStyle::Compact, Level::Info) => "inf",
            (PrefixStyle::Compact, Level::Debug) => "dbg",
        }
    }

    /// The label prepended to a message of the given level.
    pub const fn label(self, level: Level) -> &'static str {
        match (self, level) {
            (PrefixStyle::Verbose, Level::Success) => "[Success] ",
            (PrefixStyle::Verbose, Level::Error) => "[Error] ",
            (PrefixStyle::Verbose, Level::Warning) => "[Warning] ",
            (PrefixStyle::Verbose, Level::Info) => "[Info] ",
            (PrefixStyle::Verbose, Level::Debug) => "[Debug] ",
            (PrefixStyle::Compact, Level::Success) => "ok: ",
            (PrefixStyle::Compact, Level::Error) => "err: ",
            (PrefixStyle::Compact, Level::Warning) => "warn: ",
            (PrefixStyle::Compact, Level::Info) => "info: ",
            (PrefixStyle::Compact, Level::Debug) => "debug: ",
        }
    }

    /// Resolves a level name against this style's table.
    ///
    /// ## Examples
    ///
    /// ```
    /// use tincture::registry::level::{Level, PrefixStyle};
    ///
    /// assert_eq!(PrefixStyle::Compact.parse("warn"), Ok(Level::Warning));
    /// assert!(PrefixStyle::Verbose.parse("warn").is_err());
    /// ```
    pub fn parse(self, name: &str) -> Result<Level, ParseLevelError> {
        Level::iter()
            .find(|level| self.name(*level) == name)
            .ok_or_else(|| ParseLevelError {
                name: name.to_string(),
            })
    }

    /// Serializable rows of this style's table, in level order.
    pub fn table(self) -> Vec<LevelInfo> {
        Level::iter()
            .map(|level| LevelInfo {
                name: self.name(level),
                label: self.label(level),
                color: level.color().name(),
            })
            .collect()
    }
}

impl fmt::Display for PrefixStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefixStyle::Verbose => f.write_str("verbose"),
            PrefixStyle::Compact => f.write_str("compact"),
        }
    }
}

/// Raised when a name is not in the selected level table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid level: {name}")]
pub struct ParseLevelError {
    pub name: String,
}

/// One row of a level table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelInfo {
    pub name: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}
