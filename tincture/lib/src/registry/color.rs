use std::{fmt, str::FromStr};

use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

/// The closed set of foreground colors which can be painted.
///
/// Each variant maps to a single SGR foreground code: the eight standard
/// colors use `30..=37` and the light ("bright") variants use `90..=97`.
/// The string names are the lowercase, case-sensitive names used at the
/// name-based edge of the crate (`"red"`, `"lred"`, `"gray"`, ...).
///
/// ## Examples
///
/// ```
/// use tincture::registry::color::Color;
///
/// assert_eq!(Color::Red.code(), 31);
/// assert_eq!(Color::LBlue.name(), "lblue");
/// assert_eq!("gray".parse::<Color>().unwrap(), Color::Gray);
/// assert!("Red".parse::<Color>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
    Gray,
    LRed,
    LGreen,
    LYellow,
    LBlue,
    LPurple,
    LCyan,
    LWhite,
}

impl Color {
    /// The SGR foreground code for this color.
    pub const fn code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Purple => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::Gray => 90,
            Color::LRed => 91,
            Color::LGreen => 92,
            Color::LYellow => 93,
            Color::LBlue => 94,
            Color::LPurple => 95,
            Color::LCyan => 96,
            Color::LWhite => 97,
        }
    }

    /// The registry name of this color.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Gray => "gray",
            Color::LRed => "lred",
            Color::LGreen => "lgreen",
            Color::LYellow => "lyellow",
            Color::LBlue => "lblue",
            Color::LPurple => "lpurple",
            Color::LCyan => "lcyan",
            Color::LWhite => "lwhite",
        }
    }

    /// Looks a color up by its registry name.
    ///
    /// Returns `None` for anything not in the table; the match is
    /// case-sensitive.
    pub fn lookup(name: &str) -> Option<Color> {
        Color::iter().find(|c| c.name() == name)
    }

    /// A serializable description of this color.
    pub fn info(self) -> ColorInfo {
        ColorInfo {
            name: self.name(),
            code: self.code(),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raised when a name is not in the color registry.
///
/// The `Display` output is the exact diagnostic line written by the
/// rendering primitives for an unknown color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid color: {name}")]
pub struct ParseColorError {
    pub name: String,
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::lookup(s).ok_or_else(|| ParseColorError { name: s.to_string() })
    }
}

/// Name/code pair used when listing the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorInfo {
    pub name: &'static str,
    pub code: u8,
}
