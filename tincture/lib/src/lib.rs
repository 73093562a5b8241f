//! # tincture
//!
//! Bold ANSI colors and level-prefixed messages for terminal output.
//!
//! Every operation comes in two families:
//!
//! - **print**: writes to stdout with exactly one trailing newline
//! - **format**: returns the decorated string
//!
//! and in two argument styles: a plain one which concatenates any number of
//! `Display` values, and a formatted one which takes `format_args!`.
//!
//! ## Quick Start
//!
//! ```
//! use tincture::{Color, Level, Painter, PrefixStyle};
//!
//! let mut painter = Painter::new();
//!
//! painter.red(&[&"hello"]);                       // \x1b[1;31mhello\x1b[0m\n
//! painter.print_warning(&[&"disk low"]);          // \x1b[1;33m[Warning] disk low\x1b[0m\n
//!
//! let s = painter.sgreenf(format_args!("{} items", 3));
//! assert_eq!(s, "\x1b[1;32m3 items\x1b[0m");
//!
//! // not a terminal, or the user asked for plain text
//! painter.set_no_color(true);
//! assert_eq!(painter.colorize(Color::Blue, "x=7"), "x=7");
//! assert_eq!(painter.prompt_line(PrefixStyle::Compact, Level::Error, ""), "err: \n");
//! ```
//!
//! ## Modules
//!
//! - [`registry`] - the color table and the two level tables
//!   - [`registry::color`] - the sixteen foreground colors
//!   - [`registry::level`] - levels, their colors and their labels
//! - [`paint`] - the `Painter` handle and the two rendering primitives
//! - [`prompt`] - level-prefixed lines
//! - [`facade`] - one method per color and per level
//! - [`escape`] - SGR sequence inspection

pub mod escape;
pub mod facade;
mod macros;
pub mod paint;
pub mod prompt;
pub mod registry;

pub use paint::{ESC, Painter, RESET, sgr_open};
pub use registry::{
    color::{Color, ColorInfo, ParseColorError},
    level::{Level, LevelInfo, ParseLevelError, PrefixStyle},
};
