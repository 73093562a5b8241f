//! The rendering primitives.
//!
//! Everything in the crate reduces to two operations on a [`Painter`]:
//!
//! - [`Painter::colorize`] returns `ESC[1;<code>m<text>ESC[0m`
//! - [`Painter::emit`] writes the same thing to stdout followed by a newline
//!
//! Both always request **bold** alongside the foreground color and both
//! return the raw text when the painter's `no_color` flag is set.

use std::io::{self, Write};

use crate::registry::color::Color;

/// The escape character which introduces every SGR sequence.
pub const ESC: char = '\x1b';

/// Resets all graphic rendition attributes.
pub const RESET: &str = "\x1b[0m";

/// The opening sequence for bold text in the given foreground code.
pub fn sgr_open(code: u8) -> String {
    format!("{ESC}[1;{code}m")
}

/// **Painter**
///
/// The long-lived handle every colored line goes through. The color and
/// level tables are static and shared; the only state a painter carries is
/// whether color is turned off.
///
/// Writes to stdout are one `write_all` per call and the painter does no
/// locking of its own beyond what `std::io::Stdout` does, so lines from
/// several threads may interleave. Callers that need atomic lines must
/// serialize externally.
///
/// ## Examples
///
/// ```
/// use tincture::{Color, Painter};
///
/// let mut painter = Painter::new();
/// assert_eq!(painter.colorize(Color::Red, "hi"), "\x1b[1;31mhi\x1b[0m");
///
/// painter.set_no_color(true);
/// assert_eq!(painter.colorize(Color::Red, "hi"), "hi");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Painter {
    no_color: bool,
}

impl Painter {
    /// A painter with color turned on.
    pub const fn new() -> Self {
        Self { no_color: false }
    }

    /// Whether escape sequences are being suppressed.
    pub const fn no_color(&self) -> bool {
        self.no_color
    }

    /// Turns escape sequences off (`true`) or back on (`false`).
    pub fn set_no_color(&mut self, no_color: bool) {
        if self.no_color != no_color {
            tracing::debug!(no_color, "color output toggled");
        }
        self.no_color = no_color;
    }

    /// Returns `content` wrapped in bold + `color`.
    ///
    /// Empty content yields an empty styled segment (`ESC[1;<code>mESC[0m`).
    pub fn colorize<T: Into<String>>(&self, color: Color, content: T) -> String {
        let content = content.into();
        if self.no_color {
            return content;
        }
        tracing::trace!(color = %color, len = content.len(), "colorize");
        format!("{}{}{}", sgr_open(color.code()), content, RESET)
    }

    /// The exact bytes [`Painter::emit`] writes, trailing newline included.
    ///
    /// Unlike [`Painter::colorize`], empty content is painted as a single
    /// space so the line still has visible output.
    pub fn line<T: Into<String>>(&self, color: Color, content: T) -> String {
        let content = content.into();
        if self.no_color {
            return content + "\n";
        }
        let payload = if content.is_empty() { " ".to_string() } else { content };
        let mut line = self.colorize(color, payload);
        line.push('\n');
        line
    }

    /// Writes a colored line to `out`.
    pub fn paint_to<W: Write, T: Into<String>>(
        &self,
        out: &mut W,
        color: Color,
        content: T,
    ) -> io::Result<()> {
        out.write_all(self.line(color, content).as_bytes())
    }

    /// Writes a colored line to stdout.
    pub fn emit<T: Into<String>>(&self, color: Color, content: T) {
        write_stdout(&self.line(color, content));
    }

    /// [`Painter::colorize`] with the color given by name.
    ///
    /// An unknown name yields `Invalid color: <name>` in place of the
    /// content. The name is not looked at when color is off.
    pub fn colorize_named<T: Into<String>>(&self, name: &str, content: T) -> String {
        if self.no_color {
            return content.into();
        }
        match name.parse::<Color>() {
            Ok(color) => self.colorize(color, content),
            Err(e) => {
                tracing::warn!(name, "unknown color name");
                e.to_string()
            }
        }
    }

    /// [`Painter::line`] with the color given by name.
    pub fn line_named<T: Into<String>>(&self, name: &str, content: T) -> String {
        if self.no_color {
            return content.into() + "\n";
        }
        match name.parse::<Color>() {
            Ok(color) => self.line(color, content),
            Err(e) => {
                tracing::warn!(name, "unknown color name");
                format!("{e}\n")
            }
        }
    }

    /// [`Painter::emit`] with the color given by name.
    ///
    /// An unknown name writes `Invalid color: <name>` and a newline; it is
    /// never an error.
    pub fn emit_named<T: Into<String>>(&self, name: &str, content: T) {
        write_stdout(&self.line_named(name, content));
    }
}

/// Writes an already rendered line to stdout.
///
/// Write failures are logged and otherwise ignored: printing never fails
/// from the caller's point of view.
pub(crate) fn write_stdout(line: &str) {
    let mut stdout = io::stdout();
    if let Err(e) = stdout.write_all(line.as_bytes()).and_then(|_| stdout.flush()) {
        tracing::debug!(error = %e, "failed to write to stdout");
    }
}
