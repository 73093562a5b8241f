//! Level-prefixed lines.
//!
//! A prompt is a colored line whose text starts with the level's label,
//! e.g. `[Warning] disk low` painted yellow or `err: ` painted red.

use crate::{
    paint::{Painter, write_stdout},
    registry::level::{Level, PrefixStyle},
};

impl Painter {
    /// The exact bytes [`Painter::prompt`] writes.
    ///
    /// ```
    /// use tincture::{Level, Painter, PrefixStyle};
    ///
    /// let line = Painter::new().prompt_line(PrefixStyle::Verbose, Level::Warning, "disk low");
    /// assert_eq!(line, "\x1b[1;33m[Warning] disk low\x1b[0m\n");
    /// ```
    pub fn prompt_line<T: Into<String>>(
        &self,
        style: PrefixStyle,
        level: Level,
        message: T,
    ) -> String {
        let text = format!("{}{}", style.label(level), message.into());
        self.line(level.color(), text)
    }

    /// Writes a level-prefixed line to stdout.
    pub fn prompt<T: Into<String>>(&self, style: PrefixStyle, level: Level, message: T) {
        write_stdout(&self.prompt_line(style, level, message));
    }

    /// [`Painter::prompt_line`] with the level given by its name in
    /// `style`'s table.
    ///
    /// An unknown name yields `Invalid level: <name>` and a newline,
    /// whether or not color is on.
    pub fn prompt_line_named<T: Into<String>>(
        &self,
        style: PrefixStyle,
        name: &str,
        message: T,
    ) -> String {
        match style.parse(name) {
            Ok(level) => self.prompt_line(style, level, message),
            Err(e) => {
                tracing::warn!(name, style = %style, "unknown level name");
                format!("{e}\n")
            }
        }
    }

    /// Writes [`Painter::prompt_line_named`] to stdout.
    pub fn prompt_named<T: Into<String>>(&self, style: PrefixStyle, name: &str, message: T) {
        write_stdout(&self.prompt_line_named(style, name, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_verbose_warning() {
        let p = Painter::new();
        assert_eq!(
            p.prompt_line(PrefixStyle::Verbose, Level::Warning, "disk low"),
            "\x1b[1;33m[Warning] disk low\x1b[0m\n"
        );
    }

    #[test]
    fn test_compact_error_prefix_only() {
        let p = Painter::new();
        assert_eq!(
            p.prompt_line(PrefixStyle::Compact, Level::Error, ""),
            "\x1b[1;31merr: \x1b[0m\n"
        );
    }

    #[test]
    fn test_prompt_without_color() {
        let mut p = Painter::new();
        p.set_no_color(true);
        assert_eq!(
            p.prompt_line(PrefixStyle::Verbose, Level::Info, "ready"),
            "[Info] ready\n"
        );
        assert_eq!(p.prompt_line(PrefixStyle::Compact, Level::Debug, ""), "debug: \n");
    }

    #[test]
    fn test_every_level_uses_bound_color() {
        let p = Painter::new();
        for style in PrefixStyle::iter() {
            for level in Level::iter() {
                let line = p.prompt_line(style, level, "m");
                assert!(line.starts_with(&format!("\x1b[1;{}m", level.color().code())));
                assert!(line.ends_with("\x1b[0m\n"));
            }
        }
    }

    #[test]
    fn test_named_level_lookup() {
        let p = Painter::new();
        assert_eq!(
            p.prompt_line_named(PrefixStyle::Compact, "ok", "done"),
            "\x1b[1;32mok: done\x1b[0m\n"
        );
        assert_eq!(
            p.prompt_line_named(PrefixStyle::Verbose, "success", "done"),
            "\x1b[1;32m[Success] done\x1b[0m\n"
        );
    }

    #[test]
    fn test_named_level_miss() {
        let p = Painter::new();
        assert_eq!(
            p.prompt_line_named(PrefixStyle::Verbose, "ok", "done"),
            "Invalid level: ok\n"
        );

        let mut p = p;
        p.set_no_color(true);
        assert_eq!(
            p.prompt_line_named(PrefixStyle::Compact, "fatal", "done"),
            "Invalid level: fatal\n"
        );
    }
}
