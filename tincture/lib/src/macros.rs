/// Prints a `format!`-style message as a colored line.
///
/// ```
/// use tincture::{Color, Painter, paint};
///
/// let painter = Painter::new();
/// paint!(painter, Color::Blue, "x={}", 7);
/// ```
#[macro_export]
macro_rules! paint {
    ($painter:expr, $color:expr, $($arg:tt)*) => {
        $painter.emit($color, ::std::format!($($arg)*))
    };
}

/// Returns a `format!`-style message colorized.
///
/// ```
/// use tincture::{Color, Painter, spaint};
///
/// let painter = Painter::new();
/// assert_eq!(spaint!(painter, Color::Green, "{} items", 3), "\x1b[1;32m3 items\x1b[0m");
/// ```
#[macro_export]
macro_rules! spaint {
    ($painter:expr, $color:expr, $($arg:tt)*) => {
        $painter.colorize($color, ::std::format!($($arg)*))
    };
}

/// Prints a `format!`-style message behind a level label.
///
/// ```
/// use tincture::{Level, Painter, PrefixStyle, prompt};
///
/// let painter = Painter::new();
/// prompt!(painter, PrefixStyle::Verbose, Level::Warning, "disk {}", "low");
/// ```
#[macro_export]
macro_rules! prompt {
    ($painter:expr, $style:expr, $level:expr, $($arg:tt)*) => {
        $painter.prompt($style, $level, ::std::format!($($arg)*))
    };
}
