//! One method per (color, mode) and (level, mode) pair.
//!
//! Per color there are four methods, shown here for red:
//!
//! | method | writes / returns |
//! |--------|------------------|
//! | `red(&[&dyn Display])` | concatenated args as a red line; nothing at all for `&[]` |
//! | `redf(fmt::Arguments)` | the formatted text as a red line |
//! | `sred(&[&dyn Display]) -> String` | concatenated args colorized; `""` for `&[]` |
//! | `sredf(fmt::Arguments) -> String` | the formatted text colorized |
//!
//! Per level, in the verbose family (`print_success`, `print_error`,
//! `print_warning`, `print_info`, `print_debug`) and the compact family
//! (`print_ok`, `print_err`, `print_warn`, `print_inf`, `print_dbg`), there
//! is a plain method and an `…f` method. A plain level method given `&[]`
//! still prints the label on its own, and so does an `…f` level method
//! whose template has no arguments (`print_errorf(format_args!("fatal"))`
//! prints `[Error] ` alone).
//!
//! Arguments are concatenated with their `Display` output and no
//! separator, whatever their types: `sred(&[&1, &2])` renders `12`, not
//! `1 2`. Pass `&" "` between arguments where a space is wanted.
//!
//! ```
//! use tincture::Painter;
//!
//! let painter = Painter::new();
//! assert_eq!(painter.sgreenf(format_args!("{} items", 3)), "\x1b[1;32m3 items\x1b[0m");
//! assert_eq!(painter.sred(&[&"a", &1, &'b']), "\x1b[1;31ma1b\x1b[0m");
//! assert_eq!(painter.sred(&[]), "");
//!
//! painter.print_warning(&[&"disk low"]);
//! painter.print_err(&[]);
//! ```

use std::fmt::{self, Display, Write};

use crate::{
    paint::Painter,
    registry::{
        color::Color,
        level::{Level, PrefixStyle},
    },
};

/// Concatenates the `Display` output of every argument.
///
/// `None` when there are no arguments at all, which is distinct from
/// arguments that render empty.
pub(crate) fn concat_args(args: &[&dyn Display]) -> Option<String> {
    if args.is_empty() {
        return None;
    }
    let mut out = String::new();
    for arg in args {
        // writing into a String cannot fail
        let _ = write!(out, "{arg}");
    }
    Some(out)
}

/// The payload of a formatted level message.
///
/// A template with no arguments contributes nothing, so only the label is
/// printed. The compiler may fold literal arguments into the template, so
/// `format_args!("{}", "x")` counts as argument-free as well.
pub(crate) fn level_payload(args: fmt::Arguments<'_>) -> String {
    if args.as_str().is_some() {
        String::new()
    } else {
        fmt::format(args)
    }
}

macro_rules! color_methods {
    ($( $color:ident => $print:ident, $printf:ident, $format:ident, $formatf:ident; )*) => {
        impl Painter {
            $(
                #[doc = concat!("Prints the concatenated args as a `", stringify!($print), "` line. No output for `&[]`.")]
                pub fn $print(&self, args: &[&dyn Display]) {
                    if let Some(text) = concat_args(args) {
                        self.emit(Color::$color, text);
                    }
                }

                #[doc = concat!("Prints the formatted args as a `", stringify!($print), "` line.")]
                pub fn $printf(&self, args: fmt::Arguments<'_>) {
                    self.emit(Color::$color, fmt::format(args));
                }

                #[doc = concat!("Returns the concatenated args colorized `", stringify!($print), "`. Empty for `&[]`.")]
                pub fn $format(&self, args: &[&dyn Display]) -> String {
                    concat_args(args)
                        .map(|text| self.colorize(Color::$color, text))
                        .unwrap_or_default()
                }

                #[doc = concat!("Returns the formatted args colorized `", stringify!($print), "`.")]
                pub fn $formatf(&self, args: fmt::Arguments<'_>) -> String {
                    self.colorize(Color::$color, fmt::format(args))
                }
            )*
        }
    };
}

color_methods! {
    Black => black, blackf, sblack, sblackf;
    Red => red, redf, sred, sredf;
    Green => green, greenf, sgreen, sgreenf;
    Yellow => yellow, yellowf, syellow, syellowf;
    Blue => blue, bluef, sblue, sbluef;
    Purple => purple, purplef, spurple, spurplef;
    Cyan => cyan, cyanf, scyan, scyanf;
    White => white, whitef, swhite, swhitef;
    Gray => gray, grayf, sgray, sgrayf;
    LRed => lred, lredf, slred, slredf;
    LGreen => lgreen, lgreenf, slgreen, slgreenf;
    LYellow => lyellow, lyellowf, slyellow, slyellowf;
    LBlue => lblue, lbluef, slblue, slbluef;
    LPurple => lpurple, lpurplef, slpurple, slpurplef;
    LCyan => lcyan, lcyanf, slcyan, slcyanf;
    LWhite => lwhite, lwhitef, slwhite, slwhitef;
}

macro_rules! level_methods {
    ($style:ident: $( $level:ident => $print:ident, $printf:ident; )*) => {
        impl Painter {
            $(
                #[doc = concat!("Prints the concatenated args behind the ", stringify!($style), " ", stringify!($level), " label.")]
                pub fn $print(&self, args: &[&dyn Display]) {
                    self.prompt(
                        PrefixStyle::$style,
                        Level::$level,
                        concat_args(args).unwrap_or_default(),
                    );
                }

                #[doc = concat!("Prints the formatted args behind the ", stringify!($style), " ", stringify!($level), " label. A template without arguments prints the label alone.")]
                pub fn $printf(&self, args: fmt::Arguments<'_>) {
                    self.prompt(PrefixStyle::$style, Level::$level, level_payload(args));
                }
            )*
        }
    };
}

level_methods! {
    Verbose:
    Success => print_success, print_successf;
    Error => print_error, print_errorf;
    Warning => print_warning, print_warningf;
    Info => print_info, print_infof;
    Debug => print_debug, print_debugf;
}

level_methods! {
    Compact:
    Success => print_ok, print_okf;
    Error => print_err, print_errf;
    Warning => print_warn, print_warnf;
    Info => print_inf, print_inff;
    Debug => print_dbg, print_dbgf;
}
