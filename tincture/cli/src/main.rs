//! Colored line utility CLI.
//!
//! Prints bold ANSI colored lines and level-prefixed messages:
//! - `tint paint <COLOR> [TEXT]...` for a colored line
//! - `tint level <LEVEL> [TEXT]...` for a level-prefixed line
//! - `tint format <COLOR> [TEXT]...` for the colored text without a newline
//! - `tint colors` / `tint levels` to list the tables

use std::io::{self, Read, Write};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use strum::IntoEnumIterator;
use tincture::{Color, Level, Painter, PrefixStyle, escape};

/// Colored line utility
#[derive(Parser, Debug)]
#[command(name = "tint")]
#[command(author, version, about = "Print bold ANSI colored and level-prefixed lines")]
struct Args {
    /// Print plain text without escape codes (also enabled by NO_COLOR)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_color: bool,

    /// Output listings in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Generate shell completions and exit.
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,

    #[command(subcommand)]
    command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
enum Command {
    /// Print TEXT as a colored line
    ///
    /// Multiple values are joined with spaces. Without any TEXT nothing is
    /// printed. An unknown COLOR prints "Invalid color: <COLOR>".
    Paint {
        /// Color name (e.g. red, lblue, gray)
        #[arg(value_name = "COLOR")]
        color: String,

        #[arg(value_name = "TEXT")]
        text: Vec<String>,
    },

    /// Write TEXT colored, without a trailing newline
    Format {
        /// Color name (e.g. red, lblue, gray)
        #[arg(value_name = "COLOR")]
        color: String,

        #[arg(value_name = "TEXT")]
        text: Vec<String>,
    },

    /// Print TEXT behind a level label
    ///
    /// Verbose levels: success, error, warning, info, debug.
    /// Compact levels (--compact): ok, err, warn, inf, dbg.
    Level {
        /// Level name
        #[arg(value_name = "LEVEL")]
        level: String,

        /// Use the compact labels ("err: " instead of "[Error] ")
        #[arg(long)]
        compact: bool,

        #[arg(value_name = "TEXT")]
        text: Vec<String>,
    },

    /// List the color table
    Colors,

    /// List a level table
    Levels {
        /// List the compact table instead of the verbose one
        #[arg(long)]
        compact: bool,
    },

    /// Remove color codes from TEXT (or stdin when no TEXT is given)
    Strip {
        #[arg(value_name = "TEXT")]
        text: Vec<String>,
    },

    /// Print every color and every level helper once
    Demo,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so stdout stays byte-exact
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }

    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "tint", &mut io::stdout());
        return Ok(());
    }

    let mut painter = Painter::new();
    painter.set_no_color(args.no_color);
    tracing::debug!(no_color = args.no_color, "painter ready");

    match args.command {
        Some(Command::Paint { color, text }) => {
            if !text.is_empty() {
                painter.emit_named(&color, text.join(" "));
            }
        }
        Some(Command::Format { color, text }) => {
            let out = if text.is_empty() {
                String::new()
            } else {
                painter.colorize_named(&color, text.join(" "))
            };
            let mut stdout = io::stdout();
            stdout.write_all(out.as_bytes())?;
            stdout.flush()?;
        }
        Some(Command::Level {
            level,
            compact,
            text,
        }) => {
            painter.prompt_named(style_for(compact), &level, text.join(" "));
        }
        Some(Command::Colors) => list_colors(&painter, args.json)?,
        Some(Command::Levels { compact }) => list_levels(&painter, style_for(compact), args.json)?,
        Some(Command::Strip { text }) => {
            let content = if text.is_empty() {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                text.join(" ") + "\n"
            };
            print!("{}", escape::strip_sgr(content));
        }
        Some(Command::Demo) => demo(&painter),
        None => {
            Args::command().print_help()?;
        }
    }

    Ok(())
}

fn style_for(compact: bool) -> PrefixStyle {
    if compact {
        PrefixStyle::Compact
    } else {
        PrefixStyle::Verbose
    }
}

fn list_colors(painter: &Painter, json: bool) -> color_eyre::Result<()> {
    if json {
        let infos: Vec<_> = Color::iter().map(Color::info).collect();
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    for color in Color::iter() {
        print!("{:>3}  ", color.code());
        painter.emit(color, color.name());
    }
    Ok(())
}

fn list_levels(painter: &Painter, style: PrefixStyle, json: bool) -> color_eyre::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&style.table())?);
        return Ok(());
    }

    for level in Level::iter() {
        let name = style.name(level);
        print!("{name:<8} ");
        painter.prompt(style, level, level.color().name());
    }
    Ok(())
}

fn demo(painter: &Painter) {
    let files = 12;
    let full = 93;

    painter.black(&[&"black"]);
    // no args, no output
    painter.red(&[]);
    painter.red(&[&"red"]);
    painter.green(&[&"green"]);
    painter.yellow(&[&"yellow"]);
    painter.blue(&[&"blue"]);
    painter.purple(&[&"purple"]);
    painter.cyan(&[&"cyan"]);
    painter.white(&[&"white"]);
    painter.gray(&[&"gray"]);
    painter.lred(&[&"lred"]);
    painter.lgreen(&[&"lgreen"]);
    painter.lyellow(&[&"lyellow"]);
    painter.lblue(&[&"lblue"]);
    painter.lpurple(&[&"lpurple"]);
    painter.lcyan(&[&"lcyan"]);
    painter.lwhite(&[&"lwhite"]);

    painter.print_success(&[&"it worked"]);
    painter.print_error(&[&"it broke"]);
    painter.print_errorf(format_args!("fatal"));
    painter.print_warning(&[&"disk ", &full, &"% full"]);
    painter.print_infof(format_args!("{files} files"));
    painter.print_debug(&[]);

    painter.print_ok(&[&"it worked"]);
    painter.print_err(&[&"it broke"]);
    painter.print_err(&[]);
    painter.print_warnf(format_args!("disk {full}% full"));
    painter.print_inf(&[&"12 files"]);
    painter.print_dbg(&[]);
}
