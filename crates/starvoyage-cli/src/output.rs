//! Output formatting for journey logs.
//!
//! Text rendering lives in [`text`]; this module holds the banner, footer and
//! JSON output shared by every command.

pub mod text;

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use crate::terminal::{colors, supports_color, supports_unicode};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable journey log.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Print the CLI logo banner.
///
/// Uses Unicode box-drawing characters when supported and falls back to
/// ASCII otherwise. Respects `NO_COLOR` and `TERM=dumb`.
pub fn print_logo() {
    let (orange, gray, reset) = if supports_color() {
        (colors::ORANGE, colors::GRAY, colors::RESET)
    } else {
        ("", "", "")
    };

    if supports_unicode() {
        println!(
            "{gray}╭──────────────────────────────────────────╮{reset}
{gray}│{orange}   ✦  S T A R V O Y A G E  ✦              {gray}│{reset}
{gray}│{orange}   constant-acceleration voyage simulator {gray}│{reset}
{gray}╰──────────────────────────────────────────╯{reset}",
            gray = gray,
            orange = orange,
            reset = reset
        );
    } else {
        println!(
            "{orange}+------------------------------------------+
|  STARVOYAGE                              |
|  >> CONSTANT-ACCELERATION VOYAGES        |
+------------------------------------------+{reset}",
            orange = orange,
            reset = reset
        );
    }
}

/// Print the footer with elapsed wall-clock time.
pub fn print_footer(elapsed: std::time::Duration) {
    let (gray, reset) = if supports_color() {
        (colors::GRAY, colors::RESET)
    } else {
        ("", "")
    };

    let elapsed_ms = elapsed.as_millis();
    let time_str = if elapsed_ms < 1000 {
        format!("{}ms", elapsed_ms)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    };

    println!("\n{gray}Completed in {}{reset}", time_str);
}

/// Write any serialisable value to stdout as pretty JSON.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
