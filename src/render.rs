//! Terminal output renderer for status lines and color swatches.
//!
//! Status output goes to stderr so stdout stays clean for `css` and `--json`
//! payloads that are meant to be piped.

use crossterm::style::{Color, Stylize};

use crate::theme::Rgb;

const LABEL_WARNING: &str = "warning:";
const LABEL_ERROR: &str = "error:";
const GLYPH_SECTION_BULLET: &str = "•";
const GLYPH_SWATCH: &str = "██";
const INDENT_1: &str = "  ";

/// Injectable rendering interface used by command handlers.
pub trait RenderSink {
    /// Render a titled section divider.
    fn section(&self, title: &str);
    /// Render one key/value field row.
    fn field(&self, key: &str, value: &str);
    /// Render a palette row with a color sample.
    fn swatch(&self, label: &str, color: Rgb, active: bool);
    /// Render a warning line.
    fn warn(&self, msg: &str);
    /// Render an error line.
    fn error(&self, msg: &str);
}

/// Default stderr renderer.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

fn to_term(color: Rgb) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

impl RenderSink for Renderer {
    fn section(&self, title: &str) {
        if self.color {
            eprintln!(
                "{} {}",
                GLYPH_SECTION_BULLET.with(Color::DarkGrey),
                title.with(Color::Cyan).bold()
            );
        } else {
            eprintln!("{title}:");
        }
    }

    fn field(&self, key: &str, value: &str) {
        if self.color {
            eprintln!(
                "{INDENT_1}{} {}",
                format!("{key}:").with(Color::DarkGrey),
                value.with(Color::White),
            );
        } else {
            eprintln!("{INDENT_1}{key}: {value}");
        }
    }

    fn swatch(&self, label: &str, color: Rgb, active: bool) {
        let marker = if active { "*" } else { " " };
        if self.color {
            eprintln!(
                "{INDENT_1}{marker} {} {label:<8} {}",
                GLYPH_SWATCH.with(to_term(color)),
                color.to_hex().with(Color::DarkGrey)
            );
        } else {
            eprintln!("{INDENT_1}{marker} {label:<8} {}", color.to_hex());
        }
    }

    fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_WARNING.with(Color::Yellow).bold());
        } else {
            eprintln!("{LABEL_WARNING} {msg}");
        }
    }

    fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_ERROR.with(Color::Red).bold());
        } else {
            eprintln!("{LABEL_ERROR} {msg}");
        }
    }
}
