//! Startup banner: figlet title shaded from blue to green, then the challenge summary.
//! Uses figlet's built-in standard font.

use crate::domain::Identity;
use crossterm::queue;
use crossterm::style::{Color, Print, PrintStyledContent, Stylize};
use figlet_rs::FIGfont;
use std::io::{self, Write, stdout};

const SUBTITLE: &str = "JAVA Qualifier Challenge";

const OVERVIEW: &str = "This application sends a POST request to generate a webhook on startup. \
Based on the response, you need to solve a SQL problem (determined by your registration \
number) and submit your solution via the webhook.";

/// Deep blue (#1e40af).
const BRAND_BLUE: (u8, u8, u8) = (0x1e, 0x40, 0xaf);
/// Accent green (#16a34a).
const BRAND_GREEN: (u8, u8, u8) = (0x16, 0xa3, 0x4a);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Render `text` with figlet; falls back to the plain text if the font cannot be loaded.
fn render_art(text: &str) -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(text).map(|figure| figure.to_string()))
        .unwrap_or_else(|| text.to_string())
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb { r, g, b }
}

/// Color for row `row` of `rows`; a single row takes the end color.
fn shade(row: usize, rows: usize) -> Color {
    let t = match rows {
        0 | 1 => 1.0,
        n => row as f64 / (n - 1) as f64,
    };
    rgb(lerp_rgb(BRAND_BLUE, BRAND_GREEN, t))
}

fn write_welcome(out: &mut impl Write, identity: &Identity) -> io::Result<()> {
    let art = render_art("BFHL");
    let rows = art.lines().count();
    for (row, line) in art.lines().enumerate() {
        queue!(out, PrintStyledContent(line.with(shade(row, rows))), Print("\r\n"))?;
    }
    queue!(
        out,
        PrintStyledContent(SUBTITLE.with(rgb(BRAND_BLUE)).bold()),
        Print("\r\n\r\n"),
        PrintStyledContent("Challenge Overview".bold()),
        Print(format!("\r\n{}\r\n\r\n", OVERVIEW)),
        Print(format!(
            "Name: {} | Reg No: {} | Email: {}\r\n\r\n",
            identity.name, identity.reg_no, identity.email
        )),
    )?;
    out.flush()
}

/// Prints the title art, the challenge overview and the registration details.
pub fn print_welcome(identity: &Identity) {
    let _ = write_welcome(&mut stdout(), identity);
}
