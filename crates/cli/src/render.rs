//! Terminal presentation of a draw batch.
//!
//! Each row prints as an optional letter label, six main balls, a `+`
//! separator and the bonus ball. With color on, balls are painted in their
//! tier color.

use crossterm::style::{Color, Stylize};
use lotto_draw_core::{BallSlot, DrawBatch, DrawRow, Rgb, Tier};
use std::io::{self, Write};
use std::time::{Duration, Instant};

const DARK_TEXT: Color = Color::Rgb {
    r: 0x1a,
    g: 0x1a,
    b: 0x1a,
};

fn term_color(c: Rgb) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Paints one ball. Without color the value is bracketed instead.
pub fn render_ball(slot: &BallSlot, color: bool) -> String {
    if !color {
        return format!("[{:2}]", slot.value);
    }
    let bg = slot.tier.color();
    let fg = if bg.prefers_dark_text() {
        DARK_TEXT
    } else {
        Color::White
    };
    format!(" {:2} ", slot.value)
        .with(fg)
        .on(term_color(bg))
        .to_string()
}

fn label_prefix(row: &DrawRow) -> String {
    row.label.map(|l| format!("{l}  ")).unwrap_or_default()
}

/// Renders a whole row on one line.
pub fn render_row(row: &DrawRow, color: bool) -> String {
    let balls: Vec<String> = row.main.iter().map(|s| render_ball(s, color)).collect();
    format!(
        "{}{}  +  {}",
        label_prefix(row),
        balls.join(" "),
        render_ball(&row.bonus, color)
    )
}

/// Writes every row, one per line.
pub fn write_batch<W: Write>(out: &mut W, batch: &DrawBatch, color: bool) -> io::Result<()> {
    for row in batch {
        writeln!(out, "{}", render_row(row, color))?;
    }
    Ok(())
}

/// Writes the batch ball by ball, holding each ball back until its reveal delay.
///
/// Rows print sequentially, so a ball whose delay has already passed appears
/// immediately. A delay that is not a valid duration fails with
/// [`io::ErrorKind::InvalidInput`].
pub fn animate_batch<W: Write>(out: &mut W, batch: &DrawBatch, color: bool) -> io::Result<()> {
    let start = Instant::now();
    for row in batch {
        animate_row(out, row, start, color)?;
    }
    Ok(())
}

fn animate_row<W: Write>(
    out: &mut W,
    row: &DrawRow,
    start: Instant,
    color: bool,
) -> io::Result<()> {
    write!(out, "{}", label_prefix(row))?;
    for (j, slot) in row.main.iter().enumerate() {
        wait_until(start, slot.delay)?;
        if j > 0 {
            write!(out, " ")?;
        }
        write!(out, "{}", render_ball(slot, color))?;
        out.flush()?;
    }
    wait_until(start, row.bonus.delay)?;
    writeln!(out, "  +  {}", render_ball(&row.bonus, color))?;
    out.flush()
}

fn wait_until(start: Instant, delay: f64) -> io::Result<()> {
    let due = Duration::try_from_secs_f64(delay).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid reveal delay {delay}: {e}"),
        )
    })?;
    if let Some(remaining) = due.checked_sub(start.elapsed()) {
        std::thread::sleep(remaining);
    }
    Ok(())
}

/// One line per tier: name, value range, color name and hex.
pub fn tier_legend(color: bool) -> Vec<String> {
    Tier::legend()
        .iter()
        .map(|band| {
            let swatch = if color {
                format!("{} ", "    ".on(term_color(band.hex)))
            } else {
                String::new()
            };
            format!(
                "{swatch}{}  {:>2}-{:<2}  {:<6} {}",
                band.tier.name(),
                band.min,
                band.max,
                band.color,
                band.hex.to_hex()
            )
        })
        .collect()
}
