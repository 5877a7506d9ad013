// SPDX-License-Identifier: MIT
//
// Truecolor swatch rendering.
//
// Pure functions that write escape sequences and swatch lines to any
// `impl Write`. Colors are always emitted as 24-bit SGR (38;2 / 48;2);
// spacebar's palettes are exact hex values and quantizing them to the
// 256-color cube would misrepresent them.
//
// A swatch line looks like:
//
//    0    #2A9D8F     RGB 42, 157, 143   CMYK 73, 0, 9, 38     locked
//
// where the padded hex block is painted in the swatch color with the
// label in its contrast color.

use std::io::{self, Write};

use spacebar_color::Rgb;
use spacebar_palette::{Color, SwatchLabel, swatch_labels};

// ─── SGR ─────────────────────────────────────────────────────────────────────

/// Set the foreground (text) color.
pub fn fg(w: &mut impl Write, color: Color) -> io::Result<()> {
    let Rgb { r, g, b } = color.rgb();
    write!(w, "\x1b[38;2;{r};{g};{b}m")
}

/// Set the background color.
pub fn bg(w: &mut impl Write, color: Color) -> io::Result<()> {
    let Rgb { r, g, b } = color.rgb();
    write!(w, "\x1b[48;2;{r};{g};{b}m")
}

/// Reset all SGR attributes (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Swatches ────────────────────────────────────────────────────────────────

/// Write one swatch line (without the index column).
pub fn swatch(w: &mut impl Write, label: &SwatchLabel, locked: bool) -> io::Result<()> {
    bg(w, label.background)?;
    fg(w, label.text_color)?;
    write!(w, "   {}   ", label.hex)?;
    reset(w)?;

    let details = format!(
        "RGB {:<15}CMYK {:<18}{}",
        label.rgb,
        label.cmyk,
        if locked { "locked" } else { "" }
    );
    writeln!(w, "  {}", details.trim_end())
}

/// Write every swatch of a palette, one per line, with its slot index.
pub fn palette(w: &mut impl Write, colors: &[Color], locks: &[bool]) -> io::Result<()> {
    for (i, label) in swatch_labels(colors).iter().enumerate() {
        write!(w, "{i:>2} ")?;
        swatch(w, label, locks.get(i).copied().unwrap_or(false))?;
    }
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────
