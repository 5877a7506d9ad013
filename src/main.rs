// SPDX-License-Identifier: MIT
//
// spacebar — palette generator for the terminal.
//
// This is the binary that wires the engine crates to a command line:
//
//   spacebar-color   → hex / RGB / HSL / CMYK conversions, label contrast
//   spacebar-palette → generation, locks, adjustments, simulation, sharing
//
// One invocation is one step of an editing session:
//
//   args → GenerateOptions → Session (fresh, or restored from a share link)
//        → locks + pending adjustments → optional regeneration
//        → displayed palette → swatches | JSON export | share link

mod cli;
mod render;

use std::io::{self, Write};
use std::process;

use clap::Parser;
use spacebar_palette::{ColorError, ExportDocument, Session, ShareError, Xorshift32};
use thiserror::Error;

use crate::cli::{Cli, Format};

/// Anything that can stop an invocation.
#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Share(#[from] ShareError),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("spacebar: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let mut rng = cli.seed.map_or_else(Xorshift32::from_time, Xorshift32::new);
    log::debug!("rng seeded with {}", rng.state());

    let session = build_session(cli, &mut rng)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_output(cli, &session, &mut out)?;
    out.flush()?;
    Ok(())
}

// ─── Session ────────────────────────────────────────────────────────────────

/// Apply the arguments to a session, in the order a user would: restore
/// or generate, lock slots, set adjustments, regenerate, pick a view.
///
/// Adjustments are committed only by a regeneration, so any non-identity
/// adjustment implies one.
fn build_session(cli: &Cli, rng: &mut Xorshift32) -> Result<Session, AppError> {
    let options = cli.options()?;
    let mut session = match cli.share_link() {
        Some(link) => {
            let mut restored = Session::from_share_or_generate(&link, options, rng)?;
            // A restored palette sets the count; an explicit --count wins.
            if let Some(count) = cli.count {
                restored.set_count(count);
            }
            restored
        }
        None => Session::new(options, rng)?,
    };

    for &index in &cli.locks {
        if !session.locks().get(index).copied().unwrap_or(false) {
            session.toggle_lock(index)?;
        }
    }

    let adjustments = cli.adjustments();
    session.set_adjustments(adjustments);
    if cli.regenerate || !adjustments.is_identity() {
        session.regenerate(rng)?;
    }

    session.set_simulation(cli.simulate);
    Ok(session)
}

// ─── Output ─────────────────────────────────────────────────────────────────

/// Swatches show the displayed (possibly simulated) palette. The JSON
/// export and share link always carry the stored palette.
fn write_output(cli: &Cli, session: &Session, w: &mut impl Write) -> Result<(), AppError> {
    match cli.format {
        Format::Text => {
            if let Some(kind) = session.simulation() {
                writeln!(w, "Simulating {}", kind.label())?;
            }
            render::palette(w, &session.displayed(), session.locks())?;
        }
        Format::Json => {
            let doc = ExportDocument::new(session.palette(), *session.adjustments());
            writeln!(w, "{}", doc.to_json_pretty()?)?;
        }
    }

    if cli.print_share {
        writeln!(w, "{}", session.share_url(&cli.origin)?)?;
    }
    Ok(())
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use spacebar_palette::{Color, DeficiencyKind};

    // ── Helpers ───────────────────────────────────────────────────────────

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("spacebar").chain(args.iter().copied())).unwrap()
    }

    fn session(args: &[&str]) -> Result<Session, AppError> {
        let cli = cli(args);
        let mut rng = cli.seed.map_or_else(|| Xorshift32::new(1), Xorshift32::new);
        build_session(&cli, &mut rng)
    }

    fn output(args: &[&str]) -> String {
        let cli = cli(args);
        let mut rng = Xorshift32::new(cli.seed.unwrap_or(1));
        let session = build_session(&cli, &mut rng).unwrap();
        let mut buf = Vec::new();
        write_output(&cli, &session, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // ── Session building ──────────────────────────────────────────────────

    #[test]
    fn seed_makes_palette_reproducible() {
        let a = session(&["--seed", "42"]).unwrap();
        let b = session(&["--seed", "42"]).unwrap();
        assert_eq!(a.palette(), b.palette());
        assert_eq!(a.palette().len(), 5);
    }

    #[test]
    fn locks_are_applied_once() {
        let s = session(&["--lock", "1", "--lock", "1"]).unwrap();
        assert_eq!(s.locks(), &[false, true, false, false, false]);
    }

    #[test]
    fn lock_out_of_range_fails() {
        let err = session(&["--count", "3", "--lock", "3"]).unwrap_err();
        assert!(matches!(err, AppError::Color(ColorError::Range { field: "index", .. })));
    }

    #[test]
    fn bad_brightness_fails() {
        assert!(matches!(session(&["--brightness", "101"]), Err(AppError::Color(_))));
    }

    #[test]
    fn simulation_is_recorded() {
        let s = session(&["--simulate", "achromatopsia"]).unwrap();
        assert_eq!(s.simulation(), Some(DeficiencyKind::Achromatopsia));
        assert!(s.displayed().iter().all(|c| c.rgb().is_gray()));
    }

    // ── Sharing ───────────────────────────────────────────────────────────

    #[test]
    fn share_link_restores_palette_and_locks() {
        let original = session(&["--seed", "7", "--lock", "2"]).unwrap();
        let url = original.share_url("https://palette.example").unwrap();

        let restored = session(&["--share", &url]).unwrap();
        assert_eq!(restored.palette(), original.palette());
        assert_eq!(restored.locks(), original.locks());
    }

    #[test]
    fn regenerating_a_shared_palette_keeps_locked_slot() {
        let original = session(&["--seed", "7", "--lock", "2"]).unwrap();
        let blob = original.snapshot().encode().unwrap();

        let next = session(&["--share", &blob, "--regenerate", "--seed", "99"]).unwrap();
        assert_eq!(next.palette()[2], original.palette()[2]);
    }

    #[test]
    fn explicit_count_overrides_shared_palette_size() {
        let original = session(&["--seed", "7"]).unwrap();
        let blob = original.snapshot().encode().unwrap();

        let kept = session(&["--share", &blob, "--regenerate"]).unwrap();
        assert_eq!(kept.palette().len(), 5);

        let grown = session(&["--share", &blob, "--count", "8", "--regenerate"]).unwrap();
        assert_eq!(grown.options().count, 8);
        assert_eq!(grown.palette().len(), 8);
    }

    #[test]
    fn broken_share_falls_back() {
        let s = session(&["--share", "not-a-blob"]).unwrap();
        assert_eq!(s.palette().len(), 5);
    }

    #[test]
    fn adjustments_spare_locked_slots() {
        let base = session(&["--seed", "3", "--lock", "0"]).unwrap();
        let blob = base.snapshot().encode().unwrap();
        let adjusted = session(&["--share", &blob, "--hue", "90"]).unwrap();
        assert_eq!(adjusted.palette()[0], base.palette()[0]);
        assert!((adjusted.adjustments().h - 90.0).abs() < f64::EPSILON);
    }

    // ── Output ────────────────────────────────────────────────────────────

    #[test]
    fn text_output_has_one_line_per_swatch() {
        let out = output(&["--count", "4"]);
        assert_eq!(out.lines().count(), 4);
        assert!(out.contains("\x1b[48;2;"));
    }

    #[test]
    fn text_output_names_simulation() {
        let out = output(&["--simulate", "protanopia"]);
        assert!(out.starts_with("Simulating Protanopia\n"));
    }

    #[test]
    fn json_output_is_export_document() {
        let out = output(&["--format", "json", "--count", "3"]);
        let doc: ExportDocument = serde_json::from_str(&out).unwrap();
        assert_eq!(doc.colors.len(), 3);
        assert!(doc.adjustments.is_identity());
    }

    #[test]
    fn json_output_ignores_simulation() {
        let plain = output(&["--format", "json", "--seed", "5"]);
        let simulated = output(&["--format", "json", "--seed", "5", "--simulate", "tritanopia"]);
        assert_eq!(plain, simulated);
    }

    #[test]
    fn print_share_appends_link() {
        let out = output(&["--print-share", "--origin", "https://palette.example"]);
        let last = out.lines().last().unwrap();
        assert!(last.starts_with("https://palette.example/?s="), "{last}");
        let restored = session(&["--share", last]).unwrap();
        assert_eq!(restored.palette().len(), 5);
        assert!(restored.palette().iter().all(|c| *c != Color::BLACK));
    }
}
