//! CLI output formatting for every subcommand.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Assets
//! 001 pizza-base.svg
//! 002 images/ingredients/pepperoni.svg
//! ...
//! 010 sounds/pizza-ready.mp3 (missing, optional)
//!
//! Config
//!     site/config.toml
//!     Bella Italia (es), sound off
//! ```
//!
//! ## Build
//!
//! ```text
//! index.html → dist/index.html (written)
//! Assets: 11 written
//! Sound: off
//! ```
//!
//! ## Timeline
//!
//! ```text
//! Ingredients
//! 001 Pepperoni 1
//!     fall 200ms → bounce 2700ms → settle 3200ms → settled 3500ms
//!
//! Cues
//!       300ms drop
//!      2700ms bounce
//!
//! Complete at 6400ms
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::assets::ExpectedAsset;
use crate::config::SiteConfig;
use crate::generate::BuildReport;
use crate::sequencer::{IngredientDescriptor, PhaseTiming};
use crate::sound::Cue;
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn ms(d: Duration) -> String {
    format!("{}ms", d.as_millis())
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

// ============================================================================
// Check
// ============================================================================

/// Format the result of `check`: every expected asset with its status, then
/// the resolved config.
pub fn format_check(
    config: &SiteConfig,
    source_root: &Path,
    expected: &[ExpectedAsset],
    missing: &[ExpectedAsset],
) -> Vec<String> {
    let mut lines = vec!["Assets".to_string()];
    for (i, asset) in expected.iter().enumerate() {
        let status = match (missing.contains(asset), asset.optional) {
            (false, _) => "",
            (true, true) => " (missing, optional)",
            (true, false) => " (missing)",
        };
        lines.push(format!("{} {}{}", format_index(i + 1), asset.path, status));
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    let config_path = source_root.join("config.toml");
    if config_path.exists() {
        lines.push(format!("{}{}", indent(1), config_path.display()));
    } else {
        lines.push(format!("{}(stock defaults)", indent(1)));
    }
    lines.push(format!(
        "{}{} ({}), sound {}",
        indent(1),
        config.site.name,
        config.site.lang,
        on_off(config.sound.enabled)
    ));
    lines
}

/// Print check output to stdout.
pub fn print_check(
    config: &SiteConfig,
    source_root: &Path,
    expected: &[ExpectedAsset],
    missing: &[ExpectedAsset],
) {
    for line in format_check(config, source_root, expected, missing) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_build(report: &BuildReport) -> Vec<String> {
    let mut lines = vec![format!(
        "index.html \u{2192} {} ({})",
        report.output_dir.join("index.html").display(),
        if report.index_written {
            "written"
        } else {
            "unchanged"
        }
    )];
    lines.push(format!("Assets: {}", report.assets));
    lines.push(format!("Sound: {}", on_off(report.sound_on)));
    if !report.missing_optional.is_empty() {
        lines.push("Missing (optional)".to_string());
        for asset in &report.missing_optional {
            lines.push(format!("{}{}", indent(1), asset.path));
        }
    }
    lines
}

/// Print build output to stdout.
pub fn print_build(report: &BuildReport) {
    for line in format_build(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Timeline
// ============================================================================

/// Format the ingredient schedule and the cue plan of one run.
pub fn format_timeline(
    descriptors: &[IngredientDescriptor],
    timing: &PhaseTiming,
    cues: &[(Duration, Cue)],
    completion: Duration,
) -> Vec<String> {
    let mut lines = vec!["Ingredients".to_string()];
    for (i, d) in descriptors.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), d.name));
        lines.push(format!(
            "{}fall {} \u{2192} bounce {} \u{2192} settle {} \u{2192} settled {}",
            indent(1),
            ms(d.fall_start()),
            ms(d.bounce_start()),
            ms(d.settle_start(timing)),
            ms(d.settled_at(timing)),
        ));
    }

    lines.push(String::new());
    lines.push("Cues".to_string());
    for (at, cue) in cues {
        lines.push(format!("{:>10} {}", ms(*at), cue));
    }

    lines.push(String::new());
    lines.push(format!("Complete at {}", ms(completion)));
    lines
}

/// Print timeline output to stdout.
pub fn print_timeline(
    descriptors: &[IngredientDescriptor],
    timing: &PhaseTiming,
    cues: &[(Duration, Cue)],
    completion: Duration,
) {
    for line in format_timeline(descriptors, timing, cues, completion) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
