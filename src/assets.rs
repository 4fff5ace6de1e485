//! Static asset checks and staging.
//!
//! The page references a fixed set of files relative to the site root: the
//! pizza base, one graphic per topping, and the four sound clips. They live
//! in `<source>/assets/` and are copied verbatim into the output directory.
//!
//! Copies are content-addressed: each file is hashed with SHA-256 and only
//! written when the destination does not already hold the same bytes. Content
//! hashes rather than mtimes, so a fresh `git checkout` does not force a full
//! re-copy. The same check guards `index.html`.

use crate::content::PIZZA_BASE;
use crate::sequencer::Topping;
use crate::sound::Cue;
use sha2::{Digest, Sha256};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to walk assets: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("missing required assets: {}", .0.join(", "))]
    Missing(Vec<String>),
}

/// A file the page links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedAsset {
    pub path: &'static str,
    /// Sound clips are optional: without them the page simply stays silent.
    pub optional: bool,
}

/// Every asset the page references, images first.
pub fn expected_assets() -> Vec<ExpectedAsset> {
    let images = std::iter::once(PIZZA_BASE)
        .chain(Topping::ALL.into_iter().map(Topping::asset))
        .map(|path| ExpectedAsset {
            path,
            optional: false,
        });
    let sounds = Cue::ALL.into_iter().map(|cue| ExpectedAsset {
        path: cue.source(),
        optional: true,
    });
    images.chain(sounds).collect()
}

/// Relative paths of every expected asset.
pub fn expected_paths() -> Vec<String> {
    expected_assets()
        .into_iter()
        .map(|a| a.path.to_string())
        .collect()
}

/// Expected assets not present under `assets_dir`.
pub fn missing_assets(assets_dir: &Path) -> Vec<ExpectedAsset> {
    expected_assets()
        .into_iter()
        .filter(|a| !assets_dir.join(a.path).is_file())
        .collect()
}

/// Fail on missing required assets, warn on missing optional ones.
pub fn check_assets(assets_dir: &Path) -> Result<Vec<ExpectedAsset>, AssetError> {
    let missing = missing_assets(assets_dir);
    let (optional, required): (Vec<_>, Vec<_>) = missing.into_iter().partition(|a| a.optional);
    for asset in &optional {
        log::warn!("optional asset missing: {}", asset.path);
    }
    if !required.is_empty() {
        return Err(AssetError::Missing(
            required.iter().map(|a| a.path.to_string()).collect(),
        ));
    }
    Ok(optional)
}

/// SHA-256 of a byte slice, as a hex string.
pub fn hash_bytes(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// SHA-256 of a file's contents, as a hex string.
pub fn hash_file(path: &Path) -> io::Result<String> {
    Ok(hash_bytes(&std::fs::read(path)?))
}

/// Summary of a staging run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyStats {
    pub written: u32,
    pub unchanged: u32,
}

impl CopyStats {
    pub fn total(&self) -> u32 {
        self.written + self.unchanged
    }
}

impl fmt::Display for CopyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unchanged > 0 {
            write!(
                f,
                "{} written, {} unchanged ({} total)",
                self.written,
                self.unchanged,
                self.total()
            )
        } else {
            write!(f, "{} written", self.written)
        }
    }
}

/// Write `bytes` to `dest` unless it already holds exactly those bytes.
///
/// Returns `true` if the file was written.
pub fn write_if_changed(dest: &Path, bytes: &[u8], stats: &mut CopyStats) -> io::Result<bool> {
    if dest.is_file() && hash_file(dest)? == hash_bytes(bytes) {
        stats.unchanged += 1;
        return Ok(false);
    }
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(dest, bytes)?;
    stats.written += 1;
    Ok(true)
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

/// Copy every file under `assets_dir` into `output_dir`, keeping relative
/// paths. Dotfiles and dot-directories are skipped. A missing `assets_dir`
/// stages nothing.
pub fn stage_assets(assets_dir: &Path, output_dir: &Path) -> Result<CopyStats, AssetError> {
    let mut stats = CopyStats::default();
    if !assets_dir.is_dir() {
        log::warn!("no assets directory at {}", assets_dir.display());
        return Ok(stats);
    }
    let walker = WalkDir::new(assets_dir)
        .min_depth(1)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(assets_dir)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| PathBuf::from(entry.file_name()));
        let bytes = std::fs::read(entry.path())?;
        if write_if_changed(&output_dir.join(&rel), &bytes, &mut stats)? {
            log::debug!("staged {}", rel.display());
        }
    }
    log::info!("assets: {stats}");
    Ok(stats)
}
