//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table and the user's file is deep-merged on top, so a
//! config file only needs the keys it wants to change.
//!
//! ## Config File Location
//!
//! ```text
//! site/
//! ├── config.toml      # optional
//! └── assets/
//!     ├── pizza-base.svg
//!     ├── images/ingredients/*.svg
//!     └── sounds/*.mp3
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! name = "Bella Italia"
//! lang = "es"
//! # copyright_year = 2026  # defaults to the current year
//!
//! [navbar]
//! scroll_threshold = 50.0   # px scrolled before the navbar turns solid
//!
//! [sound]
//! enabled = false
//! drop_delay_ms = 100
//! volume = 0.5
//! ready_volume = 0.7
//!
//! [showcase]
//! bounce_ms = 500
//! settle_ms = 300
//! bounce_overshoot = 1.15
//! controls_delay_ms = 5500
//!
//! [colors]
//! primary = "#C91E1E"
//! secondary = "#2C5E1A"
//! accent = "#FFD700"
//! dark = "#1A1A1A"
//! light = "#FFF8F0"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub navbar: NavbarConfig,
    pub sound: SoundConfig,
    pub showcase: ShowcaseConfig,
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()));
        }
        if !self.navbar.scroll_threshold.is_finite() || self.navbar.scroll_threshold < 0.0 {
            return Err(ConfigError::Validation(
                "navbar.scroll_threshold must be a non-negative number".into(),
            ));
        }
        for (key, volume) in [
            ("sound.volume", self.sound.volume),
            ("sound.ready_volume", self.sound.ready_volume),
        ] {
            if !(0.0..=1.0).contains(&volume) {
                return Err(ConfigError::Validation(format!("{key} must be 0.0-1.0")));
            }
        }
        let overshoot = self.showcase.bounce_overshoot;
        if overshoot.is_nan() || overshoot < 1.0 {
            return Err(ConfigError::Validation(
                "showcase.bounce_overshoot must be at least 1.0".into(),
            ));
        }
        for (key, value) in self.colors.entries() {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "colors.{key} must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// Year shown in the footer.
    pub fn copyright_year(&self) -> i32 {
        use chrono::Datelike;
        self.site
            .copyright_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Restaurant name, used in the title, navbar and footer.
    pub name: String,
    /// `lang` attribute of the page.
    pub lang: String,
    /// Footer copyright year. When absent, the build year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright_year: Option<i32>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: "Bella Italia".to_string(),
            lang: "es".to_string(),
            copyright_year: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavbarConfig {
    /// Scroll offset in px past which the navbar gets its solid background.
    pub scroll_threshold: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SoundConfig {
    /// Offer sound on the illustration. Off by default.
    pub enabled: bool,
    /// Lag between an ingredient starting to fall and its drop cue.
    pub drop_delay_ms: u64,
    /// Volume of the drop, bounce and click cues.
    pub volume: f32,
    /// Volume of the ready chime.
    pub ready_volume: f32,
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            drop_delay_ms: 100,
            volume: 0.5,
            ready_volume: 0.7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    pub bounce_ms: u64,
    pub settle_ms: u64,
    /// Scale factor at the top of the bounce, relative to the final scale.
    pub bounce_overshoot: f32,
    /// When the restart and mute controls fade in.
    pub controls_delay_ms: u64,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            bounce_ms: 500,
            settle_ms: 300,
            bounce_overshoot: 1.15,
            controls_delay_ms: 5_500,
        }
    }
}

/// Brand palette, exposed to the stylesheet as CSS custom properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub dark: String,
    pub light: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#C91E1E".to_string(),
            secondary: "#2C5E1A".to_string(),
            accent: "#FFD700".to_string(),
            dark: "#1A1A1A".to_string(),
            light: "#FFF8F0".to_string(),
        }
    }
}

impl ColorConfig {
    fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("dark", &self.dark),
            ("light", &self.light),
        ]
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    let config = resolve_config(base, overlay)?;
    log::debug!("config loaded from {}", root.display());
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Bella Italia Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at <source>/config.toml. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site
# ---------------------------------------------------------------------------
[site]
# Restaurant name, shown in the title, navbar and footer.
name = "Bella Italia"

# Language of the page (<html lang>).
lang = "es"

# Year in the footer copyright line. Omit to use the year of the build.
# copyright_year = 2026

# ---------------------------------------------------------------------------
# Navbar
# ---------------------------------------------------------------------------
[navbar]
# Pixels scrolled before the transparent navbar turns solid.
scroll_threshold = 50.0

# ---------------------------------------------------------------------------
# Sound
# ---------------------------------------------------------------------------
[sound]
# Play sound cues for the pizza illustration. When false the mute button
# is not shown.
enabled = false

# Lag between an ingredient starting to fall and its drop sound.
drop_delay_ms = 100

# Volume (0.0 - 1.0) of the drop, bounce and click sounds.
volume = 0.5

# Volume (0.0 - 1.0) of the chime played when the pizza is complete.
ready_volume = 0.7

# ---------------------------------------------------------------------------
# Pizza showcase
# ---------------------------------------------------------------------------
[showcase]
# Length of the landing bounce after each fall.
bounce_ms = 500

# Length of the settle back to the final scale after the bounce.
settle_ms = 300

# Scale at the top of the bounce, relative to the final scale (>= 1.0).
bounce_overshoot = 1.15

# When the restart and mute buttons fade in, from the start of the drop.
controls_delay_ms = 5500

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
primary = "#C91E1E"      # Buttons, prices, accents
secondary = "#2C5E1A"
accent = "#FFD700"
dark = "#1A1A1A"         # Footer, overlays
light = "#FFF8F0"        # Section backgrounds
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-secondary: {secondary};
    --color-accent: {accent};
    --color-dark: {dark};
    --color-light: {light};
}}"#,
        primary = colors.primary,
        secondary = colors.secondary,
        accent = colors.accent,
        dark = colors.dark,
        light = colors.light,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = SiteConfig::default();
        assert_eq!(config.site.name, "Bella Italia");
        assert_eq!(config.site.lang, "es");
        assert_eq!(config.navbar.scroll_threshold, 50.0);
        assert!(!config.sound.enabled);
        assert_eq!(config.sound.drop_delay_ms, 100);
        assert_eq!(config.showcase.controls_delay_ms, 5_500);
        assert_eq!(config.colors.primary, "#C91E1E");
    }

    #[test]
    fn default_config_is_valid() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[sound]
enabled = true
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert!(config.sound.enabled);
        assert_eq!(config.sound.volume, 0.5);
        assert_eq!(config.site.name, "Bella Italia");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let toml = r##"
[sound]
enbled = true
"##;
        assert!(toml::from_str::<SiteConfig>(toml).is_err());
    }

    #[test]
    fn explicit_copyright_year_wins() {
        let mut config = SiteConfig::default();
        config.site.copyright_year = Some(1985);
        assert_eq!(config.copyright_year(), 1985);
    }

    #[test]
    fn copyright_year_defaults_to_now() {
        use chrono::Datelike;
        let config = SiteConfig::default();
        assert_eq!(config.copyright_year(), chrono::Local::now().year());
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let colors = ColorConfig {
            primary: "#123456".to_string(),
            ..ColorConfig::default()
        };
        let css = generate_color_css(&colors);
        assert!(css.contains("--color-primary: #123456"));
        assert!(css.contains("--color-light: #FFF8F0"));
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn volume_out_of_range_is_invalid() {
        let mut config = SiteConfig::default();
        config.sound.ready_volume = 1.5;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("sound.ready_volume"));
    }

    #[test]
    fn overshoot_below_one_is_invalid() {
        let mut config = SiteConfig::default();
        config.showcase.bounce_overshoot = 0.9;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn negative_threshold_is_invalid() {
        let mut config = SiteConfig::default();
        config.navbar.scroll_threshold = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_name_or_color_is_invalid() {
        let mut config = SiteConfig::default();
        config.site.name = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.colors.accent = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("colors.accent"));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r##"
[site]
name = "Trattoria Roma"
copyright_year = 2024

[colors]
primary = "#8B0000"
"##,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.name, "Trattoria Roma");
        assert_eq!(config.site.copyright_year, Some(2024));
        assert_eq!(config.colors.primary, "#8B0000");
        // Unspecified values should be defaults
        assert_eq!(config.colors.dark, "#1A1A1A");
        assert_eq!(config.site.lang, "es");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_merged_result() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[sound]\nvolume = 2.0\n",
        )
        .unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_overrides_leaf_and_keeps_siblings() {
        let base: toml::Value = toml::from_str("[a]\nx = 1\ny = 2\n").unwrap();
        let overlay: toml::Value = toml::from_str("[a]\ny = 3\n").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"]["x"].as_integer(), Some(1));
        assert_eq!(merged["a"]["y"].as_integer(), Some(3));
    }

    #[test]
    fn merge_adds_new_keys() {
        let base: toml::Value = toml::from_str("[a]\nx = 1\n").unwrap();
        let overlay: toml::Value = toml::from_str("[b]\nz = true\n").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"]["x"].as_integer(), Some(1));
        assert_eq!(merged["b"]["z"].as_bool(), Some(true));
    }

    #[test]
    fn stock_defaults_omit_unset_year() {
        let value = stock_defaults_value().unwrap();
        assert!(value["site"].get("copyright_year").is_none());
        assert_eq!(value["site"]["name"].as_str(), Some("Bella Italia"));
    }

    // =========================================================================
    // Stock config
    // =========================================================================

    #[test]
    fn stock_config_parses_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn stock_config_mentions_every_section() {
        let stock = stock_config_toml();
        for section in ["[site]", "[navbar]", "[sound]", "[showcase]", "[colors]"] {
            assert!(stock.contains(section), "missing {section}");
        }
    }
}
