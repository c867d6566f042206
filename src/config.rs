//! Site configuration module.
//!
//! Handles loading and validating the `site.toml` at the content root. All
//! fields have stock defaults, so a config file is optional and sparse:
//! override just the values you want.
//!
//! ```toml
//! [site]
//! name = "The Clean Pantry"
//! url = "https://thecleanpantry.com"
//! description = "DIY household cleaning recipes that actually work"
//! base_path = ""            # set when serving under a sub-path, e.g. "/pantry"
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#111111"
//! text_muted = "#666666"
//! border = "#e0e0e0"
//! link = "#1a6b4a"
//! link_hover = "#0d3d2a"
//!
//! [colors.dark]
//! background = "#0f1412"
//! text = "#eeeeee"
//! text_muted = "#999999"
//! border = "#2a332f"
//! link = "#6fcf9f"
//! link_hover = "#a8e6c8"
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
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
///
/// User config files need only specify the values they want to override.
/// Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity: name, canonical URL, description, base path.
    pub site: SiteInfo,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()));
        }
        if !self.site.url.starts_with("http://") && !self.site.url.starts_with("https://") {
            return Err(ConfigError::Validation(
                "site.url must be an absolute http(s) URL".into(),
            ));
        }
        if !self.site.base_path.is_empty() && !self.site.base_path.starts_with('/') {
            return Err(ConfigError::Validation(
                "site.base_path must start with '/' (or be empty)".into(),
            ));
        }
        Ok(())
    }

    /// Site-relative URL with the configured base path prefixed.
    ///
    /// `path` is expected to start with `/`; trailing slashes on the base
    /// path are dropped so joins never double up.
    pub fn href(&self, path: &str) -> String {
        let base = self.site.base_path.trim_end_matches('/');
        format!("{base}{path}")
    }

    /// Absolute URL for canonical links and linked data.
    pub fn canonical(&self, path: &str) -> String {
        let origin = self.site.url.trim_end_matches('/');
        format!("{origin}{}", self.href(path))
    }
}

/// Site identity block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Display name, used in the header and the WebSite descriptor.
    pub name: String,
    /// Canonical origin, no trailing slash required.
    pub url: String,
    /// One-line description for the index page and search engines.
    pub description: String,
    /// Sub-path the site is served under; empty when at the origin root.
    pub base_path: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "The Clean Pantry".to_string(),
            url: "https://thecleanpantry.com".to_string(),
            description: "DIY household cleaning recipes that actually work".to_string(),
            base_path: String::new(),
        }
    }
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Background color.
    pub background: String,
    /// Primary text color.
    pub text: String,
    /// Muted/secondary text color (category descriptions, timestamps).
    pub text_muted: String,
    /// Border color.
    pub border: String,
    /// Link color.
    pub link: String,
    /// Link hover color.
    pub link_hover: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111111".to_string(),
            text_muted: "#666666".to_string(),
            border: "#e0e0e0".to_string(),
            link: "#1a6b4a".to_string(),
            link_hover: "#0d3d2a".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0f1412".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#999999".to_string(),
            border: "#2a332f".to_string(),
            link: "#6fcf9f".to_string(),
            link_hover: "#a8e6c8".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading and CSS generation
// =============================================================================

/// Load config from `site.toml` in the given directory.
///
/// Missing file means stock defaults. Sparse files override only the keys
/// they name; unknown keys are rejected; the result is validated.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("site.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// CSS custom properties for the configured colors.
///
/// Emitted ahead of the static stylesheet, which refers to the variables
/// only, so theming never requires touching the stylesheet itself.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    let scheme_block = |scheme: &ColorScheme| {
        format!(
            "  --color-background: {};\n  --color-text: {};\n  --color-text-muted: {};\n  --color-border: {};\n  --color-link: {};\n  --color-link-hover: {};",
            scheme.background,
            scheme.text,
            scheme.text_muted,
            scheme.border,
            scheme.link,
            scheme.link_hover
        )
    };

    format!(
        ":root {{\n{}\n}}\n\n@media (prefers-color-scheme: dark) {{\n  :root {{\n{}\n  }}\n}}",
        scheme_block(&colors.light),
        scheme_block(&colors.dark)
    )
}

/// Returns a fully-commented stock `site.toml` with all keys explained.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Clean Pantry Configuration
# ==========================
# All keys are optional; values shown are the stock defaults.
# Place this file as site.toml at your content root.

[site]
# Display name, used in the header and the WebSite descriptor.
name = "The Clean Pantry"
# Canonical origin for absolute URLs in linked data and canonical links.
url = "https://thecleanpantry.com"
# One-line description for the index page and search engines.
description = "DIY household cleaning recipes that actually work"
# Sub-path the site is served under. Leave empty when serving at the root;
# set to e.g. "/pantry" when publishing under a project path.
base_path = ""

# Colors are emitted as CSS custom properties; the stylesheet only refers
# to the variables, so restyling never requires editing CSS.

[colors.light]
background = "#ffffff"
text = "#111111"
text_muted = "#666666"
border = "#e0e0e0"
link = "#1a6b4a"
link_hover = "#0d3d2a"

[colors.dark]
background = "#0f1412"
text = "#eeeeee"
text_muted = "#999999"
border = "#2a332f"
link = "#6fcf9f"
link_hover = "#a8e6c8"
"##
}
