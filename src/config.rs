use anyhow::{bail, Context, Result};
use image::Rgb;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{font, paths, placeholder};
use crate::placeholder::PlaceholderSpec;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Source icon for resizing; defaults to the full-size icon inside `output_dir`
    #[serde(default)]
    pub source: Option<PathBuf>,
    #[serde(default)]
    pub placeholder: PlaceholderConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlaceholderConfig {
    #[serde(default = "default_size")]
    pub size: u32,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_foreground")]
    pub foreground: String,
    #[serde(default = "default_label")]
    pub label: String,
    #[serde(default = "default_font_path")]
    pub font_path: PathBuf,
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(paths::OUTPUT_DIR)
}

fn default_size() -> u32 {
    placeholder::SIZE
}

fn default_background() -> String {
    format_hex_color(placeholder::BACKGROUND)
}

fn default_foreground() -> String {
    format_hex_color(placeholder::FOREGROUND)
}

fn default_label() -> String {
    placeholder::LABEL.to_string()
}

fn default_font_path() -> PathBuf {
    PathBuf::from(font::SYSTEM_FONT_PATH)
}

fn default_font_size() -> f32 {
    font::SIZE_PX
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        PlaceholderConfig {
            size: default_size(),
            background: default_background(),
            foreground: default_foreground(),
            label: default_label(),
            font_path: default_font_path(),
            font_size: default_font_size(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: default_output_dir(),
            source: None,
            placeholder: PlaceholderConfig::default(),
        }
    }
}

impl Config {
    /// Load settings from `path`, or use defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Config::default());
        };

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_yaml(&contents)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents)
            .context("Failed to parse config")?;

        // Validate configuration after loading
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let placeholder = &self.placeholder;

        if placeholder.size == 0 {
            bail!("placeholder.size must be greater than 0");
        }

        if placeholder.label.is_empty() {
            bail!("placeholder.label cannot be empty");
        }

        if !(placeholder.font_size > 0.0) {
            bail!("placeholder.font_size must be greater than 0");
        }
        if !placeholder.font_size.is_finite() || placeholder.font_size > placeholder.size as f32 {
            bail!(
                "placeholder.font_size must be <= placeholder.size ({})",
                placeholder.size
            );
        }

        parse_hex_color(&placeholder.background).context("placeholder.background")?;
        parse_hex_color(&placeholder.foreground).context("placeholder.foreground")?;

        Ok(())
    }

    pub fn source_path(&self) -> PathBuf {
        self.source
            .clone()
            .unwrap_or_else(|| self.output_dir.join(paths::SOURCE_FILENAME))
    }

    pub fn placeholder_spec(&self) -> Result<PlaceholderSpec> {
        let placeholder = &self.placeholder;
        Ok(PlaceholderSpec {
            size: placeholder.size,
            background: parse_hex_color(&placeholder.background)?,
            foreground: parse_hex_color(&placeholder.foreground)?,
            label: placeholder.label.clone(),
            font_path: placeholder.font_path.clone(),
            font_size: placeholder.font_size,
        })
    }
}

/// Parse `#RRGGBB` (the leading `#` is optional)
pub fn parse_hex_color(value: &str) -> Result<Rgb<u8>> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("expected a color like #007AFF, got {:?}", value);
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

pub fn format_hex_color(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}
