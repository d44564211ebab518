//! Gradient settings and flag files.
//!
//! Flags come from a global config file, a local `.linetintrc`, and the
//! command line, in increasing priority. Files are only ever read.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::gradient::{GradientError, Rgb};

/// First line number that gets a gutter marker.
pub const START_LINE: usize = 150;
/// Last line number with its own ramp color; longer files share the end color.
pub const END_LINE: usize = 230;
/// Light end of the ramp.
pub const START_COLOR: Rgb = Rgb::new(0xff, 0xfb, 0xe5);
/// Dark end of the ramp.
pub const END_COLOR: Rgb = Rgb::new(0xc9, 0x46, 0x4c);

/// Parameters of the line-count color ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientConfig {
    pub start_line: usize,
    pub end_line: usize,
    pub start_color: Rgb,
    pub end_color: Rgb,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            start_line: START_LINE,
            end_line: END_LINE,
            start_color: START_COLOR,
            end_color: END_COLOR,
        }
    }
}

impl GradientConfig {
    /// Number of single-line buckets, one per ramp color.
    pub const fn steps(&self) -> usize {
        self.end_line.saturating_sub(self.start_line) + 1
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub watch: bool,
    pub start_line: Option<usize>,
    pub end_line: Option<usize>,
    pub start_color: Option<String>,
    pub end_color: Option<String>,
}

impl ConfigFlags {
    /// Merge two flag sets; options in `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            watch: self.watch || other.watch,
            start_line: other.start_line.or(self.start_line),
            end_line: other.end_line.or(self.end_line),
            start_color: other
                .start_color
                .clone()
                .or_else(|| self.start_color.clone()),
            end_color: other.end_color.clone().or_else(|| self.end_color.clone()),
        }
    }

    /// Fill unset options from the defaults and parse colors.
    ///
    /// # Errors
    /// Returns an error if a color is not a valid hex triple or the line
    /// range is empty.
    pub fn resolve(&self) -> Result<GradientConfig, GradientError> {
        let defaults = GradientConfig::default();
        let color = |value: Option<&String>, fallback: Rgb| {
            value.map_or(Ok(fallback), |hex| Rgb::from_hex(hex))
        };
        let start = self.start_line.unwrap_or(defaults.start_line);
        let end = self.end_line.unwrap_or(defaults.end_line);
        if start == 0 || end <= start {
            return Err(GradientError::InvalidRange { start, end });
        }
        Ok(GradientConfig {
            start_line: start,
            end_line: end,
            start_color: color(self.start_color.as_ref(), defaults.start_color)?,
            end_color: color(self.end_color.as_ref(), defaults.end_color)?,
        })
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("linetint").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("linetint")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("linetint").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("linetint")
                .join("config");
        }
    }

    PathBuf::from(".linetintrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".linetintrc")
}

/// Read flags from a config file; a missing file yields no flags.
///
/// # Errors
/// Returns an error if the file exists but cannot be read.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

/// Pick known flags out of a token list, ignoring anything else.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        if token == "--watch" || token == "-w" {
            flags.watch = true;
        } else if let Some((name, value)) = token.split_once('=') {
            apply_option(&mut flags, name, value);
        } else if is_option(token)
            && let Some(next) = tokens.get(i + 1)
        {
            apply_option(&mut flags, token, next);
            i += 1;
        }
        i += 1;
    }
    flags
}

fn is_option(name: &str) -> bool {
    matches!(
        name,
        "--start-line" | "--end-line" | "--start-color" | "--end-color"
    )
}

fn apply_option(flags: &mut ConfigFlags, name: &str, value: &str) {
    match name {
        "--start-line" => flags.start_line = value.parse().ok().or(flags.start_line),
        "--end-line" => flags.end_line = value.parse().ok().or(flags.end_line),
        "--start-color" => flags.start_color = Some(value.to_string()),
        "--end-color" => flags.end_color = Some(value.to_string()),
        _ => {}
    }
}
