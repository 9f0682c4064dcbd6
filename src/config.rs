//! # Configuration
//!
//! Optional YAML settings for the `chordal` command line tool.
//!
//! ```yaml
//! tempo: 96
//! format: json
//! show-chord: false
//! ```
//!
//! Every key is optional. Command line flags override values from the file.

use std::path::Path;

use serde::Deserialize;

use crate::error::ChordError;

/// Tempo used when none is configured
pub const DEFAULT_TEMPO: u16 = 120;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `chord('C:m7') => ('(C E♭ G B♭)')`
    #[default]
    Text,
    /// Playback data as JSON
    Json,
}

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawConfig {
    pub tempo: Option<u16>,
    pub format: Option<OutputFormat>,
    pub show_chord: Option<bool>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub tempo: u16,
    pub format: OutputFormat,
    pub show_chord: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tempo: DEFAULT_TEMPO,
            format: OutputFormat::Text,
            show_chord: true,
        }
    }
}

impl Config {
    /// Parse configuration from YAML text.
    ///
    /// # Example
    /// ```
    /// use chordal::config::{Config, OutputFormat};
    ///
    /// let config = Config::from_yaml("tempo: 90\nformat: json\n").unwrap();
    /// assert_eq!(config.tempo, 90);
    /// assert_eq!(config.format, OutputFormat::Json);
    /// assert!(config.show_chord);
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self, ChordError> {
        // An empty document deserializes as null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| ChordError::Config(e.to_string()))?;

        let defaults = Self::default();
        let tempo = raw.tempo.unwrap_or(defaults.tempo);
        if tempo == 0 {
            return Err(ChordError::Config("tempo must be greater than 0".to_string()));
        }

        Ok(Self {
            tempo,
            format: raw.format.unwrap_or(defaults.format),
            show_chord: raw.show_chord.unwrap_or(defaults.show_chord),
        })
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, ChordError> {
        let content = std::fs::read_to_string(path).map_err(|e| ChordError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml("\n  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_yaml("tempo: 72\nformat: text\nshow-chord: false\n").unwrap();
        assert_eq!(
            config,
            Config {
                tempo: 72,
                format: OutputFormat::Text,
                show_chord: false,
            }
        );
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::from_yaml("temp: 72\n").unwrap_err();
        assert!(matches!(err, ChordError::Config(_)));
    }

    #[test]
    fn test_bad_format_is_rejected() {
        assert!(Config::from_yaml("format: xml\n").is_err());
    }

    #[test]
    fn test_zero_tempo_is_rejected() {
        assert!(Config::from_yaml("tempo: 0\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/chordal.yaml")).unwrap_err();
        assert!(matches!(err, ChordError::Io { ref path, .. } if path == "/nonexistent/chordal.yaml"));
    }
}
