use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BrailleError;

/// Default number of braille columns.
pub const DEFAULT_WIDTH: u32 = 30;
/// Default alpha cutoff. A dot is lit when `alpha > threshold`.
pub const DEFAULT_THRESHOLD: u8 = 40;
/// Default identifier of the emitted Rust constant.
pub const DEFAULT_CONST_NAME: &str = "LOGO_BRAILLE";

/// Format de sortie.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum OutputMode {
    /// Texte brut suivi d'un saut de ligne.
    #[default]
    Plain,
    /// Déclaration `pub const NAME: &str = "...";` à coller dans un source Rust.
    RustConst,
}

/// Paramètres de conversion image → braille.
///
/// # Example
/// ```
/// use bl_core::config::EncodeConfig;
/// let config = EncodeConfig::default();
/// assert_eq!(config.width, 30);
/// assert_eq!(config.threshold, 40);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct EncodeConfig {
    /// Largeur cible en colonnes braille (2 pixels chacune).
    pub width: u32,
    /// Seuil alpha, strictement dépassé pour allumer un point.
    pub threshold: u8,
    /// Texte brut ou constante Rust.
    pub output: OutputMode,
    /// Nom de la constante en mode `RustConst`.
    pub const_name: String,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            threshold: DEFAULT_THRESHOLD,
            output: OutputMode::Plain,
            const_name: DEFAULT_CONST_NAME.into(),
        }
    }
}

impl EncodeConfig {
    /// Clamp numeric fields to their valid ranges.
    /// Called after TOML deserialization.
    pub fn clamp_all(&mut self) {
        self.width = self.width.max(1);
    }

    /// Check the fields that cannot be clamped into shape.
    ///
    /// # Errors
    /// Returns [`BrailleError::Config`] if `const_name` is not a Rust identifier.
    pub fn validate(&self) -> Result<(), BrailleError> {
        validate_const_name(&self.const_name)
    }
}

/// Accept only plain ASCII Rust identifiers (no keywords check beyond `_`).
///
/// # Errors
/// Returns [`BrailleError::Config`] on an empty name, a leading digit, a lone
/// underscore, or any character outside `[A-Za-z0-9_]`.
///
/// # Example
/// ```
/// use bl_core::config::validate_const_name;
/// assert!(validate_const_name("LOGO_BRAILLE").is_ok());
/// assert!(validate_const_name("9LIVES").is_err());
/// ```
pub fn validate_const_name(name: &str) -> Result<(), BrailleError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            name != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(BrailleError::Config(format!(
            "nom de constante invalide : {name:?}"
        )))
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    encode: Option<EncodeSection>,
}

/// Encode section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct EncodeSection {
    width: Option<u32>,
    threshold: Option<u8>,
    output: Option<OutputMode>,
    const_name: Option<String>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read, parsed, or holds an invalid
/// constant name.
///
/// # Example
/// ```no_run
/// use bl_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("braillogo.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<EncodeConfig, BrailleError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        BrailleError::Config(format!("impossible de lire {} : {e}", path.display()))
    })?;
    parse_config(&content)
        .map_err(|e| BrailleError::Config(format!("{} : {e}", path.display())))
}

/// Parse TOML text into a config, merging onto the defaults.
///
/// # Errors
/// Returns an error on malformed TOML or an invalid constant name.
///
/// # Example
/// ```
/// use bl_core::config::{parse_config, OutputMode};
/// let config = parse_config("[encode]\nwidth = 12\noutput = \"RustConst\"").unwrap();
/// assert_eq!(config.width, 12);
/// assert_eq!(config.output, OutputMode::RustConst);
/// assert_eq!(config.threshold, 40);
/// ```
pub fn parse_config(content: &str) -> Result<EncodeConfig, BrailleError> {
    let file: ConfigFile =
        toml::from_str(content).map_err(|e| BrailleError::Config(e.to_string()))?;

    let mut config = EncodeConfig::default();

    if let Some(e) = file.encode {
        if let Some(v) = e.width {
            config.width = v;
        }
        if let Some(v) = e.threshold {
            config.threshold = v;
        }
        if let Some(v) = e.output {
            config.output = v;
        }
        if let Some(v) = e.const_name {
            config.const_name = v;
        }
    } else {
        log::debug!("Pas de section [encode], valeurs par défaut");
    }

    config.clamp_all();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, EncodeConfig::default());
    }

    #[test]
    fn zero_width_is_clamped() {
        let config = parse_config("[encode]\nwidth = 0").unwrap();
        assert_eq!(config.width, 1);
    }

    #[test]
    fn threshold_out_of_u8_range_is_rejected() {
        assert!(parse_config("[encode]\nthreshold = 300").is_err());
    }

    #[test]
    fn bad_const_name_is_rejected() {
        let err = parse_config("[encode]\nconst_name = \"my-logo\"").unwrap_err();
        assert!(matches!(err, BrailleError::Config(_)));
    }

    #[test]
    fn const_name_rules() {
        assert!(validate_const_name("_LOGO").is_ok());
        assert!(validate_const_name("logo2").is_ok());
        assert!(validate_const_name("").is_err());
        assert!(validate_const_name("_").is_err());
        assert!(validate_const_name("LOGO BRAILLE").is_err());
    }

    #[test]
    fn load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[encode]\nthreshold = 128\nconst_name = \"SPLASH\"").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.threshold, 128);
        assert_eq!(config.const_name, "SPLASH");
        assert_eq!(config.width, DEFAULT_WIDTH);
    }

    #[test]
    fn load_config_missing_file_errors() {
        let err = load_config(Path::new("/nonexistent/braillogo.toml")).unwrap_err();
        assert!(matches!(err, BrailleError::Config(_)));
    }
}
