use anyhow::{Context, Result};
use bl_core::config::{EncodeConfig, OutputMode, load_config};

use crate::cli::Cli;

/// Config résolue : défauts, puis fichier TOML, puis flags CLI.
///
/// # Errors
/// Returns an error if the config file is invalid or the constant name is
/// not a Rust identifier.
pub fn resolve_config(cli: &Cli) -> Result<EncodeConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) if path.exists() => load_config(path)
            .with_context(|| format!("Chargement de {}", path.display()))?,
        Some(path) => {
            log::warn!(
                "Config introuvable : {}. Utilisation des défauts.",
                path.display()
            );
            EncodeConfig::default()
        }
        None => EncodeConfig::default(),
    };

    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(threshold) = cli.threshold {
        config.threshold = threshold;
    }
    if cli.rust {
        config.output = OutputMode::RustConst;
    }
    if let Some(ref name) = cli.const_name {
        config.const_name.clone_from(name);
    }

    config.clamp_all();
    config.validate().context("Option --const-name")?;
    Ok(config)
}

/// Run the whole conversion and return the text to print.
///
/// Nothing is written until the full output is built, so a failure never
/// leaves partial output behind.
///
/// # Errors
/// Returns an error if the image backend is unavailable, the image cannot be
/// decoded, or its dimensions are degenerate.
pub fn run(cli: &Cli) -> Result<String> {
    let config = resolve_config(cli)?;
    log::debug!("Config : {config:?}");

    let backend = bl_source::default_backend()?;
    bl_braille::pipeline::run(backend.as_ref(), &cli.image, &config)
        .with_context(|| format!("Conversion de {}", cli.image.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["braillogo", "icon.png"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn no_flags_gives_defaults() {
        assert_eq!(resolve_config(&parse(&[])).unwrap(), EncodeConfig::default());
    }

    #[test]
    fn cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[encode]\nwidth = 10\nthreshold = 90").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = resolve_config(&parse(&["-c", &path, "--threshold", "5"])).unwrap();
        assert_eq!(config.width, 10);
        assert_eq!(config.threshold, 5);
    }

    #[test]
    fn file_can_select_rust_output() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[encode]\noutput = \"RustConst\"\nconst_name = \"SPLASH\"").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = resolve_config(&parse(&["--config", &path])).unwrap();
        assert_eq!(config.output, OutputMode::RustConst);
        assert_eq!(config.const_name, "SPLASH");
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let config = resolve_config(&parse(&["-c", "/nonexistent/braillogo.toml"])).unwrap();
        assert_eq!(config, EncodeConfig::default());
    }

    #[test]
    fn rust_flag_selects_constant() {
        let config = resolve_config(&parse(&["--rust"])).unwrap();
        assert_eq!(config.output, OutputMode::RustConst);
    }

    #[test]
    fn invalid_const_name_is_rejected() {
        assert!(resolve_config(&parse(&["--const-name", "not-valid"])).is_err());
    }
}
