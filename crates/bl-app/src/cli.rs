use std::path::PathBuf;

use clap::Parser;

/// braillogo : convertit une image en texte braille Unicode pour TUI.
///
/// Chaque caractère couvre 2×4 pixels ; un point est allumé quand l'alpha
/// du pixel dépasse le seuil.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Chemin vers l'image (PNG, JPEG, BMP, GIF).
    pub image: PathBuf,

    /// Largeur cible en colonnes braille. Défaut : 30.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Seuil alpha (0-255) ; un point s'allume si alpha > seuil. Défaut : 40.
    #[arg(long)]
    pub threshold: Option<u8>,

    /// Sortie sous forme de constante Rust `pub const NAME: &str`.
    #[arg(long, default_value_t = false)]
    pub rust: bool,

    /// Nom de la constante émise avec --rust. Défaut : LOGO_BRAILLE.
    #[arg(long)]
    pub const_name: Option<String>,

    /// Fichier de configuration TOML (section [encode]).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
