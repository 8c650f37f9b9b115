//! Configuration (ligne de commande + environnement), natif seulement.

use clap::Parser;

use crate::app::etat::{LARGEUR_DEFAUT, LARGEUR_MAX, LARGEUR_MIN};

/// Calculatrice scientifique (pavé à touches, sans priorité d’opérateurs).
#[derive(Parser, Debug)]
#[command(name = "calculatrice_sci", version, about)]
pub struct Config {
    /// Joue une suite de touches sans ouvrir de fenêtre, ex: "7 + 3 =".
    #[arg(short, long, env = "CALC_SCRIPT")]
    pub script: Option<String>,

    /// Avec --script : affiche chaque touche et l’écran obtenu.
    #[arg(short, long)]
    pub detail: bool,

    /// Largeur du pavé en pixels (240 à 900).
    #[arg(long, default_value_t = LARGEUR_DEFAUT, value_parser = largeur_valide)]
    pub largeur: f32,
}

impl Config {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn largeur_valide(s: &str) -> Result<f32, String> {
    let largeur: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if !(LARGEUR_MIN..=LARGEUR_MAX).contains(&largeur) {
        // NaN échoue aussi ici
        return Err(format!("attendu entre {LARGEUR_MIN} et {LARGEUR_MAX}"));
    }
    Ok(largeur)
}
