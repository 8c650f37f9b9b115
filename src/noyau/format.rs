// src/noyau/format.rs
//
// Nombre <-> texte d’affichage.
// - écriture : plus courte forme relisible, sans ".0" pour les entiers
// - notation scientifique hors [1e-4, 1e16) : 1e+16, 1.5e-05
// - lecture : tout ce que f64::from_str accepte, sinon erreur

use super::erreur::{ErreurCalcul, ResultatCalcul};

/// Sentinelle affichée après tout échec de calcul.
pub const SENTINELLE_ERREUR: &str = "Error";

/// Bornes de la notation décimale “normale”.
const SEUIL_GRAND: f64 = 1e16;
const SEUIL_PETIT: f64 = 1e-4;

/* ------------------------ Écriture ------------------------ */

/// Formate une valeur finie pour l’écran.
///
/// `-0` s’affiche `0` : sinon la saisie suivante collerait les chiffres
/// derrière le signe (`-05`).
pub fn format_nombre(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }

    let a = v.abs();
    if a >= SEUIL_GRAND || a < SEUIL_PETIT {
        return format_scientifique(v);
    }

    // Display de f64 : plus courte forme exacte, "10" pour 10.0
    format!("{v}")
}

/// 1.0715086071862673e301 -> 1.0715086071862673e+301 ; 1e-5 -> 1e-05
fn format_scientifique(v: f64) -> String {
    let brut = format!("{v:e}");
    let Some((mantisse, exposant)) = brut.split_once('e') else {
        return brut;
    };

    let (signe, chiffres) = match exposant.strip_prefix('-') {
        Some(reste) => ('-', reste),
        None => ('+', exposant),
    };

    format!("{mantisse}e{signe}{chiffres:0>2}")
}

/* ------------------------ Lecture ------------------------ */

/// Relit l’affichage courant. `"."`, `"1.2.3"` ou `"Error"` échouent.
pub fn lire_nombre(affichage: &str) -> ResultatCalcul<f64> {
    let v: f64 = affichage
        .trim()
        .parse()
        .map_err(|_| ErreurCalcul::NombreIllisible(affichage.to_string()))?;

    // "inf" / "NaN" sont acceptés par from_str : pas par nous
    if !v.is_finite() {
        return Err(ErreurCalcul::NombreIllisible(affichage.to_string()));
    }
    Ok(v)
}
