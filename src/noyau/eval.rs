//! Noyau — évaluation binaire
//!
//! Une seule opération en attente : `operande1 operateur affichage`.
//! Pas de priorité, pas d’AST : chaque opérateur replie immédiatement
//! l’opération précédente.

use std::fmt;

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::format::{format_nombre, SENTINELLE_ERREUR};

/// Opérateur binaire en attente.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Operateur {
    #[default]
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
}

impl Operateur {
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "*",
            Operateur::Divise => "/",
            Operateur::Puissance => "**",
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

/// Calcule `a op b` ; tout résultat non fini est une erreur.
pub fn evaluer(a: f64, b: f64, op: Operateur) -> ResultatCalcul<f64> {
    let v = match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => {
            if b == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            a / b
        }
        Operateur::Puissance => {
            // 0 ** négatif : division par zéro déguisée
            if a == 0.0 && b < 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            let v = a.powf(b);
            if v.is_nan() {
                // base négative, exposant fractionnaire
                return Err(ErreurCalcul::HorsDomaine("puissance"));
            }
            v
        }
    };

    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurCalcul::Depassement)
    }
}

/// Version “écran” de [`evaluer`] : le résultat formaté, ou `"Error"`.
pub fn calculer(a: f64, b: f64, op: Operateur) -> String {
    match evaluer(a, b, op) {
        Ok(v) => format_nombre(v),
        Err(e) => {
            tracing::debug!(%a, %b, %op, erreur = %e, "calcul en échec");
            SENTINELLE_ERREUR.to_string()
        }
    }
}
