// src/noyau/fonctions.rs
//
// Fonctions unaires (touches scientifiques)
// -----------------------------------------
// - sin/cos/tan : argument en DEGRÉS, converti en radians
// - log : base 10
// - sqrt, e^x
// Elles remplacent l’affichage sur place : operande1 / operateur intacts.

use super::erreur::{ErreurCalcul, ResultatCalcul};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log,
    Sqrt,
    Exp,
}

impl Fonction {
    pub fn libelle(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log => "log",
            Fonction::Sqrt => "sqrt",
            Fonction::Exp => "e^x",
        }
    }

    /// Applique la fonction ; NaN ou infini => erreur.
    pub fn appliquer(self, x: f64) -> ResultatCalcul<f64> {
        let v = match self {
            Fonction::Sin => x.to_radians().sin(),
            Fonction::Cos => x.to_radians().cos(),
            Fonction::Tan => x.to_radians().tan(),
            Fonction::Log => {
                if x <= 0.0 {
                    return Err(ErreurCalcul::HorsDomaine("log"));
                }
                x.log10()
            }
            Fonction::Sqrt => {
                if x < 0.0 {
                    return Err(ErreurCalcul::HorsDomaine("sqrt"));
                }
                x.sqrt()
            }
            Fonction::Exp => x.exp(),
        };

        if v.is_nan() {
            Err(ErreurCalcul::HorsDomaine(self.libelle()))
        } else if v.is_infinite() {
            Err(ErreurCalcul::Depassement)
        } else {
            Ok(v)
        }
    }
}
