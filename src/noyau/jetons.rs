// src/noyau/jetons.rs

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurJeton;
use super::eval::Operateur;
use super::fonctions::Fonction;

/// Touche du pavé (événement “bouton pressé”).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// 0..=9
    Chiffre(u8),
    Point,

    /// + - * / (jamais Puissance : voir `Puissance`)
    Operation(Operateur),
    /// x^y : prépare une puissance sans évaluer
    Puissance,
    Egal,

    ToutEffacer,
    ChangerSigne,
    Pourcent,

    Fonction(Fonction),
    Pi,
}

/// Famille visuelle d’une touche (une entrée de la table de styles).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Categorie {
    Chiffre,
    Action,
    Extra,
    Scientifique,
}

/// Libellés des chiffres, indexés par valeur.
const CHIFFRES: &str = "0123456789";

impl Touche {
    /// Faux pour les valeurs que le pavé ne peut pas produire :
    /// `Chiffre(d)` avec d > 9, `Operation(Puissance)` (la puissance passe
    /// par `Touche::Puissance`, qui n’évalue pas l’opération en attente).
    pub fn est_valide(self) -> bool {
        match self {
            Touche::Chiffre(d) => d <= 9,
            Touche::Operation(op) => op != Operateur::Puissance,
            _ => true,
        }
    }

    /// Texte du bouton (et forme acceptée par `FromStr` pour toute touche
    /// valide). `"?"` pour un chiffre hors 0..=9.
    pub fn libelle(self) -> &'static str {
        match self {
            Touche::Chiffre(d) => {
                let i = usize::from(d);
                CHIFFRES.get(i..=i).unwrap_or("?")
            }
            Touche::Point => ".",
            Touche::Operation(op) => op.symbole(),
            Touche::Puissance => "x^y",
            Touche::Egal => "=",
            Touche::ToutEffacer => "AC",
            Touche::ChangerSigne => "+/-",
            Touche::Pourcent => "%",
            Touche::Fonction(f) => f.libelle(),
            Touche::Pi => "π",
        }
    }

    pub fn categorie(self) -> Categorie {
        match self {
            Touche::Chiffre(_) | Touche::Point => Categorie::Chiffre,
            Touche::Operation(_) | Touche::Egal => Categorie::Action,
            Touche::ToutEffacer | Touche::ChangerSigne | Touche::Pourcent => Categorie::Extra,
            Touche::Puissance | Touche::Fonction(_) | Touche::Pi => Categorie::Scientifique,
        }
    }

    /// Raccourci clavier (caractère tapé) -> touche.
    /// Entrée / Échap sont gérées côté app (ce ne sont pas des caractères).
    pub fn depuis_clavier(c: char) -> Option<Touche> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Touche::Chiffre(d as u8)),
            '.' | ',' => Some(Touche::Point),
            '+' => Some(Touche::Operation(Operateur::Plus)),
            '-' => Some(Touche::Operation(Operateur::Moins)),
            '*' | '×' => Some(Touche::Operation(Operateur::Fois)),
            '/' | '÷' => Some(Touche::Operation(Operateur::Divise)),
            '^' => Some(Touche::Puissance),
            '%' => Some(Touche::Pourcent),
            '=' => Some(Touche::Egal),
            'π' => Some(Touche::Pi),
            _ => None,
        }
    }
}

impl FromStr for Touche {
    type Err = ErreurJeton;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = match s {
            "." => Touche::Point,
            "+" => Touche::Operation(Operateur::Plus),
            "-" => Touche::Operation(Operateur::Moins),
            "*" => Touche::Operation(Operateur::Fois),
            "/" => Touche::Operation(Operateur::Divise),
            "=" => Touche::Egal,
            "AC" => Touche::ToutEffacer,
            "+/-" => Touche::ChangerSigne,
            "%" => Touche::Pourcent,
            "sin" => Touche::Fonction(Fonction::Sin),
            "cos" => Touche::Fonction(Fonction::Cos),
            "tan" => Touche::Fonction(Fonction::Tan),
            "log" => Touche::Fonction(Fonction::Log),
            "sqrt" => Touche::Fonction(Fonction::Sqrt),
            "e^x" => Touche::Fonction(Fonction::Exp),
            "π" | "pi" => Touche::Pi,
            "x^y" => Touche::Puissance,
            _ => {
                // chiffre isolé
                let mut it = s.chars();
                match (it.next(), it.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Touche::Chiffre(c as u8 - b'0'),
                    _ => return Err(ErreurJeton::Inconnue(s.to_string())),
                }
            }
        };
        Ok(t)
    }
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.libelle())
    }
}
