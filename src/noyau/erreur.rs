//! Erreurs du noyau.
//!
//! Aucune de ces erreurs ne sort du moteur : `Moteur` les journalise puis les
//! écrase en sentinelle `"Error"` à l’affichage. Elles servent au diagnostic
//! (logs, tests) et aux scripts.

use thiserror::Error;

/// Échec d’un calcul (binaire, unaire ou lecture de l’affichage).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurCalcul {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("nombre illisible: {0:?}")]
    NombreIllisible(String),

    #[error("hors domaine: {0}")]
    HorsDomaine(&'static str),

    #[error("dépassement de capacité")]
    Depassement,
}

/// Jeton texte qui ne correspond à aucune touche.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurJeton {
    #[error("touche inconnue: {0:?}")]
    Inconnue(String),
}

/// Résultat d’un calcul du noyau.
pub type ResultatCalcul<T> = Result<T, ErreurCalcul>;
