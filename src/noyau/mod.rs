//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - erreur.rs    : erreurs typées (jamais exposées à l’écran)
//! - format.rs    : nombre <-> texte d’affichage, sentinelle "Error"
//! - eval.rs      : opérateurs binaires + calculer(a, b, op)
//! - fonctions.rs : sin/cos/tan (degrés), log, sqrt, e^x
//! - jetons.rs    : touches du pavé + catégories
//! - moteur.rs    : machine à états (appliquer / reset)
//! - script.rs    : suites de touches en texte

pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod script;

#[cfg(test)]
mod tests_scientifiques;


#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use jetons::{Categorie, Touche};
pub use moteur::Moteur;
pub use script::executer_script;
