// src/noyau/script.rs
//
// Scripts de touches (mode sans fenêtre + tests)
// ----------------------------------------------
// "16 sqrt"  -> 1, 6, sqrt
// "2 x^y 10 =" -> 2, x^y, 1, 0, =
// Séparateur : espaces. Un mot fait uniquement de chiffres et de '.'
// est tapé caractère par caractère ; tout autre mot doit être une touche.

use super::erreur::ErreurJeton;
use super::jetons::Touche;
use super::moteur::Moteur;

/// Une touche du script et l’affichage qu’elle a produit.
#[derive(Clone, Debug, PartialEq)]
pub struct Pas {
    pub touche: Touche,
    pub affichage: String,
}

/// Découpe un script en touches, sans rien exécuter.
pub fn lire_script(texte: &str) -> Result<Vec<Touche>, ErreurJeton> {
    let mut out = Vec::new();

    for mot in texte.split_whitespace() {
        let saisie = mot.len() > 1 && mot.chars().all(|c| c.is_ascii_digit() || c == '.');
        if saisie {
            for c in mot.chars() {
                // chiffre ou '.', déjà vérifié
                out.push(c.to_string().parse()?);
            }
        } else {
            out.push(mot.parse()?);
        }
    }

    Ok(out)
}

/// Lit tout le script puis le joue sur `moteur`.
/// Un mot inconnu rejette le script entier : aucune touche n’est jouée.
pub fn executer_script(moteur: &mut Moteur, texte: &str) -> Result<Vec<Pas>, ErreurJeton> {
    let touches =
        lire_script(texte).inspect_err(|e| tracing::warn!(%texte, "script rejeté: {e}"))?;

    let pas = touches
        .into_iter()
        .map(|touche| Pas {
            touche,
            affichage: moteur.appliquer(touche).to_string(),
        })
        .collect();

    Ok(pas)
}
