//! src/noyau/moteur.rs
//!
//! Moteur de la calculatrice : machine à états pilotée par touches.
//!
//! Contrats :
//! - `affichage` n’est jamais vide ; `"0"` après remise à zéro.
//! - Opérateurs appliqués dans l’ordre de frappe, sans priorité.
//! - Toute erreur de calcul est absorbée ici et devient `"Error"` ;
//!   la touche suivante, quelle qu’elle soit, remet à zéro.

use std::f64::consts::PI;

use super::erreur::ErreurCalcul;
use super::eval::{calculer, evaluer, Operateur};
use super::format::{format_nombre, lire_nombre, SENTINELLE_ERREUR};
use super::jetons::Touche;

/// État visible + opération en attente.
#[derive(Clone, Debug, PartialEq)]
pub struct EtatCalcul {
    pub affichage: String,
    pub operande1: f64,
    pub operateur: Operateur,
    /// Vrai juste après un opérateur / `=` / `%` : le prochain chiffre
    /// commence un nouveau nombre au lieu de s’ajouter.
    pub nouvel_operande: bool,
}

impl Default for EtatCalcul {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            operande1: 0.0,
            operateur: Operateur::Plus,
            nouvel_operande: true,
        }
    }
}

impl EtatCalcul {
    pub fn est_en_erreur(&self) -> bool {
        self.affichage == SENTINELLE_ERREUR
    }

    /// Oublie l’opération en attente, garde l’affichage.
    fn oublier_operation(&mut self) {
        self.operande1 = 0.0;
        self.operateur = Operateur::Plus;
        self.nouvel_operande = true;
    }
}

#[derive(Clone, Debug, Default)]
pub struct Moteur {
    etat: EtatCalcul,
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn etat(&self) -> &EtatCalcul {
        &self.etat
    }

    pub fn affichage(&self) -> &str {
        &self.etat.affichage
    }

    /// AC : tout revient aux valeurs de départ.
    pub fn reset(&mut self) {
        self.etat = EtatCalcul::default();
    }

    /// Traite une touche et renvoie le nouvel affichage.
    pub fn appliquer(&mut self, touche: Touche) -> &str {
        tracing::debug!(%touche, affichage = %self.etat.affichage, "touche pressée");

        if !touche.est_valide() {
            tracing::warn!(?touche, "touche hors pavé ignorée");
            return &self.etat.affichage;
        }

        // Après "Error", toute touche sert de AC (et n’est pas rejouée).
        if self.etat.est_en_erreur() || touche == Touche::ToutEffacer {
            self.reset();
            return &self.etat.affichage;
        }

        if let Err(e) = self.traiter(touche) {
            tracing::debug!(%touche, erreur = %e, "calcul en échec");
            self.passer_en_erreur();
        }

        &self.etat.affichage
    }

    fn traiter(&mut self, touche: Touche) -> Result<(), ErreurCalcul> {
        match touche {
            Touche::Chiffre(_) | Touche::Point => self.saisir(touche.libelle()),

            Touche::Operation(op) => {
                let b = lire_nombre(&self.etat.affichage)?;
                let v = evaluer(self.etat.operande1, b, self.etat.operateur)?;
                self.etat.affichage = format_nombre(v);
                self.etat.operande1 = v;
                self.etat.operateur = op;
                self.etat.nouvel_operande = true;
            }

            // x^y : mémorise la base, l’opération en attente est abandonnée
            Touche::Puissance => {
                self.etat.operande1 = lire_nombre(&self.etat.affichage)?;
                self.etat.operateur = Operateur::Puissance;
                self.etat.nouvel_operande = true;
            }

            Touche::Egal => {
                let b = lire_nombre(&self.etat.affichage)?;
                self.etat.affichage = calculer(self.etat.operande1, b, self.etat.operateur);
                self.etat.oublier_operation();
            }

            // NOTE: abandonne aussi l’opération en attente (5 + 50 % -> 0.5)
            Touche::Pourcent => {
                let x = lire_nombre(&self.etat.affichage)?;
                self.etat.affichage = format_nombre(x / 100.0);
                self.etat.oublier_operation();
            }

            Touche::ChangerSigne => {
                let x = lire_nombre(&self.etat.affichage)?;
                self.etat.affichage = format_nombre(-x);
            }

            Touche::Fonction(f) => {
                let x = lire_nombre(&self.etat.affichage)?;
                self.etat.affichage = format_nombre(f.appliquer(x)?);
            }

            Touche::Pi => self.etat.affichage = format_nombre(PI),

            // traité en amont
            Touche::ToutEffacer => self.reset(),
        }

        Ok(())
    }

    fn saisir(&mut self, texte: &str) {
        if self.etat.affichage == "0" || self.etat.nouvel_operande {
            self.etat.affichage = texte.to_string();
        } else {
            self.etat.affichage.push_str(texte);
        }
        self.etat.nouvel_operande = false;
    }

    fn passer_en_erreur(&mut self) {
        self.etat.oublier_operation();
        self.etat.affichage = SENTINELLE_ERREUR.to_string();
    }
}
