//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : l’objet d’application explicite. Il possède le moteur, reçoit les
//! touches (boutons ou clavier) et garde le peu d’état propre à l’écran.
//!
//! Contrats :
//! - Aucun calcul ici : tout passe par `Moteur::appliquer`.
//! - Créé au démarrage, muté à chaque touche, détruit à la sortie.

use crate::noyau::eval::Operateur;
use crate::noyau::format::format_nombre;
use crate::noyau::{Moteur, Touche};

/// Largeur du panneau (comme la calculatrice d’origine).
pub const LARGEUR_DEFAUT: f32 = 350.0;

/// Garde-fous sur la largeur (anti-abus via --largeur).
pub const LARGEUR_MIN: f32 = 240.0;
pub const LARGEUR_MAX: f32 = 900.0;

#[derive(Clone, Debug)]
pub struct AppCalc {
    moteur: Moteur,

    // --- UX ---
    /// Dernière touche traitée (rappel discret sous l’écran).
    pub derniere_touche: Option<Touche>,
    pub largeur: f32,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Moteur::new())
    }
}

impl AppCalc {
    pub fn new(moteur: Moteur) -> Self {
        Self {
            moteur,
            derniere_touche: None,
            largeur: LARGEUR_DEFAUT,
        }
    }

    /// Largeur du pavé, bornée. NaN ou infini : largeur par défaut.
    pub fn avec_largeur(mut self, largeur: f32) -> Self {
        self.largeur = if largeur.is_finite() {
            largeur.clamp(LARGEUR_MIN, LARGEUR_MAX)
        } else {
            LARGEUR_DEFAUT
        };
        self
    }

    pub fn affichage(&self) -> &str {
        self.moteur.affichage()
    }

    /// Rappel de l’opération en attente ("7 +"), rien si l’état est neutre.
    pub fn operation_en_attente(&self) -> Option<String> {
        let etat = self.moteur.etat();
        if etat.operateur == Operateur::Plus && etat.operande1 == 0.0 {
            return None;
        }
        Some(format!("{} {}", format_nombre(etat.operande1), etat.operateur))
    }

    /// Un bouton (ou une touche clavier) vient d’être pressé.
    pub fn presser(&mut self, touche: Touche) {
        self.moteur.appliquer(touche);
        self.derniere_touche = Some(touche);
    }

    /// AC (Échap / Suppr).
    pub fn tout_effacer(&mut self) {
        self.moteur.reset();
        self.derniere_touche = Some(Touche::ToutEffacer);
    }
}
