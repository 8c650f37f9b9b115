// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran aligné à droite au-dessus du pavé, panneau noir arrondi
// - Pavé : 7 rangées, "0" en double largeur
// - Style des boutons : UNE table indexée par catégorie (pas de sous-types)

use eframe::egui;
use egui::{Color32, RichText};

use super::etat::AppCalc;
use crate::noyau::eval::Operateur;
use crate::noyau::fonctions::Fonction;
use crate::noyau::{Categorie, Touche};

/// Marge intérieure du panneau (px).
const MARGE: i8 = 20;
const ESPACE: f32 = 6.0;
const HAUTEUR_BOUTON: f32 = 40.0;

/// (touche, nombre de colonnes occupées)
type Rangee = &'static [(Touche, u8)];

const PAVE: [Rangee; 7] = [
    &[
        (Touche::ToutEffacer, 1),
        (Touche::ChangerSigne, 1),
        (Touche::Pourcent, 1),
        (Touche::Operation(Operateur::Divise), 1),
    ],
    &[
        (Touche::Chiffre(7), 1),
        (Touche::Chiffre(8), 1),
        (Touche::Chiffre(9), 1),
        (Touche::Operation(Operateur::Fois), 1),
    ],
    &[
        (Touche::Chiffre(4), 1),
        (Touche::Chiffre(5), 1),
        (Touche::Chiffre(6), 1),
        (Touche::Operation(Operateur::Moins), 1),
    ],
    &[
        (Touche::Chiffre(1), 1),
        (Touche::Chiffre(2), 1),
        (Touche::Chiffre(3), 1),
        (Touche::Operation(Operateur::Plus), 1),
    ],
    &[(Touche::Chiffre(0), 2), (Touche::Point, 1), (Touche::Egal, 1)],
    &[
        (Touche::Fonction(Fonction::Sin), 1),
        (Touche::Fonction(Fonction::Cos), 1),
        (Touche::Fonction(Fonction::Tan), 1),
        (Touche::Fonction(Fonction::Log), 1),
    ],
    &[
        (Touche::Puissance, 1),
        (Touche::Fonction(Fonction::Sqrt), 1),
        (Touche::Fonction(Fonction::Exp), 1),
        (Touche::Pi, 1),
    ],
];

/// Couleurs d’un bouton.
#[derive(Clone, Copy, Debug, PartialEq)]
struct StyleBouton {
    fond: Color32,
    texte: Color32,
}

/// Table des styles par catégorie.
fn style(categorie: Categorie) -> StyleBouton {
    match categorie {
        Categorie::Chiffre => StyleBouton {
            fond: Color32::from_white_alpha(61),
            texte: Color32::WHITE,
        },
        Categorie::Action => StyleBouton {
            fond: Color32::from_rgb(255, 152, 0),
            texte: Color32::WHITE,
        },
        Categorie::Extra => StyleBouton {
            fond: Color32::from_rgb(207, 216, 220),
            texte: Color32::BLACK,
        },
        Categorie::Scientifique => StyleBouton {
            fond: Color32::from_rgb(179, 229, 252),
            texte: Color32::BLACK,
        },
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            egui::Frame::new()
                .fill(Color32::BLACK)
                .corner_radius(egui::CornerRadius::same(20))
                .inner_margin(egui::Margin::same(MARGE))
                .show(ui, |ui| {
                    let interieur = self.largeur - 2.0 * f32::from(MARGE);
                    ui.set_width(interieur);
                    ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

                    self.ui_ecran(ui);
                    ui.add_space(4.0);
                    self.ui_pave(ui, interieur);
                });
        });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let texte = RichText::new(self.affichage())
                .size(20.0)
                .color(Color32::WHITE);
            ui.add(egui::Label::new(texte).truncate());
        });

        // "7 +" à gauche, dernière touche à droite
        let attente = self.operation_en_attente().unwrap_or_default();
        let rappel = self.derniere_touche.map(Touche::libelle).unwrap_or("");
        ui.horizontal(|ui| {
            ui.label(RichText::new(attente).size(11.0).color(Color32::GRAY));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new(rappel).size(11.0).color(Color32::GRAY));
            });
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, interieur: f32) {
        let cellule = (interieur - 3.0 * ESPACE) / 4.0;

        for rangee in PAVE {
            ui.horizontal(|ui| {
                for &(touche, colonnes) in rangee {
                    let n = f32::from(colonnes);
                    let largeur = cellule * n + ESPACE * (n - 1.0);
                    self.bouton(ui, touche, largeur);
                }
            });
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche, largeur: f32) {
        let s = style(touche.categorie());
        let texte = RichText::new(touche.libelle()).size(16.0).color(s.texte);

        let resp = ui.add_sized(
            [largeur, HAUTEUR_BOUTON],
            egui::Button::new(texte)
                .fill(s.fond)
                .corner_radius(egui::CornerRadius::same(20)),
        );

        if resp.clicked() {
            self.presser(touche);
        }
    }
}
