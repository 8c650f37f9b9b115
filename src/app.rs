// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
// - Raccourcis clavier : chiffres, . + - * / % ^ =, Entrée, Échap/Suppr

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Touche;

/// Ce que le clavier demande pour cette frame.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Raccourci {
    Touche(Touche),
    ToutEffacer,
}

fn raccourcis(events: &[egui::Event]) -> Vec<Raccourci> {
    let mut out = Vec::new();
    for ev in events {
        match ev {
            egui::Event::Text(t) => {
                let touches = t.chars().filter_map(Touche::depuis_clavier);
                out.extend(touches.map(Raccourci::Touche));
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter => out.push(Raccourci::Touche(Touche::Egal)),
                egui::Key::Escape | egui::Key::Delete => out.push(Raccourci::ToutEffacer),
                _ => {}
            },
            _ => {}
        }
    }
    out
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pas de champ texte : tout ce qui est tapé va au pavé.
        let demandes = ctx.input(|i| raccourcis(&i.events));
        for r in demandes {
            match r {
                Raccourci::Touche(t) => self.presser(t),
                Raccourci::ToutEffacer => self.tout_effacer(),
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
