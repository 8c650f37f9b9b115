//! Tests scénarios : suites de touches -> affichage attendu.
//!
//! Chaque test part d’un moteur neuf et joue un script (voir script.rs).
//! Les cas “bizarres” hérités du comportement historique sont testés
//! tels quels : `%` abandonne l’opération en attente, `x^y` aussi,
//! et une touche après "Error" ne fait qu’effacer.

use super::eval::Operateur;
use super::executer_script;
use super::format::lire_nombre;
use super::Moteur;
use super::Touche;

fn jouer(script: &str) -> Moteur {
    let mut m = Moteur::new();
    executer_script(&mut m, script).unwrap_or_else(|e| panic!("script={script:?} err={e}"));
    m
}

fn assert_affiche(script: &str, attendu: &str) {
    let m = jouer(script);
    assert_eq!(m.affichage(), attendu, "script={script:?}");
}

fn assert_proche(script: &str, attendu: f64) {
    let m = jouer(script);
    let v = lire_nombre(m.affichage()).unwrap_or_else(|e| panic!("script={script:?} err={e}"));
    assert!(
        (v - attendu).abs() < 1e-12,
        "script={script:?} affichage={} attendu≈{attendu}",
        m.affichage()
    );
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn saisie_remplace_le_zero() {
    assert_affiche("AC 5 3", "53");
    assert_affiche("0 0 7", "7");
    assert_affiche("1 2 . 5", "12.5");
}

#[test]
fn saisie_apres_operateur_repart_de_zero() {
    assert_affiche("1 2 + 3 4", "34");
    assert_affiche("9 = 4", "4");
}

#[test]
fn point_isole_devient_erreur_au_calcul() {
    assert_affiche(". +", "Error");
    assert_affiche("1 . 2 . 3 =", "Error");
    assert_affiche(". 5 + 1 =", "1.5");
}

/* ------------------------ Opérations binaires ------------------------ */

#[test]
fn addition_simple() {
    let m = jouer("7 + 3 =");
    assert_eq!(m.affichage(), "10");
    assert_eq!(m.etat().operande1, 0.0);
    assert_eq!(m.etat().operateur, Operateur::Plus);
    assert!(m.etat().nouvel_operande);
}

#[test]
fn gauche_a_droite_sans_priorite() {
    // (2 + 3) * 4, pas 2 + 12
    assert_affiche("2 + 3 * 4 =", "20");
    assert_affiche("1 0 - 4 / 3 =", "2");
    // affichage intermédiaire = repli de l’opération précédente
    assert_affiche("2 + 3 *", "5");
}

#[test]
fn division_par_zero() {
    assert_affiche("5 / 0 =", "Error");
    assert_affiche("5 / 0 +", "Error");
}

#[test]
fn puissance() {
    assert_affiche("2 x^y 1 0 =", "1024");
    assert_affiche("3 x^y 4 =", "81");
    assert_affiche("1 0 x^y 4 0 0 =", "Error");
}

#[test]
fn puissance_abandonne_l_operation_en_attente() {
    // 2 + 3 x^y 2 = : la somme en attente est perdue -> 3² = 9
    assert_affiche("2 + 3 x^y 2 =", "9");
}

/* ------------------------ Fonctions unaires ------------------------ */

#[test]
fn racines() {
    assert_affiche("9 sqrt", "3");
    assert_affiche("16 sqrt", "4");
    assert_affiche("2 +/- sqrt", "Error");
}

#[test]
fn trig_en_degres() {
    assert_proche("3 0 sin", 0.5);
    assert_proche("6 0 cos", 0.5);
    assert_proche("4 5 tan", 1.0);
    assert_affiche("0 sin", "0");
}

#[test]
fn log_et_exp() {
    assert_proche("1 0 0 log", 2.0);
    assert_affiche("0 log", "Error");
    assert_affiche("0 e^x", "1");
    assert_affiche("1 0 0 0 e^x", "Error");
}

#[test]
fn fonction_garde_l_operation_en_attente() {
    // 7 + sqrt(9) = 10
    assert_affiche("7 + 9 sqrt =", "10");
}

#[test]
fn pi_independant_de_l_etat() {
    assert_affiche("π", "3.141592653589793");
    assert_affiche("1 2 3 + 4 pi", "3.141592653589793");
    let m = jouer("π");
    assert!(m.affichage().len() >= 16);
}

/* ------------------------ Pourcent / signe ------------------------ */

#[test]
fn pourcent_abandonne_l_operation_en_attente() {
    assert_affiche("5 + 5 0 %", "0.5");
    let m = jouer("5 + 5 0 %");
    assert_eq!(m.etat().operateur, Operateur::Plus);
    assert_eq!(m.etat().operande1, 0.0);
}

#[test]
fn changement_de_signe_aller_retour() {
    assert_affiche("5 +/-", "-5");
    assert_affiche("5 +/- +/-", "5");
    assert_affiche("2.5 +/- +/-", "2.5");
    assert_affiche("+/-", "0");
}

#[test]
fn changement_de_signe_garde_l_operation_en_attente() {
    // 7 + (-3) = 4
    assert_affiche("7 + 3 +/- =", "4");
    let m = jouer("7 + 3 +/-");
    assert_eq!(m.etat().operande1, 7.0);
    assert_eq!(m.etat().operateur, Operateur::Plus);
}

/* ------------------------ AC / erreur ------------------------ */

#[test]
fn ac_idempotent() {
    let une = jouer("7 + 3 AC");
    let deux = jouer("7 + 3 AC AC");
    assert_eq!(une.etat(), deux.etat());
    assert_eq!(deux.affichage(), "0");
    assert_eq!(deux.etat().operande1, 0.0);
    assert_eq!(deux.etat().operateur, Operateur::Plus);
    assert!(deux.etat().nouvel_operande);
}

#[test]
fn toute_touche_apres_erreur_efface() {
    assert_affiche("5 / 0 = 7", "0");
    assert_affiche("5 / 0 = π", "0");
    assert_affiche("5 / 0 = sqrt", "0");
    // puis la saisie reprend normalement
    assert_affiche("5 / 0 = 7 8", "8");
}

#[test]
fn reset_explicite() {
    let mut m = jouer("1 2 * 3");
    m.reset();
    assert_eq!(m.affichage(), "0");
    assert_eq!(m.appliquer(Touche::Chiffre(4)), "4");
}

#[test]
fn touches_hors_pave_ignorees() {
    let mut m = jouer("7 +");
    let avant = m.etat().clone();

    assert_eq!(m.appliquer(Touche::Chiffre(12)), "7");
    assert_eq!(m.appliquer(Touche::Operation(Operateur::Puissance)), "7");
    assert_eq!(m.etat(), &avant);

    m.appliquer(Touche::Chiffre(3));
    assert_eq!(m.appliquer(Touche::Egal), "10");
}

#[test]
fn jeton_texte() {
    let mut m = jouer("4 2");
    assert!("MC".parse::<Touche>().is_err());
    assert_eq!(m.affichage(), "42");
    let t: Touche = "+/-".parse().unwrap();
    assert_eq!(m.appliquer(t), "-42");
}
