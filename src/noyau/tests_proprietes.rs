//! Propriétés (proptest) du moteur.

use proptest::prelude::*;

use super::format::{format_nombre, lire_nombre};
use super::{Moteur, Touche};

fn taper(m: &mut Moteur, chiffres: &[u8]) {
    for &d in chiffres {
        m.appliquer(Touche::Chiffre(d));
    }
}

proptest! {
    #[test]
    fn saisie_concatene_sans_zero_de_tete(chiffres in prop::collection::vec(0u8..10, 1..12)) {
        let mut m = Moteur::new();
        m.appliquer(Touche::ToutEffacer);
        taper(&mut m, &chiffres);

        let brut: String = chiffres.iter().map(|d| char::from(b'0' + d)).collect();
        let attendu = brut.trim_start_matches('0');
        let attendu = if attendu.is_empty() { "0" } else { attendu };
        prop_assert_eq!(m.affichage(), attendu);
    }

    #[test]
    fn signe_deux_fois_identite(entier in 0u64..1_000_000, decimales in 0u32..1000) {
        let mut m = Moteur::new();
        for c in format!("{entier}.{decimales}").chars() {
            let touche = match c {
                '.' => Touche::Point,
                c => Touche::Chiffre(c as u8 - b'0'),
            };
            m.appliquer(touche);
        }
        let depart = lire_nombre(m.affichage()).unwrap();

        m.appliquer(Touche::ChangerSigne);
        m.appliquer(Touche::ChangerSigne);
        prop_assert_eq!(lire_nombre(m.affichage()).unwrap(), depart);
    }

    #[test]
    fn format_relu_a_l_identique(x in prop::num::f64::NORMAL) {
        prop_assert_eq!(lire_nombre(&format_nombre(x)).unwrap(), x);
    }

    #[test]
    fn ac_repete_equivaut_a_un_seul(chiffres in prop::collection::vec(0u8..10, 0..6), n in 1usize..4) {
        let mut m = Moteur::new();
        taper(&mut m, &chiffres);
        for _ in 0..n {
            m.appliquer(Touche::ToutEffacer);
        }
        let neuf = Moteur::new();
        prop_assert_eq!(m.etat(), neuf.etat());
    }
}
