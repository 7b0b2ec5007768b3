// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

//! Element symbols and atomic numbers, used to name hydrogen-like ions.

use crate::error::BohrError;
use log::warn;
use phf::phf_map;

static ATOMIC_NUMBERS: phf::Map<&'static str, u32> = phf_map! {
    "H" => 1, "He" => 2, "Li" => 3, "Be" => 4, "B" => 5, "C" => 6,
    "N" => 7, "O" => 8, "F" => 9, "Ne" => 10, "Na" => 11, "Mg" => 12,
    "Al" => 13, "Si" => 14, "P" => 15, "S" => 16, "Cl" => 17, "Ar" => 18,
    "K" => 19, "Ca" => 20, "Sc" => 21, "Ti" => 22, "V" => 23, "Cr" => 24,
    "Mn" => 25, "Fe" => 26, "Co" => 27, "Ni" => 28, "Cu" => 29, "Zn" => 30,
    "Ga" => 31, "Ge" => 32, "As" => 33, "Se" => 34, "Br" => 35, "Kr" => 36,
    "Rb" => 37, "Sr" => 38, "Y" => 39, "Zr" => 40, "Nb" => 41, "Mo" => 42,
    "Tc" => 43, "Ru" => 44, "Rh" => 45, "Pd" => 46, "Ag" => 47, "Cd" => 48,
    "In" => 49, "Sn" => 50, "Sb" => 51, "Te" => 52, "I" => 53, "Xe" => 54,
    "Cs" => 55, "Ba" => 56, "La" => 57, "Ce" => 58, "Pr" => 59, "Nd" => 60,
    "Pm" => 61, "Sm" => 62, "Eu" => 63, "Gd" => 64, "Tb" => 65, "Dy" => 66,
    "Ho" => 67, "Er" => 68, "Tm" => 69, "Yb" => 70, "Lu" => 71, "Hf" => 72,
    "Ta" => 73, "W" => 74, "Re" => 75, "Os" => 76, "Ir" => 77, "Pt" => 78,
    "Au" => 79, "Hg" => 80, "Tl" => 81, "Pb" => 82, "Bi" => 83, "Po" => 84,
    "At" => 85, "Rn" => 86, "Fr" => 87, "Ra" => 88, "Ac" => 89, "Th" => 90,
    "Pa" => 91, "U" => 92, "Np" => 93, "Pu" => 94, "Am" => 95, "Cm" => 96,
    "Bk" => 97, "Cf" => 98, "Es" => 99, "Fm" => 100, "Md" => 101, "No" => 102,
    "Lr" => 103, "Rf" => 104, "Db" => 105, "Sg" => 106, "Bh" => 107, "Hs" => 108,
    "Mt" => 109, "Ds" => 110, "Rg" => 111, "Cn" => 112, "Nh" => 113, "Fl" => 114,
    "Mc" => 115, "Lv" => 116, "Ts" => 117, "Og" => 118,
};

static SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne",
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca",
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn",
    "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr",
    "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn",
    "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd",
    "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb",
    "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg",
    "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th",
    "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm",
    "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds",
    "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Atomic number of the element `symbol`.
///
/// Symbols are matched exactly first; `"he"` or `"HE"` are accepted after
/// normalisation to `"He"`.
///
/// # Errors
///
/// Returns [`BohrError::InvalidArgument`] if the symbol is unknown.
pub fn atomic_number(symbol: &str) -> Result<u32, BohrError> {
    let symbol = symbol.trim();
    if let Some(&z) = ATOMIC_NUMBERS.get(symbol) {
        return Ok(z);
    }

    let mut chars = symbol.chars();
    let normalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    };
    match ATOMIC_NUMBERS.get(normalized.as_str()) {
        Some(&z) => {
            warn!("element symbol '{symbol}' interpreted as '{normalized}'");
            Ok(z)
        }
        None => Err(BohrError::invalid(format!("unknown element symbol `{symbol}`"))),
    }
}

/// Symbol of the element with atomic number `z`.
///
/// # Errors
///
/// Returns [`BohrError::InvalidArgument`] if `z` is outside `1..=118`.
pub fn symbol(z: u32) -> Result<&'static str, BohrError> {
    z.checked_sub(1)
        .and_then(|index| SYMBOLS.get(index as usize))
        .copied()
        .ok_or_else(|| BohrError::invalid(format!("no element with Z = {z}")))
}

/// Label of the hydrogen-like ion with nuclear charge `z`: `H`, `He+`,
/// `Li2+`, ... Charges without a known element are written `Z=<z>`.
pub fn ion_label(z: u32) -> String {
    match symbol(z) {
        Ok(symbol) => match z {
            1 => symbol.to_string(),
            2 => format!("{symbol}+"),
            _ => format!("{symbol}{}+", z - 1),
        },
        Err(_) => format!("Z={z}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        assert_eq!(atomic_number("H").unwrap(), 1);
        assert_eq!(atomic_number("He").unwrap(), 2);
        assert_eq!(atomic_number("Fe").unwrap(), 26);
        assert_eq!(atomic_number("U").unwrap(), 92);
        assert_eq!(atomic_number("Og").unwrap(), 118);
    }

    #[test]
    fn lookup_normalizes_case() {
        assert_eq!(atomic_number("he").unwrap(), 2);
        assert_eq!(atomic_number("NA").unwrap(), 11);
        assert_eq!(atomic_number(" c ").unwrap(), 6);
    }

    #[test]
    #[should_panic(expected = "unknown element symbol `Xx`")]
    fn unknown_symbol() {
        atomic_number("Xx").unwrap();
    }

    #[test]
    fn empty_symbol() {
        assert!(matches!(
            atomic_number(""),
            Err(BohrError::InvalidArgument(_))
        ));
    }

    #[test]
    fn symbols_and_numbers_agree() {
        for z in 1..=118 {
            assert_eq!(atomic_number(symbol(z).unwrap()).unwrap(), z);
        }
        assert!(symbol(0).is_err());
        assert!(symbol(119).is_err());
    }

    #[test]
    fn ion_labels() {
        assert_eq!(ion_label(1), "H");
        assert_eq!(ion_label(2), "He+");
        assert_eq!(ion_label(3), "Li2+");
        assert_eq!(ion_label(26), "Fe25+");
        assert_eq!(ion_label(200), "Z=200");
    }
}
