// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use crate::atom::BohrAtom;
use crate::error::BohrError;
use crate::unit::EnergyUnit;
use std::fmt;
use std::str::FromStr;

/// Named spectral series: every line of a series ends on the same lower level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpectralSeries {
    /// Lines ending on `n = 1`, ultraviolet for hydrogen
    Lyman,
    /// Lines ending on `n = 2`, visible for hydrogen
    Balmer,
    /// Lines ending on `n = 3`
    Paschen,
    /// Lines ending on `n = 4`
    Brackett,
    /// Lines ending on `n = 5`
    Pfund,
    /// Lines ending on `n = 6`
    Humphreys,
}

/// One emission line between two levels of an atom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralLine {
    pub upper: i64,
    pub lower: i64,
    /// Photon energy in eV
    pub energy_ev: f64,
    /// Photon frequency in Hz
    pub frequency: f64,
    /// Photon wavelength in m
    pub wavelength: f64,
}

impl SpectralLine {
    /// Computes the line emitted when the electron of `atom` goes from
    /// `upper` to `lower`.
    ///
    /// # Errors
    ///
    /// Returns [`BohrError::InvalidArgument`] if a level is below 1 and
    /// [`BohrError::DomainError`] if both levels are the same.
    pub fn new(atom: &BohrAtom, upper: i64, lower: i64) -> Result<Self, BohrError> {
        Ok(SpectralLine {
            upper,
            lower,
            energy_ev: atom.transition_energy(upper, lower, EnergyUnit::ElectronVolts)?,
            frequency: atom.frequency(upper, lower)?,
            wavelength: atom.wavelength(upper, lower)?,
        })
    }
}

impl SpectralSeries {
    pub const ALL: [SpectralSeries; 6] = [
        SpectralSeries::Lyman,
        SpectralSeries::Balmer,
        SpectralSeries::Paschen,
        SpectralSeries::Brackett,
        SpectralSeries::Pfund,
        SpectralSeries::Humphreys,
    ];

    /// Quantum number every line of the series ends on.
    pub fn lower_level(self) -> i64 {
        match self {
            SpectralSeries::Lyman => 1,
            SpectralSeries::Balmer => 2,
            SpectralSeries::Paschen => 3,
            SpectralSeries::Brackett => 4,
            SpectralSeries::Pfund => 5,
            SpectralSeries::Humphreys => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SpectralSeries::Lyman => "Lyman",
            SpectralSeries::Balmer => "Balmer",
            SpectralSeries::Paschen => "Paschen",
            SpectralSeries::Brackett => "Brackett",
            SpectralSeries::Pfund => "Pfund",
            SpectralSeries::Humphreys => "Humphreys",
        }
    }

    /// Series ending on level `n`.
    ///
    /// # Errors
    ///
    /// Returns [`BohrError::InvalidArgument`] if no named series ends on `n`.
    pub fn from_lower_level(n: i64) -> Result<Self, BohrError> {
        Self::ALL
            .into_iter()
            .find(|series| series.lower_level() == n)
            .ok_or_else(|| BohrError::invalid(format!("no named series ends on n = {n}")))
    }

    /// The first `count` lines of the series, from the longest wavelength
    /// (`lower + 1 -> lower`) downwards.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`SpectralLine::new`].
    pub fn lines(self, atom: &BohrAtom, count: usize) -> Result<Vec<SpectralLine>, BohrError> {
        let lower = self.lower_level();
        (1..=count as i64)
            .map(|offset| SpectralLine::new(atom, lower + offset, lower))
            .collect()
    }

    /// Wavelength in meters of the series limit, the line emitted by an
    /// electron captured from rest into the lower level: `h·c / |E(lower)|`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`BohrAtom::ionization_energy`].
    pub fn limit(self, atom: &BohrAtom) -> Result<f64, BohrError> {
        let c = atom.constants();
        let energy = atom.ionization_energy(self.lower_level(), EnergyUnit::Joules)?;
        Ok(c.planck * c.speed_of_light / energy)
    }
}

impl FromStr for SpectralSeries {
    type Err = BohrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|series| series.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BohrError::invalid(format!("unknown spectral series `{s}`")))
    }
}

impl fmt::Display for SpectralSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn lower_levels() {
        for (series, n) in SpectralSeries::ALL.into_iter().zip(1..) {
            assert_eq!(series.lower_level(), n);
            assert_eq!(SpectralSeries::from_lower_level(n).unwrap(), series);
        }
        assert!(SpectralSeries::from_lower_level(7).is_err());
        assert!(SpectralSeries::from_lower_level(0).is_err());
    }

    #[test]
    fn parse_names() {
        assert_eq!("balmer".parse::<SpectralSeries>().unwrap(), SpectralSeries::Balmer);
        assert_eq!("LYMAN".parse::<SpectralSeries>().unwrap(), SpectralSeries::Lyman);
        assert_eq!(SpectralSeries::Pfund.to_string(), "Pfund");
    }

    #[test]
    #[should_panic(expected = "unknown spectral series `Rydberg`")]
    fn parse_unknown_name() {
        "Rydberg".parse::<SpectralSeries>().unwrap();
    }

    #[test]
    fn balmer_lines() {
        let atom = BohrAtom::hydrogen();
        let lines = SpectralSeries::Balmer.lines(&atom, 4).unwrap();
        assert_eq!(lines.len(), 4);
        assert_eq!((lines[0].upper, lines[0].lower), (3, 2));
        assert_eq!((lines[3].upper, lines[3].lower), (6, 2));

        // H-alpha, Bohr model with an infinitely heavy nucleus
        assert_approx_eq!(lines[0].wavelength * 1e9, 656.1, 0.5);
        assert_approx_eq!(lines[0].energy_ev, 1.8897, 1e-3);
        for pair in lines.windows(2) {
            assert!(pair[1].wavelength < pair[0].wavelength);
            assert!(pair[1].frequency > pair[0].frequency);
        }
    }

    #[test]
    fn lines_converge_to_limit() {
        let atom = BohrAtom::hydrogen();
        for series in SpectralSeries::ALL {
            let limit = series.limit(&atom).unwrap();
            let lines = series.lines(&atom, 200).unwrap();
            assert!(lines.iter().all(|line| line.wavelength > limit));
            let last = lines.last().unwrap();
            assert!((last.wavelength - limit) / limit < 1e-3);
        }
    }

    #[test]
    fn lyman_limit() {
        let atom = BohrAtom::hydrogen();
        let limit = SpectralSeries::Lyman.limit(&atom).unwrap();
        assert_approx_eq!(limit * 1e9, 91.13, 0.05);
        let helium = BohrAtom::new(2).unwrap();
        assert_approx_eq!(SpectralSeries::Lyman.limit(&helium).unwrap() * 4.0 / limit, 1.0, 1e-12);
    }

    #[test]
    fn no_lines() {
        let atom = BohrAtom::hydrogen();
        assert!(SpectralSeries::Paschen.lines(&atom, 0).unwrap().is_empty());
    }

    #[test]
    fn line_of_same_level() {
        let atom = BohrAtom::hydrogen();
        assert!(matches!(
            SpectralLine::new(&atom, 2, 2),
            Err(BohrError::DomainError(_))
        ));
        assert!(matches!(
            SpectralLine::new(&atom, 2, 0),
            Err(BohrError::InvalidArgument(_))
        ));
    }
}
