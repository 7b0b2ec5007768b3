// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use crate::constants::PhysicalConstants;
use crate::element;
use crate::error::BohrError;
use crate::unit::EnergyUnit;
use log::debug;
use std::f64::consts::PI;
use std::fmt;

/// A hydrogen-like atom (one electron around a nucleus of charge `Z`) in
/// the Bohr model.
///
/// Energies default to electron-volts, lengths are in meters and
/// frequencies in hertz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BohrAtom {
    z: u32,
    a0: f64,
    constants: PhysicalConstants,
}

fn check_level(n: i64) -> Result<f64, BohrError> {
    if n < 1 {
        return Err(BohrError::invalid(format!("n must be >= 1, got {n}")));
    }
    Ok(n as f64)
}

/// `4π·ε0·ħ² / (mₑ·e²)`
fn bohr_radius(c: &PhysicalConstants) -> f64 {
    4.0 * PI * c.vacuum_permittivity * c.reduced_planck.powi(2)
        / (c.electron_mass * c.elementary_charge.powi(2))
}

impl BohrAtom {
    /// Creates an atom of atomic number `z` with CODATA 2018 constants.
    ///
    /// # Errors
    ///
    /// Returns [`BohrError::InvalidArgument`] if `z < 1`.
    pub fn new(z: i64) -> Result<Self, BohrError> {
        Self::with_constants(z, PhysicalConstants::default())
    }

    /// Creates an atom of atomic number `z` computing with `constants`.
    ///
    /// # Errors
    ///
    /// Returns [`BohrError::InvalidArgument`] if `z < 1` or if one of the
    /// constants is not a positive finite number.
    pub fn with_constants(z: i64, constants: PhysicalConstants) -> Result<Self, BohrError> {
        if z < 1 {
            return Err(BohrError::invalid(format!("Z must be >= 1, got {z}")));
        }
        let z = u32::try_from(z)
            .map_err(|_| BohrError::invalid(format!("Z = {z} is out of range")))?;
        constants.validate()?;

        let a0 = bohr_radius(&constants);
        debug!("built hydrogen-like atom with Z={z}, a0={a0:e} m");

        Ok(BohrAtom { z, a0, constants })
    }

    /// Hydrogen, `Z = 1`.
    pub fn hydrogen() -> Self {
        let constants = PhysicalConstants::default();
        BohrAtom {
            z: 1,
            a0: bohr_radius(&constants),
            constants,
        }
    }

    /// Hydrogen-like ion of the element named by `symbol`, e.g. `"He"` for He⁺.
    ///
    /// # Errors
    ///
    /// Returns [`BohrError::InvalidArgument`] if the symbol is unknown.
    pub fn from_symbol(symbol: &str) -> Result<Self, BohrError> {
        Self::new(i64::from(element::atomic_number(symbol)?))
    }

    /// Atomic number
    pub fn z(&self) -> u32 {
        self.z
    }

    /// Bohr radius `a0` in meters. It does not depend on `Z`.
    pub fn bohr_radius(&self) -> f64 {
        self.a0
    }

    pub fn constants(&self) -> &PhysicalConstants {
        &self.constants
    }

    /// Energy of level `n` in joules. Bound states are negative, zero being
    /// the ionization threshold.
    ///
    /// # Errors
    ///
    /// Returns [`BohrError::InvalidArgument`] if `n < 1`.
    pub fn energy_joule(&self, n: i64) -> Result<f64, BohrError> {
        let n = check_level(n)?;
        let c = &self.constants;
        let z = f64::from(self.z);
        Ok(-(c.electron_mass * c.elementary_charge.powi(4) * z * z)
            / (8.0 * c.vacuum_permittivity.powi(2) * c.planck.powi(2) * n * n))
    }

    /// Energy of level `n` in `unit`.
    ///
    /// # Errors
    ///
    /// Returns [`BohrError::InvalidArgument`] if `n < 1`.
    pub fn energy(&self, n: i64, unit: EnergyUnit) -> Result<f64, BohrError> {
        let joules = self.energy_joule(n)?;
        Ok(unit.convert(joules, &self.constants))
    }

    /// Energy needed to remove the electron from level `n`, always positive.
    ///
    /// # Errors
    ///
    /// Returns [`BohrError::InvalidArgument`] if `n < 1`.
    pub fn ionization_energy(&self, n: i64, unit: EnergyUnit) -> Result<f64, BohrError> {
        Ok(self.energy(n, unit)?.abs())
    }

    /// Orbit radius of level `n` in meters, `a0·n²/Z`.
    ///
    /// # Errors
    ///
    /// Returns [`BohrError::InvalidArgument`] if `n < 1`.
    pub fn radius(&self, n: i64) -> Result<f64, BohrError> {
        let n = check_level(n)?;
        Ok(self.a0 * n * n / f64::from(self.z))
    }

    /// Signed energy change `E(n_f) - E(n_i)` in joules. It is negative for
    /// an emission (the electron goes down) and positive for an absorption.
    ///
    /// # Errors
    ///
    /// Returns [`BohrError::InvalidArgument`] if either level is below 1.
    pub fn transition_energy_joule(&self, n_i: i64, n_f: i64) -> Result<f64, BohrError> {
        let e_i = self.energy_joule(n_i)?;
        let e_f = self.energy_joule(n_f)?;
        Ok(e_f - e_i)
    }

    /// Magnitude of the energy exchanged between `n_i` and `n_f` in `unit`,
    /// whatever the direction.
    ///
    /// # Errors
    ///
    /// Returns [`BohrError::InvalidArgument`] if either level is below 1.
    pub fn transition_energy(&self, n_i: i64, n_f: i64, unit: EnergyUnit) -> Result<f64, BohrError> {
        let delta = self.transition_energy_joule(n_i, n_f)?.abs();
        Ok(unit.convert(delta, &self.constants))
    }

    /// Frequency in hertz of the photon exchanged between `n_i` and `n_f`,
    /// `|ΔE| / h`.
    ///
    /// # Errors
    ///
    /// Returns [`BohrError::InvalidArgument`] if either level is below 1.
    pub fn frequency(&self, n_i: i64, n_f: i64) -> Result<f64, BohrError> {
        let delta = self.transition_energy_joule(n_i, n_f)?.abs();
        Ok(delta / self.constants.planck)
    }

    /// Wavelength in meters of the photon exchanged between `n_i` and `n_f`,
    /// `c / ν`.
    ///
    /// # Errors
    ///
    /// Returns [`BohrError::InvalidArgument`] if either level is below 1, and
    /// [`BohrError::DomainError`] if `n_i == n_f` since no photon is involved.
    pub fn wavelength(&self, n_i: i64, n_f: i64) -> Result<f64, BohrError> {
        let nu = self.frequency(n_i, n_f)?;
        if n_i == n_f || nu == 0.0 {
            return Err(BohrError::DomainError(format!(
                "wavelength is undefined for a transition from n={n_i} to itself"
            )));
        }
        Ok(self.constants.speed_of_light / nu)
    }
}

impl Default for BohrAtom {
    fn default() -> Self {
        Self::hydrogen()
    }
}

impl fmt::Display for BohrAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<BohrAtom Z={} a0={:.3e} m>", self.z, self.a0)
    }
}
