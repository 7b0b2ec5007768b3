// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use crate::error::BohrError;
use std::f64::consts::PI;

/// Planck constant (J·s)
pub const PLANCK: f64 = 6.626_070_15e-34;

/// Elementary charge (C)
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// Electron rest mass (kg)
pub const ELECTRON_MASS: f64 = 9.109_383_701_5e-31;

/// Vacuum electric permittivity (F/m)
pub const VACUUM_PERMITTIVITY: f64 = 8.854_187_812_8e-12;

/// Speed of light in vacuum (m/s)
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// The set of physical constants a [`BohrAtom`](crate::atom::BohrAtom) computes with.
///
/// Every atom owns its own copy, so an atom built with overridden values
/// never changes the results of another one:
///
/// ```
/// use bohratom::atom::BohrAtom;
/// use bohratom::constants::PhysicalConstants;
///
/// let slow_light = PhysicalConstants {
///     speed_of_light: 1.0e8,
///     ..PhysicalConstants::default()
/// };
/// let atom = BohrAtom::with_constants(1, slow_light).unwrap();
/// assert_eq!(atom.constants().speed_of_light, 1.0e8);
/// assert_eq!(BohrAtom::hydrogen().constants().speed_of_light, 299_792_458.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalConstants {
    /// h, in J·s
    pub planck: f64,
    /// ħ = h / 2π, in J·s
    pub reduced_planck: f64,
    /// e, in C
    pub elementary_charge: f64,
    /// mₑ, in kg
    pub electron_mass: f64,
    /// ε0, in F/m
    pub vacuum_permittivity: f64,
    /// c, in m/s
    pub speed_of_light: f64,
}

impl PhysicalConstants {
    /// CODATA 2018 values (exact where the SI defines them).
    pub const CODATA_2018: PhysicalConstants = PhysicalConstants {
        planck: PLANCK,
        reduced_planck: PLANCK / (2.0 * PI),
        elementary_charge: ELEMENTARY_CHARGE,
        electron_mass: ELECTRON_MASS,
        vacuum_permittivity: VACUUM_PERMITTIVITY,
        speed_of_light: SPEED_OF_LIGHT,
    };

    /// Builds a constant set, deriving ħ from `planck`.
    ///
    /// # Errors
    ///
    /// Returns [`BohrError::InvalidArgument`] if any value is not a positive
    /// finite number.
    pub fn new(
        planck: f64,
        elementary_charge: f64,
        electron_mass: f64,
        vacuum_permittivity: f64,
        speed_of_light: f64,
    ) -> Result<Self, BohrError> {
        let constants = PhysicalConstants {
            planck,
            reduced_planck: planck / (2.0 * PI),
            elementary_charge,
            electron_mass,
            vacuum_permittivity,
            speed_of_light,
        };
        constants.validate()?;
        Ok(constants)
    }

    /// Checks that every constant is a positive finite number.
    ///
    /// # Errors
    ///
    /// Returns [`BohrError::InvalidArgument`] naming the first offending field.
    pub fn validate(&self) -> Result<(), BohrError> {
        let fields = [
            ("planck", self.planck),
            ("reduced_planck", self.reduced_planck),
            ("elementary_charge", self.elementary_charge),
            ("electron_mass", self.electron_mass),
            ("vacuum_permittivity", self.vacuum_permittivity),
            ("speed_of_light", self.speed_of_light),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(BohrError::invalid(format!(
                    "{name} must be a positive finite number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::CODATA_2018
    }
}
