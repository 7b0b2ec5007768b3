// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use crate::constants::PhysicalConstants;
use crate::error::BohrError;
use std::fmt;
use std::str::FromStr;

/// Unit in which energies are reported.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnergyUnit {
    /// SI joules
    Joules,
    /// Electron-volts
    #[default]
    ElectronVolts,
}

impl EnergyUnit {
    /// Converts `joules` into this unit using the elementary charge of `constants`.
    pub fn convert(self, joules: f64, constants: &PhysicalConstants) -> f64 {
        match self {
            EnergyUnit::Joules => joules,
            EnergyUnit::ElectronVolts => joules / constants.elementary_charge,
        }
    }
}

impl FromStr for EnergyUnit {
    type Err = BohrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "j" => Ok(EnergyUnit::Joules),
            "ev" => Ok(EnergyUnit::ElectronVolts),
            _ => Err(BohrError::invalid(format!(
                "unknown energy unit `{s}`, use 'eV' or 'J'"
            ))),
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnergyUnit::Joules => write!(f, "J"),
            EnergyUnit::ElectronVolts => write!(f, "eV"),
        }
    }
}
