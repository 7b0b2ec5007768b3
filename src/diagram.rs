// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

//! Raw data behind energy-level and orbit diagrams. Rendering is left to
//! the caller.

use crate::atom::BohrAtom;
use crate::error::BohrError;
use crate::unit::EnergyUnit;
use nalgebra::Point2;
use std::f64::consts::TAU;

/// Energy and orbit radius of one level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyLevel {
    pub n: i64,
    pub energy_ev: f64,
    pub energy_joule: f64,
    /// Orbit radius in meters
    pub radius: f64,
}

impl EnergyLevel {
    /// # Errors
    ///
    /// Returns [`BohrError::InvalidArgument`] if `n < 1`.
    pub fn new(atom: &BohrAtom, n: i64) -> Result<Self, BohrError> {
        Ok(EnergyLevel {
            n,
            energy_ev: atom.energy(n, EnergyUnit::ElectronVolts)?,
            energy_joule: atom.energy_joule(n)?,
            radius: atom.radius(n)?,
        })
    }
}

/// Levels of `atom` for every quantum number in `ns`, in order.
///
/// # Errors
///
/// Stops at the first quantum number below 1 with
/// [`BohrError::InvalidArgument`].
pub fn energy_levels<I>(atom: &BohrAtom, ns: I) -> Result<Vec<EnergyLevel>, BohrError>
where
    I: IntoIterator<Item = i64>,
{
    ns.into_iter().map(|n| EnergyLevel::new(atom, n)).collect()
}

/// Wavelength in meters of each `(n_i, n_f)` transition, in order.
///
/// # Errors
///
/// Stops at the first invalid pair, see [`BohrAtom::wavelength`].
pub fn transitions<I>(atom: &BohrAtom, pairs: I) -> Result<Vec<((i64, i64), f64)>, BohrError>
where
    I: IntoIterator<Item = (i64, i64)>,
{
    pairs
        .into_iter()
        .map(|(n_i, n_f)| atom.wavelength(n_i, n_f).map(|lambda| ((n_i, n_f), lambda)))
        .collect()
}

/// `samples` points evenly spaced on the circular orbit of level `n`,
/// centered on the nucleus and starting on the positive x axis.
///
/// # Errors
///
/// Returns [`BohrError::InvalidArgument`] if `n < 1` or `samples == 0`.
pub fn orbit_path(atom: &BohrAtom, n: i64, samples: usize) -> Result<Vec<Point2<f64>>, BohrError> {
    if samples == 0 {
        return Err(BohrError::invalid("an orbit needs at least one sample"));
    }
    let radius = atom.radius(n)?;
    Ok((0..samples)
        .map(|i| {
            let theta = TAU * i as f64 / samples as f64;
            Point2::new(radius * theta.cos(), radius * theta.sin())
        })
        .collect())
}
