// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use crate::diagram::EnergyLevel;
use crate::error::BohrError;
use crate::series::SpectralLine;
use log::trace;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `levels` as a tab-separated table with a header row.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_levels<W: Write>(writer: &mut W, levels: &[EnergyLevel]) -> Result<(), BohrError> {
    writeln!(writer, "n\tenergy_eV\tenergy_J\tradius_m")?;
    for level in levels {
        writeln!(
            writer,
            "{}\t{:.6}\t{:.6e}\t{:.6e}",
            level.n, level.energy_ev, level.energy_joule, level.radius
        )?;
    }
    trace!("wrote {} energy levels", levels.len());
    Ok(())
}

/// Writes `lines` as a tab-separated table with a header row.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_lines<W: Write>(writer: &mut W, lines: &[SpectralLine]) -> Result<(), BohrError> {
    writeln!(writer, "upper\tlower\tenergy_eV\tfrequency_Hz\twavelength_m")?;
    for line in lines {
        writeln!(
            writer,
            "{}\t{}\t{:.6}\t{:.6e}\t{:.6e}",
            line.upper, line.lower, line.energy_ev, line.frequency, line.wavelength
        )?;
    }
    trace!("wrote {} spectral lines", lines.len());
    Ok(())
}

/// Creates (or truncates) the file at `path` and writes `levels` to it.
///
/// # Errors
///
/// Returns an error if the file can not be created or written.
pub fn save_levels(path: &Path, levels: &[EnergyLevel]) -> Result<(), BohrError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_levels(&mut writer, levels)?;
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) the file at `path` and writes `lines` to it.
///
/// # Errors
///
/// Returns an error if the file can not be created or written.
pub fn save_lines(path: &Path, lines: &[SpectralLine]) -> Result<(), BohrError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_lines(&mut writer, lines)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::BohrAtom;
    use crate::diagram::energy_levels;
    use crate::series::SpectralSeries;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn levels_table() {
        let atom = BohrAtom::hydrogen();
        let levels = energy_levels(&atom, 1..=3).unwrap();
        let mut buffer = Vec::new();
        write_levels(&mut buffer, &levels).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], "n\tenergy_eV\tenergy_J\tradius_m");
        assert!(rows[1].starts_with("1\t-13.60"), "{}", rows[1]);
        assert!(rows[1].ends_with("e-11"), "{}", rows[1]);
        assert_eq!(rows[3].split('\t').count(), 4);
    }

    #[test]
    fn lines_table() {
        let atom = BohrAtom::hydrogen();
        let lines = SpectralSeries::Lyman.lines(&atom, 2).unwrap();
        let mut buffer = Vec::new();
        write_lines(&mut buffer, &lines).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].starts_with("2\t1\t10.20"), "{}", rows[1]);
        assert!(rows[2].starts_with("3\t1\t"), "{}", rows[2]);
    }

    #[test]
    fn save_to_file() {
        let dir = tempdir().unwrap();
        let atom = BohrAtom::new(2).unwrap();

        let path = dir.path().join("levels.tsv");
        save_levels(&path, &energy_levels(&atom, 1..=10).unwrap()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 11);

        let path = dir.path().join("balmer.tsv");
        save_lines(&path, &SpectralSeries::Balmer.lines(&atom, 5).unwrap()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 6);
    }

    #[test]
    fn save_into_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("levels.tsv");
        let result = save_levels(&path, &[]);
        assert!(matches!(result, Err(BohrError::IoError(_))));
    }
}
