use std::io::{self, BufWriter, Write};

use bohratom::atom::BohrAtom;
use bohratom::diagram::energy_levels;
use bohratom::element::ion_label;
use bohratom::series::SpectralSeries;
use bohratom::table::{write_levels, write_lines};

fn main() {
    // usage: bohratom [Z | symbol] [levels]
    let mut args = std::env::args().skip(1);
    let atom = match args.next() {
        Some(arg) => match arg.parse::<i64>() {
            Ok(z) => BohrAtom::new(z),
            Err(_) => BohrAtom::from_symbol(&arg),
        },
        None => Ok(BohrAtom::hydrogen()),
    }
    .unwrap();
    let n_max: i64 = args.next().map_or(6, |arg| arg.parse().unwrap());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(out, "# {} {atom}", ion_label(atom.z())).unwrap();
    write_levels(&mut out, &energy_levels(&atom, 1..=n_max).unwrap()).unwrap();
    for series in [SpectralSeries::Lyman, SpectralSeries::Balmer] {
        writeln!(out, "# {series} series").unwrap();
        write_lines(&mut out, &series.lines(&atom, 4).unwrap()).unwrap();
    }
    out.flush().unwrap();
}
