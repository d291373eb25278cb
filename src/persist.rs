// Plain-text pixel map: one line per row, cells as space-separated 0/1,
// newline after every row (the last included). No header: the reader has to
// know rows and cols already.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::Error;
use crate::grid::Grid;

pub const DEFAULT_FILE_NAME: &str = "pixel_map.txt";

/// A cell counts as set once it renders at mid-grey or darker.
#[inline]
fn bit(intensity: f32) -> u8 {
    u8::from(intensity >= 0.5)
}

pub fn write_pixel_map<W: Write>(grid: &Grid, mut out: W) -> io::Result<()> {
    for row in 0..grid.rows() {
        let line = grid
            .row(row)
            .iter()
            .map(|&v| bit(v).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{line}")?;
    }
    out.flush()
}

/// Write the map to `path`, replacing whatever was there.
pub fn save_pixel_map(grid: &Grid, path: &Path) -> Result<(), Error> {
    let save_err = |source| Error::Save { path: path.to_path_buf(), source };
    let file = File::create(path).map_err(save_err)?;
    write_pixel_map(grid, BufWriter::new(file)).map_err(save_err)
}

pub fn read_pixel_map<R: BufRead>(input: R, rows: usize, cols: usize) -> Result<Grid, Error> {
    let mut grid = Grid::new(rows, cols)?;
    let mut seen = 0;

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| Error::Parse { line: line_no, message: e.to_string() })?;
        if idx >= rows {
            if line.trim().is_empty() { continue; }
            return Err(Error::Parse { line: line_no, message: format!("expected only {rows} rows") });
        }

        let mut count = 0;
        for (col, token) in line.split_whitespace().enumerate() {
            if col >= cols {
                return Err(Error::Parse { line: line_no, message: format!("more than {cols} cells") });
            }
            let value = match token {
                "0" => 0.0,
                "1" => 1.0,
                other => {
                    return Err(Error::Parse { line: line_no, message: format!("bad cell {other:?}, expected 0 or 1") });
                }
            };
            grid.set(idx, col, value);
            count += 1;
        }
        if count != cols {
            return Err(Error::Parse { line: line_no, message: format!("{count} cells, expected {cols}") });
        }
        seen += 1;
    }

    if seen != rows {
        return Err(Error::Parse { line: seen + 1, message: format!("{seen} rows, expected {rows}") });
    }
    Ok(grid)
}

pub fn load_pixel_map(path: &Path, rows: usize, cols: usize) -> Result<Grid, Error> {
    let file = File::open(path).map_err(|source| Error::Load { path: path.to_path_buf(), source })?;
    read_pixel_map(BufReader::new(file), rows, cols)
}
