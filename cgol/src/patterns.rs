// patterns.rs - Initial population: pattern files, random fill and built-in patterns

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::{Cell, Grid};
use crate::viewport::Viewport;

/// A named shape, cells given as `(row, col)` relative to its top-left corner.
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "gosper-glider-gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

impl Pattern {
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Bounding box as `(rows, cols)`.
    pub fn size(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }
}

/// Places `pattern` centred in the top-left `rows × cols` region of the grid.
/// Cells that would fall off the grid are dropped.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern, rows: usize, cols: usize) {
    let rows = rows.min(grid.height());
    let cols = cols.min(grid.width());
    let (h, w) = pattern.size();
    let top = rows.saturating_sub(h) / 2;
    let left = cols.saturating_sub(w) / 2;

    for &(r, c) in pattern.cells {
        grid.set(top + r, left + c, Cell::Alive);
    }
}

/// Fills the top-left `rows × cols` region with roughly one live cell in four.
/// Everything outside that region is left untouched.
pub fn apply_random_pattern(grid: &mut Grid, rows: usize, cols: usize, rng: &mut impl Rng) {
    for row in 0..rows.min(grid.height()) {
        for col in 0..cols.min(grid.width()) {
            grid.set(row, col, Cell::from(rng.gen_ratio(1, 4)));
        }
    }
}

/// Where the first generation comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    Random { seed: Option<u64> },
    File(PathBuf),
    Pattern(&'static Pattern),
}

impl Seed {
    /// Fills the current generation of `grid`.
    ///
    /// Random cells only cover the visible `rows × cols`; the rest of the
    /// grid stays dead and is headroom for a later resize.
    pub fn populate(&self, grid: &mut Grid, viewport: Viewport) -> Result<(), PatternError> {
        let rows = usize::from(viewport.rows);
        let cols = usize::from(viewport.cols);
        match self {
            Seed::Random { seed } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_entropy(),
                };
                apply_random_pattern(grid, rows, cols, &mut rng);
            }
            Seed::File(path) => load_pattern_file(grid, path)?,
            // The top terminal row is the header.
            Seed::Pattern(pattern) => apply_pattern(grid, pattern, rows.saturating_sub(1), cols),
        }
        tracing::debug!(seed = ?self, population = grid.population(), "grid populated");
        Ok(())
    }
}

#[derive(Debug)]
pub struct PatternError {
    path: PathBuf,
    source: io::Error,
}

impl PatternError {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Reads a pattern file into the grid. See [`parse_pattern`] for the format.
pub fn load_pattern_file(grid: &mut Grid, path: &Path) -> Result<(), PatternError> {
    let bytes = std::fs::read(path).map_err(|source| PatternError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_pattern(grid, &bytes);
    Ok(())
}

/// One line per row; byte `2 * col` is `'1'` for a live cell, anything else
/// is dead. Rows and columns past the grid are ignored.
pub fn parse_pattern(grid: &mut Grid, text: &[u8]) {
    for (row, line) in text.split(|&b| b == b'\n').enumerate() {
        if row >= grid.height() {
            break;
        }
        for (col, &b) in line.iter().step_by(2).enumerate() {
            grid.set(row, col, Cell::from(b == b'1'));
        }
    }
}
