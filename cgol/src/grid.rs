// grid.rs - Double-buffered cell storage for Conway's Game of Life

use std::fmt;

pub const DEFAULT_WIDTH: usize  = 256;     // Grid capacity, independent of the terminal
pub const DEFAULT_HEIGHT: usize = 256;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead  = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    EmptyDimensions { width: usize, height: usize },
    TooLarge { width: usize, height: usize },
    Allocation { cells: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::EmptyDimensions { width, height } => {
                write!(f, "grid dimensions must be non-zero, got {}x{}", width, height)
            }
            GridError::TooLarge { width, height } => {
                write!(f, "grid of {}x{} cells overflows the address space", width, height)
            }
            GridError::Allocation { cells } => {
                write!(f, "Cannot allocate memory for {} cells.", cells)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Two same-sized buffers: `current` is the visible generation, `scratch`
/// receives the next one until `commit` swaps them.
///
/// Dimensions are fixed at construction. All access goes through
/// [`Grid::offset`], so off-grid coordinates are rejected rather than wrapped.
#[derive(Debug, Clone)]
pub struct Grid {
    width   : usize,
    height  : usize,
    current : Vec<Cell>,
    scratch : Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        let cells = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;

        Ok(Self {
            width,
            height,
            current: alloc_cells(cells)?,
            scratch: alloc_cells(cells)?,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat row-major offset of `(row, col)`, or `None` when off-grid.
    pub fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// Checked read of the current generation.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.offset(row, col).map(|i| self.current[i])
    }

    /// Read by flat offset, as produced by [`Grid::offset`].
    pub fn at(&self, offset: usize) -> Cell {
        self.current.get(offset).copied().unwrap_or(Cell::Dead)
    }

    /// Read of the current generation. Off-grid coordinates read as dead.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cell(row, col).unwrap_or(Cell::Dead)
    }

    /// Writes the current generation directly; used while seeding.
    /// Off-grid writes are dropped.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(i) = self.offset(row, col) {
            self.current[i] = cell;
        }
    }

    pub fn set_scratch(&mut self, row: usize, col: usize, cell: Cell) {
        if let Some(i) = self.offset(row, col) {
            self.scratch[i] = cell;
        }
    }

    /// Publishes the scratch buffer as the current generation.
    pub fn commit(&mut self) {
        std::mem::swap(&mut self.current, &mut self.scratch);
    }

    pub fn clear(&mut self) {
        self.current.fill(Cell::Dead);
        self.scratch.fill(Cell::Dead);
    }

    pub fn population(&self) -> usize {
        self.current.iter().filter(|c| c.is_alive()).count()
    }

    /// Current generation, row by row.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.current.chunks_exact(self.width)
    }
}

fn alloc_cells(cells: usize) -> Result<Vec<Cell>, GridError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(cells)
        .map_err(|_| GridError::Allocation { cells })?;
    buf.resize(cells, Cell::Dead);
    Ok(buf)
}
