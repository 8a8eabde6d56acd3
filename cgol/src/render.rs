// render.rs - Draws the visible part of the grid with VT100 sequences

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};

use crate::grid::Grid;
use crate::viewport::Viewport;

pub const TITLE: &str = "Conway's Game of Life";

/// Owns the output stream. Every frame goes through `&mut self`, so two
/// draws can never interleave their escape sequences.
#[derive(Debug)]
pub struct Renderer<W: Write> {
    out: W,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Draws one frame: a header line, then every cell that fits on screen.
    ///
    /// Row 1 of the terminal holds the header, so at most `rows - 1` grid rows
    /// are shown. Each cell is positioned absolutely, nothing relies on the
    /// terminal wrapping or scrolling.
    pub fn draw(&mut self, grid: &Grid, generation: u64, viewport: Viewport) -> io::Result<()> {
        let visible_rows = usize::from(viewport.rows.saturating_sub(1)).min(grid.height());
        let visible_cols = usize::from(viewport.cols).min(grid.width());

        queue!(
            self.out,
            Hide,
            MoveTo(0, 0),
            Print(format!("{} ⋅ #{} ⋅ {}x{}", TITLE, generation, viewport.rows, viewport.cols)),
            Clear(ClearType::UntilNewLine),
        )?;

        for (r, row) in grid.rows().take(visible_rows).enumerate() {
            for (c, cell) in row[..visible_cols].iter().enumerate() {
                // Both fit in u16: bounded by the viewport above.
                queue!(self.out, MoveTo(c as u16, r as u16 + 1))?;
                if cell.is_alive() {
                    queue!(
                        self.out,
                        SetAttribute(Attribute::Reverse),
                        Print(' '),
                        SetAttribute(Attribute::Reset),
                    )?;
                } else {
                    queue!(self.out, Print(' '))?;
                }
            }
        }

        self.park_cursor(viewport)
    }

    /// Moves the cursor to the bottom-right corner and makes it visible.
    pub fn park_cursor(&mut self, viewport: Viewport) -> io::Result<()> {
        queue!(
            self.out,
            MoveTo(viewport.cols.saturating_sub(1), viewport.rows.saturating_sub(1)),
            Show,
        )?;
        self.out.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
