// rules.rs - Birth/survival rule and bounded neighbour counting

use crate::grid::{Cell, Grid};

/// Relative positions of the eight neighbours, clockwise from top-left.
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0,  1),
    ( 1,  1), ( 1, 0), ( 1, -1),
    ( 0, -1),
];

/// Next state of a cell given its live neighbour count.
pub fn next_state(current: Cell, live_neighbours: u8) -> Cell {
    match (current, live_neighbours) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,   // Survival
        (Cell::Dead, 3)                     => Cell::Alive,   // Birth
        (Cell::Alive, _)                    => Cell::Dead,    // Under/overpopulation
        (Cell::Dead, _)                     => Cell::Dead,
    }
}

/// Counts alive cells around `(row, col)` in the current generation.
///
/// Positions outside the grid count as dead: the edges are hard walls, so a
/// corner looks at three cells and an edge cell at five.
pub fn live_neighbours(grid: &Grid, row: usize, col: usize) -> u8 {
    neighbour_offsets(grid, row, col)
        .filter(|&i| grid.at(i).is_alive())
        .count() as u8
}

/// Flat offsets of the in-bounds neighbours of `(row, col)`.
pub fn neighbour_offsets(grid: &Grid, row: usize, col: usize) -> impl Iterator<Item = usize> + '_ {
    NEIGHBOURS.iter().filter_map(move |&(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        grid.offset(r, c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alive_survives_only_with_two_or_three() {
        for n in 0..=8 {
            let expected = if n == 2 || n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(next_state(Cell::Alive, n), expected, "alive with {} neighbours", n);
        }
    }

    #[test]
    fn dead_is_born_only_with_three() {
        for n in 0..=8 {
            let expected = if n == 3 { Cell::Alive } else { Cell::Dead };
            assert_eq!(next_state(Cell::Dead, n), expected, "dead with {} neighbours", n);
        }
    }

    #[test]
    fn corners_see_three_positions() {
        let grid = Grid::new(5, 4).unwrap();
        let total = grid.width() * grid.height();
        for (row, col) in [(0, 0), (0, 4), (3, 0), (3, 4)] {
            let offsets: Vec<usize> = neighbour_offsets(&grid, row, col).collect();
            assert_eq!(offsets.len(), 3, "corner ({}, {})", row, col);
            assert!(offsets.iter().all(|&i| i < total));
        }
    }

    #[test]
    fn edges_see_five_and_interior_eight() {
        let grid = Grid::new(5, 4).unwrap();
        assert_eq!(neighbour_offsets(&grid, 0, 2).count(), 5);
        assert_eq!(neighbour_offsets(&grid, 2, 4).count(), 5);
        assert_eq!(neighbour_offsets(&grid, 2, 2).count(), 8);
    }

    #[test]
    fn single_cell_grid_has_no_neighbours() {
        let grid = Grid::new(1, 1).unwrap();
        assert_eq!(neighbour_offsets(&grid, 0, 0).count(), 0);
    }

    #[test]
    fn counting_does_not_wrap_around() {
        let mut grid = Grid::new(4, 4).unwrap();
        // Opposite edge cells would be neighbours on a torus.
        grid.set(0, 3, Cell::Alive);
        grid.set(3, 0, Cell::Alive);
        grid.set(3, 3, Cell::Alive);
        assert_eq!(live_neighbours(&grid, 0, 0), 0);

        grid.set(1, 1, Cell::Alive);
        grid.set(0, 1, Cell::Alive);
        assert_eq!(live_neighbours(&grid, 0, 0), 2);
    }

    #[test]
    fn full_neighbourhood_counts_eight() {
        let mut grid = Grid::new(3, 3).unwrap();
        for r in 0..3 {
            for c in 0..3 {
                grid.set(r, c, Cell::Alive);
            }
        }
        assert_eq!(live_neighbours(&grid, 1, 1), 8);
        assert_eq!(live_neighbours(&grid, 0, 0), 3);
    }
}
