// End-to-end behaviour through the public API.

use std::io::Write;
use std::num::NonZeroU64;
use std::sync::Arc;
use std::time::Duration;

use cgol::patterns::{apply_pattern, load_pattern_file};
use cgol::{
    Cell, Driver, DriverState, Grid, Pattern, Renderer, RunSettings, RunSummary, Seed, Stepper,
    Viewport, ViewportTracker,
};

fn alive(grid: &Grid) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for (r, row) in grid.rows().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if cell.is_alive() {
                cells.push((r, c));
            }
        }
    }
    cells
}

fn grid_with(width: usize, height: usize, cells: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::new(width, height).unwrap();
    for &(r, c) in cells {
        grid.set(r, c, Cell::Alive);
    }
    grid
}

fn frames(out: &[u8]) -> usize {
    String::from_utf8_lossy(out).matches("Conway's Game of Life").count()
}

#[test]
fn blinker_has_period_two() {
    let horizontal = vec![(5, 4), (5, 5), (5, 6)];
    let vertical = vec![(4, 5), (5, 5), (6, 5)];
    let mut stepper = Stepper::new(grid_with(11, 11, &horizontal));

    stepper.advance();
    assert_eq!(alive(stepper.grid()), vertical);
    stepper.advance();
    assert_eq!(alive(stepper.grid()), horizontal);
    assert_eq!(stepper.generation(), 2);
}

#[test]
fn glider_travels_one_cell_diagonally_every_four_generations() {
    let mut grid = Grid::new(20, 20).unwrap();
    apply_pattern(&mut grid, Pattern::find("glider").unwrap(), 8, 8);
    let start = alive(&grid);

    let mut stepper = Stepper::new(grid);
    for _ in 0..4 {
        stepper.advance();
    }
    let moved: Vec<_> = start.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
    assert_eq!(alive(stepper.grid()), moved);
}

#[test]
fn blinker_against_the_wall_dies_out() {
    // Vertical phase would need row -1; with hard edges it collapses instead.
    let mut stepper = Stepper::new(grid_with(5, 5, &[(0, 1), (0, 2), (0, 3)]));
    stepper.advance();
    assert_eq!(alive(stepper.grid()), vec![(0, 2), (1, 2)]);
    stepper.advance();
    assert!(alive(stepper.grid()).is_empty());
}

#[test]
fn pattern_file_row_uses_every_other_column() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "1 0 1").unwrap();

    let mut grid = Grid::new(8, 8).unwrap();
    load_pattern_file(&mut grid, file.path()).unwrap();
    assert_eq!(alive(&grid), vec![(0, 0), (0, 2)]);
}

#[test]
fn pattern_file_seed_round_trips_through_populate() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "0 1 0\n0 1 0\n0 1 0\n").unwrap();

    let mut grid = Grid::new(256, 256).unwrap();
    Seed::File(file.path().to_path_buf())
        .populate(&mut grid, Viewport::new(24, 80))
        .unwrap();
    assert_eq!(alive(&grid), vec![(0, 1), (1, 1), (2, 1)]);
}

#[test]
fn missing_pattern_file_carries_os_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let mut grid = Grid::new(4, 4).unwrap();

    let err = anyhow::Error::from(load_pattern_file(&mut grid, &path).unwrap_err());
    let message = format!("{:#}", err);
    assert!(message.starts_with(&format!("{}: ", path.display())), "{}", message);
    assert!(message.contains("os error"), "{}", message);
}

#[test]
fn resize_leaves_simulation_untouched() {
    let stepper = Stepper::with_generation(grid_with(6, 6, &[(1, 1), (2, 2)]), 12);
    let tracker = ViewportTracker::new(24, 80);

    tracker.on_resize(10, 20);
    assert_eq!(tracker.get(), Viewport::new(10, 20));
    assert_eq!(stepper.generation(), 12);
    assert_eq!(alive(stepper.grid()), vec![(1, 1), (2, 2)]);
}

#[test]
fn renderer_follows_the_viewport_it_is_given() {
    let grid = grid_with(100, 100, &[(0, 0), (50, 50)]);
    let mut renderer = Renderer::new(Vec::new());
    renderer.draw(&grid, 0, Viewport::new(24, 80)).unwrap();
    renderer.draw(&grid, 0, Viewport::new(60, 80)).unwrap();

    let out = String::from_utf8(renderer.into_inner()).unwrap();
    // (50, 50) only fits in the taller frame.
    assert_eq!(out.matches("\x1b[7m").count(), 3);
}

#[tokio::test(start_paused = true)]
async fn resize_during_sleep_redraws_without_advancing() {
    let tracker = Arc::new(ViewportTracker::new(24, 80));
    let mut driver = Driver::new(
        Stepper::new(grid_with(10, 10, &[(4, 3), (4, 4), (4, 5)])),
        Renderer::new(Vec::new()),
        Arc::clone(&tracker),
        RunSettings {
            delay: Duration::from_secs(1),
            warmup: 0,
            ticks: NonZeroU64::new(2),
        },
    );

    tracker.on_resize(30, 100);
    let summary = driver.run().await.unwrap();

    assert_eq!(summary, RunSummary { generation: 2, ticks: 2, interrupted: false });
    let out = String::from_utf8_lossy(driver.renderer().get_ref()).into_owned();
    assert_eq!(frames(driver.renderer().get_ref()), 3);
    // The extra frame shows the new size and the generation it interrupted.
    assert!(out.contains("#1 ⋅ 30x100"));
}

#[tokio::test(start_paused = true)]
async fn shutdown_stops_an_unbounded_run() {
    let mut driver = Driver::new(
        Stepper::new(Grid::new(4, 4).unwrap()),
        Renderer::new(Vec::new()),
        Arc::new(ViewportTracker::new(24, 80)),
        RunSettings {
            delay: Duration::from_millis(250),
            warmup: 3,
            ticks: None,
        },
    );

    let summary = driver
        .run_until(tokio::time::sleep(Duration::from_millis(600)))
        .await
        .unwrap();

    // Frames at t = 0, 250 and 500 ms, interrupted during the third sleep.
    assert_eq!(summary, RunSummary { generation: 6, ticks: 3, interrupted: true });
    assert_eq!(driver.state(), DriverState::Terminated);
    let out = String::from_utf8_lossy(driver.renderer().get_ref()).into_owned();
    assert!(out.ends_with("\x1b[24;80H\x1b[?25h"));
}
