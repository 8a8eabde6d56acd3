// lib.rs - Conway's Game of Life for VT100 terminals
//
// Layers, leaves first:
// - grid:     two fixed-size cell buffers with checked (row, col) access
// - rules:    birth/survival rule and hard-edged neighbour counting
// - stepper:  one synchronous generation advance plus the generation counter
// - patterns: initial population from a file, a random fill or a named shape
// - viewport: terminal size, updated on SIGWINCH
// - render:   draws the visible part of the grid
// - driver:   warm-up, then render/advance/sleep ticks
// - cli:      flags into a Config
// - logging:  optional file logging

pub mod cli;
pub mod driver;
pub mod grid;
pub mod logging;
pub mod patterns;
pub mod render;
pub mod rules;
pub mod stepper;
pub mod viewport;

pub use driver::{Driver, DriverState, RunSettings, RunSummary};
pub use grid::{Cell, Grid, GridError};
pub use patterns::{Pattern, PatternError, Seed};
pub use render::Renderer;
pub use stepper::Stepper;
pub use viewport::{Viewport, ViewportTracker};
