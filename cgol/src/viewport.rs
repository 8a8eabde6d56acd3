// viewport.rs - Terminal dimensions, updated from resize notifications

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use tokio::sync::Notify;
use tokio::task::JoinHandle;

/// Size used when the terminal cannot be queried.
pub const FALLBACK_VIEWPORT: Viewport = Viewport { rows: 24, cols: 80 };

/// Visible character dimensions of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rows: u16,
    pub cols: u16,
}

impl Viewport {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }

    fn pack(self) -> u32 {
        (u32::from(self.rows) << 16) | u32::from(self.cols)
    }

    fn unpack(bits: u32) -> Self {
        Self {
            rows: (bits >> 16) as u16,
            cols: (bits & 0xffff) as u16,
        }
    }
}

/// Shared holder of the current viewport.
///
/// Both dimensions live in one atomic word so a reader never sees rows from
/// one resize and cols from another. Every update also leaves a redraw
/// request that [`ViewportTracker::changed`] hands to the render loop.
#[derive(Debug)]
pub struct ViewportTracker {
    size   : AtomicU32,
    resize : Notify,
}

impl ViewportTracker {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            size: AtomicU32::new(Viewport::new(rows, cols).pack()),
            resize: Notify::new(),
        }
    }

    /// Queries the controlling terminal, falling back to 24x80.
    pub fn from_terminal() -> Self {
        let viewport = match crossterm::terminal::size() {
            Ok((cols, rows)) => Viewport::new(rows, cols),
            Err(e) => {
                tracing::warn!("Could not query terminal size, assuming 24x80: {}", e);
                FALLBACK_VIEWPORT
            }
        };
        Self::new(viewport.rows, viewport.cols)
    }

    pub fn get(&self) -> Viewport {
        Viewport::unpack(self.size.load(Ordering::Acquire))
    }

    /// Records new dimensions and requests an out-of-band redraw.
    pub fn on_resize(&self, rows: u16, cols: u16) {
        self.size.store(Viewport::new(rows, cols).pack(), Ordering::Release);
        self.resize.notify_one();
        tracing::debug!(rows, cols, "viewport resized");
    }

    /// Resolves once a resize has been recorded since the last call.
    pub async fn changed(&self) {
        self.resize.notified().await;
    }
}

/// Listens for `SIGWINCH` and feeds the new terminal size to `tracker`.
#[cfg(unix)]
pub fn spawn_resize_listener(tracker: Arc<ViewportTracker>) -> io::Result<Option<JoinHandle<()>>> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut winch = signal(SignalKind::window_change())?;
    let handle = tokio::spawn(async move {
        while winch.recv().await.is_some() {
            match crossterm::terminal::size() {
                Ok((cols, rows)) => tracker.on_resize(rows, cols),
                Err(e) => tracing::warn!("Could not query terminal size after resize: {}", e),
            }
        }
    });
    Ok(Some(handle))
}

/// No resize notification exists here; the viewport keeps its startup size.
#[cfg(not(unix))]
pub fn spawn_resize_listener(_tracker: Arc<ViewportTracker>) -> io::Result<Option<JoinHandle<()>>> {
    Ok(None)
}
