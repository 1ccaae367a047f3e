use std::sync::Arc;

use bitflags::bitflags;
use parking_lot::Mutex;

bitflags! {
    /// Why a redraw was requested.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Invalidation: u8 {
        /// Requested on the UI thread while handling input.
        const REDRAW = 0b01;
        /// Requested through `post_invalidate`, possibly from another thread.
        const POSTED = 0b10;
    }
}

/// Shared redraw request. Clones observe the same flags.
#[derive(Clone, Debug, Default)]
pub struct Invalidator {
    flags: Arc<Mutex<Invalidation>>,
}

impl Invalidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invalidate(&self) {
        self.flags.lock().insert(Invalidation::REDRAW);
    }

    pub fn post_invalidate(&self) {
        self.flags.lock().insert(Invalidation::POSTED);
    }

    pub fn is_dirty(&self) -> bool {
        !self.flags.lock().is_empty()
    }

    /// Returns the pending flags and clears them.
    pub fn take(&self) -> Invalidation {
        std::mem::take(&mut *self.flags.lock())
    }
}
