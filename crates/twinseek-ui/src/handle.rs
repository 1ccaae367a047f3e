use std::sync::Arc;

use parking_lot::Mutex;
use twinseek_core::Invalidator;

/// Values written from other threads, applied by the owning seek bar on its
/// next paint or input event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Pending {
    pub min_progress: Option<i32>,
    pub max_progress: Option<i32>,
}

/// `Send + Sync` remote control for a [`RangeSeekBar`](crate::RangeSeekBar).
///
/// The seek bar itself stays on the UI thread; this handle only queues
/// values and posts a redraw.
#[derive(Clone, Debug)]
pub struct SeekBarHandle {
    pub(crate) pending: Arc<Mutex<Pending>>,
    pub(crate) invalidator: Invalidator,
}

impl SeekBarHandle {
    pub fn set_min_progress(&self, value: i32) {
        self.pending.lock().min_progress = Some(value);
        self.invalidator.post_invalidate();
    }

    pub fn set_max_progress(&self, value: i32) {
        self.pending.lock().max_progress = Some(value);
        self.invalidator.post_invalidate();
    }
}
