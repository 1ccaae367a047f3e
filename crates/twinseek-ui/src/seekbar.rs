use std::rc::Rc;
use std::sync::Arc;

use parking_lot::Mutex;
use twinseek_core::{
    EventResult, Invalidator, PointerEvent, PointerEventKind, Rect, Scene, Size, Vec2,
};

use crate::handle::{Pending, SeekBarHandle};
use crate::{AssetSource, SeekBarAssets, SeekBarError, SeekBarStyle, style};

pub type Callback = Rc<dyn Fn()>;
pub type ProgressCallback = Rc<dyn Fn(i32, i32)>;

/// Two-thumb range seek bar drawn entirely from four bitmaps.
///
/// Progress is kept as two fractions of the highlight bitmap's width. The
/// logical range only matters when converting to and from integer values,
/// and only `max` takes part in that conversion.
///
/// Thumbs are not kept in order: `left_progress` may exceed
/// `right_progress`, in which case the highlight clip is inverted and
/// nothing of it is drawn.
pub struct RangeSeekBar {
    assets: SeekBarAssets,
    size: Size,

    left_progress: f32,
    right_progress: f32,
    min: f32,
    max: f32,

    on_progress_change: Option<ProgressCallback>,
    on_track_start: Option<Callback>,
    on_track_stop: Option<Callback>,

    invalidator: Invalidator,
    pending: Arc<Mutex<Pending>>,
}

impl RangeSeekBar {
    pub fn new(assets: SeekBarAssets) -> Self {
        let mut bar = Self {
            assets,
            size: Size::default(),
            left_progress: 0.0,
            right_progress: 1.0,
            min: style::DEFAULT_MIN,
            max: style::DEFAULT_MAX,
            on_progress_change: None,
            on_track_start: None,
            on_track_stop: None,
            invalidator: Invalidator::new(),
            pending: Arc::new(Mutex::new(Pending::default())),
        };
        bar.size = bar.measure();
        bar
    }

    /// Resolves and decodes the style's four images, then applies its range.
    pub fn from_source(
        source: &dyn AssetSource,
        style: &SeekBarStyle,
    ) -> Result<Self, SeekBarError> {
        let assets = SeekBarAssets::load(source, &style.assets)?;
        Ok(Self::new(assets).with_range(style.min, style.max))
    }

    pub fn with_range(mut self, min: f32, max: f32) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Report redraw requests to a host-owned invalidator instead of a private one.
    pub fn with_invalidator(mut self, invalidator: Invalidator) -> Self {
        self.invalidator = invalidator;
        self
    }

    pub fn on_progress_change(mut self, f: impl Fn(i32, i32) + 'static) -> Self {
        self.on_progress_change = Some(Rc::new(f));
        self
    }

    pub fn on_track_start(mut self, f: impl Fn() + 'static) -> Self {
        self.on_track_start = Some(Rc::new(f));
        self
    }

    pub fn on_track_stop(mut self, f: impl Fn() + 'static) -> Self {
        self.on_track_stop = Some(Rc::new(f));
        self
    }

    pub fn set_on_progress_change(&mut self, f: Option<ProgressCallback>) {
        self.on_progress_change = f;
    }

    pub fn set_on_track_start(&mut self, f: Option<Callback>) {
        self.on_track_start = f;
    }

    pub fn set_on_track_stop(&mut self, f: Option<Callback>) {
        self.on_track_stop = f;
    }

    pub fn clear_on_progress_change(&mut self) {
        self.on_progress_change = None;
    }

    pub fn clear_on_track_start(&mut self) {
        self.on_track_start = None;
    }

    pub fn clear_on_track_stop(&mut self) {
        self.on_track_stop = None;
    }

    pub fn invalidator(&self) -> &Invalidator {
        &self.invalidator
    }

    pub fn handle(&self) -> SeekBarHandle {
        SeekBarHandle {
            pending: self.pending.clone(),
            invalidator: self.invalidator.clone(),
        }
    }

    pub fn assets(&self) -> &SeekBarAssets {
        &self.assets
    }

    // --- range ---

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Stored for the host; conversions ignore it.
    pub fn set_min(&mut self, min: f32) {
        self.min = min;
    }

    pub fn set_max(&mut self, max: f32) {
        self.max = max;
    }

    pub fn left_progress(&self) -> f32 {
        self.left_progress
    }

    pub fn right_progress(&self) -> f32 {
        self.right_progress
    }

    pub fn min_progress(&self) -> i32 {
        self.to_value(self.left_progress)
    }

    pub fn max_progress(&self) -> i32 {
        self.to_value(self.right_progress)
    }

    /// Overrides any value still queued through a [`SeekBarHandle`].
    pub fn set_min_progress(&mut self, value: i32) {
        self.pending.lock().min_progress = None;
        self.left_progress = self.to_progress(value);
        self.invalidator.post_invalidate();
    }

    pub fn set_max_progress(&mut self, value: i32) {
        self.pending.lock().max_progress = None;
        self.right_progress = self.to_progress(value);
        self.invalidator.post_invalidate();
    }

    /// Applies values queued through a [`SeekBarHandle`]. The handle has
    /// already posted the redraw.
    pub fn sync_pending(&mut self) {
        let pending = std::mem::take(&mut *self.pending.lock());
        if let Some(v) = pending.min_progress {
            self.left_progress = self.to_progress(v);
        }
        if let Some(v) = pending.max_progress {
            self.right_progress = self.to_progress(v);
        }
    }

    fn to_progress(&self, value: i32) -> f32 {
        value as f32 / self.max
    }

    fn to_value(&self, progress: f32) -> i32 {
        (progress * self.max).round() as i32
    }

    // --- layout ---

    /// Intrinsic size: the track plus half a thumb of margin on each side.
    pub fn measure(&self) -> Size {
        Size {
            width: (self.assets.background.width() + self.assets.left_thumb.width()) as f32,
            height: self.assets.background.height() as f32,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Size assigned by the host layout.
    pub fn set_bounds(&mut self, size: Size) {
        self.size = size;
    }

    fn half_thumb(&self) -> f32 {
        self.assets.left_thumb.width() as f32 / 2.0
    }

    fn track_width(&self) -> f32 {
        self.assets.progress.width() as f32
    }

    /// Clip applied to the highlight bitmap for the current progress pair.
    pub fn highlight_clip(&self) -> Rect {
        let half = self.half_thumb();
        let track_w = self.track_width();
        let left_diff = track_w * self.left_progress;
        let right_diff = track_w * (1.0 - self.right_progress);
        Rect::from_ltrb(
            half + left_diff,
            0.0,
            track_w + half - right_diff,
            self.assets.progress.height() as f32,
        )
    }

    // --- paint ---

    pub fn paint(&mut self, scene: &mut Scene) {
        self.sync_pending();

        let half = self.half_thumb();
        let track_w = self.track_width();
        let SeekBarAssets {
            background,
            progress,
            left_thumb,
            right_thumb,
        } = &self.assets;

        scene.draw_image(background.clone(), Vec2 { x: half, y: 0.0 });

        scene.push_clip(self.highlight_clip());
        scene.draw_image(progress.clone(), Vec2 { x: half, y: 0.0 });
        scene.pop_clip();

        scene.draw_image(
            left_thumb.clone(),
            Vec2 {
                x: track_w * self.left_progress,
                y: (self.size.height - left_thumb.height() as f32) / 2.0,
            },
        );
        scene.draw_image(
            right_thumb.clone(),
            Vec2 {
                x: (self.size.width - right_thumb.width() as f32) * self.right_progress,
                y: (self.size.height - right_thumb.height() as f32) / 2.0,
            },
        );
    }

    // --- input ---

    pub fn handle_pointer(&mut self, pe: &PointerEvent) -> EventResult {
        self.sync_pending();

        if !self.size.to_rect().contains(pe.position) {
            return EventResult::Ignored;
        }
        let x = pe.position.x;

        match pe.event {
            PointerEventKind::Down => {
                log::debug!("seek bar track start at x={x}");
                if let Some(cb) = &self.on_track_start {
                    cb();
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                log::debug!("seek bar track stop at x={x} ({:?})", pe.event);
                if let Some(cb) = &self.on_track_stop {
                    cb();
                }
            }
            PointerEventKind::Move => {}
            PointerEventKind::Enter | PointerEventKind::Leave => return EventResult::Ignored,
        }

        self.track_to(x);

        let (lo, hi) = (self.min_progress(), self.max_progress());
        log::trace!(
            "seek bar progress left={} right={} -> ({lo}, {hi})",
            self.left_progress,
            self.right_progress
        );
        if let Some(cb) = &self.on_progress_change {
            cb(lo, hi);
        }

        self.invalidator.invalidate();
        EventResult::Consumed
    }

    /// Moves a thumb toward local x. Past either end of the track the
    /// matching thumb pins to its limit; otherwise the thumb farther from the
    /// touch takes the new position, the right one on a tie.
    fn track_to(&mut self, x: f32) {
        let click = (x - self.half_thumb()) / self.track_width();
        if click < 0.0 {
            self.left_progress = 0.0;
        } else if click > 1.0 {
            self.right_progress = 1.0;
        } else if (click - self.left_progress).abs() > (click - self.right_progress).abs() {
            self.left_progress = click;
        } else {
            self.right_progress = click;
        }
    }
}

impl std::fmt::Debug for RangeSeekBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeSeekBar")
            .field("size", &self.size)
            .field("left_progress", &self.left_progress)
            .field("right_progress", &self.right_progress)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("on_progress_change", &self.on_progress_change.as_ref().map(|_| "<callback>"))
            .field("on_track_start", &self.on_track_start.as_ref().map(|_| "<callback>"))
            .field("on_track_stop", &self.on_track_stop.as_ref().map(|_| "<callback>"))
            .finish()
    }
}
