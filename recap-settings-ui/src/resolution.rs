//! The resolution constraint engine.
//!
//! [`ResolutionController`] keeps width, height, the normalized 0–1000
//! slider position, and the active aspect class mutually consistent while
//! the user drags the slider or edits either dimension directly. Updates
//! from the three input sources are arbitrated through an edit-origin
//! state machine so a derived write never propagates back into the field
//! that produced it. The committed size is pushed to the encoder backend
//! only after edits stop for a short quiet period; the event loop polls
//! [`ResolutionController::take_commit`] each frame.

use std::time::{Duration, Instant};

use crate::Size;
use crate::aspect::{AspectClass, classify, size_for_pixel_budget};

/// Maximum slider position; the slider encodes where the current width
/// sits between the bounds as an integer in [0, SLIDER_MAX].
pub const SLIDER_MAX: u32 = 1000;

/// How long input must be quiet before the pending size is committed.
pub const COMMIT_QUIET_PERIOD: Duration = Duration::from_millis(100);

/// Base unit for the short-bound dimension of the active class.
const BASE_SHORT_BOUND: u32 = 240;

/// Fixed dynamic range: max bound = RANGE_FACTOR * min bound.
const RANGE_FACTOR: u32 = 16;

/// Which input source owns the in-flight change.
///
/// While a derived value is being written into a sibling field, the
/// origin marks the source so the sibling's handler stores the value
/// without re-deriving back. `Batch` covers the scoped quiet window used
/// when a ratio preset rewrites several fields at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditOrigin {
    Idle,
    DerivingFromWidth,
    DerivingFromHeight,
    DerivingFromSlider,
    Batch,
}

/// Valid width/height bounds for an aspect class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_width: u32,
    pub min_height: u32,
    pub max_width: u32,
    pub max_height: u32,
}

impl Bounds {
    /// Compute bounds from the fixed base unit. Wide classes put the base
    /// on the height bound, tall classes swap the roles.
    pub fn for_class(class: AspectClass) -> Self {
        let (min_width, min_height) = match class {
            AspectClass::Ratio16x9 => (BASE_SHORT_BOUND, BASE_SHORT_BOUND * 9 / 16),
            AspectClass::Ratio9x16 => (BASE_SHORT_BOUND * 9 / 16, BASE_SHORT_BOUND),
            AspectClass::Ratio4x3 => (BASE_SHORT_BOUND, BASE_SHORT_BOUND * 3 / 4),
            AspectClass::Ratio3x4 => (BASE_SHORT_BOUND * 3 / 4, BASE_SHORT_BOUND),
            AspectClass::Custom => (BASE_SHORT_BOUND, BASE_SHORT_BOUND),
        };
        Self {
            min_width,
            min_height,
            max_width: min_width * RANGE_FACTOR,
            max_height: min_height * RANGE_FACTOR,
        }
    }

    /// Saturate a proposed size into the bounds. Never an error.
    pub fn clamp(&self, size: Size) -> Size {
        Size {
            width: size.width.clamp(self.min_width, self.max_width),
            height: size.height.clamp(self.min_height, self.max_height),
        }
    }
}

/// Half-up integer rounding of `value * num / den`.
///
/// This is the exact formula the dialog has always used to co-derive one
/// dimension from the other; it can diverge from true rounding for some
/// inputs and is kept bit-for-bit.
fn scale_half_up(value: u32, num: u32, den: u32) -> u32 {
    (value * num * 10 / den + 5) / 10
}

/// The stateful resolution constraint controller.
pub struct ResolutionController {
    class: AspectClass,
    bounds: Bounds,
    width: u32,
    height: u32,
    slider: u32,
    origin: EditOrigin,
    deadline: Option<Instant>,
}

impl ResolutionController {
    /// Create a controller initialized from a previously stored size.
    /// The aspect class is detected by [`classify`]; no commit is armed,
    /// since the backend already holds this size.
    pub fn new(width: u32, height: u32) -> Self {
        let mut controller = Self {
            class: AspectClass::Custom,
            bounds: Bounds::for_class(AspectClass::Custom),
            width: 1,
            height: 1,
            slider: 0,
            origin: EditOrigin::Idle,
            deadline: None,
        };
        controller.init_from_size(width, height);
        controller
    }

    /// Re-initialize from a stored size without arming the commit timer.
    pub fn init_from_size(&mut self, width: u32, height: u32) {
        let class = classify(width, height);
        self.apply_bounds(class, Size::new(width, height));
        self.deadline = None;
    }

    /// Select an aspect class directly, keeping the displayed size
    /// (clamped into the new bounds).
    pub fn select_ratio(&mut self, class: AspectClass) {
        self.apply_bounds(class, self.size());
    }

    /// Handle a ratio preset button.
    ///
    /// For a named ratio the displayed size is recomputed to preserve the
    /// current pixel budget, and the commit timer is armed. Selecting
    /// Custom disables the slider and leaves the size untouched; nothing
    /// changed, so no commit is scheduled.
    pub fn apply_preset(&mut self, class: AspectClass, now: Instant) {
        match class.ratio() {
            Some((rw, rh)) => {
                let proposed = size_for_pixel_budget(self.size().pixel_count(), rw, rh);
                self.apply_bounds(class, proposed);
                self.arm(now);
            }
            None => self.apply_bounds(AspectClass::Custom, self.size()),
        }
    }

    /// Handle a slider move. Ignored while the slider is disabled or a
    /// derivation is already in flight.
    ///
    /// Both dimensions are interpolated from the same normalized value,
    /// so the active ratio is preserved exactly at integer rounding.
    pub fn slider_edited(&mut self, value: u32, now: Instant) {
        if self.origin != EditOrigin::Idle || !self.slider_enabled() {
            return;
        }
        let value = value.min(SLIDER_MAX);
        let width = self.bounds.min_width
            + (self.bounds.max_width - self.bounds.min_width) * value / SLIDER_MAX;
        let height = self.bounds.min_height
            + (self.bounds.max_height - self.bounds.min_height) * value / SLIDER_MAX;
        self.with_origin(EditOrigin::DerivingFromSlider, |c| {
            c.width_edited(width, now);
            c.height_edited(height, now);
        });
        self.slider = value;
        self.arm(now);
    }

    /// Handle an edit of the width field.
    ///
    /// When a ratio is active, height is co-derived through the guarded
    /// height path; in Custom mode the width is accepted on its own.
    /// Either way the value is clamped and the commit timer re-armed.
    pub fn width_edited(&mut self, width: u32, now: Instant) {
        let width = width.clamp(self.bounds.min_width, self.bounds.max_width);
        if self.origin != EditOrigin::Idle {
            // Derived or batched write: store, do not propagate.
            self.width = width;
            return;
        }
        self.width = width;
        if self.slider_enabled() {
            let height = scale_half_up(width, self.bounds.min_height, self.bounds.min_width);
            self.with_origin(EditOrigin::DerivingFromWidth, |c| {
                c.height_edited(height, now);
            });
        }
        self.arm(now);
    }

    /// Handle an edit of the height field. Symmetric to [`Self::width_edited`].
    pub fn height_edited(&mut self, height: u32, now: Instant) {
        let height = height.clamp(self.bounds.min_height, self.bounds.max_height);
        if self.origin != EditOrigin::Idle {
            self.height = height;
            return;
        }
        self.height = height;
        if self.slider_enabled() {
            let width = scale_half_up(height, self.bounds.min_width, self.bounds.min_height);
            self.with_origin(EditOrigin::DerivingFromHeight, |c| {
                c.width_edited(width, now);
            });
        }
        self.arm(now);
    }

    /// Poll for an elapsed quiet period. Returns the committed size at
    /// most once per armed edit burst; the caller pushes it into the
    /// encoder backend.
    pub fn take_commit(&mut self, now: Instant) -> Option<Size> {
        if self.deadline.is_some_and(|deadline| now >= deadline) {
            self.deadline = None;
            let size = self.size();
            log::debug!("committing capture size {}x{}", size.width, size.height);
            Some(size)
        } else {
            None
        }
    }

    /// Whether an edit burst is waiting for its quiet period to elapse.
    pub fn commit_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn slider_pos(&self) -> u32 {
        self.slider
    }

    /// The slider is live only when a named ratio is active.
    pub fn slider_enabled(&self) -> bool {
        self.class != AspectClass::Custom
    }

    pub fn active_class(&self) -> AspectClass {
        self.class
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Rebuild bounds for a class and batch-write the dependent fields
    /// inside a quiet window so none of the writes propagate.
    fn apply_bounds(&mut self, class: AspectClass, proposed: Size) {
        self.class = class;
        self.bounds = Bounds::for_class(class);
        self.with_origin(EditOrigin::Batch, |c| {
            let size = c.bounds.clamp(proposed);
            c.width = size.width;
            c.height = size.height;
            c.slider = if class == AspectClass::Custom {
                0
            } else {
                (size.width - c.bounds.min_width) * SLIDER_MAX
                    / (c.bounds.max_width - c.bounds.min_width)
            };
        });
        log::debug!(
            "aspect {:?}: bounds {}x{}..{}x{}, displayed {}x{}",
            class,
            self.bounds.min_width,
            self.bounds.min_height,
            self.bounds.max_width,
            self.bounds.max_height,
            self.width,
            self.height
        );
    }

    /// Run `f` with the origin set, restoring the previous origin on
    /// every exit path.
    fn with_origin<R>(&mut self, origin: EditOrigin, f: impl FnOnce(&mut Self) -> R) -> R {
        let prev = std::mem::replace(&mut self.origin, origin);
        let result = f(self);
        self.origin = prev;
        result
    }

    /// Restart the single-shot commit deadline; any previously pending
    /// commit is replaced, never stacked.
    fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + COMMIT_QUIET_PERIOD);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn far_future(t0: Instant) -> Instant {
        t0 + Duration::from_secs(60)
    }

    #[test]
    fn test_bounds_for_classes() {
        let wide = Bounds::for_class(AspectClass::Ratio16x9);
        assert_eq!((wide.min_width, wide.min_height), (240, 135));
        assert_eq!((wide.max_width, wide.max_height), (3840, 2160));

        let tall = Bounds::for_class(AspectClass::Ratio9x16);
        assert_eq!((tall.min_width, tall.min_height), (135, 240));
        assert_eq!((tall.max_width, tall.max_height), (2160, 3840));

        let four_three = Bounds::for_class(AspectClass::Ratio4x3);
        assert_eq!((four_three.min_width, four_three.min_height), (240, 180));

        let custom = Bounds::for_class(AspectClass::Custom);
        assert_eq!((custom.min_width, custom.min_height), (240, 240));
    }

    #[test]
    fn test_new_detects_class_and_does_not_commit() {
        let t0 = Instant::now();
        let mut c = ResolutionController::new(1920, 1080);
        assert_eq!(c.active_class(), AspectClass::Ratio16x9);
        assert_eq!(c.size(), Size::new(1920, 1080));
        assert!(c.take_commit(far_future(t0)).is_none());
    }

    #[test]
    fn test_select_tall_ratio_clamps_previous_size() {
        let mut c = ResolutionController::new(1920, 1080);
        c.select_ratio(AspectClass::Ratio9x16);

        let b = c.bounds();
        assert_eq!((b.min_width, b.min_height), (135, 240));
        assert_eq!((b.max_width, b.max_height), (2160, 3840));
        // Previous size already sits inside the new bounds.
        assert_eq!(c.size(), Size::new(1920, 1080));
        assert_eq!(c.slider_pos(), (1920 - 135) * SLIDER_MAX / (2160 - 135));
    }

    #[test]
    fn test_slider_preserves_ratio_and_is_monotonic() {
        let t0 = Instant::now();
        let mut c = ResolutionController::new(1920, 1080);

        let mut last = Size::new(0, 0);
        for v in 0..=SLIDER_MAX {
            c.slider_edited(v, t0);
            let size = c.size();
            assert!(size.width >= last.width && size.height >= last.height);
            let wf = size.width as f64 / 240.0;
            let hf = size.height as f64 / 135.0;
            assert!(
                (wf - hf).abs() < 0.02,
                "ratio drifted at v={v}: {}x{}",
                size.width,
                size.height
            );
            last = size;
        }
        assert_eq!(c.size(), Size::new(3840, 2160));

        c.slider_edited(0, t0);
        assert_eq!(c.size(), Size::new(240, 135));
    }

    #[test]
    fn test_width_edit_derives_height_half_up() {
        let t0 = Instant::now();
        let mut c = ResolutionController::new(1920, 1080);
        c.width_edited(1920, t0);
        assert_eq!(c.height(), 1080);

        // (801 * 135 * 10 / 240 + 5) / 10 = 451 with the half-up formula.
        c.width_edited(801, t0);
        assert_eq!(c.height(), 451);
        // If the derived height write had re-derived the width it would
        // have come back as 802; the guard must prevent that.
        assert_eq!(c.width(), 801);
    }

    #[test]
    fn test_height_edit_derives_width() {
        let t0 = Instant::now();
        let mut c = ResolutionController::new(1920, 1080);
        c.height_edited(1080, t0);
        assert_eq!(c.width(), 1920);
        c.height_edited(451, t0);
        assert_eq!(c.width(), 802);
        assert_eq!(c.height(), 451);
    }

    #[test]
    fn test_edits_clamp_to_bounds() {
        let t0 = Instant::now();
        let mut c = ResolutionController::new(1920, 1080);
        c.width_edited(10_000, t0);
        assert_eq!(c.size(), Size::new(3840, 2160));
        c.width_edited(1, t0);
        assert_eq!(c.size(), Size::new(240, 135));
    }

    #[test]
    fn test_custom_mode_decouples_dimensions() {
        let t0 = Instant::now();
        let mut c = ResolutionController::new(1920, 1080);
        c.apply_preset(AspectClass::Custom, t0);

        assert!(!c.slider_enabled());
        assert_eq!(c.slider_pos(), 0);
        // Size is kept, just clamped into the custom bounds.
        assert_eq!(c.size(), Size::new(1920, 1080));

        c.width_edited(1000, t0);
        assert_eq!(c.size(), Size::new(1000, 1080));
        c.height_edited(500, t0);
        assert_eq!(c.size(), Size::new(1000, 500));

        // Slider input is ignored while disabled.
        c.slider_edited(900, t0);
        assert_eq!(c.size(), Size::new(1000, 500));
    }

    #[test]
    fn test_custom_edits_still_commit() {
        let t0 = Instant::now();
        let mut c = ResolutionController::new(1920, 1080);
        c.apply_preset(AspectClass::Custom, t0);
        c.width_edited(1000, t0);
        assert_eq!(
            c.take_commit(t0 + Duration::from_millis(150)),
            Some(Size::new(1000, 1080))
        );
    }

    #[test]
    fn test_preset_preserves_pixel_budget() {
        let t0 = Instant::now();
        let mut c = ResolutionController::new(1920, 1080);
        c.apply_preset(AspectClass::Ratio9x16, t0);
        assert_eq!(c.size(), Size::new(1080, 1920));
        assert_eq!(
            c.take_commit(t0 + COMMIT_QUIET_PERIOD),
            Some(Size::new(1080, 1920))
        );
    }

    #[test]
    fn test_debounce_coalesces_edit_bursts() {
        let t0 = Instant::now();
        let mut c = ResolutionController::new(1920, 1080);

        // A burst of slider positions within the quiet period.
        for (i, v) in [100u32, 200, 300, 400].into_iter().enumerate() {
            c.slider_edited(v, t0 + Duration::from_millis(10 * i as u64));
        }
        let last_edit = t0 + Duration::from_millis(30);

        // Nothing commits before the quiet period elapses.
        assert!(c.take_commit(last_edit + Duration::from_millis(50)).is_none());

        // Exactly one commit, carrying the values of the latest edit.
        let expected = Size::new(240 + 3600 * 400 / 1000, 135 + 2025 * 400 / 1000);
        assert_eq!(c.take_commit(last_edit + COMMIT_QUIET_PERIOD), Some(expected));

        // And only one.
        assert!(c.take_commit(far_future(t0)).is_none());
    }

    #[test]
    fn test_new_edit_reschedules_pending_commit() {
        let t0 = Instant::now();
        let mut c = ResolutionController::new(1920, 1080);
        c.width_edited(800, t0);
        let rearm = t0 + Duration::from_millis(80);
        c.width_edited(960, rearm);

        // The original deadline has passed but the timer was restarted.
        assert!(c.take_commit(t0 + Duration::from_millis(110)).is_none());
        assert_eq!(
            c.take_commit(rearm + COMMIT_QUIET_PERIOD),
            Some(Size::new(960, 540))
        );
    }
}
