//! Auto-rotating image slider.
//!
//! [`SliderState`] is the bare index arithmetic. [`AutoRotatingSlider`]
//! pairs an ordered list of [`SlideImage`]s with a [`Rotation`] and answers
//! what to draw: the current slide and one indicator dot per slide.
//!
//! ```rust
//! # #[cfg(feature = "tokio")]
//! # async fn demo() {
//! use std::time::Duration;
//! use storefront_core::{AutoRotatingSlider, SlideImage, TokioTimer};
//!
//! let mut slider: AutoRotatingSlider<TokioTimer> = AutoRotatingSlider::new(vec![
//!     SlideImage::new("/date.jfif", "Mixed Dry Fruits Bowl"),
//!     SlideImage::new("/almonds.jfif", "Premium almonds"),
//! ]);
//! slider.activate();
//! tokio::time::sleep(Duration::from_millis(4100)).await;
//! assert_eq!(slider.current_index(), 1);
//! # }
//! ```

use std::time::Duration;

use serde::Serialize;

use crate::rotation::{RepeatingTimer, Rotation};
use crate::types::{SlideImage, DEFAULT_SLIDE_INTERVAL};

/// Position of the displayed slide.
///
/// Invariant: `current_index < len` whenever `len > 0`, given that `len` is
/// the value passed to the last [`advance`](Self::advance) or
/// [`clamp`](Self::clamp).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SliderState {
    current_index: usize,
}

impl SliderState {
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Move to the next slide, wrapping after the last. A no-op for `len == 0`.
    pub fn advance(&mut self, len: usize) -> usize {
        if len > 0 {
            self.current_index = (self.current_index + 1) % len;
        }
        self.current_index
    }

    /// Reset to the first slide if the index no longer fits `len`.
    pub fn clamp(&mut self, len: usize) {
        if self.current_index >= len {
            self.current_index = 0;
        }
    }
}

/// One position-indicator dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

/// Dots for `len` slides with `active` highlighted.
pub fn indicators(len: usize, active: usize) -> Vec<Indicator> {
    (0..len)
        .map(|index| Indicator {
            index,
            active: index == active,
        })
        .collect()
}

/// Slides plus the timer-driven rotation over them.
#[derive(Debug)]
pub struct AutoRotatingSlider<T: RepeatingTimer> {
    images: Vec<SlideImage>,
    rotation: Rotation<T>,
}

impl<T: RepeatingTimer> AutoRotatingSlider<T> {
    /// A stopped slider ticking every [`DEFAULT_SLIDE_INTERVAL`].
    pub fn new(images: Vec<SlideImage>) -> Self {
        Self::with_interval(images, DEFAULT_SLIDE_INTERVAL)
    }

    pub fn with_interval(images: Vec<SlideImage>, interval: Duration) -> Self {
        let rotation = Rotation::new(images.len(), interval);
        Self { images, rotation }
    }

    /// Register a callback that receives the index after every tick.
    pub fn on_advance(mut self, observer: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.rotation = self.rotation.on_advance(observer);
        self
    }

    pub fn activate(&mut self) {
        self.rotation.activate();
    }

    pub fn deactivate(&mut self) {
        self.rotation.deactivate();
    }

    /// Swap the slide list; the timer is re-established for the new length.
    pub fn set_images(&mut self, images: Vec<SlideImage>) {
        self.rotation.set_len(images.len());
        self.images = images;
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.rotation.set_interval(interval);
    }

    /// The slide to display, `None` when there are no slides.
    pub fn current(&self) -> Option<&SlideImage> {
        self.images
            .get(self.rotation.current_index())
            .or_else(|| self.images.first())
    }

    pub fn current_index(&self) -> usize {
        self.rotation.current_index()
    }

    pub fn indicators(&self) -> Vec<Indicator> {
        indicators(self.images.len(), self.current_index())
    }

    pub fn images(&self) -> &[SlideImage] {
        &self.images
    }

    pub fn interval(&self) -> Duration {
        self.rotation.interval()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_running(&self) -> bool {
        self.rotation.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::testing::{fire, live_timers, ManualTimer};

    fn abc() -> Vec<SlideImage> {
        vec![
            SlideImage::new("/a.jpg", "A"),
            SlideImage::new("/b.jpg", "B"),
            SlideImage::new("/c.jpg", "C"),
        ]
    }

    #[test]
    fn advance_wraps_around() {
        let mut state = SliderState::default();
        assert_eq!(state.advance(3), 1);
        assert_eq!(state.advance(3), 2);
        assert_eq!(state.advance(3), 0);
    }

    #[test]
    fn advance_on_empty_is_a_no_op() {
        let mut state = SliderState::default();
        assert_eq!(state.advance(0), 0);
    }

    #[test]
    fn clamp_only_resets_out_of_range() {
        let mut state = SliderState::default();
        state.advance(5);
        state.advance(5);
        state.clamp(3);
        assert_eq!(state.current_index(), 2);
        state.clamp(2);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn indicators_highlight_the_active_dot() {
        let dots = indicators(3, 1);
        assert_eq!(dots.len(), 3);
        assert_eq!(
            dots.iter().filter(|d| d.active).map(|d| d.index).collect::<Vec<_>>(),
            vec![1]
        );
    }

    #[test]
    fn shows_a_b_c_then_a_again() {
        let mut slider: AutoRotatingSlider<ManualTimer> = AutoRotatingSlider::new(abc());
        slider.activate();

        let mut shown = vec![slider.current().map(|s| s.alt_text.clone())];
        for _ in 0..3 {
            fire();
            shown.push(slider.current().map(|s| s.alt_text.clone()));
        }
        let shown: Vec<_> = shown.into_iter().flatten().collect();
        assert_eq!(shown, vec!["A", "B", "C", "A"]);
    }

    #[test]
    fn empty_slider_renders_nothing() {
        let mut slider: AutoRotatingSlider<ManualTimer> =
            AutoRotatingSlider::with_interval(Vec::new(), Duration::from_millis(10));
        slider.activate();
        assert!(slider.current().is_none());
        assert!(slider.indicators().is_empty());
        assert!(!slider.is_running());
        assert_eq!(live_timers(), 0);
    }

    #[test]
    fn replacing_images_rebinds_the_timer() {
        let mut slider: AutoRotatingSlider<ManualTimer> = AutoRotatingSlider::new(abc());
        slider.activate();
        fire();
        fire();
        assert_eq!(slider.current_index(), 2);

        slider.set_images(abc().into_iter().take(2).collect());
        assert_eq!(slider.current_index(), 0);
        assert_eq!(live_timers(), 1);
        fire();
        assert_eq!(slider.current().map(|s| s.source.as_str()), Some("/b.jpg"));
        fire();
        assert_eq!(slider.current().map(|s| s.source.as_str()), Some("/a.jpg"));
    }

    #[test]
    fn indicators_follow_rotation() {
        let mut slider: AutoRotatingSlider<ManualTimer> = AutoRotatingSlider::new(abc());
        slider.activate();
        fire();
        let active: Vec<bool> = slider.indicators().iter().map(|d| d.active).collect();
        assert_eq!(active, vec![false, true, false]);
    }
}
