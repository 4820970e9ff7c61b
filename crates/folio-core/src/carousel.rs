//! Auto-advancing carousel state machine.
//!
//! A [`Carousel`] only knows how many slides it has; the slides themselves
//! stay with the view. All index arithmetic is modulo the length, so the
//! active index is always valid for a non-empty carousel.
//!
//! | Event               | Effect                                          |
//! |---------------------|-------------------------------------------------|
//! | `mount`             | arm timer (unless paused or empty)              |
//! | `tick`              | advance once per elapsed interval               |
//! | `next` / `previous` | step by one, re-arm                             |
//! | `go_to`             | jump to a valid index, re-arm; else ignored     |
//! | `pause`             | cancel timer                                    |
//! | `resume`            | re-arm timer                                    |
//! | `unmount`           | cancel timer, reset to first slide              |

use std::time::Duration;

use serde::Serialize;

use crate::error::Result;
use crate::swipe::SwipeOutcome;
use crate::timer::RepeatingTimer;

/// Autoplay interval of the research lab carousels.
pub const RESEARCH_INTERVAL: Duration = Duration::from_millis(6000);

/// Autoplay interval of the project detail gallery.
pub const DETAIL_GALLERY_INTERVAL: Duration = Duration::from_millis(4000);

/// Autoplay behavior of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    pub interval: Duration,
    /// Pointer hover pauses autoplay.
    pub pause_on_hover: bool,
}

impl CarouselConfig {
    pub const fn new(interval: Duration, pause_on_hover: bool) -> Self {
        Self {
            interval,
            pause_on_hover,
        }
    }

    /// Research gallery and publications spotlight.
    pub const fn research() -> Self {
        Self::new(RESEARCH_INTERVAL, true)
    }

    /// Project detail gallery: fixed pace, hover does not pause.
    pub const fn detail_gallery() -> Self {
        Self::new(DETAIL_GALLERY_INTERVAL, false)
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::research()
    }
}

/// Serializable view of a carousel's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselSnapshot {
    pub index: usize,
    pub len: usize,
    pub paused: bool,
    pub mounted: bool,
}

/// Slide position plus its owned autoplay timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    paused: bool,
    mounted: bool,
    pause_on_hover: bool,
    timer: RepeatingTimer,
}

impl Carousel {
    /// Create an unmounted carousel over `len` slides.
    pub fn new(len: usize, config: CarouselConfig) -> Result<Self> {
        Ok(Self {
            len,
            index: 0,
            paused: false,
            mounted: false,
            pause_on_hover: config.pause_on_hover,
            timer: RepeatingTimer::new(config.interval)?,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Active slide. Always 0 for an empty carousel.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && index == self.index
    }

    pub fn timer(&self) -> &RepeatingTimer {
        &self.timer
    }

    /// Whether autoplay is currently scheduled.
    pub fn is_playing(&self) -> bool {
        self.timer.is_armed()
    }

    /// Fraction `(index + 1) / len`, or `None` when empty.
    pub fn progress(&self) -> Option<f32> {
        if self.is_empty() {
            return None;
        }
        Some((self.index + 1) as f32 / self.len as f32)
    }

    pub fn mount(&mut self, now: Duration) {
        self.mounted = true;
        self.rearm(now);
    }

    /// Tear down: cancel autoplay and forget position and pause state.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.paused = false;
        self.index = 0;
        self.timer.cancel();
    }

    /// Drive autoplay. Returns true when the active slide changed.
    pub fn tick(&mut self, now: Duration) -> bool {
        let fires = self.timer.poll(now);
        if fires == 0 || self.is_empty() {
            return false;
        }
        let before = self.index;
        let steps = (fires as usize) % self.len;
        self.index = (self.index + steps) % self.len;
        if self.index != before {
            tracing::trace!(index = self.index, fires, "carousel advanced");
        }
        self.index != before
    }

    pub fn next(&mut self, now: Duration) {
        if self.len > 1 {
            self.index = (self.index + 1) % self.len;
            self.rearm(now);
        }
    }

    pub fn previous(&mut self, now: Duration) {
        if self.len > 1 {
            self.index = (self.index + self.len - 1) % self.len;
            self.rearm(now);
        }
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize, now: Duration) {
        if index >= self.len {
            tracing::debug!(index, len = self.len, "ignoring out-of-range slide");
            return;
        }
        if index != self.index {
            self.index = index;
            self.rearm(now);
        }
    }

    /// Apply a recognized swipe.
    pub fn swipe(&mut self, outcome: SwipeOutcome, now: Duration) {
        match outcome {
            SwipeOutcome::Next => self.next(now),
            SwipeOutcome::Previous => self.previous(now),
            SwipeOutcome::None => {}
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
        self.timer.cancel();
    }

    pub fn resume(&mut self, now: Duration) {
        self.paused = false;
        self.rearm(now);
    }

    /// Pointer entered the slide area. Pauses only when configured to.
    pub fn pointer_entered(&mut self) {
        if self.pause_on_hover {
            self.pause();
        }
    }

    pub fn pointer_left(&mut self, now: Duration) {
        if self.pause_on_hover {
            self.resume(now);
        }
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            index: self.index,
            len: self.len,
            paused: self.paused,
            mounted: self.mounted,
        }
    }

    fn rearm(&mut self, now: Duration) {
        if self.mounted && !self.paused && !self.is_empty() {
            self.timer.arm(now);
        } else {
            self.timer.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn mounted(len: usize) -> Carousel {
        let mut carousel = Carousel::new(len, CarouselConfig::research()).unwrap();
        carousel.mount(ms(0));
        carousel
    }

    #[test]
    fn autoplay_wraps_around() {
        let mut carousel = mounted(3);
        assert!(carousel.tick(ms(6000)));
        assert!(carousel.tick(ms(12_000)));
        assert!(carousel.tick(ms(18_000)));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn unmounted_carousel_does_not_autoplay() {
        let mut carousel = Carousel::new(3, CarouselConfig::research()).unwrap();
        assert!(!carousel.is_playing());
        assert!(!carousel.tick(ms(60_000)));
    }

    #[test]
    fn manual_step_restarts_the_interval() {
        let mut carousel = mounted(3);
        carousel.next(ms(5000));
        assert_eq!(carousel.index(), 1);
        assert!(!carousel.tick(ms(6000)));
        assert!(carousel.tick(ms(11_000)));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn go_to_ignores_out_of_range() {
        let mut carousel = mounted(4);
        carousel.go_to(2, ms(10));
        assert_eq!(carousel.index(), 2);
        carousel.go_to(4, ms(20));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn single_slide_never_moves() {
        let mut carousel = mounted(1);
        carousel.next(ms(1));
        carousel.previous(ms(2));
        assert!(!carousel.tick(ms(60_000)));
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.progress(), Some(1.0));
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = mounted(0);
        assert!(!carousel.is_playing());
        carousel.next(ms(1));
        carousel.previous(ms(2));
        carousel.go_to(0, ms(3));
        carousel.resume(ms(4));
        assert!(!carousel.tick(ms(60_000)));
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.progress(), None);
        assert!(!carousel.is_active(0));
    }

    #[test]
    fn hover_pause_respects_config() {
        let mut research = mounted(3);
        research.pointer_entered();
        assert!(research.is_paused());

        let mut gallery = Carousel::new(3, CarouselConfig::detail_gallery()).unwrap();
        gallery.mount(ms(0));
        gallery.pointer_entered();
        assert!(!gallery.is_paused());
        assert!(gallery.is_playing());
    }

    #[test]
    fn unmount_resets_position() {
        let mut carousel = mounted(3);
        carousel.next(ms(1));
        carousel.pause();
        carousel.unmount();
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.is_paused());
        assert!(!carousel.is_playing());
    }
}
