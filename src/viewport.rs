//! Simulated viewport for the in-memory page.
//!
//! Smooth scrolls are played as an ease-in-out cubic over a fixed duration
//! and advanced explicitly by the caller, one frame at a time.

use crate::host::ScrollBehavior;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    pub elapsed_ms: f64,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64, duration_ms: u32) -> Self {
        Self {
            from,
            to,
            duration_ms: f64::from(duration_ms),
            elapsed_ms: 0.0,
        }
    }

    /// Progress in `[0, 1]`. A zero-length animation is already complete.
    pub fn progress(&self) -> f64 {
        if self.duration_ms <= 0.0 {
            1.0
        } else {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        }
    }

    pub fn position(&self) -> f64 {
        self.from + (self.to - self.from) * ease_in_out_cubic(self.progress())
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Viewport {
    scroll_y: f64,
    animation: Option<ScrollAnimation>,
}

impl Viewport {
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn animation(&self) -> Option<&ScrollAnimation> {
        self.animation.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Jump without animation, cancelling any scroll in flight.
    pub fn set_scroll_y(&mut self, y: f64) {
        self.animation = None;
        self.scroll_y = y.max(0.0);
    }

    pub fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        let target = top.max(0.0);
        match behavior {
            ScrollBehavior::Smooth { duration_ms } if duration_ms > 0 && target != self.scroll_y => {
                self.animation = Some(ScrollAnimation::new(self.scroll_y, target, duration_ms));
            }
            _ => self.set_scroll_y(target),
        }
    }

    /// Move the clock forward. Returns true while the animation is still running.
    pub fn advance(&mut self, elapsed_ms: f64) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };

        animation.elapsed_ms += elapsed_ms.max(0.0);
        self.scroll_y = animation.position();

        if animation.is_finished() {
            self.scroll_y = animation.to;
            self.animation = None;
            false
        } else {
            true
        }
    }

    /// Run the animation to completion at a fixed frame interval, returning
    /// the position after each frame.
    pub fn finish(&mut self, frame_ms: f64) -> Vec<f64> {
        let mut frames = Vec::new();
        if frame_ms <= 0.0 {
            if let Some(animation) = self.animation.take() {
                self.scroll_y = animation.to;
                frames.push(self.scroll_y);
            }
            return frames;
        }
        while self.is_animating() {
            self.advance(frame_ms);
            frames.push(self.scroll_y);
        }
        frames
    }
}
