//! Eased scroll animations driven one frame at a time.

/// Duration of a navigation scroll.
pub const NAVIGATION_DURATION_MS: f64 = 800.0;

/// Quartic ease-in-out over `t` in `[0, 1]`.
pub fn ease_in_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        8.0 * t.powi(4)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
    }
}

/// Keys the browser scrolls the page with; pressing one takes over from a
/// running navigation.
pub fn is_scroll_key(key: &str) -> bool {
    matches!(
        key,
        "ArrowUp" | "ArrowDown" | "PageUp" | "PageDown" | "Home" | "End" | " " | "Spacebar"
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    pub position: f64,
    pub finished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f64,
    to: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            duration_ms: NAVIGATION_DURATION_MS,
            started_at: None,
        }
    }

    pub fn with_duration(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// The first sampled timestamp becomes the start of the animation.
    pub fn sample(&mut self, now_ms: f64) -> ScrollFrame {
        let started_at = *self.started_at.get_or_insert(now_ms);
        let progress = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - started_at) / self.duration_ms).clamp(0.0, 1.0)
        };
        if progress >= 1.0 {
            return ScrollFrame {
                position: self.to,
                finished: true,
            };
        }
        ScrollFrame {
            position: self.from + (self.to - self.from) * ease_in_out_quart(progress),
            finished: false,
        }
    }
}

/// Holds at most one running animation. Starting a new one supersedes the
/// previous; frames requested for a superseded animation get `None`.
#[derive(Debug, Default)]
pub struct ScrollAnimator {
    generation: u64,
    current: Option<ScrollAnimation>,
}

impl ScrollAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, animation: ScrollAnimation) -> u64 {
        self.generation += 1;
        self.current = Some(animation);
        self.generation
    }

    pub fn cancel(&mut self) {
        self.current = None;
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    pub fn step(&mut self, generation: u64, now_ms: f64) -> Option<ScrollFrame> {
        if generation != self.generation {
            return None;
        }
        let frame = self.current.as_mut()?.sample(now_ms);
        if frame.finished {
            self.current = None;
        }
        Some(frame)
    }
}
