//! Reveal transitions expressed as inline CSS.
//!
//! The browser does the interpolation; a [`Motion`] only describes where an
//! element starts, where it ends up and when the transition runs.

/// One visual state of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x_px: f64,
    pub y_px: f64,
    pub scale: f64,
}

impl Pose {
    /// Fully visible at its layout position.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x_px: 0.0,
        y_px: 0.0,
        scale: 1.0,
    };

    pub const fn hidden_offset(x_px: f64, y_px: f64) -> Self {
        Pose {
            opacity: 0.0,
            x_px,
            y_px,
            scale: 1.0,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "opacity:{};transform:translate({}px,{}px) scale({})",
            self.opacity, self.x_px, self.y_px, self.scale
        )
    }
}

/// A one-shot transition between two poses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub initial: Pose,
    pub target: Pose,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Motion {
    pub const DEFAULT_DURATION_S: f64 = 0.5;

    fn from_pose(initial: Pose) -> Self {
        Self {
            initial,
            target: Pose::REST,
            duration_s: Self::DEFAULT_DURATION_S,
            delay_s: 0.0,
        }
    }

    /// Fades in while moving up 20px.
    pub fn rise() -> Self {
        Self::from_pose(Pose::hidden_offset(0.0, 20.0))
    }

    pub fn slide_from_left() -> Self {
        Self::from_pose(Pose::hidden_offset(-20.0, 0.0))
    }

    pub fn slide_from_right() -> Self {
        Self::from_pose(Pose::hidden_offset(20.0, 0.0))
    }

    pub fn fade() -> Self {
        Self::from_pose(Pose::hidden_offset(0.0, 0.0))
    }

    pub fn with_delay(mut self, delay_s: f64) -> Self {
        self.delay_s = delay_s;
        self
    }

    pub fn with_duration(mut self, duration_s: f64) -> Self {
        self.duration_s = duration_s;
        self
    }

    /// Inline style for the current trigger state.
    pub fn style(&self, trigger: bool) -> String {
        if !trigger {
            return self.initial.css();
        }
        let duration = millis(self.duration_s);
        let delay = millis(self.delay_s);
        format!(
            "{};transition:opacity {duration}ms ease-out {delay}ms, transform {duration}ms ease-out {delay}ms",
            self.target.css()
        )
    }

    /// Final pose with no transition, for when animations are switched off.
    pub fn settled_style(&self) -> String {
        self.target.css()
    }
}

/// Delay of the `index`th element in a staggered group.
pub fn stagger(base_s: f64, index: usize, step_s: f64) -> f64 {
    base_s + index as f64 * step_s
}

fn millis(seconds: f64) -> u32 {
    (seconds.max(0.0) * 1000.0).round() as u32
}
