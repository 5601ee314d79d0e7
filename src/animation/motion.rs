//! Motion parameters rendered to inline CSS.
//!
//! Sections describe *what* an element looks like before and after it is
//! revealed ([`Pose`]) and *how* it gets there ([`Transition`]); the browser's
//! transition engine does the interpolation.

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
    /// Overshooting curve standing in for a spring
    Spring,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "cubic-bezier(0.42, 0, 1, 1)",
            Easing::EaseOut => "cubic-bezier(0, 0, 0.58, 1)",
            Easing::EaseInOut => "cubic-bezier(0.42, 0, 0.58, 1)",
            Easing::Spring => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration_s: f64,
    pub delay_s: f64,
    pub easing: Easing,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration_s: 0.8,
            delay_s: 0.0,
            easing: Easing::EaseOut,
        }
    }
}

impl Transition {
    pub fn new(duration_s: f64) -> Self {
        Self {
            duration_s,
            ..Default::default()
        }
    }

    pub fn delay(mut self, delay_s: f64) -> Self {
        self.delay_s = delay_s;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn css(&self) -> String {
        let ease = self.easing.css();
        format!(
            "transition: opacity {d}s {ease} {delay}s, transform {d}s {ease} {delay}s;",
            d = self.duration_s,
            delay = self.delay_s,
        )
    }
}

/// A snapshot of the animatable properties. Angles in degrees, offsets in px.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Default for Pose {
    fn default() -> Self {
        Pose::REST
    }
}

impl Pose {
    /// Fully visible, untransformed.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Invisible, otherwise at rest.
    pub fn hidden() -> Self {
        Pose {
            opacity: 0.0,
            ..Pose::REST
        }
    }

    /// Invisible and pushed `y` px down, the default entrance.
    pub fn hidden_below(y: f64) -> Self {
        Pose {
            opacity: 0.0,
            y,
            ..Pose::REST
        }
    }

    pub fn x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn rotate(mut self, deg: f64) -> Self {
        self.rotate = deg;
        self
    }

    pub fn tilt(mut self, rotate_x: f64, rotate_y: f64) -> Self {
        self.rotate_x = rotate_x;
        self.rotate_y = rotate_y;
        self
    }

    pub fn style(&self) -> String {
        let mut transform = format!("translate3d({}px, {}px, 0)", self.x, self.y);
        if self.scale != 1.0 {
            let _ = write!(transform, " scale({})", self.scale);
        }
        if self.rotate != 0.0 {
            let _ = write!(transform, " rotate({}deg)", self.rotate);
        }
        if self.rotate_x != 0.0 {
            let _ = write!(transform, " rotateX({}deg)", self.rotate_x);
        }
        if self.rotate_y != 0.0 {
            let _ = write!(transform, " rotateY({}deg)", self.rotate_y);
        }
        format!("opacity: {}; transform: {};", self.opacity, transform)
    }
}

/// Delay for the `index`-th item of a staggered list.
pub fn stagger(base_s: f64, step_s: f64, index: usize) -> f64 {
    base_s + step_s * index as f64
}

/// Timing for an endlessly repeating keyframe animation defined in the global stylesheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Loop {
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Loop {
    pub fn new(duration_s: f64, delay_s: f64) -> Self {
        Self {
            duration_s,
            delay_s,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "animation-duration: {}s; animation-delay: {}s;",
            self.duration_s, self.delay_s
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_pose_is_identity() {
        assert_eq!(
            Pose::REST.style(),
            "opacity: 1; transform: translate3d(0px, 0px, 0);"
        );
    }

    #[test]
    fn hidden_pose_lists_only_non_identity_parts() {
        let pose = Pose::hidden_below(50.0).scale(0.9).tilt(-15.0, 0.0);
        assert_eq!(
            pose.style(),
            "opacity: 0; transform: translate3d(0px, 50px, 0) scale(0.9) rotateX(-15deg);"
        );
    }

    #[test]
    fn transition_css() {
        let t = Transition::new(0.8).delay(0.2).easing(Easing::Linear);
        assert_eq!(
            t.css(),
            "transition: opacity 0.8s linear 0.2s, transform 0.8s linear 0.2s;"
        );
    }

    #[test]
    fn stagger_steps_linearly() {
        assert_eq!(stagger(0.0, 0.2, 0), 0.0);
        assert_eq!(stagger(0.0, 0.2, 2), 0.4);
        assert_eq!(stagger(0.5, 0.25, 2), 1.0);
    }

    #[test]
    fn loop_css() {
        assert_eq!(
            Loop::new(6.0, 1.5).css(),
            "animation-duration: 6s; animation-delay: 1.5s;"
        );
    }
}
