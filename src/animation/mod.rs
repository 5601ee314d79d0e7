pub mod counter;
pub mod driver;
pub mod format;
pub mod motion;
pub mod scroll;
pub mod visibility;

pub use counter::{AnimationTarget, CountPolicy, Counter, Phase, Step};
pub use driver::{CounterDriver, Timer};
pub use motion::{Easing, Loop, Pose, Transition};
pub use visibility::Visibility;
