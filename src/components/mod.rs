pub mod button;
pub mod card;
pub mod counter;
pub mod icon;
pub mod motion;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent};
pub use counter::AnimatedCounter;
pub use icon::{Icon, IconKind};
pub use motion::{Looping, Posed, Reveal};
