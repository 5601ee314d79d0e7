pub mod counter;
pub mod in_view;
pub mod scroll;

pub use counter::{use_animated_counter, CounterView};
pub use in_view::{use_in_view, InViewOptions};
pub use scroll::use_section_progress;
