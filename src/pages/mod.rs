pub mod about;
pub mod experiences;
pub mod hero;
pub mod home;
pub mod join;
pub mod stats;

pub use home::Home;
