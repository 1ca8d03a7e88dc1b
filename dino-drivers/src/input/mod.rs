//! Input drivers

pub mod button;
pub mod source;

pub use button::Button;
pub use source::ButtonSource;
