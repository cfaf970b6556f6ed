//! Reusable UI components for the portfolio page.

mod button;
mod feedback;
mod input;

pub use button::*;
pub use feedback::*;
pub use input::*;
