//! Reusable UI components
//!
//! Buttons, form fields and section scaffolding styled by the global
//! stylesheet of the desktop shell.

mod button;
mod input;
mod section;

pub use button::*;
pub use input::*;
pub use section::*;
