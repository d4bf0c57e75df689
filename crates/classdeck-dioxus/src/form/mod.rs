//! Form controls.

mod button;

pub use button::{Button, ButtonProps};
