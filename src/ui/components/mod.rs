//! Reusable UI components

mod button;

pub use button::{render_button, render_key_button, BUTTON_HEIGHT};
