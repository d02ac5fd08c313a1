// SPDX-License-Identifier: MIT

//! Reusable egui components for the application shell.

pub mod theme;
pub mod toast;

pub use theme::theme_toggle_button;
