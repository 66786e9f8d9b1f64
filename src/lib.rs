//! Arcade - a terminal collection of real-time arcade games.
//!
//! The binary owns the terminal; everything it drives lives here so the
//! games can be exercised headlessly through [`ui::renderer::DisplayList`].

pub mod app;
pub mod build_info;
pub mod config;
pub mod core;
pub mod games;
pub mod input;
pub mod menu;
pub mod ui;
