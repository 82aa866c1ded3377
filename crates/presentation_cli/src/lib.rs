//! ridehail terminal front-end
//!
//! Splash and home screens rendered as text and driven by shell commands.

#![allow(clippy::print_stdout)]

pub mod app;
pub mod cli;
pub mod notices;
pub mod render;
pub mod shell;
