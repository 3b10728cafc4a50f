//! Quad route CLI - interactive front end for the route planner.
//!
//! This crate provides:
//! - config: environment-driven defaults
//! - menu: the interactive planning menu

pub mod config;
pub mod menu;

pub use config::Config;
pub use menu::{Menu, MenuOption, MenuOptions};
