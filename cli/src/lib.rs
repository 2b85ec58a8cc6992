//! # Window Theme CLI
//!
//! Command line front end for the window theme registry. Loads the user
//! configuration, sets up logging, and exposes the registry's consumer
//! interface (listing themes, inspecting the active theme, checking files).
//!
//! ## Modules
//!
//! - [`cli`] - Command line arguments
//! - [`commands`] - Output for each command
//! - [`config`] - Configuration loading from file and environment
//! - [`logger`] - Logging setup

pub mod cli;
pub mod commands;
pub mod config;
pub mod logger;
