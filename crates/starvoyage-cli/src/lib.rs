//! starvoyage CLI library.
//!
//! This crate provides the command-line plumbing for the starvoyage
//! simulator: constants resolution, terminal styling and output formatting.

pub mod config;
pub mod output;
pub mod terminal;
