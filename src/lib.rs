//! jotter - Personal journal in a single JSON file
//!
//! A command-line journaling application that records dated text entries
//! with optional tags, and supports listing, counting, free-text search
//! and tag filtering over a file-backed entry collection.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JotterError;
