//! adr: manage Architecture Decision Records in a Markdown repository
//!
//! The [`record`] module holds the file operations (numbering, lookup,
//! creation, section editing and linking). [`cli`] wires them to the
//! `adr` binary.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod record;
pub mod utils;

pub use error::{AdrError, Result};
