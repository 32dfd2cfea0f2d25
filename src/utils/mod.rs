//! Shared helpers

pub mod paths;
pub mod text;

pub use paths::{display_relative, temp_path_for};
pub use text::title_case;
