//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod check_name;
mod completions;
mod utils;
mod validate;

pub use check_name::handle_check_name;
pub use completions::handle_completions;
pub use validate::handle_validate;
