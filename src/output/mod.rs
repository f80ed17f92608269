//! Output module for console echo of written files.

pub mod console;

pub use console::{print_info, print_json_write};
