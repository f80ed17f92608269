//! Console output utilities.

use std::path::Path;

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Echo a JSON document that was just written to `path`.
pub fn print_json_write(path: &Path, json: &str) {
    println!();
    print_info(&format!("Writing '{}'...", path.display()));
    println!();
    println!("{}", json);
}
