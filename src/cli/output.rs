//! Terminal output formatting with colors
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use colored::Colorize;

use crate::domain::Folder;

/// Print error (red bold "error:" prefix) to stderr
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Print warning (yellow "Warning:" prefix) to stderr
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Print success status (green checkmark)
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}

/// Print completed action (green label)
pub fn action(label: &str, msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}: {}", label.green(), msg);
}

/// Print section header (cyan bold)
pub fn header(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg.to_string().cyan().bold());
}

/// Print plain output (no color, for data)
pub fn info(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{}", msg);
}

/// One line per folder: path, then org id dimmed.
pub fn folder_line(folder: &Folder) -> String {
    format!("{}  {}", folder.path, folder.org_id.to_string().dimmed())
}

/// Print a folder list; `changed` paths are highlighted.
pub fn folders(list: &[Folder], changed: &[bool]) {
    for (idx, folder) in list.iter().enumerate() {
        if changed.get(idx).copied().unwrap_or(false) {
            println!("{} {}", "*".yellow(), folder_line(folder).yellow());
        } else {
            println!("  {}", folder_line(folder));
        }
    }
}
