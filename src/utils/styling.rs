//! Terminal styling utilities

use console::{style, Emoji};
use std::path::Path;

use crate::collection::ImportMode;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static FILE: Emoji<'_, '_> = Emoji("📄 ", "");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static CARD: Emoji<'_, '_> = Emoji("🗂️  ", "");
pub static LINK: Emoji<'_, '_> = Emoji("🔗 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("cardport").cyan().bold(),
        style("JSON cards into your collection").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(input: &Path, collection: &Path, model: &str, mode: ImportMode) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Configuration").cyan().bold(),
        " ".repeat(box_width - 20)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Input:      {:<35}│",
        FILE,
        truncate_path(input, 34)
    );
    println!(
        "    │  {} Collection: {:<35}│",
        FOLDER,
        truncate_path(collection, 34)
    );
    println!(
        "    │  {} Model:      {:<35}│",
        CARD,
        truncate_string(model, 34)
    );
    println!(
        "    │  {} Duplicates: {:<35}│",
        LINK,
        style(mode_label(mode)).yellow()
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", WARN, style(message).yellow());
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("cardport import complete!").green().bold()
    );
    println!();
}

fn mode_label(mode: ImportMode) -> &'static str {
    match mode {
        ImportMode::Update => "update existing",
        ImportMode::Ignore => "keep existing",
        ImportMode::Duplicate => "always add",
    }
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    let count = s.chars().count();
    if count <= max_len {
        s.to_string()
    } else {
        let tail: String = s.chars().skip(count - max_len + 3).collect();
        format!("...{}", tail)
    }
}
