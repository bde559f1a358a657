//! Interactive prompts using dialoguer

use std::path::{Path, PathBuf};

use anyhow::Result;
use dialoguer::{Confirm, Input};

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Ask for the JSON file to import, starting from the home directory.
/// An empty answer cancels.
pub fn prompt_for_json_file() -> Result<Option<PathBuf>> {
    let start_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));

    let answer: String = Input::new()
        .with_prompt("JSON file to import")
        .with_initial_text(format!("{}{}", start_dir.display(), std::path::MAIN_SEPARATOR))
        .allow_empty(true)
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            let trimmed = input.trim();
            if trimmed.is_empty() || Path::new(trimmed).is_file() {
                Ok(())
            } else {
                Err(format!("No such file: {}", trimmed))
            }
        })
        .interact_text()?;

    let trimmed = answer.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(PathBuf::from(trimmed)))
    }
}
