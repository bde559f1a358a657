//! The `init` subcommand

use anyhow::{Context, Result};
use console::style;

use super::args::InitArgs;
use crate::collection::Collection;

/// Create a new collection holding one model and the default deck
pub fn run_init(args: &InitArgs) -> Result<()> {
    let path = args.collection_path();

    let collection = Collection::create(&path, &args.model, &args.fields)
        .with_context(|| format!("Failed to create collection at {}", path.display()))?;

    println!(
        "\n {} Created collection",
        style("◆").cyan().bold()
    );
    println!("   Path:   {}", style(collection.root().display()).dim());
    for model in collection.models().all() {
        println!(
            "   Model:  {} ({})",
            style(&model.name).yellow(),
            model.fields.join(", ")
        );
    }
    println!();

    Ok(())
}
