//! The `import` subcommand

use std::fs;

use anyhow::{Context, Result};
use console::style;

use super::args::ImportArgs;
use super::prompts::{confirm_step, prompt_for_json_file};
use crate::collection::Collection;
use crate::pipeline::{media_dir_for, Importer};
use crate::report::ImportSummary;
use crate::utils::{
    create_group_progress_bar, create_spinner, finish_with_success, print_banner,
    print_completion, print_config, print_info, print_step_header, print_success, print_warning,
};

/// Run a full import: open the collection, import the file, save
pub fn run_import(args: &ImportArgs) -> Result<()> {
    let input = match &args.input {
        Some(path) => path.clone(),
        None => match prompt_for_json_file()? {
            Some(path) => path,
            None => {
                println!("Cancelled by user.");
                return Ok(());
            }
        },
    };

    let config = args.resolve_config()?;
    let collection_path = args.collection_path();

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&input, &collection_path, &config.model_name, config.import_mode);

    if !args.no_confirm && !confirm_step("Proceed with import?")? {
        println!("Cancelled by user.");
        return Ok(());
    }

    // Step 1: Open collection
    print_step_header(1, "Open Collection");
    let spinner = create_spinner("Reading collection...");
    let mut collection = match Collection::open(&collection_path) {
        Ok(collection) => collection,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e).with_context(|| {
                format!(
                    "Failed to open collection at {}. Create one with `cardport init`.",
                    collection_path.display()
                )
            });
        }
    };
    spinner.finish_and_clear();
    print_success(&format!(
        "Collection opened ({} notes)",
        collection.notes().len()
    ));

    // Step 2: Import entries
    print_step_header(2, "Import Entries");
    let json_text = fs::read_to_string(&input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let pb = create_group_progress_bar();
    let result = Importer::new(collection.services(), &config, media_dir_for(&input))
        .with_progress(pb.clone())
        .run(&json_text);
    let outcome = match result {
        Ok(outcome) => {
            finish_with_success(&pb, "All deck groups imported");
            outcome
        }
        Err(e) => {
            pb.abandon();
            return Err(e).context("Import failed; the collection was not saved");
        }
    };

    for issue in &outcome.issues {
        print_warning(&issue.to_string());
    }

    // Step 3: Save
    print_step_header(3, "Save Collection");
    if args.dry_run {
        print_info("Dry run: collection left unchanged");
    } else {
        collection
            .close()
            .with_context(|| format!("Failed to save collection: {}", collection_path.display()))?;
        print_success(&format!("Saved to {}", collection_path.display()));
    }

    ImportSummary::from_outcome(&outcome).display();

    println!();
    for line in outcome.summary_text().lines() {
        println!("    {}", style(line).dim());
    }

    print_completion();

    Ok(())
}
