use crate::models::collection::{Item, RequestItem};
use crate::{Result, loader};
use colored::*;
use std::path::Path;

pub fn execute_list(input_path: &Path) -> Result<()> {
    println!("{}", "Loading collection...".bright_blue());
    println!("  Path: {}", input_path.display());

    let collection = loader::load_collection(input_path)?;

    println!("\n{}", "✓ Collection loaded successfully".green());
    if let Some(ref info) = collection.info {
        println!("  Name: {}", info.name.bold());
    }
    println!();

    if collection.item.is_empty() {
        println!("{}", "No items found".yellow());
        return Ok(());
    }

    println!("{}", format!("Items ({}):", collection.item.len()).bold());
    for (idx, item) in collection.item.iter().enumerate() {
        print_item(item, idx + 1, 1);
    }

    Ok(())
}

fn print_item(item: &Item, number: usize, depth: usize) {
    let indent = "  ".repeat(depth);

    match item {
        Item::Folder(folder) => {
            println!(
                "{}{}. {} {}",
                indent,
                number,
                "Folder:".bright_cyan(),
                folder.name.bold()
            );
            for (idx, child) in folder.item.iter().enumerate() {
                print_item(child, idx + 1, depth + 1);
            }
        }
        Item::Request(request) => {
            println!("{}{}. {}", indent, number, request.name.cyan());
            match request.endpoint() {
                Some((method, url)) => println!(
                    "{}   {} {}",
                    indent,
                    method.to_uppercase().bright_yellow(),
                    url
                ),
                None => println!("{}   {}", indent, "missing method or URL (skipped)".red()),
            }
            let hooks = script_hooks(request);
            if !hooks.is_empty() {
                println!("{}   Scripts: {}", indent, hooks.join(", "));
            }
        }
    }
}

fn script_hooks(request: &RequestItem) -> Vec<&'static str> {
    let mut hooks = Vec::new();
    if request.prerequest_script().is_some() {
        hooks.push("prerequest");
    }
    if request.test_script().is_some() {
        hooks.push("test");
    }
    hooks
}
