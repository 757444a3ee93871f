//! Convert command implementation
//!
//! Converts a Postman collection into Playwright test files.

use crate::converters::{ConvertOptions, Converter, GeneratedSuite, PlaywrightConverter};
use crate::error::{ConvertError, Result};
use crate::loader::load_collection;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments of the convert command
#[derive(Debug, Clone, Copy)]
pub struct ConvertCommandArgs<'a> {
    pub input_path: &'a Path,
    pub output_dir: &'a Path,
    pub target: &'a str,
    /// Environment template file name; `None` disables it
    pub env_template: Option<&'a str>,
}

/// Execute the convert command
#[tracing::instrument(skip_all, fields(input = %args.input_path.display(), target = args.target))]
pub fn execute_convert(args: ConvertCommandArgs<'_>) -> Result<()> {
    let converter = match args.target.to_lowercase().as_str() {
        "playwright" => PlaywrightConverter::new(),
        _ => {
            return Err(ConvertError::ValidationError(format!(
                "Unsupported target format: {}. Supported: playwright",
                args.target
            )));
        }
    };

    let collection = load_collection(args.input_path)?;
    println!(
        "{} Loaded collection: {}",
        "✓".green(),
        args.input_path.display()
    );

    let options = ConvertOptions {
        env_template: args.env_template.map(str::to_string),
    };
    let suite = converter.convert_collection(&collection, &options);

    if suite.files.is_empty() {
        println!("{}", "No convertible requests found".yellow());
    }

    write_suite(&suite, args.output_dir)?;

    Ok(())
}

/// Write generated files into `output_dir` and the environment template
/// into its parent directory. Returns the written paths.
pub fn write_suite(suite: &GeneratedSuite, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    fs::create_dir_all(output_dir)?;

    for file in &suite.files {
        let path = output_dir.join(&file.file_name);
        fs::write(&path, &file.contents)?;
        println!("{} Generated test: {}", "✓".green(), path.display());
        if file.unconverted_lines > 0 {
            println!(
                "  {} {} line(s) in '{}' need manual review",
                "⚠".yellow(),
                file.unconverted_lines,
                file.source_name
            );
        }
        written.push(path);
    }

    if let Some((name, contents)) = &suite.env_template {
        let env_dir = output_dir.parent().unwrap_or(output_dir);
        let path = env_dir.join(name);
        fs::write(&path, contents)?;
        println!(
            "{} Generated environment template: {} ({} variables)",
            "✓".green(),
            path.display(),
            suite.variables.len()
        );
        written.push(path);
    }

    tracing::info!(files = written.len(), "Conversion finished");

    Ok(written)
}
