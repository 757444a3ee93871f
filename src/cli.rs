use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::converters::DEFAULT_ENV_TEMPLATE;

#[derive(Parser)]
#[command(name = "postman2playwright")]
#[command(version)]
#[command(about = "Convert Postman collections into Playwright tests", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a Postman collection to test files
    Convert {
        /// Path to the Postman collection (.json)
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory for generated tests
        #[arg(short, long, default_value = "tests/generated")]
        output: PathBuf,

        /// Target format (playwright)
        #[arg(short, long, default_value = "playwright")]
        to: String,

        /// Environment template file name, written next to the output directory
        #[arg(long, default_value = DEFAULT_ENV_TEMPLATE)]
        env_file: String,

        /// Do not write an environment template
        #[arg(long)]
        no_env_template: bool,
    },

    /// List folders and requests in a Postman collection
    List {
        /// Path to the Postman collection (.json)
        #[arg(short, long)]
        input: PathBuf,
    },
}
