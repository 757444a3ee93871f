use clap::Parser;
use postman2playwright::{
    Result,
    cli::{Cli, Commands},
    commands::{self, ConvertCommandArgs},
    telemetry,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let _telemetry = telemetry::init_telemetry()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            to,
            env_file,
            no_env_template,
        } => {
            commands::execute_convert(ConvertCommandArgs {
                input_path: &input,
                output_dir: &output,
                target: &to,
                env_template: (!no_env_template).then_some(env_file.as_str()),
            })?;
        }
        Commands::List { input } => {
            commands::execute_list(&input)?;
        }
    }

    Ok(())
}
