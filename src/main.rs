use clap::{Parser, Subcommand};
use teller::{
    domain::OrchestratorMode,
    service::{mock::generator, orchestrator::Orchestrator},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "teller", version, about = "An event-sourced bank account CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the account session CSV file to process
    #[arg(value_name = "FILE")]
    file: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate dummy session data to a file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "session.csv", value_name = "FILE")]
        output: String,

        /// Number of actions to generate
        #[arg(short, long, default_value = "20", value_name = "COUNT")]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Cli::parse();

    match args.command {
        Some(Commands::Generate { output, count }) => {
            generator(&output, count)?;
        }
        None => {
            let file = args
                .file
                .ok_or("Please provide a CSV file path or use 'generate' command")?;

            let orchestrator = Orchestrator::new(OrchestratorMode::Csv { file_path: file }).await;
            let final_state = orchestrator.process().await?;
            Orchestrator::output_csv(&final_state)?;
        }
    }

    Ok(())
}
