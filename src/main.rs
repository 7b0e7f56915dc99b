use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use vidsum::api::{HttpSummarizationApi, SummarizationApi};
use vidsum::config::Config;
use vidsum::controller::{SubmissionController, SubmitError};
use vidsum::ui::submission::{FormInput, SubmissionState};
use vidsum::{logging, ui};

#[derive(Parser, Debug)]
#[command(name = "vidsum", version, about = "Summarize videos with a remote AI service")]
struct Cli {
    /// Config file (default: ~/.config/vidsum/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the summarization service origin
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize one video and print the summary
    Summarize {
        /// Video URL to summarize
        #[arg(long)]
        url: String,

        /// Instructions for the summary (default from config)
        #[arg(long)]
        prompt: Option<String>,
    },

    /// Check that the summarization service is up
    Health,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    let api: Arc<dyn SummarizationApi> = Arc::new(
        HttpSummarizationApi::new(&config.service).context("Failed to build HTTP client")?,
    );
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    match cli.command {
        None => {
            logging::init_file();
            ui::run(&config, api, runtime.handle().clone())?;
            Ok(())
        }
        Some(Command::Summarize { url, prompt }) => {
            logging::init_stderr();
            let form = FormInput {
                video_url: url,
                prompt: prompt.unwrap_or_else(|| config.form.default_prompt.clone()),
            };
            runtime.block_on(summarize_once(api, form))
        }
        Some(Command::Health) => {
            logging::init_stderr();
            runtime.block_on(check_health(api))
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match &cli.api_url {
        Some(url) => Ok(config.with_base_url(url.clone())?),
        None => Ok(config),
    }
}

async fn summarize_once(api: Arc<dyn SummarizationApi>, form: FormInput) -> anyhow::Result<()> {
    let mut controller = SubmissionController::with_form(api, form);

    match controller.submit().await {
        Ok(SubmissionState::Succeeded { summary }) => {
            println!("{}", summary);
            Ok(())
        }
        Ok(SubmissionState::Failed { message }) => Err(anyhow!("{}", message)),
        Ok(other) => Err(anyhow!("Submission did not settle: {:?}", other)),
        Err(SubmitError::Validation { message }) => Err(anyhow!("{}", message)),
        Err(err @ SubmitError::InFlight) => Err(err.into()),
    }
}

async fn check_health(api: Arc<dyn SummarizationApi>) -> anyhow::Result<()> {
    let status = api
        .health()
        .await
        .map_err(|err| anyhow!("{}", err.user_message()))?;

    match &status.message {
        Some(message) => println!("{}: {}", status.status, message),
        None => println!("{}", status.status),
    }

    if status.is_healthy() {
        Ok(())
    } else {
        Err(anyhow!("Service reported status '{}'", status.status))
    }
}
