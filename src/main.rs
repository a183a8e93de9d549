use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use apologen::clipboard::SystemClipboard;
use apologen::config::Config;
use apologen::flow::{ApologyFlow, FlowSettings, RequestState};
use apologen::pages::{ABOUT, HOME};
use apologen::{logging, provider, ui};

#[derive(Debug, Parser)]
#[command(
    name = "apologen",
    version,
    about = "Generate sincere, heartfelt apologies with a hosted language model"
)]
struct Cli {
    /// Path to config file (default: ~/.config/apologen/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate one apology and print it (reads stdin when no description is given)
    Generate {
        /// Copy the apology to the clipboard as well
        #[arg(long)]
        copy: bool,

        /// With --copy on Linux: seconds to keep serving the clipboard before
        /// exiting (ends early once something else is copied)
        #[arg(long, value_name = "SECS", default_value_t = 30, requires = "copy")]
        hold_secs: u64,

        /// What happened and what you are apologizing for
        description: Vec<String>,
    },
    /// Print the About page
    About,
    /// Print tips for effective apologies
    Guide,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Command::About) => {
            print!("{}", ABOUT.to_plain_text());
            Ok(())
        }
        Some(Command::Guide) => {
            print!("{}", HOME.to_plain_text());
            Ok(())
        }
        Some(Command::Generate {
            copy,
            hold_secs,
            description,
        }) => {
            logging::init_cli_tracing();
            let config = load_config(cli.config.as_deref())?;
            let description = if description.is_empty() {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read description from stdin")?;
                buf
            } else {
                description.join(" ")
            };
            let copy = copy.then(|| Duration::from_secs(hold_secs));
            generate_once(&config, description, copy)
        }
        None => {
            logging::init_tui_tracing();
            let config = load_config(cli.config.as_deref())?;
            ui::run(&config).context("Terminal UI failed")
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file '{}' not found", path.display());
            }
            Config::load_from(path)?
        }
        None => Config::load()?,
    };
    Ok(config)
}

/// `copy` is how long the clipboard may be held after writing, if copying.
fn generate_once(
    config: &Config,
    description: String,
    copy: Option<Duration>,
) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime.block_on(async {
        let clipboard = Arc::new(match copy {
            Some(hold) => SystemClipboard::holding(hold),
            None => SystemClipboard::new(),
        });
        let mut flow = ApologyFlow::from_provider(
            provider::from_config(config),
            clipboard.clone(),
            FlowSettings::from(&config.flow),
        );
        flow.set_description(description);

        match flow.generate().await {
            Ok(_) => {}
            // The Failed state carries the message.
            Err(e) if e.is_reported() => {}
            Err(e) => anyhow::bail!("{}", e),
        }

        let outcome = match flow.state() {
            RequestState::Succeeded { result } => Ok(result.clone()),
            RequestState::Failed { error } => Err(error.clone()),
            other => Err(format!(
                "Generation ended in unexpected state '{}'",
                other.label()
            )),
        };

        let result = outcome.map_err(anyhow::Error::msg)?;
        println!("{}", result);
        if copy.is_some() {
            if let Some(hold) = clipboard.hold() {
                eprintln!(
                    "Serving the clipboard for up to {}s; paste it now (copying something else ends this early).",
                    hold.as_secs()
                );
            }
            match flow.copy_result() {
                Ok(_) if clipboard.hold().is_some() => eprintln!("Clipboard released."),
                Ok(_) => eprintln!("Copied to clipboard."),
                Err(e) => eprintln!("Warning: {}", e),
            }
        }
        Ok::<(), anyhow::Error>(())
    })
}
