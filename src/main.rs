//! kuji command line
//!
//! Interactive console by default; `coin`, `die` and `range` run one draw.

use clap::{Parser, Subcommand};
use kuji::{
    config::ConfigLoader,
    console::{Command, Console},
    draws::{DrawSession, Locale},
    errors::KujiResult,
    KujiConfig,
};
use log::{error, info};
use serde_json::json;
use std::{io, path::PathBuf, process::ExitCode};
use tokio::io::BufReader;

#[derive(Parser)]
#[command(name = "kuji")]
#[command(about = "Coin flips, die rolls and range draws", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Reveal delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Display language (en, ja)
    #[arg(long)]
    locale: Option<Locale>,

    /// Print one-shot results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from standard input (default)
    Interactive,

    /// Flip a coin
    Coin,

    /// Roll a die
    Die {
        /// Number of sides
        #[arg(short, long)]
        sides: Option<u32>,
    },

    /// Draw an integer between MIN and MAX inclusive
    Range {
        #[arg(allow_hyphen_values = true)]
        min: String,
        #[arg(allow_hyphen_values = true)]
        max: String,
    },
}

fn load_config(cli: &Cli) -> KujiResult<KujiConfig> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::new().with_path(path),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load()?;

    // CLI options win over file and environment
    if let Some(delay_ms) = cli.delay_ms {
        config.animation.delay_ms = delay_ms;
    }
    if let Some(locale) = cli.locale {
        config.display.locale = locale;
    }
    config
        .validate()
        .map_err(kuji::errors::ConfigurationError::from)?;
    Ok(config)
}

async fn run(cli: Cli) -> KujiResult<()> {
    let config = load_config(&cli)?;
    let session = DrawSession::from_config(&config);

    let command = match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => {
            let mut console = Console::new(session, io::stdout(), config.display.show_history_after_draw);
            info!("Starting interactive console (reveal delay {:?})", console.session().delay());
            println!("{}", kuji::console::HELP);
            return console.run(BufReader::new(tokio::io::stdin())).await;
        }
        Commands::Coin => Command::Coin,
        Commands::Die { sides } => Command::Die(sides),
        Commands::Range { min, max } => Command::Range(min, max),
    };

    if cli.json {
        let mut console = Console::new(session, io::sink(), false);
        let result = console.run_once(command).await?;
        let output = json!({
            "result": result,
            "view": console.session().view(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let mut console = Console::new(session, io::stdout(), false);
        console.run_once(command).await?;
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    exit_code(run(cli).await)
}

fn exit_code(outcome: KujiResult<()>) -> ExitCode {
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
