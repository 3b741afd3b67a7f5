//! memory-cards - play the memory game in a terminal.
//!
//! Reads commands from stdin, one per line:
//! - `start [topic]` / `restart [topic]`: fetch cards and deal a new board
//! - `<slot>`: flip the card in that slot
//! - `help`, `quit`

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use memory_cards::render::{
    parse_slot, render_board, render_card_images, render_notification, render_status,
    DEFAULT_COLUMNS,
};
use memory_cards::source::{build_client, DEFAULT_TIMEOUT};
use memory_cards::{
    CardSource, CreatureCatalog, FlipOutcome, GameConfig, GameController, ImageSearchCatalog,
    MovePolicy, StartOutcome,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Catalog {
    /// Six creatures from the creature catalog; topics are ignored
    Creature,
    /// Keyword search over the stock-image catalog
    Search,
}

/// Memory-matching card game with remote image catalogs
#[derive(Parser, Debug)]
#[command(name = "memory-cards")]
#[command(version, about, long_about = None)]
struct Args {
    /// Card catalog to deal from
    #[arg(long, value_enum, default_value_t = Catalog::Creature)]
    catalog: Catalog,

    /// Topic for the first game (search catalog only)
    #[arg(long)]
    topic: Option<String>,

    /// API key for the search catalog
    #[arg(long, env = "MEMORY_CARDS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Override the catalog endpoint
    #[arg(long)]
    base_url: Option<String>,

    /// Seed for reproducible shuffles
    #[arg(long)]
    seed: Option<u64>,

    /// How long a flipped pair stays face up, in milliseconds
    #[arg(long, default_value_t = 1000)]
    flip_delay_ms: u64,

    /// Count only clicks that reveal a new card as moves
    #[arg(long, default_value_t = false)]
    count_accepted_only: bool,

    /// Cards per row
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,

    /// Catalog request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        let policy = if self.count_accepted_only {
            MovePolicy::AcceptedFlips
        } else {
            MovePolicy::EveryClick
        };
        let config = GameConfig::new()
            .with_flip_reset_delay(Duration::from_millis(self.flip_delay_ms))
            .with_move_policy(policy);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    fn card_source(&self) -> Result<Box<dyn CardSource>> {
        let client = build_client(Duration::from_secs(self.timeout_secs))
            .context("failed to build the HTTP client")?;
        let source: Box<dyn CardSource> = match self.catalog {
            Catalog::Creature => {
                let catalog = CreatureCatalog::new(client);
                match &self.base_url {
                    Some(url) => Box::new(catalog.with_base_url(url.clone())),
                    None => Box::new(catalog),
                }
            }
            Catalog::Search => {
                let api_key = self
                    .api_key
                    .clone()
                    .context("the search catalog needs --api-key or MEMORY_CARDS_API_KEY")?;
                let catalog = ImageSearchCatalog::new(client, api_key);
                match &self.base_url {
                    Some(url) => Box::new(catalog.with_base_url(url.clone())),
                    None => Box::new(catalog),
                }
            }
        };
        Ok(source)
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Start(Option<String>),
    Flip(memory_cards::BoardIndex),
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let topic = (!rest.is_empty()).then(|| rest.to_string());

        let command = match word.to_ascii_lowercase().as_str() {
            "start" | "restart" | "s" => Command::Start(topic),
            "help" | "h" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => match parse_slot(line) {
                Some(index) => Command::Flip(index),
                None => Command::Unknown(line.to_string()),
            },
        };
        Some(command)
    }
}

const HELP: &str = "\
Commands:
  start [topic]    deal a new board (restart works too)
  <slot>           flip the card in that slot
  help             show this text
  quit             leave
";

fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stderr only, so log lines never land inside the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn draw<S: CardSource>(controller: &GameController<S>, columns: usize) {
    let board = controller.board();
    if !board.is_active() {
        return;
    }
    print!("{}", render_board(board, columns));
    print!("{}", render_card_images(board));
    print!("{}", render_status(board));
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging();

    let args = Args::parse();
    let source = args.card_source()?;
    let mut controller = GameController::new(source, args.game_config());
    let mut last_topic = args.topic.clone();

    let seed = controller.session().seed();
    tracing::info!(catalog = ?args.catalog, seed, "memory-cards ready");
    print!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read from stdin")? else { break };
                let Some(command) = Command::parse(&line) else { continue };

                match command {
                    Command::Start(topic) => {
                        if topic.is_some() {
                            last_topic = topic;
                        }
                        if controller.source().uses_topic() && last_topic.is_none() {
                            println!("Which topic? Type `start <topic>`.");
                            continue;
                        }
                        match controller.start_game(last_topic.as_deref()).await {
                            StartOutcome::Started { pairs } => {
                                println!("New game: find {pairs} pairs.");
                                draw(&controller, args.columns);
                            }
                            StartOutcome::NotStarted(notification) => {
                                print!("{}", render_notification(&notification));
                            }
                        }
                    }
                    Command::Flip(index) => {
                        match controller.flip(index, Instant::now()) {
                            FlipOutcome::Ignored(reason) => println!("({reason})"),
                            FlipOutcome::Matched(..) => {
                                draw(&controller, args.columns);
                                println!("Match!");
                            }
                            FlipOutcome::Mismatched(..) => {
                                draw(&controller, args.columns);
                                println!("No match.");
                            }
                            FlipOutcome::Revealed(_) | FlipOutcome::AlreadyFlipped(_) => {
                                draw(&controller, args.columns);
                            }
                        }
                    }
                    Command::Help => print!("{HELP}"),
                    Command::Quit => break,
                    Command::Unknown(text) => println!("Unknown command `{text}`. Type `help`."),
                }
            }
            _ = wait_for(controller.reset_deadline()) => {
                if controller.fire_due_reset(Instant::now()) {
                    draw(&controller, args.columns);
                }
            }
        }
    }

    Ok(())
}
