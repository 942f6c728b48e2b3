use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use bingo_cards::io_utils::{bingo_cli_error, io_cli_error, simple_cli_error};
use bingo_cards::{build_cards, load_words, logging, render_html, render_json, CardConfig, CliError};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Json,
}

/// Generate randomized bingo cards from a word list.
#[derive(Parser, Debug)]
#[command(name = "bingo", version)]
#[command(after_help = "\
Examples:
  bingo buzzwords.txt > cards.html
  bingo buzzwords.txt -b -c 4 -s 4 -o cards.html
  bingo buzzwords.txt --seed 42 -f json")]
struct Cli {
    /// Word list, one term per line (UTF-8)
    #[arg(value_name = "WORDS_FILE")]
    words_file: PathBuf,

    /// Add one bonus field per card
    #[arg(short = 'b', long = "bonus-field")]
    bonus_field: bool,

    /// Number of cards to create
    #[arg(short = 'c', long = "num-cards", default_value_t = 1)]
    num_cards: usize,

    /// Number of rows and columns per card
    #[arg(short = 's', long = "card-size", default_value_t = bingo_cards::config::DEFAULT_CARD_SIZE)]
    card_size: usize,

    /// Heading printed above each card
    #[arg(short = 't', long, default_value = bingo_cards::config::DEFAULT_TITLE)]
    title: String,

    /// Output file (omit for stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Seed for reproducible cards
    #[arg(long)]
    seed: Option<u64>,

    /// More log output on stderr (repeatable)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only report errors
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn card_config(&self) -> CardConfig {
        CardConfig {
            card_size: self.card_size,
            num_cards: self.num_cards,
            include_bonus: self.bonus_field,
            title: self.title.clone(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(logging::level_for(cli.verbose, cli.quiet));
    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let cfg = cli.card_config();
    cfg.validate()
        .map_err(|e| bingo_cli_error("invalid options", e))?;

    let words = load_words(&cli.words_file)
        .map_err(|e| bingo_cli_error("loading words", e))?;

    let mut rng = match cli.seed {
        Some(seed) => {
            log::info!("using seed {seed}");
            ChaCha20Rng::seed_from_u64(seed)
        }
        None => ChaCha20Rng::from_entropy(),
    };
    let cards = build_cards(&words, &cfg, &mut rng);

    let doc = match cli.format {
        Format::Html => render_html(&cards, &cfg.title),
        Format::Json => render_json(&cards),
    }
    .map_err(|e| bingo_cli_error("rendering cards", e))?;

    match &cli.output {
        Some(path) => {
            fs::write(path, doc.as_bytes()).map_err(|e| io_cli_error("writing", path, e))?;
            log::info!("wrote {} bytes to {}", doc.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(doc.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| simple_cli_error(&format!("Error writing to stdout: {e}")))?;
        }
    }
    Ok(())
}
