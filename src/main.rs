//! bingo-cards CLI
//!
//! Thin wrapper around the library for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Three cards as a printable HTML page
//! bingo-cards generate --words words.txt --count 3 --format html --output cards.html
//!
//! # Read words from stdin, fixed seed, custom theme and free space image
//! cat words.txt | bingo-cards generate --words - --seed 42 --theme "#0A7E3B" --free-image star.png
//!
//! # Page through cards in the terminal (n = next, p = previous, q = quit)
//! bingo-cards view --words words.txt --count 5
//!
//! # Count usable words in a list
//! bingo-cards count --words words.txt
//! ```

use std::io::{BufRead, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use bingo_cards::render::{render_cards, text};
use bingo_cards::{
    generate_cards, CardCursor, CardGenerator, CardRng, FreeSpaceImage, GeneratorConfig,
    OutputFormat, ThemeColor, WordPool,
};

/// Bingo card generator
#[derive(Parser)]
#[command(name = "bingo-cards")]
#[command(version)]
#[command(about = "Generate printable bingo cards from a word list")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate bingo cards
    Generate {
        /// Word list, one word or phrase per line ("-" for stdin)
        #[arg(short, long)]
        words: PathBuf,

        /// Number of cards to generate
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Image shown in the free space
        #[arg(long)]
        free_image: Option<PathBuf>,

        /// Theme color as #RRGGBB
        #[arg(short, long, default_value = ThemeColor::APP_DEFAULT)]
        theme: ThemeColor,

        /// Seed for reproducible cards (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Generator config (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Page through generated cards (reads n/p/q commands from stdin)
    View {
        /// Word list, one word or phrase per line
        #[arg(short, long)]
        words: PathBuf,

        /// Number of cards to generate
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Seed for reproducible cards
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Count the usable words in a list
    Count {
        /// Word list ("-" for stdin)
        #[arg(short, long)]
        words: PathBuf,
    },
}

fn setup_logging(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "bingo_cards=info",
        2 => "bingo_cards=debug",
        _ => "bingo_cards=trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn read_words(path: &Path) -> Result<WordPool> {
    let text = if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read words from stdin")?;
        text
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?
    };
    let pool = WordPool::parse(&text);
    debug!(words = pool.len(), "parsed word list");
    Ok(pool)
}

fn view(words: &Path, count: usize, seed: Option<u64>) -> Result<()> {
    let pool = read_words(words)?;
    let mut rng = seed.map_or_else(CardRng::from_entropy, CardRng::new);
    let cards = generate_cards(
        &pool,
        count,
        None::<FreeSpaceImage>,
        ThemeColor::default(),
        &mut rng,
    )?;

    let Some(mut cursor) = CardCursor::new(cards.len()) else {
        return Ok(());
    };
    print!("{}", text::render_card(&cards[cursor.index()], cursor.index(), cards.len()));

    for line in std::io::stdin().lock().lines() {
        let line = line.context("failed to read command")?;
        let index = match line.trim() {
            "n" | "next" => cursor.forward(),
            "p" | "prev" => cursor.back(),
            "q" | "quit" => break,
            "" => continue,
            other => {
                eprintln!("unknown command `{other}` (n = next, p = previous, q = quit)");
                continue;
            }
        };
        debug!(index, "showing card");
        print!("{}", text::render_card(&cards[index], index, cards.len()));
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            words,
            count,
            free_image,
            theme,
            seed,
            format,
            output,
            config,
        } => {
            let mut config = match config {
                Some(path) => GeneratorConfig::load(&path)
                    .with_context(|| format!("failed to load config {}", path.display()))?,
                None => GeneratorConfig::default(),
            };
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }

            let pool = read_words(&words)?;
            let free_space = free_image
                .map(|path| {
                    FreeSpaceImage::load(&path)
                        .with_context(|| format!("failed to read image {}", path.display()))
                })
                .transpose()?;

            let mut rng = config.rng();
            let generator = CardGenerator::new(config);
            let cards = generator.generate(&pool, count, free_space, theme, &mut rng)?;
            info!(cards = cards.len(), seed = rng.seed(), %format, "generated cards");

            let rendered = render_cards(&cards, format).context("failed to render cards")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Wrote {} card(s) to {}", cards.len(), path.display());
                }
                None => print!("{rendered}"),
            }
        }

        Commands::View { words, count, seed } => view(&words, count, seed)?,

        Commands::Count { words } => {
            let pool = read_words(&words)?;
            println!("{} words entered", pool.len());
        }
    }

    Ok(())
}
