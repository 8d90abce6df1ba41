//! Kapu - Main entrypoint.
//!
//! Loads configuration, initializes logging, builds the sensitive trie from
//! the configured word list and runs the requested command.

use anyhow::Context;
use clap::{Parser, Subcommand};
use kapu_lib::config::{ConfigLoader, KapuConfig, LogConfig, ENV_PREFIX};
use kapu_lib::data_structures::SensitiveTrie;
use kapu_lib::scanner;
use kapu_lib::word_list::read_utf8;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Kapu.
#[derive(Parser, Debug)]
#[clap(name = "kapu", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser, global = true)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Options selecting the word list, overriding the configuration file.
#[derive(clap::Args, Debug)]
struct WordListArgs {
    /// Path to the sensitive word list
    #[clap(short, long, value_parser)]
    words: Option<PathBuf>,

    /// Delimiter separating words in the list
    #[clap(short, long)]
    delimiter: Option<String>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Report the sensitive words found in text files
    Scan {
        #[clap(flatten)]
        word_list: WordListArgs,

        /// Print reports as JSON
        #[clap(long)]
        json: bool,

        /// Text files to scan
        #[clap(required = true, value_parser)]
        texts: Vec<PathBuf>,
    },

    /// Print a text file with every sensitive word masked
    Mask {
        #[clap(flatten)]
        word_list: WordListArgs,

        /// Replacement char for masked words
        #[clap(short, long, default_value_t = '*')]
        mask: char,

        /// Text file to mask
        #[clap(value_parser)]
        text: PathBuf,
    },

    /// Print the number of words in the word list
    Count {
        #[clap(flatten)]
        word_list: WordListArgs,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.level))
        .context("Invalid log filter")?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_thread_names(true);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.context("Failed to set global tracing subscriber")
}

/// Builds the trie from the configured word list, applying CLI overrides.
fn load_trie(config: &mut KapuConfig, args: WordListArgs) -> anyhow::Result<SensitiveTrie> {
    if let Some(words) = args.words {
        config.word_list.path = Some(words);
    }
    if let Some(delimiter) = args.delimiter {
        config.word_list.delimiter = delimiter;
    }

    let source = config.word_list.source()?;
    let trie = SensitiveTrie::from_source(config.trie.clone(), &source)
        .with_context(|| format!("Failed to load word list {}", source.path().display()))?;
    info!(words = trie.count_words(), "Sensitive word list loaded");
    Ok(trie)
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let mut config = match args.command {
        // gen-config must work even when the current configuration is broken
        Command::GenConfig { .. } => KapuConfig::default(),
        _ => loader.load().context("Failed to load configuration")?,
    };

    init_logging(&config.log)?;

    match args.command {
        Command::Scan {
            word_list,
            json,
            texts,
        } => {
            let trie = load_trie(&mut config, word_list)?;
            let reports = scanner::scan_files(&trie, &texts, config.scan.worker_threads)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    println!("{}: {}", report.path.display(), report.words.join(", "));
                }
            }
            Ok(())
        }
        Command::Mask {
            word_list,
            mask,
            text,
        } => {
            let trie = load_trie(&mut config, word_list)?;
            let contents = read_utf8(&text)
                .with_context(|| format!("Failed to read {}", text.display()))?;
            print!("{}", trie.mask(&contents, mask));
            Ok(())
        }
        Command::Count { word_list } => {
            let trie = load_trie(&mut config, word_list)?;
            println!("{}", trie.count_words());
            Ok(())
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&config).context("Failed to serialize config")?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
