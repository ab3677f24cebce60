//! Kokua Trie - Main entrypoint.
//!
//! Starts the interactive autocomplete shell: builds a trie from a
//! dictionary file or the built-in word list, then answers prefix queries
//! read line by line from standard input.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use kokua_trie_lib::shell::{load_dictionary, Shell, DEFAULT_WORDS};
use kokua_trie_lib::trie::{KokuaTrie, KokuaTrieConfig};
use tracing::info;

/// Command line arguments for the autocomplete shell.
#[derive(Parser, Debug)]
#[clap(name = "Kokua Trie", version, author, about)]
struct Args {
    /// Path to a dictionary file with one word per line; the built-in
    /// word list is used when absent
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Fold ASCII uppercase input to lowercase instead of rejecting it
    #[clap(long)]
    fold_case: bool,

    /// Longest accepted word, in letters
    #[clap(long)]
    max_word_len: Option<usize>,
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never interleave with the prompt on stdout.
fn init_logging() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global tracing subscriber: {e}"))
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    // Initialize logging early to capture any startup errors
    init_logging()?;

    let args = Args::parse();

    let mut config = KokuaTrieConfig::new().with_fold_case(args.fold_case);
    if let Some(max_word_len) = args.max_word_len {
        if max_word_len == 0 {
            anyhow::bail!("--max-word-len must be at least 1");
        }
        config = config.with_max_word_len(max_word_len);
    }

    let mut trie = KokuaTrie::with_config(config);
    match &args.dictionary {
        Some(path) => {
            let stats = load_dictionary(path, &mut trie)
                .map_err(|e| anyhow::anyhow!("Failed to read dictionary {}: {e}", path.display()))?;
            info!(
                inserted = stats.inserted,
                skipped = stats.skipped,
                path = %path.display(),
                "dictionary loaded"
            );
        }
        None => {
            for word in DEFAULT_WORDS {
                trie.insert(word)?;
            }
            info!(words = DEFAULT_WORDS.len(), "seeded built-in word list");
        }
    }

    let mut shell = Shell::new(trie, io::stdin().lock(), io::stdout().lock());
    shell.run()?;

    Ok(())
}
