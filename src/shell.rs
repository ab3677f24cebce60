//! Interactive autocomplete shell.
//!
//! Thin glue around [`KokuaTrie`]: read a prefix per line, query the trie,
//! render the suggestions. The shell is where trie errors become user-facing
//! text; the trie itself never prints or logs. Streams are generic so tests
//! can drive whole sessions from memory buffers.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tracing::warn;

use crate::trie::KokuaTrie;

/// Input token that ends an interactive session.
pub const EXIT_TOKEN: &str = "exit";

/// Words seeded into the shell's trie when no dictionary file is given.
pub const DEFAULT_WORDS: [&str; 8] = [
    "apple",
    "app",
    "apricot",
    "banana",
    "band",
    "bandana",
    "cat",
    "caterpillar",
];

/// Outcome of loading a dictionary file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DictionaryStats {
    /// Words accepted into the trie.
    pub inserted: usize,
    /// Lines the trie rejected and the loader skipped.
    pub skipped: usize,
}

/// Loads a word-per-line dictionary file into `trie`.
///
/// Lines are trimmed and blank lines ignored. A line the trie rejects is
/// skipped with a warning instead of aborting the load, so one bad entry
/// cannot take the whole dictionary down. I/O failures do abort: a
/// half-read file is not a usable lexicon.
pub fn load_dictionary<P: AsRef<Path>>(
    path: P,
    trie: &mut KokuaTrie,
) -> io::Result<DictionaryStats> {
    let reader = BufReader::new(File::open(path)?);
    let mut stats = DictionaryStats::default();

    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if word.is_empty() {
            continue;
        }
        match trie.insert(word) {
            Ok(()) => stats.inserted += 1,
            Err(error) => {
                warn!(word, %error, "skipping dictionary entry");
                stats.skipped += 1;
            }
        }
    }
    Ok(stats)
}

/// An interactive prefix-lookup session over a pair of streams.
///
/// Each line of input is one prefix query. The session ends at the
/// [`EXIT_TOKEN`] or at end of input; a query the trie rejects is reported
/// and the session continues.
#[derive(Debug)]
pub struct Shell<R, W> {
    trie: KokuaTrie,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a session over an already-populated trie.
    pub fn new(trie: KokuaTrie, input: R, output: W) -> Self {
        Self {
            trie,
            input,
            output,
        }
    }

    /// Runs the read-query-render loop to completion.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "Enter a prefix to autocomplete (or '{EXIT_TOKEN}' to quit):"
        )?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                // End of input behaves like an explicit exit.
                break;
            }
            let prefix = line.trim();
            if prefix == EXIT_TOKEN {
                break;
            }

            match self.trie.autocomplete(prefix) {
                Ok(words) if words.is_empty() => {
                    writeln!(self.output, "No suggestions for prefix: {prefix}")?;
                }
                Ok(words) => {
                    writeln!(self.output, "Suggestions: {}", words.join(" "))?;
                }
                Err(error) => {
                    writeln!(self.output, "Error: {error}")?;
                }
            }
        }
        Ok(())
    }
}
