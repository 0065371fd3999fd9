/// Generation settings.
///
/// The defaults reproduce the canonical stress test: 1000 globals, 200 prints,
/// five-letter names, written to `test.txt`.
use std::path::PathBuf;

use anyhow::{Result, bail};

pub const DEFAULT_OUTPUT: &str = "test.txt";
pub const DEFAULT_GLOBALS: usize = 1000;
pub const DEFAULT_PRINTS: usize = 200;
pub const DEFAULT_NAME_LEN: usize = 5;

/// Where the generated program goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Create (or truncate) a file at this path.
    File(PathBuf),
    /// Standard output (`-o -`).
    Stdout,
}

impl Destination {
    /// `-` selects stdout; anything else is a file path.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Destination::Stdout
        } else {
            Destination::File(PathBuf::from(arg))
        }
    }

    /// Display form used in the summary line.
    pub fn label(&self) -> String {
        match self {
            Destination::File(path) => path.display().to_string(),
            Destination::Stdout => "<stdout>".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
    pub destination: Destination,
    /// Number of `let` declarations.
    pub globals: usize,
    /// Number of `print` statements.
    pub prints: usize,
    /// Length of the random lowercase part of each name.
    pub name_len: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            destination: Destination::File(PathBuf::from(DEFAULT_OUTPUT)),
            globals: DEFAULT_GLOBALS,
            prints: DEFAULT_PRINTS,
            name_len: DEFAULT_NAME_LEN,
        }
    }
}

impl GenConfig {
    /// Reject settings that cannot produce a well-formed program.
    ///
    /// Called before the destination is opened, so a bad config never
    /// truncates an existing file.
    pub fn validate(&self) -> Result<()> {
        if self.name_len == 0 {
            bail!("name length must be at least 1");
        }
        if self.globals == 0 && self.prints > 0 {
            bail!(
                "cannot emit {} print statement(s) without any globals to reference",
                self.prints
            );
        }
        Ok(())
    }
}
