//! What the attached terminal can show, decided once from the global flags.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

const MIN_TABLE_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default)]
pub struct Terminal {
    /// Color status cells in table output.
    pub color: bool,
    /// Draw request spinners on stderr.
    pub spinners: bool,
    /// `COLUMNS`, when set to something a table fits in.
    pub width: Option<usize>,
    pub quiet: bool,
}

impl Terminal {
    fn detect(flags: &GlobalFlags) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self {
            color: flags.format == OutputFormat::Table
                && std::io::stdout().is_terminal()
                && !flags.quiet
                && !no_color,
            spinners: !flags.quiet && std::io::stderr().is_terminal(),
            width: std::env::var("COLUMNS")
                .ok()
                .and_then(|cols| cols.parse().ok())
                .filter(|cols| *cols >= MIN_TABLE_WIDTH),
            quiet: flags.quiet,
        }
    }
}

static TERMINAL: OnceLock<Terminal> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    if TERMINAL.set(Terminal::detect(flags)).is_err() {
        tracing::debug!("terminal settings already initialized");
    }
}

/// Settings from [`init`]; plain output before that.
#[must_use]
pub fn terminal() -> Terminal {
    TERMINAL.get().copied().unwrap_or_default()
}

/// Status line on stderr, suppressed by `--quiet`.
pub fn note(message: &str) {
    if !terminal().quiet {
        eprintln!("{message}");
    }
}
