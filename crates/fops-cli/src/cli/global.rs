use clap::ValueEnum;

/// How command results are written to stdout. Status lines always go to stderr.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Aligned columns, colored by audit status on a terminal.
    Table,
    /// Compact single-line JSON, for piping.
    Raw,
}

/// The subset of top-level flags handlers care about. `--verbose` only
/// affects the log filter, so it stops at `main`.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
}
