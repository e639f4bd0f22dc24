use clap::{Args, Subcommand};

use crate::cli::subcommands::{AdminCommands, AuthCommands, ChatCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Sign in, sign up, and inspect the stored session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Ask the operations manual. Without a subcommand, starts an interactive chat.
    Chat {
        #[command(subcommand)]
        action: Option<ChatCommands>,
    },
    /// Admin console: manual uploads, re-indexing, analytics, audit export.
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
    /// Print the JSON schema of an API contract type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Contract name (e.g. `chat_response`). Omit to list names.
    pub type_name: Option<String>,
}
