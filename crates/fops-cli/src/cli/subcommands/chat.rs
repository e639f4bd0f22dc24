use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum ChatCommands {
    /// Ask one question and print the answer with its citations.
    Ask(ChatAskArgs),
    /// Interactive chat. `/quit` exits.
    Repl,
}

#[derive(Clone, Debug, Args)]
pub struct ChatAskArgs {
    pub question: String,
    /// Manual to ask about (defaults to `chat.manual_name`).
    #[arg(long)]
    pub manual_name: Option<String>,
}
