use fops_core::entities::ChatMessage;
use fops_views::ChatView;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::chat::ChatAskArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Spinner;

#[derive(Debug, Serialize)]
struct ChatAnswer {
    question: String,
    answer: String,
    citations: Vec<String>,
    refused: bool,
}

impl ChatAnswer {
    fn new(question: &str, message: &ChatMessage) -> Self {
        Self {
            question: question.to_string(),
            answer: message.content.clone(),
            citations: message.chip_labels(),
            refused: message.refused,
        }
    }
}

/// One question, one answer, then exit.
pub async fn run(args: &ChatAskArgs, ctx: AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let manual_name = args
        .manual_name
        .clone()
        .unwrap_or_else(|| ctx.config.chat.manual_name.clone());
    let mut view = ChatView::new(ctx.client, ctx.session, manual_name);

    let Some(turn) = view.begin(&args.question) else {
        anyhow::bail!("chat ask: question must not be empty");
    };

    let spinner = Spinner::start("Thinking...");
    let outcome = view.send(&turn).await;
    spinner.done();
    view.complete(turn, outcome);

    let reply = view
        .messages()
        .last()
        .ok_or_else(|| anyhow::anyhow!("chat ask: no reply recorded"))?;
    output(&ChatAnswer::new(&args.question, reply), flags.format)
}
