use fops_core::entities::ChatMessage;
use fops_core::enums::ChatRole;
use fops_views::ChatView;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::context::AppContext;
use crate::progress::Spinner;
use crate::ui;

const QUIT_COMMANDS: [&str; 2] = ["/quit", "/exit"];

/// Interactive chat over stdin. Ends on `/quit`, `/exit`, or EOF.
pub async fn run(ctx: AppContext) -> anyhow::Result<()> {
    let mut view = ChatView::new(ctx.client, ctx.session, ctx.config.chat.manual_name);

    for message in view.messages() {
        print_message(message);
    }
    if view.shows_admin_link() {
        ui::note("Admin Portal: run `fops admin --help` for uploads and analytics.");
    }
    ui::note("Type a question, or /quit to leave.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if QUIT_COMMANDS.contains(&line) {
            break;
        }

        let Some(turn) = view.begin(line) else {
            continue;
        };

        let spinner = Spinner::start("Thinking...");
        let outcome = view.send(&turn).await;
        spinner.done();
        view.complete(turn, outcome);

        if let Some(reply) = view.messages().last() {
            print_message(reply);
        }
    }

    Ok(())
}

fn print_message(message: &ChatMessage) {
    println!("{}", format_message(message));
}

fn format_message(message: &ChatMessage) -> String {
    let mut out = format!("{}: {}", message.role.avatar(), message.content);
    if message.role == ChatRole::Ai {
        for chip in message.chip_labels() {
            out.push_str(&format!("\n    [{chip}]"));
        }
        if message.refused {
            out.push_str("\n    (not covered by the manual)");
        }
    }
    out
}
