use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

const TICK: Duration = Duration::from_millis(80);

/// Stderr spinner for one in-flight request. A no-op when stderr is not a
/// terminal or `--quiet` is set.
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    #[must_use]
    pub fn start(message: &str) -> Self {
        let bar = ui::terminal().spinners.then(|| {
            let bar = ProgressBar::new_spinner().with_message(message.to_string());
            if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
                bar.set_style(style);
            }
            bar.enable_steady_tick(TICK);
            bar
        });
        Self { bar }
    }

    /// Request finished; remove the spinner line.
    pub fn done(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    /// Request failed; leave the reason on the spinner line.
    pub fn fail(self, reason: &str) {
        if let Some(bar) = self.bar {
            bar.abandon_with_message(format!("failed: {reason}"));
        }
    }
}
