use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Cosmetic "processing" spinner shown before an aggregation runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pacing {
    delay: Duration,
}

impl Pacing {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        !self.delay.is_zero()
    }

    pub fn wait(&self, message: &str) {
        if !self.is_enabled() {
            return;
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("{}...", message));
        spinner.enable_steady_tick(Duration::from_millis(120));
        std::thread::sleep(self.delay);
        spinner.finish_and_clear();
    }
}
