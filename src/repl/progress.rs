use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

use crate::utils::formatting::format_duration;

/// Spinner shown while the report service is generating a report.
pub struct FetchSpinner {
    bar: ProgressBar,
    start_time: Instant,
}

impl FetchSpinner {
    pub fn start(business_name: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg} {elapsed:.dim}") {
            bar.set_style(style);
        }
        bar.set_message(format!("Loading report for {}...", business_name));
        bar.enable_steady_tick(Duration::from_millis(120));
        Self {
            bar,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }

    pub fn finish_ok(self) -> u64 {
        let ms = self.elapsed_ms();
        self.bar
            .finish_with_message(format!("Report ready in {}", format_duration(ms)));
        ms
    }

    pub fn finish_err(self) -> u64 {
        let ms = self.elapsed_ms();
        self.bar.abandon_with_message("Report generation failed");
        ms
    }
}
