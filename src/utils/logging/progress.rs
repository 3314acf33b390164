//! Spinners for network waits, using the indicatif crate

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Template of the default spinner
pub const DEFAULT_SPINNER_TEMPLATE: &str = "{spinner:.green} {elapsed_precise} {msg}";

/// Create a ticking spinner for an operation of unknown length
#[must_use]
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template(DEFAULT_SPINNER_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Stop a spinner and remove it from the terminal
pub fn finish_and_clear(pb: &ProgressBar) {
    pb.finish_and_clear();
}
