//! Spinner shown while a Spotify call is in flight.
//!
//! [`Spinner`] is a guard: the spinner ticks on its own thread from the moment
//! it is created and is cleared when the guard is dropped, whichever way the
//! surrounding code exits. [`with_spinner`] wraps a single future in one.

use std::{borrow::Cow, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// Starts a spinner with `message`. A disabled spinner draws nothing but
    /// behaves the same otherwise.
    pub fn new(message: impl Into<Cow<'static, str>>, enabled: bool) -> Self {
        let pb = if enabled {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };

        pb.set_style(
            ProgressStyle::with_template("{spinner:.blue} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.set_message(message);
        if enabled {
            pb.enable_steady_tick(TICK_INTERVAL);
        }

        Self { pb }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.pb.finish_and_clear();
    }
}

/// Awaits `fut` while a spinner with `message` is shown.
///
/// The output of `fut`, including any error it carries, is returned as is.
pub async fn with_spinner<F, T>(enabled: bool, message: impl Into<Cow<'static, str>>, fut: F) -> T
where
    F: Future<Output = T>,
{
    let _spinner = Spinner::new(message, enabled);
    fut.await
}
