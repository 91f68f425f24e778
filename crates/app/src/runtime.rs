//! The single cooperative loop.
//!
//! Input events, user refresh requests, the background refresh timer and
//! Ctrl-C are multiplexed with `tokio::select!`. Every handler runs to
//! completion before the next branch is polled, so renders never overlap
//! and refreshes settle in the order they started.

use std::time::Duration;

use platform::{DisplayBridge, InputSource};
use tokio::time::{interval, MissedTickBehavior};

use crate::app::App;
use crate::refresh::{RefreshHandle, RefreshRequests};
use crate::source::WeatherSource;

/// Loop settings.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeOptions {
    /// Background refresh period. The first tick fires one period after start.
    pub refresh_interval: Duration,
    /// Stop when the input source closes instead of idling on timers.
    pub exit_on_eof: bool,
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shutdown {
    /// Ctrl-C.
    Interrupted,
    /// The input source closed with `exit_on_eof` set.
    InputClosed,
}

impl Shutdown {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Interrupted => "interrupted",
            Self::InputClosed => "input closed",
        }
    }
}

/// Show the loading page, load the first snapshot, then serve until shutdown.
pub async fn run<S, B, I>(
    app: &mut App<S, B, RefreshHandle>,
    input: &mut I,
    refresh_requests: &mut RefreshRequests,
    options: RuntimeOptions,
) -> Shutdown
where
    S: WeatherSource,
    B: DisplayBridge,
    I: InputSource,
{
    app.start().await;

    let mut ticker = interval(options.refresh_interval.max(Duration::from_secs(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // First tick one full period from now, not immediately.
    ticker.reset();

    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    let mut input_open = true;

    loop {
        tokio::select! {
            _ = &mut interrupt => {
                tracing::info!("interrupted, shutting down");
                return Shutdown::Interrupted;
            }
            event = input.next_event(), if input_open => match event {
                Some(raw) => {
                    app.handle_event(&raw).await;
                }
                None if options.exit_on_eof => {
                    tracing::info!("input closed, shutting down");
                    return Shutdown::InputClosed;
                }
                None => {
                    tracing::info!("input closed, background refresh continues");
                    input_open = false;
                }
            },
            Some(()) = refresh_requests.recv() => {
                tracing::debug!("user refresh");
                app.refresh().await;
            }
            _ = ticker.tick() => {
                tracing::debug!("background refresh");
                app.refresh().await;
            }
        }
    }
}
