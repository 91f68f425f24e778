//! Event dispatcher: applies one canonical event to the navigator.
//!
//! | Event        | Action                                   |
//! |--------------|------------------------------------------|
//! | Click        | advance, redraw (never throttled)        |
//! | ScrollDown   | advance, redraw (after scroll cooldown)  |
//! | ScrollUp     | retreat, redraw (after scroll cooldown)  |
//! | DoubleClick  | reset, trigger a weather refresh         |
//! | Unresolved   | nothing                                  |
//!
//! Every event is written to the diagnostic sink before the transition.

use core::fmt::Write as _;

use heapless::String;
use platform::config::SCROLL_COOLDOWN_MS;

use crate::event::CanonicalEvent;
use crate::navigation::Navigator;

/// Capability to start an out-of-band weather refresh.
pub trait RefreshTrigger {
    /// Schedule a refresh. The refresh redraws on completion.
    fn trigger_refresh(&mut self);
}

/// Append-only diagnostic log.
pub trait EventSink {
    /// Append one line.
    fn record(&mut self, line: &str);
}

/// What the caller must do after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// The screen index changed; show the current screen.
    Redraw,
    /// A refresh was triggered; it redraws when it settles.
    Refresh,
}

/// Swallows repeated scroll events that arrive inside one window.
///
/// The window starts at the last *accepted* scroll; suppressed scrolls do
/// not extend it. The first scroll is always accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollCooldown {
    window_ms: u64,
    last_accepted_ms: Option<u64>,
}

impl ScrollCooldown {
    /// Cooldown with the given window.
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_accepted_ms: None,
        }
    }

    /// Whether a scroll at `now_ms` passes. Records it if so.
    pub fn try_accept(&mut self, now_ms: u64) -> bool {
        match self.last_accepted_ms {
            Some(last) if now_ms.saturating_sub(last) < self.window_ms => false,
            _ => {
                self.last_accepted_ms = Some(now_ms);
                true
            }
        }
    }

    /// Window length in milliseconds.
    pub fn window_ms(&self) -> u64 {
        self.window_ms
    }
}

impl Default for ScrollCooldown {
    fn default() -> Self {
        Self::new(SCROLL_COOLDOWN_MS)
    }
}

/// Maps canonical events onto navigation transitions.
pub struct Dispatcher<R> {
    refresh: R,
    cooldown: ScrollCooldown,
}

impl<R: RefreshTrigger> Dispatcher<R> {
    /// Dispatcher with the default 300 ms scroll cooldown.
    pub fn new(refresh: R) -> Self {
        Self::with_cooldown(refresh, ScrollCooldown::default())
    }

    /// Dispatcher with a custom scroll cooldown.
    pub fn with_cooldown(refresh: R, cooldown: ScrollCooldown) -> Self {
        Self { refresh, cooldown }
    }

    /// Apply `event` at monotonic time `now_ms`.
    pub fn dispatch<S: EventSink>(
        &mut self,
        event: CanonicalEvent,
        nav: &mut Navigator,
        now_ms: u64,
        log: &mut S,
    ) -> Effect {
        let mut line: String<64> = String::new();
        // 64 bytes always fits the longest event and screen names.
        write!(line, "Event: type={} screen={}", event, nav.current()).ok();
        log.record(&line);

        if event.is_scroll() && !self.cooldown.try_accept(now_ms) {
            return Effect::None;
        }

        match event {
            CanonicalEvent::Click | CanonicalEvent::ScrollDown => {
                nav.advance();
                Effect::Redraw
            }
            CanonicalEvent::ScrollUp => {
                nav.retreat();
                Effect::Redraw
            }
            CanonicalEvent::DoubleClick => {
                nav.reset();
                self.refresh.trigger_refresh();
                Effect::Refresh
            }
            CanonicalEvent::Unresolved => Effect::None,
        }
    }

    /// The injected refresh capability.
    pub fn refresh_trigger(&self) -> &R {
        &self.refresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Screen;

    #[derive(Default)]
    struct CountingTrigger(usize);

    impl RefreshTrigger for CountingTrigger {
        fn trigger_refresh(&mut self) {
            self.0 += 1;
        }
    }

    #[derive(Default)]
    struct Lines(Vec<std::string::String>);

    impl EventSink for Lines {
        fn record(&mut self, line: &str) {
            self.0.push(line.to_owned());
        }
    }

    fn setup() -> (Dispatcher<CountingTrigger>, Navigator, Lines) {
        (
            Dispatcher::new(CountingTrigger::default()),
            Navigator::new(),
            Lines::default(),
        )
    }

    #[test]
    fn test_click_advances_and_redraws() {
        let (mut d, mut nav, mut log) = setup();
        let effect = d.dispatch(CanonicalEvent::Click, &mut nav, 0, &mut log);
        assert_eq!(effect, Effect::Redraw);
        assert_eq!(nav.current(), Screen::Now);
    }

    #[test]
    fn test_clicks_are_never_throttled() {
        let (mut d, mut nav, mut log) = setup();
        for t in 0..3 {
            d.dispatch(CanonicalEvent::Click, &mut nav, t, &mut log);
        }
        assert_eq!(nav.index(), 3);
    }

    #[test]
    fn test_scroll_down_within_cooldown_advances_once() {
        let (mut d, mut nav, mut log) = setup();
        d.dispatch(CanonicalEvent::ScrollDown, &mut nav, 1_000, &mut log);
        let second = d.dispatch(CanonicalEvent::ScrollDown, &mut nav, 1_100, &mut log);
        assert_eq!(second, Effect::None);
        assert_eq!(nav.index(), 1);
    }

    #[test]
    fn test_scroll_down_after_cooldown_advances_twice() {
        let (mut d, mut nav, mut log) = setup();
        d.dispatch(CanonicalEvent::ScrollDown, &mut nav, 1_000, &mut log);
        d.dispatch(CanonicalEvent::ScrollDown, &mut nav, 1_400, &mut log);
        assert_eq!(nav.index(), 2);
    }

    #[test]
    fn test_suppressed_scroll_does_not_extend_window() {
        let (mut d, mut nav, mut log) = setup();
        d.dispatch(CanonicalEvent::ScrollDown, &mut nav, 0, &mut log);
        d.dispatch(CanonicalEvent::ScrollDown, &mut nav, 250, &mut log);
        d.dispatch(CanonicalEvent::ScrollDown, &mut nav, 300, &mut log);
        assert_eq!(nav.index(), 2);
    }

    #[test]
    fn test_first_scroll_at_time_zero_is_accepted() {
        let (mut d, mut nav, mut log) = setup();
        d.dispatch(CanonicalEvent::ScrollUp, &mut nav, 0, &mut log);
        assert_eq!(nav.current(), Screen::Hours);
    }

    #[test]
    fn test_up_and_down_share_one_cooldown() {
        let (mut d, mut nav, mut log) = setup();
        d.dispatch(CanonicalEvent::ScrollDown, &mut nav, 0, &mut log);
        d.dispatch(CanonicalEvent::ScrollUp, &mut nav, 50, &mut log);
        assert_eq!(nav.current(), Screen::Now);
    }

    #[test]
    fn test_double_click_resets_and_refreshes_once() {
        let (mut d, mut nav, mut log) = setup();
        nav.advance();
        nav.advance();
        let effect = d.dispatch(CanonicalEvent::DoubleClick, &mut nav, 0, &mut log);
        assert_eq!(effect, Effect::Refresh);
        assert_eq!(nav.index(), 0);
        assert_eq!(d.refresh_trigger().0, 1);
    }

    #[test]
    fn test_unresolved_is_noop_but_logged() {
        let (mut d, mut nav, mut log) = setup();
        let effect = d.dispatch(CanonicalEvent::Unresolved, &mut nav, 0, &mut log);
        assert_eq!(effect, Effect::None);
        assert_eq!(nav.index(), 0);
        assert_eq!(log.0, ["Event: type=undefined screen=forecast"]);
    }

    #[test]
    fn test_log_line_names_screen_before_transition() {
        let (mut d, mut nav, mut log) = setup();
        d.dispatch(CanonicalEvent::Click, &mut nav, 0, &mut log);
        assert_eq!(log.0, ["Event: type=CLICK_EVENT screen=forecast"]);
    }

    #[test]
    fn test_suppressed_scroll_is_still_logged() {
        let (mut d, mut nav, mut log) = setup();
        d.dispatch(CanonicalEvent::ScrollDown, &mut nav, 0, &mut log);
        d.dispatch(CanonicalEvent::ScrollDown, &mut nav, 10, &mut log);
        assert_eq!(log.0.len(), 2);
    }

    #[test]
    fn test_cooldown_custom_window() {
        let mut c = ScrollCooldown::new(50);
        assert!(c.try_accept(0));
        assert!(!c.try_accept(49));
        assert!(c.try_accept(50));
        assert_eq!(c.window_ms(), 50);
    }

    #[test]
    fn test_default_cooldown_follows_platform_config() {
        assert_eq!(
            ScrollCooldown::default().window_ms(),
            platform::config::SCROLL_COOLDOWN_MS
        );
    }
}
