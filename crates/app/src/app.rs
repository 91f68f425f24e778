//! Application context: navigation, snapshot, diagnostic log and the
//! collaborators, behind the three operations the runtime drives.
//!
//! - [`App::show_screen`] renders the current screen and pushes it
//! - [`App::refresh`] fetches a new snapshot, then shows the current screen
//! - [`App::handle_event`] normalises and dispatches one raw input event

use std::time::Instant;

use platform::{DisplayBridge, ImageUpdate, PageLayout, RawEvent};
use ui::{
    dispatch::ScrollCooldown, normalize, CanonicalEvent, Dispatcher, Effect, Location, Navigator,
    RefreshTrigger, Screen, WeatherSnapshot,
};
use weather_screens::ScreenRenderer;

use crate::config::AppConfig;
use crate::log::DiagnosticLog;
use crate::page::{loading_layout, screen_layout, SCREEN_IMAGE_ID, SCREEN_IMAGE_NAME};
use crate::render::PngRenderer;
use crate::source::WeatherSource;

/// Owns all mutable state of the running display.
pub struct App<S, B, R> {
    location: Option<Location>,
    source: S,
    bridge: B,
    renderer: PngRenderer,
    nav: Navigator,
    dispatcher: Dispatcher<R>,
    weather: Option<WeatherSnapshot>,
    log: DiagnosticLog,
    started: Instant,
}

impl<S, B, R> App<S, B, R>
where
    S: WeatherSource,
    B: DisplayBridge,
    R: RefreshTrigger,
{
    /// Fresh context on the first screen with no snapshot.
    pub fn new(config: &AppConfig, source: S, bridge: B, refresh: R) -> Self {
        Self {
            location: config.location.clone(),
            source,
            bridge,
            renderer: PngRenderer::new(),
            nav: Navigator::new(),
            dispatcher: Dispatcher::with_cooldown(
                refresh,
                ScrollCooldown::new(config.scroll_cooldown_ms),
            ),
            weather: None,
            log: DiagnosticLog::new(config.log_capacity),
            started: Instant::now(),
        }
    }

    /// Show the loading page, then load the first snapshot.
    pub async fn start(&mut self) {
        self.show_loading().await;
        self.refresh().await;
    }

    /// Fetch a new snapshot and show the current screen.
    ///
    /// A failed fetch keeps the previous snapshot. The screen index is left
    /// alone; only a double tap returns to the first screen.
    pub async fn refresh(&mut self) {
        let Some(location) = self.location.clone() else {
            self.log.push("Weather: no city configured");
            return;
        };

        match self.source.fetch(&location).await {
            Ok(snapshot) => {
                self.log
                    .push(&format!("Weather: refreshed for {}", snapshot.city));
                self.weather = Some(snapshot);
            }
            Err(e) => {
                tracing::warn!(error = %e, "weather refresh failed");
                self.log.push(&format!("Weather: refresh failed: {e}"));
            }
        }

        self.show_screen().await;
    }

    /// Render the current screen and push it, or the loading page when no
    /// snapshot has arrived yet.
    pub async fn show_screen(&mut self) {
        let Some(weather) = self.weather.as_ref() else {
            self.show_loading().await;
            return;
        };

        let screen = self.nav.current();
        let png = match self.renderer.render(screen, weather) {
            Ok(png) => png,
            Err(e) => {
                tracing::error!(%screen, error = %e, "screen render failed");
                self.log.push(&format!("Render failed: {e}"));
                return;
            }
        };

        if !self.push_page(&screen_layout()).await {
            return;
        }

        let result = self
            .bridge
            .update_image(&ImageUpdate {
                container_id: SCREEN_IMAGE_ID,
                container_name: SCREEN_IMAGE_NAME,
                data: &png,
            })
            .await;
        self.log.push(&format!("Image: {result}"));
        self.log.push(&format!("Screen: {screen}"));
    }

    /// Push the loading page.
    pub async fn show_loading(&mut self) {
        self.push_page(&loading_layout()).await;
    }

    /// Normalise and dispatch one raw event, stamped with the time since
    /// startup.
    pub async fn handle_event(&mut self, raw: &RawEvent) -> Effect {
        let now_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.handle_event_at(raw, now_ms).await
    }

    /// Normalise and dispatch one raw event at monotonic time `now_ms`.
    pub async fn handle_event_at(&mut self, raw: &RawEvent, now_ms: u64) -> Effect {
        let event = normalize(raw);
        if event == CanonicalEvent::Unresolved {
            tracing::debug!("unresolved input event");
        }

        let effect = self
            .dispatcher
            .dispatch(event, &mut self.nav, now_ms, &mut self.log);
        if effect == Effect::Redraw {
            self.show_screen().await;
        }
        effect
    }

    /// Create the start-up page on the first successful push, rebuild after.
    async fn push_page(&mut self, layout: &PageLayout) -> bool {
        let pushed = if self.nav.has_rendered_once() {
            self.bridge.rebuild_page(layout).await
        } else {
            self.bridge.create_startup_page(layout).await
        };

        match pushed {
            Ok(()) => {
                self.nav.mark_rendered();
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "page push failed");
                self.log.push(&format!("Page: {e}"));
                false
            }
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.nav.current()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.nav
    }

    pub fn weather(&self) -> Option<&WeatherSnapshot> {
        self.weather.as_ref()
    }

    pub fn log(&self) -> &DiagnosticLog {
        &self.log
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn refresh_trigger(&self) -> &R {
        self.dispatcher.refresh_trigger()
    }
}
