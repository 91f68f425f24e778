//! End-to-end flow of the app context against recording collaborators:
//! page lifecycle, navigation, refresh handling and the diagnostic log.

use std::collections::VecDeque;

use platform::{BridgeError, DisplayBridge, ImageUpdate, ImageUploadResult, PageLayout, RawEvent};
use ui::{Effect, Location, RefreshTrigger, Screen, WeatherSnapshot};
use weather_app::page::{loading_layout, screen_layout};
use weather_app::{
    refresh, run, App, AppConfig, FetchError, JsonLinesSource, RuntimeOptions, Shutdown,
    WeatherSource,
};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Create(PageLayout),
    Rebuild(PageLayout),
    Image { name: String, bytes: usize },
}

struct RecordingBridge {
    calls: Vec<Call>,
    failing_creates: usize,
    upload: ImageUploadResult,
}

impl RecordingBridge {
    fn new() -> Self {
        Self {
            calls: Vec::new(),
            failing_creates: 0,
            upload: ImageUploadResult::Success,
        }
    }

    fn failing_first_creates(n: usize) -> Self {
        Self {
            failing_creates: n,
            ..Self::new()
        }
    }

    fn images(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, Call::Image { .. }))
            .count()
    }
}

impl DisplayBridge for RecordingBridge {
    type Error = BridgeError;

    async fn create_startup_page(&mut self, layout: &PageLayout) -> Result<(), BridgeError> {
        self.calls.push(Call::Create(layout.clone()));
        if self.failing_creates > 0 {
            self.failing_creates -= 1;
            return Err(BridgeError::Disconnected);
        }
        Ok(())
    }

    async fn rebuild_page(&mut self, layout: &PageLayout) -> Result<(), BridgeError> {
        self.calls.push(Call::Rebuild(layout.clone()));
        Ok(())
    }

    async fn update_image(&mut self, update: &ImageUpdate<'_>) -> ImageUploadResult {
        self.calls.push(Call::Image {
            name: update.container_name.to_owned(),
            bytes: update.data.len(),
        });
        self.upload
    }
}

struct StubSource {
    results: VecDeque<Result<WeatherSnapshot, FetchError>>,
    fetches: usize,
}

impl StubSource {
    fn new(results: impl IntoIterator<Item = Result<WeatherSnapshot, FetchError>>) -> Self {
        Self {
            results: results.into_iter().collect(),
            fetches: 0,
        }
    }
}

impl WeatherSource for StubSource {
    async fn fetch(&mut self, _location: &Location) -> Result<WeatherSnapshot, FetchError> {
        self.fetches += 1;
        self.results
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Unavailable("no more stubbed results".into())))
    }
}

#[derive(Default)]
struct CountingRefresh(usize);

impl RefreshTrigger for CountingRefresh {
    fn trigger_refresh(&mut self) {
        self.0 += 1;
    }
}

fn snapshot(city: &str, temp: i16) -> WeatherSnapshot {
    WeatherSnapshot {
        city: platform::text::truncated(city),
        current_temp: temp,
        ..WeatherSnapshot::default()
    }
}

fn config_with_location() -> AppConfig {
    AppConfig {
        location: Some(Location {
            name: platform::text::truncated("Oslo"),
            ..Location::default()
        }),
        ..AppConfig::default()
    }
}

fn app(
    results: impl IntoIterator<Item = Result<WeatherSnapshot, FetchError>>,
    bridge: RecordingBridge,
) -> App<StubSource, RecordingBridge, CountingRefresh> {
    App::new(
        &config_with_location(),
        StubSource::new(results),
        bridge,
        CountingRefresh::default(),
    )
}

fn event(json: &str) -> RawEvent {
    serde_json::from_str(json).unwrap()
}

fn click() -> RawEvent {
    event(r#"{"listEvent":{"eventType":0}}"#)
}

fn scroll_down() -> RawEvent {
    event(r#"{"listEvent":{"eventType":"SCROLL_BOTTOM_EVENT"}}"#)
}

fn double_click() -> RawEvent {
    event(r#"{"sysEvent":{"eventType":3}}"#)
}

// ── Page lifecycle ─────────────────────────────────────────────────────────

#[tokio::test]
async fn start_creates_loading_page_then_rebuilds_with_screen() {
    let mut app = app([Ok(snapshot("Oslo", 7))], RecordingBridge::new());
    app.start().await;

    let calls = &app.bridge().calls;
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0], Call::Create(loading_layout()));
    assert_eq!(calls[1], Call::Rebuild(screen_layout()));
    match &calls[2] {
        Call::Image { name, bytes } => {
            assert_eq!(name, "screen");
            assert!(*bytes > 0);
        }
        other => panic!("expected image upload, got {other:?}"),
    }
    assert!(app.navigator().has_rendered_once());
}

#[tokio::test]
async fn failed_startup_create_is_retried_as_create() {
    let mut app = app([Ok(snapshot("Oslo", 7))], RecordingBridge::failing_first_creates(1));
    app.start().await;

    let calls = &app.bridge().calls;
    assert_eq!(calls[0], Call::Create(loading_layout()));
    assert_eq!(calls[1], Call::Create(screen_layout()));
    assert!(matches!(calls[2], Call::Image { .. }));
    assert!(app.log().contains("Page: Display host not connected"));

    app.handle_event_at(&click(), 0).await;
    assert_eq!(app.bridge().calls[3], Call::Rebuild(screen_layout()));
}

#[tokio::test]
async fn no_image_is_sent_when_the_page_push_fails() {
    let mut app = app([Ok(snapshot("Oslo", 7))], RecordingBridge::failing_first_creates(2));
    app.start().await;

    assert_eq!(app.bridge().images(), 0);
    assert!(!app.navigator().has_rendered_once());
    assert!(app.weather().is_some());
}

#[tokio::test]
async fn navigation_without_snapshot_shows_loading_page() {
    let mut app = app([Err(FetchError::Unavailable("offline".into()))], RecordingBridge::new());
    app.start().await;

    let effect = app.handle_event_at(&click(), 0).await;
    assert_eq!(effect, Effect::Redraw);
    assert_eq!(app.current_screen(), Screen::Now);
    assert_eq!(app.bridge().calls.last(), Some(&Call::Rebuild(loading_layout())));
    assert_eq!(app.bridge().images(), 0);
}

// ── Navigation ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn click_advances_and_redraws() {
    let mut app = app([Ok(snapshot("Oslo", 7))], RecordingBridge::new());
    app.start().await;
    let before = app.bridge().images();

    assert_eq!(app.handle_event_at(&click(), 0).await, Effect::Redraw);
    assert_eq!(app.current_screen(), Screen::Now);
    assert_eq!(app.bridge().images(), before + 1);
    assert!(app.log().contains("Event: type=CLICK_EVENT screen=forecast"));
    assert!(app.log().contains("Screen: now"));
}

#[tokio::test]
async fn scrolls_inside_the_cooldown_are_dropped() {
    let mut app = app([Ok(snapshot("Oslo", 7))], RecordingBridge::new());
    app.start().await;

    assert_eq!(app.handle_event_at(&scroll_down(), 1_000).await, Effect::Redraw);
    assert_eq!(app.handle_event_at(&scroll_down(), 1_100).await, Effect::None);
    assert_eq!(app.current_screen(), Screen::Now);

    assert_eq!(app.handle_event_at(&scroll_down(), 1_400).await, Effect::Redraw);
    assert_eq!(app.current_screen(), Screen::Rain);
}

#[tokio::test]
async fn double_click_resets_and_requests_one_refresh() {
    let mut app = app([Ok(snapshot("Oslo", 7))], RecordingBridge::new());
    app.start().await;
    app.handle_event_at(&click(), 0).await;
    app.handle_event_at(&click(), 10).await;
    let calls_before = app.bridge().calls.len();

    assert_eq!(app.handle_event_at(&double_click(), 20).await, Effect::Refresh);
    assert_eq!(app.current_screen(), Screen::Forecast);
    assert_eq!(app.refresh_trigger().0, 1);
    // The refresh redraws when it settles, not the dispatch.
    assert_eq!(app.bridge().calls.len(), calls_before);
}

#[tokio::test]
async fn payload_only_event_is_normalised() {
    let mut app = app([Ok(snapshot("Oslo", 7))], RecordingBridge::new());
    app.start().await;

    let effect = app
        .handle_event_at(&event(r#"{"jsonData":{"type":"SCROLL_BOTTOM_EVENT"}}"#), 0)
        .await;
    assert_eq!(effect, Effect::Redraw);
    assert_eq!(app.current_screen(), Screen::Now);
}

#[tokio::test]
async fn unresolved_event_changes_nothing() {
    let mut app = app([Ok(snapshot("Oslo", 7))], RecordingBridge::new());
    app.start().await;
    let calls_before = app.bridge().calls.len();

    assert_eq!(app.handle_event_at(&event("{}"), 0).await, Effect::None);
    assert_eq!(app.current_screen(), Screen::Forecast);
    assert_eq!(app.bridge().calls.len(), calls_before);
    assert!(app.log().contains("Event: type=undefined screen=forecast"));
}

// ── Refresh ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn failed_refresh_keeps_previous_snapshot() {
    let mut app = app(
        [
            Ok(snapshot("Oslo", 7)),
            Err(FetchError::Unavailable("offline".into())),
        ],
        RecordingBridge::new(),
    );
    app.start().await;
    app.refresh().await;

    assert_eq!(app.weather().map(|w| w.current_temp), Some(7));
    assert!(app.log().contains("Weather: refresh failed: weather unavailable: offline"));
    // The kept snapshot is still shown.
    assert_eq!(app.bridge().images(), 2);
}

#[tokio::test]
async fn background_refresh_keeps_the_screen_index() {
    let mut app = app(
        [Ok(snapshot("Oslo", 7)), Ok(snapshot("Oslo", 9))],
        RecordingBridge::new(),
    );
    app.start().await;
    app.handle_event_at(&click(), 0).await;
    app.handle_event_at(&click(), 10).await;

    app.refresh().await;
    assert_eq!(app.current_screen(), Screen::Rain);
    assert_eq!(app.weather().map(|w| w.current_temp), Some(9));
    assert_eq!(app.log().latest().map(|l| l.ends_with("Screen: rain")), Some(true));
}

#[tokio::test]
async fn refresh_without_location_only_logs() {
    let mut app = App::new(
        &AppConfig::default(),
        StubSource::new([Ok(snapshot("Oslo", 7))]),
        RecordingBridge::new(),
        CountingRefresh::default(),
    );
    app.start().await;

    assert!(app.log().contains("Weather: no city configured"));
    assert_eq!(app.source().fetches, 0);
    assert!(app.weather().is_none());
    assert_eq!(app.bridge().calls, vec![Call::Create(loading_layout())]);
}

#[tokio::test]
async fn upload_result_is_logged() {
    let mut bridge = RecordingBridge::new();
    bridge.upload = ImageUploadResult::SizeInvalid;
    let mut app = app([Ok(snapshot("Oslo", 7))], bridge);
    app.start().await;

    assert!(app.log().contains("Weather: refreshed for Oslo"));
    assert!(app.log().contains("Image: imageSizeInvalid"));
    assert!(app.log().contains("Screen: forecast"));
}

// ── Runtime loop ───────────────────────────────────────────────────────────

#[tokio::test]
async fn runtime_serves_input_until_eof() {
    let (handle, mut requests) = refresh::channel();
    let mut app = App::new(
        &config_with_location(),
        StubSource::new([Ok(snapshot("Oslo", 7))]),
        RecordingBridge::new(),
        handle,
    );
    let data: &[u8] = b"{\"listEvent\":{\"eventType\":0}}\n{\"listEvent\":{\"eventType\":0}}\n";
    let mut input = JsonLinesSource::new(data);

    let reason = run(
        &mut app,
        &mut input,
        &mut requests,
        RuntimeOptions {
            refresh_interval: std::time::Duration::from_secs(900),
            exit_on_eof: true,
        },
    )
    .await;

    assert_eq!(reason, Shutdown::InputClosed);
    assert_eq!(app.current_screen(), Screen::Rain);
    assert_eq!(app.source().fetches, 1);
    assert_eq!(app.bridge().images(), 3);
}
