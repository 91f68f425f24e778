//! Property-based tests for navigation and event handling.
//! Verifies invariants hold for ALL inputs, not just fixed examples.

use platform::input::{RawEvent, RawEventType};
use ui::{normalize, CanonicalEvent, Dispatcher, Effect, EventSink, Navigator, RefreshTrigger};

#[derive(Default)]
struct Counter(usize);

impl RefreshTrigger for Counter {
    fn trigger_refresh(&mut self) {
        self.0 += 1;
    }
}

struct Discard;

impl EventSink for Discard {
    fn record(&mut self, _line: &str) {}
}

fn event_from(n: u8) -> CanonicalEvent {
    match n % 5 {
        0 => CanonicalEvent::Click,
        1 => CanonicalEvent::ScrollUp,
        2 => CanonicalEvent::ScrollDown,
        3 => CanonicalEvent::DoubleClick,
        _ => CanonicalEvent::Unresolved,
    }
}

fn nav_at(start: usize) -> Navigator {
    let mut nav = Navigator::new();
    for _ in 0..start {
        nav.advance();
    }
    nav
}

proptest::proptest! {
    /// Any sequence of transitions keeps the index inside [0, 5).
    #[test]
    fn index_stays_in_range(ops in proptest::collection::vec(0u8..3, 0..64)) {
        let mut nav = Navigator::new();
        for op in ops {
            match op {
                0 => nav.advance(),
                1 => nav.retreat(),
                _ => nav.reset(),
            }
            assert!(nav.index() < 5);
        }
    }

    /// Five advances return to the start index.
    #[test]
    fn five_advances_is_identity(start in 0usize..5) {
        let mut nav = nav_at(start);
        for _ in 0..5 {
            nav.advance();
        }
        assert_eq!(nav.index(), start);
    }

    /// retreat() undoes advance() and vice versa.
    #[test]
    fn retreat_inverts_advance(start in 0usize..5) {
        let mut nav = nav_at(start);
        nav.advance();
        nav.retreat();
        assert_eq!(nav.index(), start);
        nav.retreat();
        nav.advance();
        assert_eq!(nav.index(), start);
    }

    /// Double click always lands on index 0 and triggers exactly one refresh.
    #[test]
    fn double_click_always_resets(start in 0usize..5, now in 0u64..1_000_000) {
        let mut nav = nav_at(start);
        let mut d = Dispatcher::new(Counter::default());
        let effect = d.dispatch(CanonicalEvent::DoubleClick, &mut nav, now, &mut Discard);
        assert_eq!(effect, Effect::Refresh);
        assert_eq!(nav.index(), 0);
        assert_eq!(d.refresh_trigger().0, 1);
    }

    /// Random event streams never trigger more refreshes than double clicks.
    #[test]
    fn refresh_count_matches_double_clicks(
        events in proptest::collection::vec((0u8..5, 0u64..2_000), 0..48)
    ) {
        let mut nav = Navigator::new();
        let mut d = Dispatcher::new(Counter::default());
        let mut now = 0u64;
        let mut doubles = 0usize;
        for (kind, gap) in events {
            now += gap;
            let ev = event_from(kind);
            if ev == CanonicalEvent::DoubleClick {
                doubles += 1;
            }
            d.dispatch(ev, &mut nav, now, &mut Discard);
            assert!(nav.index() < 5);
        }
        assert_eq!(d.refresh_trigger().0, doubles);
    }

    /// Numeric codes outside 0..=3 never resolve, whatever the container.
    #[test]
    fn unknown_codes_are_unresolved(code in proptest::prelude::any::<i64>()) {
        proptest::prop_assume!(!(0..=3).contains(&code));
        let ev = RawEvent::from_list(Some(RawEventType::Code(code)));
        assert_eq!(normalize(&ev), CanonicalEvent::Unresolved);
    }

    /// A tag containing DOUBLE is a double click regardless of what else it says.
    #[test]
    fn double_tag_wins(prefix in "[a-z_]{0,8}", suffix in "[A-Z_]{0,8}") {
        let tag = format!("{prefix}double{suffix}CLICK");
        let ev = RawEvent::from_list(Some(RawEventType::tag(&tag)));
        assert_eq!(normalize(&ev), CanonicalEvent::DoubleClick);
    }
}
