//! Event normaliser: resolves a loosely-typed [`RawEvent`] into exactly one
//! [`CanonicalEvent`].
//!
//! Resolution order:
//!
//! 1. A numeric code: `0` click, `1` scroll up, `2` scroll down, `3` double
//!    click. Any other number is unresolved.
//! 2. A string tag, matched case-insensitively: `DOUBLE` before `CLICK`,
//!    then `SCROLL_TOP`/`UP`, then `SCROLL_BOTTOM`/`DOWN`. A tag matching
//!    none of these falls through.
//! 3. An event from any UI container is a click. The host drops a zero
//!    click code on the floor, so a container event with no type is a tap.
//! 4. Otherwise unresolved.

use platform::input::{RawEvent, RawEventType};

/// One gesture, after normalisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalEvent {
    /// Single tap.
    Click,
    /// Swipe towards the top boundary.
    ScrollUp,
    /// Swipe towards the bottom boundary.
    ScrollDown,
    /// Double tap.
    DoubleClick,
    /// No recognisable gesture.
    Unresolved,
}

impl CanonicalEvent {
    /// Host event name, as written to the diagnostic log.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CanonicalEvent::Click => "CLICK_EVENT",
            CanonicalEvent::ScrollUp => "SCROLL_TOP_EVENT",
            CanonicalEvent::ScrollDown => "SCROLL_BOTTOM_EVENT",
            CanonicalEvent::DoubleClick => "DOUBLE_CLICK_EVENT",
            CanonicalEvent::Unresolved => "undefined",
        }
    }

    /// Whether the scroll cooldown applies to this event.
    #[must_use]
    pub const fn is_scroll(self) -> bool {
        matches!(self, CanonicalEvent::ScrollUp | CanonicalEvent::ScrollDown)
    }

    /// Map a numeric host code.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => CanonicalEvent::Click,
            1 => CanonicalEvent::ScrollUp,
            2 => CanonicalEvent::ScrollDown,
            3 => CanonicalEvent::DoubleClick,
            _ => CanonicalEvent::Unresolved,
        }
    }

    /// Match a string tag. `None` when no keyword is present.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        if contains_ignore_case(tag, "DOUBLE") {
            Some(CanonicalEvent::DoubleClick)
        } else if contains_ignore_case(tag, "CLICK") {
            Some(CanonicalEvent::Click)
        } else if contains_ignore_case(tag, "SCROLL_TOP") || contains_ignore_case(tag, "UP") {
            Some(CanonicalEvent::ScrollUp)
        } else if contains_ignore_case(tag, "SCROLL_BOTTOM") || contains_ignore_case(tag, "DOWN") {
            Some(CanonicalEvent::ScrollDown)
        } else {
            None
        }
    }
}

impl core::fmt::Display for CanonicalEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a raw host event to one canonical gesture.
#[must_use]
pub fn normalize(event: &RawEvent) -> CanonicalEvent {
    match event.event_type() {
        Some(RawEventType::Code(code)) => return CanonicalEvent::from_code(*code),
        Some(RawEventType::Real(value)) => return CanonicalEvent::from_code(integral(*value)),
        Some(RawEventType::Tag(tag)) => {
            if let Some(resolved) = CanonicalEvent::from_tag(tag) {
                return resolved;
            }
        }
        Some(RawEventType::Other) | None => {}
    }

    if event.has_container() {
        CanonicalEvent::Click
    } else {
        CanonicalEvent::Unresolved
    }
}

/// Whole-number value of `v`, or `-1` (never a valid code) when it has a
/// fractional part.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn integral(v: f64) -> i64 {
    let whole = v as i64;
    if whole as f64 == v {
        whole
    } else {
        -1
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.as_bytes();
    !needle.is_empty()
        && haystack
            .as_bytes()
            .windows(needle.len())
            .any(|w| w.eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::input::{ContainerEvent, JsonData};

    fn tagged(s: &str) -> RawEvent {
        RawEvent::from_list(Some(RawEventType::tag(s)))
    }

    fn payload(kind: RawEventType) -> RawEvent {
        RawEvent {
            json_data: Some(JsonData {
                kind: Some(kind),
                ..JsonData::default()
            }),
            ..RawEvent::default()
        }
    }

    #[test]
    fn test_numeric_codes() {
        assert_eq!(normalize(&RawEvent::from_list(Some(RawEventType::Code(0)))), CanonicalEvent::Click);
        assert_eq!(normalize(&RawEvent::from_list(Some(RawEventType::Code(1)))), CanonicalEvent::ScrollUp);
        assert_eq!(normalize(&RawEvent::from_list(Some(RawEventType::Code(2)))), CanonicalEvent::ScrollDown);
        assert_eq!(normalize(&RawEvent::from_list(Some(RawEventType::Code(3)))), CanonicalEvent::DoubleClick);
    }

    #[test]
    fn test_unknown_code_is_unresolved_even_from_container() {
        assert_eq!(
            normalize(&RawEvent::from_list(Some(RawEventType::Code(7)))),
            CanonicalEvent::Unresolved
        );
        assert_eq!(
            normalize(&RawEvent::from_list(Some(RawEventType::Code(-1)))),
            CanonicalEvent::Unresolved
        );
    }

    #[test]
    fn test_whole_real_is_a_code() {
        assert_eq!(normalize(&payload(RawEventType::Real(3.0))), CanonicalEvent::DoubleClick);
        assert_eq!(normalize(&payload(RawEventType::Real(1.5))), CanonicalEvent::Unresolved);
    }

    #[test]
    fn test_string_tags() {
        assert_eq!(normalize(&tagged("CLICK_EVENT")), CanonicalEvent::Click);
        assert_eq!(normalize(&tagged("SCROLL_TOP_UP")), CanonicalEvent::ScrollUp);
        assert_eq!(normalize(&tagged("SCROLL_BOTTOM_EVENT")), CanonicalEvent::ScrollDown);
        assert_eq!(normalize(&tagged("swipe_down")), CanonicalEvent::ScrollDown);
    }

    #[test]
    fn test_double_checked_before_click() {
        assert_eq!(normalize(&tagged("DOUBLE_CLICK_EVENT")), CanonicalEvent::DoubleClick);
        assert_eq!(normalize(&tagged("double_click")), CanonicalEvent::DoubleClick);
    }

    #[test]
    fn test_unmatched_tag_falls_through_to_container_rule() {
        assert_eq!(normalize(&tagged("FOCUS")), CanonicalEvent::Click);
        assert_eq!(
            normalize(&payload(RawEventType::tag("FOCUS"))),
            CanonicalEvent::Unresolved
        );
    }

    #[test]
    fn test_container_without_type_is_click() {
        let ev = RawEvent {
            text_event: Some(ContainerEvent::default()),
            ..RawEvent::default()
        };
        assert_eq!(normalize(&ev), CanonicalEvent::Click);
    }

    #[test]
    fn test_no_container_no_type_is_unresolved() {
        assert_eq!(normalize(&RawEvent::default()), CanonicalEvent::Unresolved);
        let empty_payload = RawEvent {
            json_data: Some(JsonData::default()),
            ..RawEvent::default()
        };
        assert_eq!(normalize(&empty_payload), CanonicalEvent::Unresolved);
    }

    #[test]
    fn test_payload_only_event() {
        assert_eq!(normalize(&payload(RawEventType::Code(2))), CanonicalEvent::ScrollDown);
    }

    #[test]
    fn test_other_type_uses_container_rule() {
        assert_eq!(
            normalize(&RawEvent::from_list(Some(RawEventType::Other))),
            CanonicalEvent::Click
        );
    }

    #[test]
    fn test_event_names() {
        assert_eq!(CanonicalEvent::ScrollUp.to_string(), "SCROLL_TOP_EVENT");
        assert_eq!(CanonicalEvent::Unresolved.as_str(), "undefined");
        assert!(CanonicalEvent::ScrollDown.is_scroll());
        assert!(!CanonicalEvent::DoubleClick.is_scroll());
    }
}
