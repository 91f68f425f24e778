//! Input source abstraction
//!
//! The glasses host reports gestures as loosely-typed events: the gesture
//! type can sit on whichever container produced the event, or inside a
//! free-form `jsonData` object, and can be either a numeric code or a string
//! tag. These shapes keep that looseness; resolving them to one gesture is
//! the job of the event normaliser in the `ui` crate.

/// Source of raw input events from the glasses host.
pub trait InputSource {
    /// Wait for the next event. `None` once the source is closed.
    fn next_event(&mut self) -> impl core::future::Future<Output = Option<RawEvent>>;
}

/// Text of a string tag. Kept whole on hosts; bare-metal builds keep the
/// first 64 bytes.
#[cfg(any(test, feature = "std"))]
pub type TagText = std::string::String;

/// Text of a string tag. Kept whole on hosts; bare-metal builds keep the
/// first 64 bytes.
#[cfg(not(any(test, feature = "std")))]
pub type TagText = heapless::String<64>;

/// Raw gesture type as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum RawEventType {
    /// Integer type code.
    Code(i64),
    /// Any number the parser did not read as an integer. A whole value
    /// still names a code (`3.0` is a double click); a fractional one
    /// never does.
    Real(f64),
    /// String tag such as `"SCROLL_TOP_EVENT"`.
    Tag(TagText),
    /// Any other JSON value (bool, object, array).
    Other,
}

impl RawEventType {
    /// A string tag holding `text`.
    pub fn tag(text: &str) -> Self {
        #[cfg(any(test, feature = "std"))]
        {
            Self::Tag(text.to_owned())
        }
        #[cfg(not(any(test, feature = "std")))]
        {
            Self::Tag(crate::text::truncated(text))
        }
    }
}

/// Event attached to a list, text or system container.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ContainerEvent {
    /// Gesture type, if the host supplied one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub event_type: Option<RawEventType>,
}

/// Free-form payload. The type may sit under any of four keys.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct JsonData {
    /// `eventType`
    #[cfg_attr(feature = "serde", serde(default, rename = "eventType"))]
    pub event_type_camel: Option<RawEventType>,
    /// `event_type`
    #[cfg_attr(feature = "serde", serde(default, rename = "event_type"))]
    pub event_type_snake: Option<RawEventType>,
    /// `Event_Type`
    #[cfg_attr(feature = "serde", serde(default, rename = "Event_Type"))]
    pub event_type_title: Option<RawEventType>,
    /// `type`
    #[cfg_attr(feature = "serde", serde(default, rename = "type"))]
    pub kind: Option<RawEventType>,
}

impl JsonData {
    /// First present type key, in `eventType`, `event_type`, `Event_Type`,
    /// `type` order.
    pub fn event_type(&self) -> Option<&RawEventType> {
        self.event_type_camel
            .as_ref()
            .or(self.event_type_snake.as_ref())
            .or(self.event_type_title.as_ref())
            .or(self.kind.as_ref())
    }
}

/// One raw input event from the host.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RawEvent {
    /// Event from a list container.
    #[cfg_attr(feature = "serde", serde(default))]
    pub list_event: Option<ContainerEvent>,
    /// Event from a text container.
    #[cfg_attr(feature = "serde", serde(default))]
    pub text_event: Option<ContainerEvent>,
    /// Event from the system container.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sys_event: Option<ContainerEvent>,
    /// Free-form payload.
    #[cfg_attr(feature = "serde", serde(default))]
    pub json_data: Option<JsonData>,
}

impl RawEvent {
    /// A list-container event carrying `event_type`.
    pub fn from_list(event_type: Option<RawEventType>) -> Self {
        Self {
            list_event: Some(ContainerEvent { event_type }),
            ..Self::default()
        }
    }

    /// Whether any UI container produced this event.
    pub fn has_container(&self) -> bool {
        self.list_event.is_some() || self.text_event.is_some() || self.sys_event.is_some()
    }

    /// First present type, in list, text, system, payload order.
    pub fn event_type(&self) -> Option<&RawEventType> {
        [&self.list_event, &self.text_event, &self.sys_event]
            .into_iter()
            .find_map(|c| c.as_ref().and_then(|c| c.event_type.as_ref()))
            .or_else(|| self.json_data.as_ref().and_then(JsonData::event_type))
    }
}

#[cfg(feature = "serde")]
mod de {
    use core::fmt;

    use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

    use super::RawEventType;

    struct RawEventTypeVisitor;

    impl<'de> Visitor<'de> for RawEventTypeVisitor {
        type Value = RawEventType;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an event type code or tag")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(RawEventType::Code(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(i64::try_from(v).map_or(RawEventType::Other, RawEventType::Code))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(RawEventType::Real(v))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(RawEventType::tag(v))
        }

        fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
            Ok(RawEventType::Other)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
            Ok(RawEventType::Other)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(RawEventType::Other)
        }
    }

    impl<'de> Deserialize<'de> for RawEventType {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(RawEventTypeVisitor)
        }
    }
}
