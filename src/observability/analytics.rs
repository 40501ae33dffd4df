//! Fire-and-forget analytics events.
//!
//! # Events
//! - `paystack_invalid_amount`: amount failed validation
//! - `paystack_initiated`: server accepted the initiation
//! - `paystack_abandoned`: popup closed without paying
//! - `paystack_success`: provider confirmed the charge
//! - `paystack_api_error`: initiation request failed
//! - `paystack_popup_error`: popup could not be opened after a successful initiation
//!
//! Every event also increments `checkout_events_total{event}` when metrics are on.

use serde_json::{Map, Value};

/// Free-form properties attached to an event.
pub type EventProperties = Map<String, Value>;

pub const EVENT_INVALID_AMOUNT: &str = "paystack_invalid_amount";
pub const EVENT_INITIATED: &str = "paystack_initiated";
pub const EVENT_ABANDONED: &str = "paystack_abandoned";
pub const EVENT_SUCCESS: &str = "paystack_success";
pub const EVENT_API_ERROR: &str = "paystack_api_error";
pub const EVENT_POPUP_ERROR: &str = "paystack_popup_error";

/// Best-effort event sink. Implementations must not block and must swallow their own failures.
pub trait Analytics: Send + Sync {
    fn track(&self, event: &str, properties: EventProperties);
}

/// Records events as `metrics` counters plus a debug log line.
#[derive(Debug, Default, Clone)]
pub struct MetricsAnalytics;

impl Analytics for MetricsAnalytics {
    fn track(&self, event: &str, properties: EventProperties) {
        ::metrics::counter!("checkout_events_total", "event" => event.to_string()).increment(1);
        let properties = Value::Object(properties);
        tracing::debug!(event, properties = %properties, "Analytics event");
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone)]
pub struct NoopAnalytics;

impl Analytics for NoopAnalytics {
    fn track(&self, _event: &str, _properties: EventProperties) {}
}

/// Builder for the property map, mirroring the tag call shape.
#[derive(Debug, Default)]
pub struct Properties(EventProperties);

impl Properties {
    pub fn new(category: &str, label: &str) -> Self {
        let mut map = EventProperties::new();
        map.insert("event_category".to_string(), Value::from(category));
        map.insert("event_label".to_string(), Value::from(label));
        Self(map)
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn build(self) -> EventProperties {
        self.0
    }
}
