//! Channel adapter implementations.
//!
//! | Adapter | Selector | Bot payload |
//! |---------|----------|-------------|
//! | [`WebChatAdapter`] | `WEBCHAT` | Data packet |
//! | [`FacebookAdapter`] | `FACEBOOK` | Messenger attachment envelope |
//! | [`WhatsAppAdapter`] | `WHATSAPP` | Plain text |
//! | [`GoogleMessagesAdapter`] | `GOOGLE_MESSAGES` | Rich card / suggestions |
//!
//! Use [`create_adapter`](crate::channel::create_adapter) to pick one at
//! runtime.

pub mod facebook;
pub mod google_messages;
pub mod webchat;
pub mod whatsapp;

pub use facebook::FacebookAdapter;
pub use google_messages::GoogleMessagesAdapter;
pub use webchat::WebChatAdapter;
pub use whatsapp::WhatsAppAdapter;

/// Literal written for channel content that has no text rendering.
pub const UNHANDLED: &str = "Unhandled";

/// Field deserializers that never fail.
///
/// Channel payloads are archived as the platform sent them, so a field may
/// carry an unexpected JSON type. These helpers degrade such a field to its
/// default instead of rejecting the whole message.
pub(crate) mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Deserializes `T`, falling back to `T::default()` on a shape mismatch.
    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(T::deserialize(value).unwrap_or_default())
    }

    /// Deserializes a list item by item; a malformed item becomes
    /// `T::default()` and a non-array value an empty list.
    pub fn seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        let Value::Array(items) = Value::deserialize(deserializer)? else {
            return Ok(Vec::new());
        };
        Ok(items
            .into_iter()
            .map(|item| T::deserialize(item).unwrap_or_default())
            .collect())
    }
}
