//! WhatsApp Business adapter.

use serde_json::Value;

use crate::channel::{Channel, ChannelAdapter};
use crate::packet::body_text;

/// Adapter for WhatsApp Business transcripts.
///
/// WhatsApp bot messages are plain text: either a bare string or an object
/// with a `text` field.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhatsAppAdapter;

impl WhatsAppAdapter {
    /// Creates a new WhatsApp adapter.
    pub fn new() -> Self {
        Self
    }
}

impl ChannelAdapter for WhatsAppAdapter {
    fn name(&self) -> &'static str {
        "WhatsApp"
    }

    fn channel(&self) -> Channel {
        Channel::WhatsApp
    }

    fn render_bot(&self, payload: &Value) -> String {
        format!("\n{}", body_text(payload))
    }
}
