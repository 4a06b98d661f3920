//! Batch rendering of archived conversations.

use crate::channel::{Channel, create_adapter};
use crate::config::RenderConfig;
use crate::error::Result;

use super::models::{Conversation, RenderedTranscript};

/// Renders every conversation with its own channel.
///
/// Conversations without a channel are rendered for `default_channel`.
///
/// # Errors
///
/// Returns [`ScribeError::UnknownChannel`](crate::ScribeError::UnknownChannel)
/// if a conversation names an unsupported channel, or the first speaker
/// error raised under the configured policy.
///
/// # Example
///
/// ```rust
/// use chatscribe::channel::Channel;
/// use chatscribe::config::RenderConfig;
/// use chatscribe::core::{Conversation, render_conversations};
/// use chatscribe::turn::Turn;
///
/// let convs = vec![Conversation::new(vec![Turn::user("hi")]).id("c1")];
/// let rendered = render_conversations(&convs, Channel::WhatsApp, &RenderConfig::default())?;
/// assert_eq!(rendered[0].text, "\nUSER\n============\nhi\n");
/// # Ok::<(), chatscribe::ScribeError>(())
/// ```
pub fn render_conversations(
    conversations: &[Conversation],
    default_channel: Channel,
    config: &RenderConfig,
) -> Result<Vec<RenderedTranscript>> {
    conversations
        .iter()
        .map(|conv| -> Result<RenderedTranscript> {
            let channel = match conv.channel.as_deref() {
                Some(selector) => selector.parse::<Channel>()?,
                None => default_channel,
            };
            let text = create_adapter(channel).render_transcript_with(&conv.messages, config)?;
            Ok(RenderedTranscript {
                id: conv.id.clone(),
                channel,
                created_at: conv.created_at,
                turns: conv.messages.len(),
                text,
            })
        })
        .collect()
}

/// Statistics about a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub conversations: usize,
    pub turns: usize,
    /// Transcripts that rendered to an empty string
    pub empty_transcripts: usize,
    pub output_bytes: usize,
}

impl RenderStats {
    /// Collects statistics over rendered transcripts.
    pub fn from_transcripts(transcripts: &[RenderedTranscript]) -> Self {
        transcripts.iter().fold(Self::default(), |mut stats, t| {
            stats.conversations += 1;
            stats.turns += t.turns;
            stats.output_bytes += t.text.len();
            if t.text.is_empty() {
                stats.empty_transcripts += 1;
            }
            stats
        })
    }

    /// Average number of turns per conversation.
    pub fn average_turns(&self) -> f64 {
        if self.conversations == 0 {
            return 0.0;
        }
        self.turns as f64 / self.conversations as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turn::Turn;
    use serde_json::json;

    fn conversations() -> Vec<Conversation> {
        vec![
            Conversation::new(vec![
                Turn::user("hi"),
                Turn::bot(json!({"type": "TEXT", "data": "hello"})),
            ])
            .id("web"),
            Conversation::new(vec![Turn::bot(json!("Shipped"))])
                .id("wa")
                .channel("whatsapp"),
            Conversation::new(vec![]).id("empty"),
        ]
    }

    #[test]
    fn test_render_uses_conversation_channel() {
        let rendered =
            render_conversations(&conversations(), Channel::WebChat, &RenderConfig::default())
                .unwrap();

        assert_eq!(rendered.len(), 3);
        assert_eq!(rendered[0].channel, Channel::WebChat);
        assert_eq!(
            rendered[0].text,
            "\nUSER\n============\nhi\n\nBOT\n============\nhello\n"
        );
        assert_eq!(rendered[1].channel, Channel::WhatsApp);
        assert_eq!(rendered[1].text, "\nBOT\n============\nShipped\n");
        assert_eq!(rendered[2].text, "");
    }

    #[test]
    fn test_unknown_conversation_channel() {
        let convs = vec![Conversation::new(vec![]).channel("sms")];
        let err = render_conversations(&convs, Channel::WebChat, &RenderConfig::default())
            .unwrap_err();
        assert!(err.is_unknown_channel());
    }

    #[test]
    fn test_stats() {
        let rendered =
            render_conversations(&conversations(), Channel::WebChat, &RenderConfig::default())
                .unwrap();
        let stats = RenderStats::from_transcripts(&rendered);

        assert_eq!(stats.conversations, 3);
        assert_eq!(stats.turns, 3);
        assert_eq!(stats.empty_transcripts, 1);
        assert!((stats.average_turns() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_empty() {
        let stats = RenderStats::from_transcripts(&[]);
        assert_eq!(stats, RenderStats::default());
        assert!(stats.average_turns().abs() < f64::EPSILON);
    }
}
