use serde::{Deserialize, Serialize};

pub const ASSISTANT_ROLE: &str = "assistant";

const PREFILLED_LABEL: &str = "Assistant (Prefilled)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self { role: role.into(), content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ASSISTANT_ROLE, content)
    }

    pub fn is_assistant(&self) -> bool {
        self.role == ASSISTANT_ROLE
    }
}

/// One recorded exchange, a line of shape `{"messages": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Concatenation of every assistant message's content, with no separator
    pub fn assistant_text(&self) -> String {
        self.messages.iter().filter(|m| m.is_assistant()).map(|m| m.content.as_str()).collect()
    }

    /// Messages paired with the label they are displayed under
    pub fn labeled_messages(&self) -> impl Iterator<Item = (String, &Message)> {
        self.messages.iter().enumerate().map(move |(idx, message)| {
            (display_label(&self.messages, idx), message)
        })
    }

    /// Number of assistant turns immediately followed by another assistant turn
    pub fn prefilled_count(&self) -> usize {
        self.messages.windows(2).filter(|pair| pair[0].is_assistant() && pair[1].is_assistant()).count()
    }
}

/// Alternate line shape `{"text": "..."}`, converted on load into a single
/// assistant message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    pub text: String,
}

impl From<TextRecord> for Conversation {
    fn from(record: TextRecord) -> Self {
        Conversation::new(vec![Message::assistant(record.text)])
    }
}

/// Label shown above the message at `idx`.
///
/// An assistant message followed directly by another assistant message is a
/// prefill and is labelled "Assistant (Prefilled)". Everything else shows its
/// role with the first letter upper-cased and the rest lower-cased.
///
/// # Panics
///
/// Panics if `idx` is out of bounds.
pub fn display_label(messages: &[Message], idx: usize) -> String {
    let message = &messages[idx];
    let next_is_assistant = messages.get(idx + 1).is_some_and(Message::is_assistant);
    if message.is_assistant() && next_is_assistant {
        PREFILLED_LABEL.to_string()
    } else {
        capitalize(&message.role)
    }
}

fn capitalize(role: &str) -> String {
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Plain-text rendering: each message as a label line followed by its content,
/// messages separated by a blank line
pub fn format_transcript(conversation: &Conversation) -> String {
    conversation
        .labeled_messages()
        .map(|(label, message)| format!("{}\n{}", label, message.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}
