#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// CSS class the message area carries for this kind.
    pub fn class(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Message {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Message {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }
}

/// Identifies one showing of a message. Only the current token may hide it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissToken(u64);

/// The single message slot of the page.
///
/// Every [`Notice::show`] hands out a fresh token and invalidates the previous
/// one, so a timer started for an older message never hides a newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    message: Option<Message>,
    visible: bool,
    generation: u64,
}

impl Notice {
    pub fn show(&mut self, message: Message) -> DismissToken {
        self.generation += 1;
        self.message = Some(message);
        self.visible = true;
        DismissToken(self.generation)
    }

    /// Returns whether the notice was hidden.
    pub fn dismiss(&mut self, token: DismissToken) -> bool {
        if token.0 != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Class list for the message area; the text stays when hidden.
    pub fn class(&self) -> String {
        let kind = self.message.as_ref().map(|m| m.kind.class());
        match (kind, self.visible) {
            (Some(kind), true) => kind.to_string(),
            (Some(kind), false) => format!("{} hidden", kind),
            (None, _) => "hidden".to_string(),
        }
    }
}
