//! Broadcast composer state.
//!
//! Sending is a local simulation: no backend endpoint exists yet, so a send
//! waits `SEND_DELAY_MS`, always succeeds, and the form clears itself
//! `RESET_DELAY_MS` later.

#[cfg(test)]
#[path = "broadcast_test.rs"]
mod broadcast_test;

pub const SEND_DELAY_MS: u32 = 1_500;
pub const RESET_DELAY_MS: u32 = 3_000;

pub const SUCCESS_TEXT: &str = "Broadcast sent successfully!";
pub const FAILURE_TEXT: &str = "Failed to send broadcast. Please try again.";

/// Selectable audiences as `(value, label)`.
pub const AUDIENCES: [(&str, &str); 5] = [
    ("all", "All Students"),
    ("10A", "Grade 10A"),
    ("10B", "Grade 10B"),
    ("11A", "Grade 11A"),
    ("11C", "Grade 11C"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SendStatus {
    Sent,
    Failed,
}

impl SendStatus {
    pub fn text(self) -> &'static str {
        match self {
            Self::Sent => SUCCESS_TEXT,
            Self::Failed => FAILURE_TEXT,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BroadcastState {
    pub audience: String,
    pub title: String,
    pub message: String,
    pub sending: bool,
    pub status: Option<SendStatus>,
    /// Bumped per send; a reset timer only applies to the send that armed it.
    pub send_seq: u64,
}

impl BroadcastState {
    pub fn is_valid(&self) -> bool {
        !self.audience.is_empty() && !self.title.trim().is_empty() && !self.message.trim().is_empty()
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.sending
    }

    /// Enter `sending`. Returns the send's sequence number, or `None` when the
    /// form cannot be submitted.
    pub fn begin_send(&mut self) -> Option<u64> {
        if !self.can_submit() {
            return None;
        }
        self.sending = true;
        self.status = None;
        self.send_seq += 1;
        Some(self.send_seq)
    }

    pub fn finish_send(&mut self, delivered: bool) {
        self.sending = false;
        self.status = Some(if delivered { SendStatus::Sent } else { SendStatus::Failed });
    }

    /// Clear fields and status if no newer send has started since `seq`.
    pub fn reset_after(&mut self, seq: u64) {
        if seq != self.send_seq || self.sending {
            return;
        }
        self.audience.clear();
        self.title.clear();
        self.message.clear();
        self.status = None;
    }
}

/// What the live preview panel shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Preview {
    Placeholder,
    Draft { title: Option<String>, message: Option<String> },
}

impl Preview {
    /// Placeholder when both fields are empty; otherwise each field, with
    /// `None` where the view shows its "No title..." / "No content..." hint.
    pub fn of(title: &str, message: &str) -> Self {
        if title.is_empty() && message.is_empty() {
            return Self::Placeholder;
        }
        let present = |s: &str| (!s.is_empty()).then(|| s.to_owned());
        Self::Draft { title: present(title), message: present(message) }
    }
}
