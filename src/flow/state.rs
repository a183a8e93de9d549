//! State of the apology request flow.

use crate::mvi::UiState;

/// Phase of the request flow.
///
/// Result and error live in different variants, so a view can never show
/// both at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// Nothing requested yet.
    #[default]
    Idle,

    /// A generation request is in flight.
    Pending,

    /// The provider returned text.
    Succeeded {
        /// Generated apology, exactly as returned.
        result: String,
    },

    /// The last request failed.
    Failed {
        /// Message shown in place of a result.
        error: String,
    },
}

impl UiState for RequestState {}

impl RequestState {
    /// Check if a request is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The generated text, if the last request succeeded.
    pub fn result(&self) -> Option<&str> {
        match self {
            Self::Succeeded { result } => Some(result),
            _ => None,
        }
    }

    /// The error message, if the last request failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// Short label for status displays and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Succeeded { .. } => "ready",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Transient "copied" confirmation.
///
/// `epoch` increases on every copy so a timer started by an earlier copy
/// cannot clear the acknowledgement of a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClipboardAck {
    copied: bool,
    epoch: u64,
}

impl UiState for ClipboardAck {}

impl ClipboardAck {
    /// Check if the confirmation is showing.
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Identifier of the most recent copy.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub(crate) fn shown(epoch: u64) -> Self {
        Self {
            copied: true,
            epoch,
        }
    }

    pub(crate) fn hidden(epoch: u64) -> Self {
        Self {
            copied: false,
            epoch,
        }
    }
}
