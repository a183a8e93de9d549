//! Intents for the apology request flow.

use crate::mvi::Intent;

/// Intents that drive [`RequestState`](super::RequestState).
#[derive(Debug, Clone)]
pub enum FlowIntent {
    /// An accepted submission started a request.
    Submit,

    /// The provider returned text.
    Succeeded {
        /// Generated text.
        result: String,
    },

    /// The request failed, or could not be attempted.
    Failed {
        /// User-facing error message.
        message: String,
    },
}

impl Intent for FlowIntent {}

/// Intents that drive [`ClipboardAck`](super::ClipboardAck).
#[derive(Debug, Clone, Copy)]
pub enum AckIntent {
    /// The result was written to the clipboard.
    Copied,

    /// The display delay for copy `epoch` elapsed.
    Expired {
        /// Epoch the timer was started for.
        epoch: u64,
    },
}

impl Intent for AckIntent {}
