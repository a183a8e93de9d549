//! Reducers for the apology request flow.

use crate::mvi::Reducer;

use super::intent::{AckIntent, FlowIntent};
use super::state::{ClipboardAck, RequestState};

/// Reducer for request state transitions.
pub struct FlowReducer;

impl Reducer for FlowReducer {
    type State = RequestState;
    type Intent = FlowIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Entering Pending drops the previous result or error.
            FlowIntent::Submit => RequestState::Pending,

            FlowIntent::Succeeded { result } => match state {
                RequestState::Pending => RequestState::Succeeded { result },
                // Stale completion
                other => other,
            },

            FlowIntent::Failed { message } => match state {
                RequestState::Pending => RequestState::Failed { error: message },
                other => other,
            },
        }
    }
}

/// Reducer for the clipboard acknowledgement.
pub struct AckReducer;

impl Reducer for AckReducer {
    type State = ClipboardAck;
    type Intent = AckIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AckIntent::Copied => ClipboardAck::shown(state.epoch().wrapping_add(1)),

            AckIntent::Expired { epoch } if epoch == state.epoch() => {
                ClipboardAck::hidden(state.epoch())
            }

            // A newer copy restarted the delay.
            AckIntent::Expired { .. } => state,
        }
    }
}
