//! Model-View-Intent primitives for the request flow.
//!
//! [`ApologyFlow`](crate::flow::ApologyFlow) keeps two pieces of state, the
//! [`RequestState`](crate::flow::RequestState) and the
//! [`ClipboardAck`](crate::flow::ClipboardAck). Neither is assigned directly:
//! every change is an intent run through a reducer, so the invariants of
//! each state live in one match.
//!
//! ```text
//! submit / completion / copy / timer
//!            │
//!            ▼
//!   FlowIntent, AckIntent ──→ FlowReducer, AckReducer ──→ state ──→ render
//! ```

/// State owned by the flow and read by the views.
///
/// `Default` is the state before any interaction; the flow swaps it out
/// with `std::mem::take` while a reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Something that happened: a submission, a provider completion, a copy or
/// an expired acknowledgement timer.
pub trait Intent: Send + 'static {}

/// Pure transition `(State, Intent) -> State`.
///
/// Reducers decide which intents apply in which state (a completion outside
/// `Pending`, an expiry for an old copy epoch) and ignore the rest.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
