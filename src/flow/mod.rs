//! Apology request flow.
//!
//! Turns a free-text description into a generated apology via exactly one
//! provider call per user action, and tracks what the user sees meanwhile.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - `RequestState` tagged union and `ClipboardAck`
//! - `intent.rs` - submissions, completions, copies, timer expiry
//! - `reducer.rs` - state transitions
//! - `controller.rs` - `ApologyFlow`, which owns the state and the side effects
//!
//! ```text
//! Idle ──submit──→ Pending ──text──→ Succeeded
//!                   │   ↑                │
//!  error / no key   ↓   └──── submit ────┤
//!                 Failed ───── submit ───┘
//! ```

mod controller;
mod intent;
mod prompt;
mod reducer;
mod state;
mod task;

pub use controller::{ApologyFlow, CopyError, FlowSettings, SubmitError};
pub use intent::{AckIntent, FlowIntent};
pub use prompt::PromptTemplate;
pub use reducer::{AckReducer, FlowReducer};
pub use state::{ClipboardAck, RequestState};
pub use task::{AckTimer, GenerationTask};
