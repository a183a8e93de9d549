//! The apology request flow.

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::clipboard::{ClipboardError, ClipboardWriter};
use crate::config::FlowConfig;
use crate::mvi::Reducer;
use crate::provider::{GenerationError, TextGenerator};

use super::intent::{AckIntent, FlowIntent};
use super::prompt::PromptTemplate;
use super::reducer::{AckReducer, FlowReducer};
use super::state::{ClipboardAck, RequestState};
use super::task::{AckTimer, GenerationTask};

/// Reasons a submission did not start a request.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The description is empty after trimming. State is unchanged.
    #[error("description is empty")]
    EmptyDescription,

    /// A request is already in flight. State is unchanged.
    #[error("a request is already in progress")]
    AlreadyPending,

    /// No usable provider. State is now `Failed` with the configuration message.
    #[error("generation provider is not configured")]
    NotConfigured,

    /// The provider failed to initialize. State is now `Failed` with the
    /// setup error.
    #[error("generation provider could not be initialized")]
    ProviderUnavailable,
}

impl SubmitError {
    /// Whether the state already carries the failure for display.
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::NotConfigured | Self::ProviderUnavailable)
    }
}

/// Reasons a copy did not happen.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CopyError {
    #[error("there is no apology to copy")]
    NothingToCopy,

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Policy constants of the flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowSettings {
    pub template: PromptTemplate,
    pub copy_ack_delay: Duration,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self::from(&FlowConfig::default())
    }
}

impl From<&FlowConfig> for FlowSettings {
    fn from(config: &FlowConfig) -> Self {
        Self {
            template: PromptTemplate::new(config.prompt_template.clone()),
            copy_ack_delay: Duration::from_millis(config.copy_ack_ms),
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Turns a free-text description into a generated apology.
///
/// Owns all transitional state of one view: the description, the request
/// state and the copy acknowledgement. At most one request is in flight.
pub struct ApologyFlow {
    description: String,
    state: RequestState,
    ack: ClipboardAck,
    generator: Option<Arc<dyn TextGenerator>>,
    /// Message of a provider setup failure other than a missing credential.
    setup_error: Option<String>,
    clipboard: Arc<dyn ClipboardWriter>,
    settings: FlowSettings,
}

impl ApologyFlow {
    /// Create a flow. `generator` is `None` when no credential is configured.
    pub fn new(
        generator: Option<Arc<dyn TextGenerator>>,
        clipboard: Arc<dyn ClipboardWriter>,
        settings: FlowSettings,
    ) -> Self {
        Self {
            description: String::new(),
            state: RequestState::default(),
            ack: ClipboardAck::default(),
            generator,
            setup_error: None,
            clipboard,
            settings,
        }
    }

    /// Create a flow from the outcome of building the provider.
    ///
    /// A missing credential behaves like `new(None, ..)`. Any other setup
    /// failure is shown as-is on the first submission.
    pub fn from_provider(
        provider: Result<Arc<dyn TextGenerator>, GenerationError>,
        clipboard: Arc<dyn ClipboardWriter>,
        settings: FlowSettings,
    ) -> Self {
        match provider {
            Ok(generator) => Self::new(Some(generator), clipboard, settings),
            Err(GenerationError::NotConfigured) => Self::new(None, clipboard, settings),
            Err(error) => {
                let mut flow = Self::new(None, clipboard, settings);
                flow.setup_error = Some(error.user_message());
                flow
            }
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn description_mut(&mut self) -> &mut String {
        &mut self.description
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn ack(&self) -> ClipboardAck {
        self.ack
    }

    /// Model name of the provider, if one is configured.
    pub fn model(&self) -> Option<&str> {
        self.generator.as_deref().map(|g| g.model())
    }

    /// Whether the trigger is active: non-blank input and nothing in flight.
    pub fn can_submit(&self) -> bool {
        !self.description.trim().is_empty() && !self.state.is_pending()
    }

    /// Start generating an apology for the current description.
    ///
    /// On success the returned task is already running; pass its outcome to
    /// [`finish`](Self::finish). A missing provider is reported before any
    /// network attempt and settles the state as `Failed` immediately.
    pub fn submit(&mut self) -> Result<GenerationTask, SubmitError> {
        let description = self.description.trim();
        if description.is_empty() {
            tracing::debug!("Ignoring submit with empty description");
            return Err(SubmitError::EmptyDescription);
        }
        if self.state.is_pending() {
            tracing::debug!("Ignoring submit while a request is pending");
            return Err(SubmitError::AlreadyPending);
        }

        let prompt = self.settings.template.render(description);
        dispatch_mvi!(self, state, FlowReducer, FlowIntent::Submit);

        let generator = match &self.generator {
            Some(generator) if generator.is_configured() => Arc::clone(generator),
            _ => {
                let (message, error) = match &self.setup_error {
                    Some(message) => (message.clone(), SubmitError::ProviderUnavailable),
                    None => (
                        GenerationError::NotConfigured.user_message(),
                        SubmitError::NotConfigured,
                    ),
                };
                tracing::warn!("{}", message);
                dispatch_mvi!(self, state, FlowReducer, FlowIntent::Failed { message });
                return Err(error);
            }
        };

        tracing::debug!(
            provider = generator.name(),
            description_len = description.len(),
            "Submitting apology request"
        );
        Ok(GenerationTask::spawn(generator, prompt))
    }

    /// Settle the in-flight request with its outcome.
    pub fn finish(&mut self, outcome: Result<String, GenerationError>) {
        let intent = match outcome {
            Ok(result) => {
                tracing::debug!(result_len = result.len(), "Apology generated");
                FlowIntent::Succeeded { result }
            }
            Err(error) => {
                tracing::error!(error = %error, "Apology generation failed");
                FlowIntent::Failed {
                    message: error.user_message(),
                }
            }
        };
        dispatch_mvi!(self, state, FlowReducer, intent);
    }

    /// Submit, wait for the provider and settle the state.
    pub async fn generate(&mut self) -> Result<&RequestState, SubmitError> {
        let task = self.submit()?;
        let outcome = task.join().await;
        self.finish(outcome);
        Ok(&self.state)
    }

    /// Copy the generated apology to the clipboard.
    ///
    /// On success the acknowledgement is shown and the returned timer says
    /// when to pass its epoch to [`expire_ack`](Self::expire_ack). A failed
    /// write leaves the acknowledgement untouched.
    pub fn copy_result(&mut self) -> Result<AckTimer, CopyError> {
        let result = match self.state.result() {
            Some(result) if !result.is_empty() => result,
            _ => return Err(CopyError::NothingToCopy),
        };

        if let Err(e) = self.clipboard.write_text(result) {
            tracing::warn!(error = %e, "Clipboard write failed");
            return Err(CopyError::Clipboard(e));
        }

        dispatch_mvi!(self, ack, AckReducer, AckIntent::Copied);
        Ok(AckTimer::new(self.ack.epoch(), self.settings.copy_ack_delay))
    }

    /// Clear the acknowledgement started by copy `epoch`, unless a later
    /// copy restarted it.
    pub fn expire_ack(&mut self, epoch: u64) {
        dispatch_mvi!(self, ack, AckReducer, AckIntent::Expired { epoch });
    }

    /// Copy, then keep the acknowledgement for the configured delay.
    pub async fn copy_and_wait(&mut self) -> Result<(), CopyError> {
        let timer = self.copy_result()?;
        let epoch = timer.elapsed().await;
        self.expire_ack(epoch);
        Ok(())
    }
}
