//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use apologen::clipboard::{ClipboardError, ClipboardWriter};
use apologen::flow::{ApologyFlow, FlowSettings, PromptTemplate};
use apologen::provider::{GenerationError, TextGenerator};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::Notify;

/// Canned outcome of a [`ScriptedGenerator`].
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    /// Failure with an optional message.
    Fail(Option<String>),
}

/// Generator that returns a fixed reply and records every prompt.
///
/// A gated generator parks each call until [`ScriptedGenerator::release`].
pub struct ScriptedGenerator {
    reply: Reply,
    configured: bool,
    gate: Option<Notify>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self::build(Reply::Text(text.to_string()), true, false))
    }

    pub fn failing(message: Option<&str>) -> Arc<Self> {
        Arc::new(Self::build(
            Reply::Fail(message.map(str::to_string)),
            true,
            false,
        ))
    }

    pub fn gated(text: &str) -> Arc<Self> {
        Arc::new(Self::build(Reply::Text(text.to_string()), true, true))
    }

    pub fn unconfigured() -> Arc<Self> {
        Arc::new(Self::build(Reply::Text("unused".to_string()), false, false))
    }

    fn build(reply: Reply, configured: bool, gated: bool) -> Self {
        Self {
            reply,
            configured,
            gate: gated.then(Notify::new),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Let one parked call continue.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn name(&self) -> &'static str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().push(prompt.to_string());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Fail(message) => Err(GenerationError::provider(message.clone())),
        }
    }
}

/// Clipboard that records writes, or rejects them all.
#[derive(Default)]
pub struct RecordingClipboard {
    fail: bool,
    writes: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn broken() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            writes: Mutex::new(Vec::new()),
        })
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable("no display".to_string()));
        }
        self.writes.lock().push(text.to_string());
        Ok(())
    }
}

/// Flow settings with the stock template and the given acknowledgement delay.
pub fn settings_with_delay(delay: Duration) -> FlowSettings {
    FlowSettings {
        template: PromptTemplate::default(),
        copy_ack_delay: delay,
    }
}

/// Flow wired to `generator` and `clipboard` with a zero acknowledgement delay.
pub fn flow_with(
    generator: Option<Arc<ScriptedGenerator>>,
    clipboard: Arc<RecordingClipboard>,
) -> ApologyFlow {
    ApologyFlow::new(
        generator.map(|g| g as Arc<dyn TextGenerator>),
        clipboard,
        settings_with_delay(Duration::ZERO),
    )
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
