use std::cell::Cell;

use crate::flow::{ApologyFlow, CopyError, RequestState};
use crate::pages::{Page, ABOUT, HOME};
use crate::provider::GenerationError;
use crate::ui::events::{AppEvent, AppEventSender};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PageKind {
    Guide,
    About,
}

impl PageKind {
    pub fn page(self) -> &'static Page {
        match self {
            PageKind::Guide => &HOME,
            PageKind::About => &ABOUT,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Form,
    Page(PageKind),
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    flow: ApologyFlow,
    events: AppEventSender,
    spinner_tick: u8,
    /// Transient message shown in the footer until the next key press.
    notice: Option<String>,
    /// First visible row of the output panel.
    output_scroll: u16,
    /// Largest useful `output_scroll`, recorded by the last draw.
    output_scroll_max: Cell<u16>,
}

impl App {
    pub fn new(flow: ApologyFlow, events: AppEventSender) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Form,
            flow,
            events,
            spinner_tick: 0,
            notice: None,
            output_scroll: 0,
            output_scroll_max: Cell::new(0),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn open_page(&self) -> Option<PageKind> {
        match self.focus {
            Focus::Page(kind) => Some(kind),
            Focus::Form => None,
        }
    }

    pub fn toggle_page(&mut self, kind: PageKind) {
        self.focus = match self.focus {
            Focus::Page(active) if active == kind => Focus::Form,
            _ => Focus::Page(kind),
        };
    }

    pub fn close_page(&mut self) {
        self.focus = Focus::Form;
    }

    pub fn flow(&self) -> &ApologyFlow {
        &self.flow
    }

    pub fn state(&self) -> &RequestState {
        self.flow.state()
    }

    pub fn spinner_tick(&self) -> u8 {
        self.spinner_tick
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub fn output_scroll(&self) -> u16 {
        self.output_scroll.min(self.output_scroll_max.get())
    }

    /// Move the output panel by `rows` (negative scrolls up).
    pub fn scroll_output(&mut self, rows: i32) {
        let current = i32::from(self.output_scroll());
        let max = i32::from(self.output_scroll_max.get());
        self.output_scroll = (current + rows).clamp(0, max) as u16;
    }

    pub(crate) fn set_output_scroll_limit(&self, max: u16) {
        self.output_scroll_max.set(max);
    }

    pub fn push_char(&mut self, c: char) {
        self.flow.description_mut().push(c);
    }

    pub fn push_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.flow.description_mut().push_str(&normalized);
    }

    pub fn backspace(&mut self) {
        self.flow.description_mut().pop();
    }

    /// Start a generation request. Inert while the input is blank or a
    /// request is in flight.
    pub fn generate(&mut self) {
        let submitted = self.flow.submit();
        let panel_replaced = match &submitted {
            Ok(_) => true,
            Err(e) => e.is_reported(),
        };
        if panel_replaced {
            self.output_scroll = 0;
        }
        match submitted {
            Ok(task) => {
                self.spinner_tick = 0;
                let events = self.events.clone();
                tokio::spawn(async move {
                    let outcome = task.join().await;
                    let _ = events.send(AppEvent::GenerationFinished(outcome));
                });
            }
            // The flow already shows the failure.
            Err(e) if e.is_reported() => {}
            Err(e) => tracing::debug!(reason = %e, "Generate ignored"),
        }
    }

    pub fn on_generation_finished(&mut self, outcome: Result<String, GenerationError>) {
        self.output_scroll = 0;
        self.flow.finish(outcome);
    }

    /// Copy the result and schedule the acknowledgement reset.
    pub fn copy_result(&mut self) {
        match self.flow.copy_result() {
            Ok(timer) => {
                self.notice = None;
                let events = self.events.clone();
                tokio::spawn(async move {
                    let epoch = timer.elapsed().await;
                    let _ = events.send(AppEvent::CopyAckExpired { epoch });
                });
            }
            Err(CopyError::NothingToCopy) => {}
            Err(e) => self.notice = Some(format!("Copy failed: {}", e)),
        }
    }

    pub fn on_copy_ack_expired(&mut self, epoch: u64) {
        self.flow.expire_ack(epoch);
    }

    pub fn on_tick(&mut self) {
        if self.flow.state().is_pending() {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }
}
