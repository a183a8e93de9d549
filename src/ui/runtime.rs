use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::flow::{ApologyFlow, FlowSettings};
use crate::provider;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;

pub fn run(config: &Config) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    // Flow tasks and ack timers are spawned from the UI thread.
    let enter_guard = runtime.enter();

    let flow = ApologyFlow::from_provider(
        provider::from_config(config),
        Arc::new(SystemClipboard::new()),
        FlowSettings::from(&config.flow),
    );

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(flow, events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => handle_event(&mut app, event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    drop(enter_guard);
    runtime.shutdown_background();
    Ok(())
}

fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Paste(text) => {
            if app.open_page().is_none() {
                app.push_str(&text);
            }
        }
        AppEvent::Tick => app.on_tick(),
        AppEvent::Resize(_, _) => {}
        AppEvent::GenerationFinished(outcome) => app.on_generation_finished(outcome),
        AppEvent::CopyAckExpired { epoch } => app.on_copy_ack_expired(epoch),
        AppEvent::InputClosed => {
            tracing::warn!("Terminal input closed, exiting");
            app.request_quit();
        }
    }
}
