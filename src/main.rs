mod app;
mod config;
mod logging;
mod runtime;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::{AppState, PointerPosition};
use crate::app::{rotator, tracker};
use crate::runtime::pointer::PointerHub;
use crate::runtime::scheduler::{Scheduler, TokioScheduler};
use crate::runtime::subscription::{CancelToken, Subscription, Subscriptions};
use anyhow::Result;
use crossterm::{
    event::{
        DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event as CEvent, EventStream, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::{self, Write};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    let log_path = logging::init(&cfg.logging)?;
    tracing::info!(
        config = %config::config_path().display(),
        log = ?log_path,
        "greetpage starting"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "greetpage exited with an error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("greetpage stopped");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    Ok(())
}

/// Read terminal input: pointer moves go to the pointer hub, everything
/// else is forwarded to the event loop.
fn spawn_terminal_reader(
    pointer_hub: PointerHub,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) -> Subscription {
    let token = CancelToken::new();
    let guard = token.clone();
    let task = tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(event) = reader.next().await {
            if guard.is_cancelled() {
                break;
            }
            let event = match event {
                Ok(event) => event,
                Err(e) => {
                    tracing::warn!(error = %e, "terminal input stream failed");
                    break;
                }
            };
            if let CEvent::Mouse(mouse) = &event {
                if matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
                    pointer_hub.publish(PointerPosition::new(
                        i32::from(mouse.column),
                        i32::from(mouse.row),
                    ));
                    continue;
                }
            }
            if event_tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });
    Subscription::with_task("terminal", token, task)
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let size = terminal.size()?;
    let mut state = AppState::new(cfg.clone(), Rect::new(0, 0, size.width, size.height));

    let scheduler = TokioScheduler;
    let pointer_hub = PointerHub::new();

    // Dropped on every exit path, cancelling each subscription
    let mut subscriptions = Subscriptions::new();
    subscriptions.push(rotator::start(
        &scheduler,
        cfg.rotation.interval(),
        event_tx.clone(),
    ));
    subscriptions.push(tracker::start(&pointer_hub, event_tx.clone()));

    let tick_tx = event_tx.clone();
    subscriptions.push(scheduler.schedule_repeating(
        "frame",
        cfg.animation.tick(),
        Box::new(move || {
            let _ = tick_tx.send(AppEvent::Tick);
        }),
    ));
    subscriptions.push(spawn_terminal_reader(pointer_hub, event_tx));

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;
    state.dirty = false;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::Say { index } => {
                    let text = app::greetings::GREETINGS[index].text;
                    tracing::info!(index, text, "say button clicked");
                    let _ = io::stdout().write_all(b"\x07");
                    let _ = io::stdout().flush();
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    subscriptions.teardown();
    Ok(())
}
