use crate::converter::ConverterHandle;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;

enum Wake {
    Input(AppEvent),
    StateChanged,
    Stop,
}

/// Runs the interactive converter until the user quits or shutdown is
/// signalled. Signals shutdown on the way out.
pub async fn run(converter: ConverterHandle, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(converter.state());
    let mut events = EventHandler::new(shutdown.clone());
    let mut state_rx = converter.subscribe();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let wake = tokio::select! {
            event = events.next() => event.map_or(Wake::Stop, Wake::Input),
            changed = state_rx.changed() => match changed {
                Ok(()) => Wake::StateChanged,
                Err(_) => Wake::Stop,
            },
            _ = shutdown.wait() => Wake::Stop,
        };

        match wake {
            Wake::Input(AppEvent::Key(key)) => {
                if let InputAction::Forward(command) = handle_key(&mut app, key) {
                    if let Err(err) = converter.send(command).await {
                        tracing::error!(error = %err, "Dropping input");
                        app.request_quit();
                    }
                }
            }
            Wake::Input(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            Wake::StateChanged => {
                let state = state_rx.borrow_and_update().clone();
                app.on_state(state);
            }
            Wake::Stop => break,
        }
    }

    shutdown.signal();
    drop(guard);
    Ok(())
}
