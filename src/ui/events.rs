use crossterm::event::{self, Event, KeyEvent};
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::shutdown::ShutdownHandle;

/// Poll timeout of the input thread; bounds how long shutdown can go unnoticed.
const INPUT_POLL: Duration = Duration::from_millis(50);

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Reads terminal input on a dedicated thread and hands it to the async UI
/// loop.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel(128);

        thread::spawn(move || loop {
            if shutdown.is_shutting_down() {
                break;
            }

            match event::poll(INPUT_POLL) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(err) => {
                    tracing::error!(error = %err, "Terminal poll failed");
                    break;
                }
            }

            let app_event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
                Ok(_) => continue,
                Err(err) => {
                    tracing::error!(error = %err, "Terminal read failed");
                    break;
                }
            };

            if tx.blocking_send(app_event).is_err() {
                break;
            }
        });

        Self { rx }
    }

    /// Next input event; `None` once the input thread has stopped.
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }
}
