//! The conversion orchestrator task.
//!
//! One tokio task owns the [`ConverterState`], both timers and the request
//! sequence counter. Commands from the UI, timer deadlines and request
//! completions are all multiplexed in a single `select!`, so state is only
//! ever touched from that task.
//!
//! Requests are never cancelled on the wire. Each one carries a sequence
//! number and its outcome is applied only if no newer request has been
//! issued since (last-issued-wins).

use rust_decimal::Decimal;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::catalog::{Currency, Role};
use crate::client::{ConversionClient, ConversionError, ConversionPayload};
use crate::config::ConverterConfig;
use crate::converter::amount::validate_payload;
use crate::converter::intent::ConverterIntent;
use crate::converter::reducer::ConverterReducer;
use crate::converter::state::ConverterState;
use crate::converter::timer::TimerSlot;
use crate::shutdown::ShutdownHandle;
use crate::ui::mvi::Reducer;

const COMMAND_BUFFER: usize = 64;

/// Events the presentation layer forwards to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConverterCommand {
    AmountChanged { text: String },
    CurrencySelected { role: Role, currency: Currency },
    SwapRequested,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConverterError {
    #[error("Converter task has stopped")]
    Disconnected,
}

/// Cloneable front door to a running orchestrator.
#[derive(Clone)]
pub struct ConverterHandle {
    commands: mpsc::Sender<ConverterCommand>,
    state: watch::Receiver<ConverterState>,
}

impl ConverterHandle {
    pub async fn send(&self, command: ConverterCommand) -> Result<(), ConverterError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| ConverterError::Disconnected)
    }

    pub async fn amount_changed(&self, text: impl Into<String>) -> Result<(), ConverterError> {
        self.send(ConverterCommand::AmountChanged { text: text.into() })
            .await
    }

    pub async fn select_currency(
        &self,
        role: Role,
        currency: Currency,
    ) -> Result<(), ConverterError> {
        self.send(ConverterCommand::CurrencySelected { role, currency })
            .await
    }

    pub async fn swap(&self) -> Result<(), ConverterError> {
        self.send(ConverterCommand::SwapRequested).await
    }

    /// Latest published snapshot.
    pub fn state(&self) -> ConverterState {
        self.state.borrow().clone()
    }

    /// Read-only stream of published snapshots.
    pub fn subscribe(&self) -> watch::Receiver<ConverterState> {
        self.state.clone()
    }
}

struct Completion {
    sequence: u64,
    source: Currency,
    target: Currency,
    result: Result<ConversionPayload, ConversionError>,
}

enum Event {
    Command(ConverterCommand),
    Completed(Completion),
    DebounceFired,
    PollFired,
}

pub struct Orchestrator {
    client: Arc<dyn ConversionClient>,
    state: ConverterState,
    publisher: watch::Sender<ConverterState>,
    commands: mpsc::Receiver<ConverterCommand>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions: mpsc::UnboundedReceiver<Completion>,
    debounce: TimerSlot,
    poll: TimerSlot,
    /// Sequence number of the most recently issued request.
    latest_sequence: u64,
    shutdown: ShutdownHandle,
}

impl Orchestrator {
    pub fn new(
        client: Arc<dyn ConversionClient>,
        config: &ConverterConfig,
        shutdown: ShutdownHandle,
    ) -> (Self, ConverterHandle) {
        let state = ConverterState::new(config.source, config.target);
        let (publisher, state_rx) = watch::channel(state.clone());
        let (commands_tx, commands) = mpsc::channel(COMMAND_BUFFER);
        let (completions_tx, completions) = mpsc::unbounded_channel();

        let orchestrator = Self {
            client,
            state,
            publisher,
            commands,
            completions_tx,
            completions,
            debounce: TimerSlot::new("debounce", config.debounce()),
            poll: TimerSlot::new("poll", config.poll_interval()),
            latest_sequence: 0,
            shutdown,
        };
        let handle = ConverterHandle {
            commands: commands_tx,
            state: state_rx,
        };
        (orchestrator, handle)
    }

    /// Build an orchestrator and run it on its own task.
    pub fn spawn(
        client: Arc<dyn ConversionClient>,
        config: &ConverterConfig,
        shutdown: ShutdownHandle,
    ) -> (ConverterHandle, JoinHandle<()>) {
        let (orchestrator, handle) = Self::new(client, config, shutdown);
        let task = tokio::spawn(orchestrator.run());
        (handle, task)
    }

    /// Runs until every handle is dropped or shutdown is signalled.
    pub async fn run(mut self) {
        tracing::info!(
            source = %self.state.source,
            target = %self.state.target,
            "Converter started"
        );

        loop {
            let event = tokio::select! {
                biased;
                _ = self.shutdown.wait() => break,
                command = self.commands.recv() => match command {
                    Some(command) => Event::Command(command),
                    None => break,
                },
                Some(completion) = self.completions.recv() => Event::Completed(completion),
                _ = self.debounce.fired() => Event::DebounceFired,
                _ = self.poll.fired() => Event::PollFired,
            };
            self.handle(event);
        }

        tracing::info!("Converter stopped");
    }

    fn handle(&mut self, event: Event) {
        match event {
            Event::Command(command) => self.on_command(command),
            Event::Completed(completion) => self.on_completion(completion),
            Event::DebounceFired => {
                self.debounce.cancel();
                tracing::debug!("Debounce elapsed");
                self.refresh();
                self.rearm_poll();
            }
            Event::PollFired => {
                self.poll.cancel();
                tracing::debug!("Poll elapsed");
                if self.state.amount > Decimal::ZERO {
                    self.refresh();
                    self.rearm_poll();
                }
            }
        }
    }

    fn on_command(&mut self, command: ConverterCommand) {
        match command {
            ConverterCommand::AmountChanged { text } => {
                self.dispatch(ConverterIntent::EditAmount { text });
                // Debounce firing re-arms the poll.
                self.poll.cancel();
                self.debounce.arm();
            }
            ConverterCommand::CurrencySelected { role, currency } => {
                tracing::debug!(?role, %currency, "Currency selected");
                self.dispatch(ConverterIntent::Select { role, currency });
                self.refresh();
                self.rearm_poll();
            }
            ConverterCommand::SwapRequested => {
                tracing::debug!("Swap requested");
                self.dispatch(ConverterIntent::Swap);
                self.refresh();
                self.rearm_poll();
            }
        }
    }

    /// Issue a request for the current pair, or clear the result when there
    /// is nothing to convert. Either way, any request still in flight is
    /// superseded.
    fn refresh(&mut self) {
        self.latest_sequence += 1;

        if self.state.amount <= Decimal::ZERO {
            tracing::debug!(amount = %self.state.amount, "Nothing to convert");
            self.dispatch(ConverterIntent::Clear);
            return;
        }

        let sequence = self.latest_sequence;
        let source = self.state.source;
        let target = self.state.target;
        let amount = self.state.amount;
        self.dispatch(ConverterIntent::RequestIssued);

        tracing::debug!(sequence, %source, %target, %amount, "Conversion requested");

        let client = Arc::clone(&self.client);
        let completions = self.completions_tx.clone();
        tokio::spawn(async move {
            let result = client.convert(source, amount, target).await;
            let _ = completions.send(Completion {
                sequence,
                source,
                target,
                result,
            });
        });
    }

    fn on_completion(&mut self, completion: Completion) {
        if completion.sequence != self.latest_sequence {
            tracing::debug!(
                sequence = completion.sequence,
                latest = self.latest_sequence,
                "Discarding stale conversion result"
            );
            return;
        }

        let outcome = completion
            .result
            .and_then(|payload| validate_payload(&payload, completion.source, completion.target));

        match outcome {
            Ok(target_amount) => {
                tracing::debug!(sequence = completion.sequence, %target_amount, "Conversion applied");
                self.dispatch(ConverterIntent::ConversionSucceeded { target_amount });
            }
            Err(err) => {
                tracing::warn!(
                    sequence = completion.sequence,
                    kind = err.kind(),
                    error = %err,
                    "Conversion failed"
                );
                self.dispatch(ConverterIntent::ConversionFailed {
                    message: err.user_message().to_string(),
                });
            }
        }

        self.rearm_poll();
    }

    /// Periodic refresh only runs while there is something to convert.
    fn rearm_poll(&mut self) {
        if self.state.amount > Decimal::ZERO {
            self.poll.arm();
        } else {
            self.poll.cancel();
        }
    }

    fn dispatch(&mut self, intent: ConverterIntent) {
        self.state = ConverterReducer::reduce(std::mem::take(&mut self.state), intent);
        self.publisher.send_if_modified(|published| {
            if *published == self.state {
                false
            } else {
                *published = self.state.clone();
                true
            }
        });
    }
}
