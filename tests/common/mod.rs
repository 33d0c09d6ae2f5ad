//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use currency_converter::catalog::Currency;
use currency_converter::client::{
    ConversionClient, ConversionError, ConversionPayload, OfflineConversionClient,
};
use currency_converter::config::ConverterConfig;
use currency_converter::converter::{ConverterHandle, Orchestrator};
use currency_converter::shutdown::ShutdownHandle;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::task::JoinHandle;

/// Latency of unscripted answers from [`ScriptedClient`].
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(100);

/// One recorded `convert` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub source: Currency,
    pub amount: Decimal,
    pub target: Currency,
}

/// Scripted answer for the next call.
pub struct Step {
    pub delay: Duration,
    pub result: Result<ConversionPayload, ConversionError>,
}

impl Step {
    pub fn ok(delay_ms: u64, payload: ConversionPayload) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            result: Ok(payload),
        }
    }

    pub fn err(delay_ms: u64, error: ConversionError) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            result: Err(error),
        }
    }
}

/// Conversion client that records every call and answers from a script.
///
/// Once the script runs dry it answers with the offline rate table after
/// [`DEFAULT_LATENCY`].
#[derive(Default)]
pub struct ScriptedClient {
    calls: Mutex<Vec<Call>>,
    script: Mutex<VecDeque<Step>>,
}

impl ScriptedClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, step: Step) {
        self.script.lock().push_back(step);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl ConversionClient for ScriptedClient {
    async fn convert(
        &self,
        source: Currency,
        amount: Decimal,
        target: Currency,
    ) -> Result<ConversionPayload, ConversionError> {
        self.calls.lock().push(Call {
            source,
            amount,
            target,
        });

        let step = self.script.lock().pop_front();
        let step = step.unwrap_or_else(|| Step {
            delay: DEFAULT_LATENCY,
            result: Ok(payload(
                source,
                &amount.to_string(),
                target,
                &OfflineConversionClient::quote(source, amount, target).to_string(),
            )),
        });

        tokio::time::sleep(step.delay).await;
        step.result
    }
}

/// Build a wire payload.
pub fn payload(
    source: Currency,
    amount: &str,
    target: Currency,
    target_amount: &str,
) -> ConversionPayload {
    ConversionPayload {
        from_currency: source.code().to_string(),
        from_currency_amount: amount.to_string(),
        to_currency: target.code().to_string(),
        to_currency_amount: target_amount.to_string(),
    }
}

/// A running orchestrator plus what a test needs to drive and stop it.
pub struct Harness {
    pub client: Arc<ScriptedClient>,
    pub converter: ConverterHandle,
    pub shutdown: ShutdownHandle,
    pub task: JoinHandle<()>,
}

/// Spawn an orchestrator with default timings (500 ms debounce, 10 s poll)
/// over a USD -> EUR pair.
pub fn start_converter(client: Arc<ScriptedClient>) -> Harness {
    start_converter_with(client, ConverterConfig::default())
}

pub fn start_converter_with(client: Arc<ScriptedClient>, config: ConverterConfig) -> Harness {
    let shutdown = ShutdownHandle::new();
    let (converter, task) = Orchestrator::spawn(client.clone(), &config, shutdown.clone());
    Harness {
        client,
        converter,
        shutdown,
        task,
    }
}

/// Advance (paused) time by `ms` milliseconds, letting every ready task run.
pub async fn advance_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Create a temporary config file with the given TOML body.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
