//! Conversion orchestration: state, reducer, timers and the task that ties
//! them to a [`crate::client::ConversionClient`].

pub mod amount;
mod intent;
mod orchestrator;
mod reducer;
mod state;
mod timer;

pub use intent::ConverterIntent;
pub use orchestrator::{ConverterCommand, ConverterError, ConverterHandle, Orchestrator};
pub use reducer::ConverterReducer;
pub use state::{ConversionPhase, ConverterState, CurrencyPanel};
