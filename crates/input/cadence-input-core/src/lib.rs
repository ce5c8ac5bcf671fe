//! Cadence input core
//!
//! Poll-driven input evaluation. The host builds an input snapshot each frame
//! and hands it to a [`Controller`], which updates its triggers in order.
//! Triggers fire when all their [`Condition`]s hold in the same cycle;
//! [`SequenceTrigger`] chains triggers that must fire on successive cycles.

pub mod commands;
pub mod condition;
pub mod config;
pub mod controller;
pub mod error;
pub mod ids;
pub mod sequence;
pub mod state;
pub mod trigger;

pub use commands::{CommandHandler, CommandTable};
pub use condition::{Condition, ConditionMode, EdgeState, KeyCondition, ProbeCondition};
pub use config::{ControllerConfig, SequenceConfig};
pub use controller::{Controller, RemovalHandle, TriggerFired};
pub use error::InputError;
pub use ids::{IdAllocator, TriggerId};
pub use sequence::SequenceTrigger;
pub use state::InputState;
pub use trigger::{ConditionTrigger, Handler, Trigger, TriggerState};

/// Result type for input operations
pub type Result<T> = core::result::Result<T, InputError>;
