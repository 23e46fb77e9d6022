//! Derives the effects of applied ledger operations.
//!
//! Given an [`OperationContext`] (the decoded operation, its result and the ledger entries it
//! changed), [`operation_effects`] returns the ordered [`Effect`]s the operation had on accounts:
//! balances credited and debited, accounts and signers created, trades made, settings changed.

#![doc(test(attr(forbid(warnings))))]
#![warn(missing_docs)]

mod accumulator;
mod batch;
pub mod config;
mod context;
mod details;
mod effect;
mod error;
pub mod logging;
mod processor;
mod signers;
mod trades;

pub use accumulator::EffectAccumulator;
pub use batch::{derive_batch, OperationReport};
pub use config::Config;
pub use context::OperationContext;
pub use effect::{DetailValue, Details, Effect, EffectType};
pub use error::Error;
pub use processor::{operation_effects, DeriveEffects};
