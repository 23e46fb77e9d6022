//! Derivation over a sequence of operations.

use serde::Serialize;
use tracing::debug;

use ledger_types::OperationId;

use crate::{config::ProcessingConfig, operation_effects, Effect, OperationContext};

/// The outcome of deriving one operation's effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OperationReport {
    /// The effects were derived.
    Derived {
        /// The operation.
        operation_id: OperationId,
        /// Its effects, in order.
        effects: Vec<Effect>,
    },
    /// Derivation failed.
    Failed {
        /// The operation.
        operation_id: OperationId,
        /// Why derivation failed.
        error: String,
    },
}

impl OperationReport {
    /// Returns `true` if derivation failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, OperationReport::Failed { .. })
    }
}

/// Derives the effects of each operation in turn.
///
/// A failure affects only its own report. With `fail_fast` set, no operations after the first
/// failure are processed.
pub fn derive_batch(
    contexts: &[OperationContext],
    config: &ProcessingConfig,
) -> Vec<OperationReport> {
    let mut reports = Vec::with_capacity(contexts.len());
    for context in contexts {
        let operation_id = context.operation_id;
        match operation_effects(context) {
            Ok(effects) => reports.push(OperationReport::Derived {
                operation_id,
                effects,
            }),
            Err(error) => {
                debug!(%operation_id, %error, "failed to derive operation effects");
                reports.push(OperationReport::Failed {
                    operation_id,
                    error: error.to_string(),
                });
                if config.fail_fast {
                    break;
                }
            }
        }
    }
    reports
}
