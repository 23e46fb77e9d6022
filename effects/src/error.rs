use thiserror::Error;

use ledger_types::{LedgerEntryType, OperationResult, OperationType};

/// Errors returned while deriving the effects of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation's tag is not a known operation type.
    #[error("unknown operation type: {0}")]
    UnknownOperationType(i32),

    /// The transaction-level result shows the operation was never applied.
    #[error("{operation_type} operation was not applied: {result}")]
    OperationNotApplied {
        /// The type of the operation.
        operation_type: OperationType,
        /// The transaction-level result.
        result: OperationResult,
    },

    /// The result arm does not belong to the operation.
    #[error("expected {expected} result, got {actual} result")]
    UnexpectedResultType {
        /// The result type the operation requires.
        expected: OperationType,
        /// The result type found.
        actual: OperationType,
    },

    /// The result reports that the operation failed.
    #[error("{operation_type} operation failed with code {code}")]
    UnsuccessfulResult {
        /// The type of the operation.
        operation_type: OperationType,
        /// The failure code.
        code: i32,
    },

    /// The amounts bought along a path payment's first hop do not fit in an amount.
    #[error("send amount of path payment overflows")]
    SendAmountOverflow,

    /// An account change lacks its before or after snapshot.
    #[error("account change {change_index} is missing its before or after snapshot")]
    MissingAccountSnapshot {
        /// Position of the change within the operation's changes.
        change_index: usize,
    },

    /// An account change holds a snapshot of some other kind of entry.
    #[error("account change {change_index} holds a {actual:?} entry")]
    UnexpectedLedgerEntry {
        /// Position of the change within the operation's changes.
        change_index: usize,
        /// The kind of entry found.
        actual: LedgerEntryType,
    },
}
