//! Total-order identifiers of operations.

use std::fmt::{self, Display, Formatter};

#[cfg(feature = "datasize")]
use datasize::DataSize;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const LEDGER_SHIFT: u32 = 32;
const TRANSACTION_SHIFT: u32 = 12;
const TRANSACTION_MASK: i64 = (1 << 20) - 1;
const OPERATION_MASK: i64 = (1 << 12) - 1;

/// Errors returned when building an [`OperationId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OperationIdError {
    /// The ledger sequence does not fit in the identifier's upper 31 bits.
    #[error("ledger sequence {0} is out of range")]
    LedgerOutOfRange(u32),
    /// The transaction order is zero or needs more than 20 bits.
    #[error("transaction order {0} is out of range")]
    TransactionOutOfRange(u32),
    /// The operation order is zero or needs more than 12 bits.
    #[error("operation order {0} is out of range")]
    OperationOutOfRange(u32),
}

/// Identifies an operation by its position in the ledger history.
///
/// Ordering identifiers numerically orders operations by ledger, then transaction, then
/// operation.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(transparent)]
pub struct OperationId(i64);

impl OperationId {
    /// Packs a ledger sequence with 1-based transaction and operation orders.
    pub fn new(
        ledger_sequence: u32,
        transaction_order: u32,
        operation_order: u32,
    ) -> Result<Self, OperationIdError> {
        if ledger_sequence > i32::MAX as u32 {
            return Err(OperationIdError::LedgerOutOfRange(ledger_sequence));
        }
        if transaction_order == 0 || i64::from(transaction_order) > TRANSACTION_MASK {
            return Err(OperationIdError::TransactionOutOfRange(transaction_order));
        }
        if operation_order == 0 || i64::from(operation_order) > OPERATION_MASK {
            return Err(OperationIdError::OperationOutOfRange(operation_order));
        }
        Ok(OperationId(
            i64::from(ledger_sequence) << LEDGER_SHIFT
                | i64::from(transaction_order) << TRANSACTION_SHIFT
                | i64::from(operation_order),
        ))
    }

    /// Wraps an already packed identifier.
    pub const fn from_raw(value: i64) -> Self {
        OperationId(value)
    }

    /// Returns the packed value.
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Returns the ledger sequence.
    pub fn ledger_sequence(&self) -> u32 {
        (self.0 >> LEDGER_SHIFT) as u32
    }

    /// Returns the 1-based position of the transaction within its ledger.
    pub fn transaction_order(&self) -> u32 {
        ((self.0 >> TRANSACTION_SHIFT) & TRANSACTION_MASK) as u32
    }

    /// Returns the 1-based position of the operation within its transaction.
    pub fn operation_order(&self) -> u32 {
        (self.0 & OPERATION_MASK) as u32
    }
}

impl Display for OperationId {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
