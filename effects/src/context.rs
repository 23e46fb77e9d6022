//! The decoded view of one applied operation.

use serde::{Deserialize, Serialize};

use ledger_types::{
    AccountId, LedgerEntryChange, Operation, OperationId, OperationResult, OperationResultTr,
    OperationType,
};

use crate::Error;

/// Everything known about one operation once its transaction has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperationContext {
    /// The operation's identifier, attached to every effect.
    pub operation_id: OperationId,
    /// The source account of the enclosing transaction.
    pub transaction_source: AccountId,
    /// The operation.
    pub operation: Operation,
    /// The operation's result.
    pub result: OperationResult,
    /// Ledger entries changed by the operation, in the order they were changed.
    #[serde(default)]
    pub changes: Vec<LedgerEntryChange>,
}

impl OperationContext {
    /// Constructs a new `OperationContext` with no ledger entry changes.
    pub fn new(
        operation_id: OperationId,
        transaction_source: AccountId,
        operation: Operation,
        result: OperationResult,
    ) -> Self {
        OperationContext {
            operation_id,
            transaction_source,
            operation,
            result,
            changes: vec![],
        }
    }

    /// Returns the context with the given ledger entry changes.
    pub fn with_changes(mut self, changes: Vec<LedgerEntryChange>) -> Self {
        self.changes = changes;
        self
    }

    /// Returns the account the operation acts for: its own source if set, otherwise the
    /// transaction's.
    pub fn source_account(&self) -> &AccountId {
        self.operation
            .source_account
            .as_ref()
            .unwrap_or(&self.transaction_source)
    }

    /// Returns the operation's type, or its raw tag if the type is unknown.
    pub fn operation_type(&self) -> Result<OperationType, i32> {
        self.operation.body.operation_type()
    }

    /// Returns the type-specific result, failing if the operation was not applied.
    pub(crate) fn applied_result(
        &self,
        operation_type: OperationType,
    ) -> Result<&OperationResultTr, Error> {
        match &self.result {
            OperationResult::Inner(inner) => Ok(inner),
            result => Err(Error::OperationNotApplied {
                operation_type,
                result: result.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use ledger_types::{OperationBody, ResultCode};

    use super::*;

    fn context(source_account: Option<AccountId>, result: OperationResult) -> OperationContext {
        let mut operation = Operation::new(OperationBody::Inflation);
        operation.source_account = source_account;
        OperationContext::new(
            OperationId::from_raw(1),
            AccountId::new([1; 32]),
            operation,
            result,
        )
    }

    #[test]
    fn source_account_prefers_operation_source() {
        let applied = OperationResult::Inner(OperationResultTr::Inflation(ResultCode::SUCCESS));
        let own_source = AccountId::new([2; 32]);

        assert_eq!(
            context(None, applied.clone()).source_account(),
            &AccountId::new([1; 32])
        );
        assert_eq!(
            context(Some(own_source), applied).source_account(),
            &own_source
        );
    }

    #[test]
    fn applied_result_rejects_transaction_level_failures() {
        let context = context(None, OperationResult::NoAccount);
        assert_eq!(context.operation_type(), Ok(OperationType::Inflation));
        assert_eq!(
            context.applied_result(OperationType::Inflation),
            Err(Error::OperationNotApplied {
                operation_type: OperationType::Inflation,
                result: OperationResult::NoAccount,
            })
        );
    }
}
