use tracing::debug;

use ledger_types::{
    ClaimOfferAtom, CreatePassiveSellOfferOp, ManageBuyOfferOp, ManageOfferResult,
    ManageSellOfferOp, OperationResultTr, OperationType,
};

use super::DeriveEffects;
use crate::{trades::ingest_trades, EffectAccumulator, Error, OperationContext};

impl DeriveEffects for ManageSellOfferOp {
    fn derive_effects(
        &self,
        context: &OperationContext,
        effects: &mut EffectAccumulator,
    ) -> Result<(), Error> {
        const OPERATION_TYPE: OperationType = OperationType::ManageSellOffer;

        let claims = match context.applied_result(OPERATION_TYPE)? {
            OperationResultTr::ManageSellOffer(result) => claimed_offers(result, OPERATION_TYPE)?,
            other => return Err(unexpected_result(OPERATION_TYPE, other)),
        };
        ingest_trades(effects, context.source_account(), claims);
        Ok(())
    }
}

impl DeriveEffects for ManageBuyOfferOp {
    fn derive_effects(
        &self,
        context: &OperationContext,
        effects: &mut EffectAccumulator,
    ) -> Result<(), Error> {
        const OPERATION_TYPE: OperationType = OperationType::ManageBuyOffer;

        let claims = match context.applied_result(OPERATION_TYPE)? {
            OperationResultTr::ManageBuyOffer(result) => claimed_offers(result, OPERATION_TYPE)?,
            other => return Err(unexpected_result(OPERATION_TYPE, other)),
        };
        ingest_trades(effects, context.source_account(), claims);
        Ok(())
    }
}

impl DeriveEffects for CreatePassiveSellOfferOp {
    /// Results of passive offers are sometimes produced with the manage sell offer arm set, so
    /// both arms are accepted.
    fn derive_effects(
        &self,
        context: &OperationContext,
        effects: &mut EffectAccumulator,
    ) -> Result<(), Error> {
        const OPERATION_TYPE: OperationType = OperationType::CreatePassiveSellOffer;

        let claims = match context.applied_result(OPERATION_TYPE)? {
            OperationResultTr::ManageSellOffer(result) => {
                debug!(
                    operation_id = %context.operation_id,
                    "passive sell offer result carries the manage sell offer arm"
                );
                claimed_offers(result, OPERATION_TYPE)?
            }
            OperationResultTr::CreatePassiveSellOffer(result) => {
                claimed_offers(result, OPERATION_TYPE)?
            }
            other => return Err(unexpected_result(OPERATION_TYPE, other)),
        };
        ingest_trades(effects, context.source_account(), claims);
        Ok(())
    }
}

fn claimed_offers(
    result: &ManageOfferResult,
    operation_type: OperationType,
) -> Result<&[ClaimOfferAtom], Error> {
    match result {
        ManageOfferResult::Success { offers_claimed } => Ok(offers_claimed.as_slice()),
        ManageOfferResult::Failure { code } => Err(Error::UnsuccessfulResult {
            operation_type,
            code: code.0,
        }),
    }
}

fn unexpected_result(expected: OperationType, actual: &OperationResultTr) -> Error {
    Error::UnexpectedResultType {
        expected,
        actual: actual.operation_type(),
    }
}
