use ledger_types::{
    OperationResultTr, OperationType, PathPaymentResult, PathPaymentStrictReceiveOp,
    PathPaymentSuccess,
};

use super::DeriveEffects;
use crate::{
    details::asset_details, trades::ingest_trades, Details, EffectAccumulator, EffectType, Error,
    OperationContext,
};

impl DeriveEffects for PathPaymentStrictReceiveOp {
    fn derive_effects(
        &self,
        context: &OperationContext,
        effects: &mut EffectAccumulator,
    ) -> Result<(), Error> {
        const OPERATION_TYPE: OperationType = OperationType::PathPaymentStrictReceive;

        let success = match context.applied_result(OPERATION_TYPE)? {
            OperationResultTr::PathPaymentStrictReceive(result) => {
                successful_path_payment(result, OPERATION_TYPE)?
            }
            other => {
                return Err(Error::UnexpectedResultType {
                    expected: OPERATION_TYPE,
                    actual: other.operation_type(),
                })
            }
        };
        let source = context.source_account();

        let mut credited = Details::new();
        credited.insert("amount", self.dest_amount);
        asset_details(&mut credited, &self.dest_asset, "");
        effects.add(self.destination, EffectType::AccountCredited, credited);

        let send_amount = success.send_amount().ok_or(Error::SendAmountOverflow)?;
        let mut debited = Details::new();
        debited.insert("amount", send_amount);
        asset_details(&mut debited, &self.send_asset, "");
        effects.add(*source, EffectType::AccountDebited, debited);

        ingest_trades(effects, source, &success.offers);
        Ok(())
    }
}

fn successful_path_payment(
    result: &PathPaymentResult,
    operation_type: OperationType,
) -> Result<&PathPaymentSuccess, Error> {
    match result {
        PathPaymentResult::Success(success) => Ok(success),
        PathPaymentResult::Failure { code } => Err(Error::UnsuccessfulResult {
            operation_type,
            code: code.0,
        }),
    }
}
