use ledger_types::PaymentOp;

use super::DeriveEffects;
use crate::{
    details::asset_details, Details, EffectAccumulator, EffectType, Error, OperationContext,
};

impl DeriveEffects for PaymentOp {
    fn derive_effects(
        &self,
        context: &OperationContext,
        effects: &mut EffectAccumulator,
    ) -> Result<(), Error> {
        let mut details = Details::new();
        details.insert("amount", self.amount);
        asset_details(&mut details, &self.asset, "");

        effects.add(
            self.destination,
            EffectType::AccountCredited,
            details.clone(),
        );
        effects.add(
            *context.source_account(),
            EffectType::AccountDebited,
            details,
        );
        Ok(())
    }
}
