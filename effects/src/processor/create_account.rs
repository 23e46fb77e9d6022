use ledger_types::{Asset, CreateAccountOp, DEFAULT_SIGNER_WEIGHT};

use super::DeriveEffects;
use crate::{
    details::asset_details, Details, EffectAccumulator, EffectType, Error, OperationContext,
};

impl DeriveEffects for CreateAccountOp {
    fn derive_effects(
        &self,
        context: &OperationContext,
        effects: &mut EffectAccumulator,
    ) -> Result<(), Error> {
        let mut created = Details::new();
        created.insert("starting_balance", self.starting_balance);
        effects.add(self.destination, EffectType::AccountCreated, created);

        let mut debited = Details::new();
        debited.insert("amount", self.starting_balance);
        asset_details(&mut debited, &Asset::Native, "");
        effects.add(
            *context.source_account(),
            EffectType::AccountDebited,
            debited,
        );

        let mut signer = Details::new();
        signer.insert("public_key", self.destination.address());
        signer.insert("weight", DEFAULT_SIGNER_WEIGHT);
        effects.add(self.destination, EffectType::SignerCreated, signer);

        Ok(())
    }
}
