//! Derivation of effects, dispatched on the operation's type.

mod create_account;
mod offers;
mod path_payment;
mod payment;
mod set_options;

use tracing::trace;

use ledger_types::OperationBody;

use crate::{Effect, EffectAccumulator, Error, OperationContext};

/// Derivation of effects for one kind of operation, implemented on the operation's payload.
pub trait DeriveEffects {
    /// Adds the effects of the operation described by `context` to `effects`.
    fn derive_effects(
        &self,
        context: &OperationContext,
        effects: &mut EffectAccumulator,
    ) -> Result<(), Error>;
}

/// Returns the effects of the operation, in the order they happened.
///
/// Operation types without derivation rules yield no effects.
pub fn operation_effects(context: &OperationContext) -> Result<Vec<Effect>, Error> {
    let mut effects = EffectAccumulator::new(context.operation_id);

    match &context.operation.body {
        OperationBody::CreateAccount(op) => op.derive_effects(context, &mut effects)?,
        OperationBody::Payment(op) => op.derive_effects(context, &mut effects)?,
        OperationBody::PathPaymentStrictReceive(op) => op.derive_effects(context, &mut effects)?,
        OperationBody::ManageSellOffer(op) => op.derive_effects(context, &mut effects)?,
        OperationBody::ManageBuyOffer(op) => op.derive_effects(context, &mut effects)?,
        OperationBody::CreatePassiveSellOffer(op) => op.derive_effects(context, &mut effects)?,
        OperationBody::SetOptions(op) => op.derive_effects(context, &mut effects)?,
        OperationBody::PathPaymentStrictSend(_) => {}
        OperationBody::ChangeTrust(_) => {}
        OperationBody::AllowTrust(_) => {}
        OperationBody::AccountMerge(_) => {}
        OperationBody::Inflation => {}
        OperationBody::ManageData(_) => {}
        OperationBody::BumpSequence(_) => {}
        OperationBody::Unknown { type_code } => {
            return Err(Error::UnknownOperationType(type_code.value()))
        }
    }

    trace!(
        operation_id = %context.operation_id,
        count = effects.len(),
        "derived operation effects"
    );
    Ok(effects.into_effects())
}
