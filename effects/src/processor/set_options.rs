use ledger_types::{AccountEntry, LedgerEntry, LedgerEntryType, SetOptionsOp};

use super::DeriveEffects;
use crate::{
    details::flag_details, signers::SignerDiff, Details, EffectAccumulator, EffectType, Error,
    OperationContext,
};

impl DeriveEffects for SetOptionsOp {
    fn derive_effects(
        &self,
        context: &OperationContext,
        effects: &mut EffectAccumulator,
    ) -> Result<(), Error> {
        let source = *context.source_account();

        if let Some(home_domain) = &self.home_domain {
            let mut details = Details::new();
            details.insert("home_domain", home_domain.as_str());
            effects.add(source, EffectType::AccountHomeDomainUpdated, details);
        }

        let mut thresholds = Details::new();
        if let Some(low) = self.low_threshold {
            thresholds.insert("low_threshold", low);
        }
        if let Some(medium) = self.med_threshold {
            thresholds.insert("med_threshold", medium);
        }
        if let Some(high) = self.high_threshold {
            thresholds.insert("high_threshold", high);
        }
        if !thresholds.is_empty() {
            effects.add(source, EffectType::AccountThresholdsUpdated, thresholds);
        }

        // Clearing is applied after setting, so a flag in both ends up cleared.
        let mut flags = Details::new();
        if let Some(set_flags) = self.set_flags {
            flag_details(&mut flags, set_flags, true);
        }
        if let Some(clear_flags) = self.clear_flags {
            flag_details(&mut flags, clear_flags, false);
        }
        if !flags.is_empty() {
            effects.add(source, EffectType::AccountFlagsUpdated, flags);
        }

        if let Some(inflation_destination) = &self.inflation_destination {
            let mut details = Details::new();
            details.insert("inflation_destination", inflation_destination.address());
            effects.add(
                source,
                EffectType::AccountInflationDestinationUpdated,
                details,
            );
        }

        for (change_index, change) in context.changes.iter().enumerate() {
            if change.entry_type != LedgerEntryType::Account {
                continue;
            }
            let before = account_snapshot(change.pre.as_ref(), change_index)?;
            let after = account_snapshot(change.post.as_ref(), change_index)?;

            let diff = SignerDiff::between(&before.signer_summary(), &after.signer_summary());
            if diff.is_empty() {
                continue;
            }
            for signer_change in diff {
                let effect_type = signer_change.effect_type();
                effects.add(source, effect_type, signer_change.into_details());
            }
        }

        Ok(())
    }
}

fn account_snapshot(
    entry: Option<&LedgerEntry>,
    change_index: usize,
) -> Result<&AccountEntry, Error> {
    let entry = entry.ok_or(Error::MissingAccountSnapshot { change_index })?;
    entry
        .data
        .as_account()
        .ok_or(Error::UnexpectedLedgerEntry {
            change_index,
            actual: entry.data.entry_type(),
        })
}
