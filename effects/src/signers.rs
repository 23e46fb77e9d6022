//! Differences between two snapshots of an account's signers.

use std::collections::BTreeMap;

use crate::{Details, EffectType};

/// How one signer key differs between two snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SignerChange {
    /// The key was present before and is gone after.
    Removed { public_key: String },
    /// The key is present in both snapshots. The weight may or may not have changed.
    Updated { public_key: String, weight: u32 },
    /// The key is present only after.
    Created { public_key: String, weight: u32 },
}

impl SignerChange {
    pub(crate) fn effect_type(&self) -> EffectType {
        match self {
            SignerChange::Removed { .. } => EffectType::SignerRemoved,
            SignerChange::Updated { .. } => EffectType::SignerUpdated,
            SignerChange::Created { .. } => EffectType::SignerCreated,
        }
    }

    pub(crate) fn into_details(self) -> Details {
        let mut details = Details::new();
        match self {
            SignerChange::Removed { public_key } => {
                details.insert("public_key", public_key);
            }
            SignerChange::Updated { public_key, weight }
            | SignerChange::Created { public_key, weight } => {
                details.insert("public_key", public_key);
                details.insert("weight", weight);
            }
        }
        details
    }
}

/// The signer changes between two address -> weight snapshots.
///
/// Removals and updates come first, in the order of the `before` keys, followed by creations in
/// the order of the `after` keys.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct SignerDiff(Vec<SignerChange>);

impl SignerDiff {
    pub(crate) fn between(before: &BTreeMap<String, u32>, after: &BTreeMap<String, u32>) -> Self {
        if before == after {
            return SignerDiff::default();
        }

        let mut changes = Vec::with_capacity(before.len().max(after.len()));
        for public_key in before.keys() {
            let change = match after.get(public_key) {
                Some(weight) => SignerChange::Updated {
                    public_key: public_key.clone(),
                    weight: *weight,
                },
                None => SignerChange::Removed {
                    public_key: public_key.clone(),
                },
            };
            changes.push(change);
        }
        for (public_key, weight) in after {
            if !before.contains_key(public_key) {
                changes.push(SignerChange::Created {
                    public_key: public_key.clone(),
                    weight: *weight,
                });
            }
        }
        SignerDiff(changes)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for SignerDiff {
    type Item = SignerChange;
    type IntoIter = std::vec::IntoIter<SignerChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(signers: &[(&str, u32)]) -> BTreeMap<String, u32> {
        signers
            .iter()
            .map(|(key, weight)| (key.to_string(), *weight))
            .collect()
    }

    #[test]
    fn identical_snapshots_have_no_changes() {
        let signers = snapshot(&[("GA", 1), ("GB", 2)]);
        assert!(SignerDiff::between(&signers, &signers).is_empty());
        assert!(SignerDiff::between(&BTreeMap::new(), &BTreeMap::new()).is_empty());
    }

    #[test]
    fn unchanged_weight_is_still_an_update() {
        let before = snapshot(&[("GA", 1), ("GB", 2)]);
        let after = snapshot(&[("GA", 1), ("GB", 5)]);
        let changes: Vec<_> = SignerDiff::between(&before, &after).into_iter().collect();
        assert_eq!(
            changes,
            vec![
                SignerChange::Updated {
                    public_key: "GA".to_string(),
                    weight: 1
                },
                SignerChange::Updated {
                    public_key: "GB".to_string(),
                    weight: 5
                },
            ]
        );
    }

    #[test]
    fn creations_follow_removals_and_updates() {
        let before = snapshot(&[("GB", 1), ("GD", 1)]);
        let after = snapshot(&[("GA", 3), ("GB", 1)]);
        let changes: Vec<_> = SignerDiff::between(&before, &after).into_iter().collect();
        assert_eq!(
            changes,
            vec![
                SignerChange::Updated {
                    public_key: "GB".to_string(),
                    weight: 1
                },
                SignerChange::Removed {
                    public_key: "GD".to_string()
                },
                SignerChange::Created {
                    public_key: "GA".to_string(),
                    weight: 3
                },
            ]
        );
        assert_eq!(changes[1].effect_type(), EffectType::SignerRemoved);
        assert_eq!(changes[2].effect_type(), EffectType::SignerCreated);
    }

    #[test]
    fn removal_details_omit_weight() {
        let details = SignerChange::Removed {
            public_key: "GA".to_string(),
        }
        .into_details();
        assert_eq!(details.len(), 1);
        assert!(details.get("weight").is_none());
    }
}
