use ledger_types::{AccountId, OperationId};

use crate::{Details, Effect, EffectType};

/// Collects the effects of one operation, numbering them in the order they are added.
#[derive(Debug)]
pub struct EffectAccumulator {
    operation_id: OperationId,
    effects: Vec<Effect>,
}

impl EffectAccumulator {
    /// Constructs an empty accumulator for the given operation.
    pub fn new(operation_id: OperationId) -> Self {
        EffectAccumulator {
            operation_id,
            effects: vec![],
        }
    }

    /// Appends an effect, giving it the next order.
    pub fn add(&mut self, address: AccountId, effect_type: EffectType, details: Details) {
        let order = self.effects.len() as u32 + 1;
        self.effects.push(Effect {
            address,
            operation_id: self.operation_id,
            effect_type,
            order,
            details,
        });
    }

    /// Returns the number of effects added so far.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Returns `true` if no effects have been added.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Consumes `self`, returning the effects in order.
    pub fn into_effects(self) -> Vec<Effect> {
        self.effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_number_effects_from_one() {
        let operation_id = OperationId::from_raw(42);
        let mut effects = EffectAccumulator::new(operation_id);
        assert!(effects.is_empty());

        for _ in 0..3 {
            effects.add(AccountId::new([1; 32]), EffectType::Trade, Details::new());
        }
        assert_eq!(effects.len(), 3);

        let effects = effects.into_effects();
        let orders: Vec<u32> = effects.iter().map(|effect| effect.order).collect();
        assert_eq!(orders, [1, 2, 3]);
        assert!(effects
            .iter()
            .all(|effect| effect.operation_id == operation_id));
    }
}
