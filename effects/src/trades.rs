use ledger_types::{AccountId, ClaimOfferAtom};

use crate::{details::asset_details, Details, EffectAccumulator, EffectType};

/// Adds a pair of trade effects for each claim which moved funds: the buyer's view, then the
/// seller's.
pub(crate) fn ingest_trades(
    effects: &mut EffectAccumulator,
    buyer: &AccountId,
    claims: &[ClaimOfferAtom],
) {
    for claim in claims {
        if claim.is_empty() {
            continue;
        }
        let (buyer_details, seller_details) = trade_details(buyer, claim);
        effects.add(*buyer, EffectType::Trade, buyer_details);
        effects.add(claim.seller_id, EffectType::Trade, seller_details);
    }
}

/// Each side's `seller` names the other party.
fn trade_details(buyer: &AccountId, claim: &ClaimOfferAtom) -> (Details, Details) {
    let mut buyer_details = Details::new();
    buyer_details.insert("offer_id", claim.offer_id);
    buyer_details.insert("seller", claim.seller_id.address());
    buyer_details.insert("bought_amount", claim.amount_sold);
    buyer_details.insert("sold_amount", claim.amount_bought);
    asset_details(&mut buyer_details, &claim.asset_sold, "bought_");
    asset_details(&mut buyer_details, &claim.asset_bought, "sold_");

    let mut seller_details = Details::new();
    seller_details.insert("offer_id", claim.offer_id);
    seller_details.insert("seller", buyer.address());
    seller_details.insert("bought_amount", claim.amount_bought);
    seller_details.insert("sold_amount", claim.amount_sold);
    asset_details(&mut seller_details, &claim.asset_bought, "bought_");
    asset_details(&mut seller_details, &claim.asset_sold, "sold_");

    (buyer_details, seller_details)
}
