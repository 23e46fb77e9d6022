//! Execution results of operations.

use std::fmt::{self, Display, Formatter};

#[cfg(feature = "datasize")]
use datasize::DataSize;
#[cfg(any(feature = "testing", test))]
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{AccountId, Amount, Asset, OperationType};

/// A type-specific result code. Zero means success, negative values are failures.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(transparent)]
pub struct ResultCode(pub i32);

impl ResultCode {
    /// The success code.
    pub const SUCCESS: ResultCode = ResultCode(0);

    /// Returns `true` if this is the success code.
    pub fn is_success(&self) -> bool {
        self.0 == 0
    }
}

/// One trade against an existing offer, made while executing an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct ClaimOfferAtom {
    /// The owner of the claimed offer.
    pub seller_id: AccountId,
    /// The claimed offer.
    pub offer_id: i64,
    /// The asset the offer's owner sold.
    pub asset_sold: Asset,
    /// The amount the offer's owner sold.
    pub amount_sold: Amount,
    /// The asset the offer's owner bought.
    pub asset_bought: Asset,
    /// The amount the offer's owner bought.
    pub amount_bought: Amount,
}

impl ClaimOfferAtom {
    /// Returns `true` if nothing changed hands in this claim.
    pub fn is_empty(&self) -> bool {
        self.amount_sold.is_zero() && self.amount_bought.is_zero()
    }

    /// Returns a random `ClaimOfferAtom`.
    #[cfg(any(feature = "testing", test))]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        ClaimOfferAtom {
            seller_id: AccountId::random(rng),
            offer_id: rng.gen_range(1..i64::MAX),
            asset_sold: Asset::random(rng),
            amount_sold: Amount::random(rng),
            asset_bought: Asset::random(rng),
            amount_bought: Amount::random(rng),
        }
    }
}

/// Result of an operation which may cross offers on the order book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(rename_all = "snake_case")]
pub enum ManageOfferResult {
    /// The operation succeeded.
    Success {
        /// Offers taken while placing the offer, in execution order.
        offers_claimed: Vec<ClaimOfferAtom>,
    },
    /// The operation failed.
    Failure {
        #[allow(missing_docs)]
        code: ResultCode,
    },
}

/// The final hop of a path payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct SimplePaymentResult {
    /// The receiving account.
    pub destination: AccountId,
    /// The asset received.
    pub asset: Asset,
    /// The amount received.
    pub amount: Amount,
}

/// The successful outcome of a path payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(deny_unknown_fields)]
pub struct PathPaymentSuccess {
    /// Offers taken along the path, in execution order.
    pub offers: Vec<ClaimOfferAtom>,
    /// The payment to the destination.
    pub last: SimplePaymentResult,
}

impl PathPaymentSuccess {
    /// Returns the amount debited from the source.
    ///
    /// With no offers taken this is the final payment's amount. Otherwise it is the total bought
    /// by offer owners across the leading run of claims in the first hop's asset; the run ends at
    /// the first claim buying anything else.
    pub fn send_amount(&self) -> Option<Amount> {
        let first_hop = match self.offers.first() {
            Some(claim) => &claim.asset_bought,
            None => return Some(self.last.amount),
        };
        self.offers
            .iter()
            .take_while(|claim| claim.asset_bought == *first_hop)
            .try_fold(Amount::ZERO, |total, claim| {
                total.checked_add(claim.amount_bought)
            })
    }
}

/// Result of a path payment operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(rename_all = "snake_case")]
pub enum PathPaymentResult {
    #[allow(missing_docs)]
    Success(PathPaymentSuccess),
    /// The operation failed.
    Failure {
        #[allow(missing_docs)]
        code: ResultCode,
    },
}

/// The type-specific result of an applied operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(tag = "type", content = "result", rename_all = "snake_case")]
pub enum OperationResultTr {
    #[allow(missing_docs)]
    CreateAccount(ResultCode),
    #[allow(missing_docs)]
    Payment(ResultCode),
    #[allow(missing_docs)]
    PathPaymentStrictReceive(PathPaymentResult),
    #[allow(missing_docs)]
    ManageSellOffer(ManageOfferResult),
    #[allow(missing_docs)]
    CreatePassiveSellOffer(ManageOfferResult),
    #[allow(missing_docs)]
    SetOptions(ResultCode),
    #[allow(missing_docs)]
    ChangeTrust(ResultCode),
    #[allow(missing_docs)]
    AllowTrust(ResultCode),
    #[allow(missing_docs)]
    AccountMerge(ResultCode),
    #[allow(missing_docs)]
    Inflation(ResultCode),
    #[allow(missing_docs)]
    ManageData(ResultCode),
    #[allow(missing_docs)]
    BumpSequence(ResultCode),
    #[allow(missing_docs)]
    ManageBuyOffer(ManageOfferResult),
    #[allow(missing_docs)]
    PathPaymentStrictSend(PathPaymentResult),
}

impl OperationResultTr {
    /// Returns the operation type this result arm belongs to.
    pub fn operation_type(&self) -> OperationType {
        match self {
            OperationResultTr::CreateAccount(_) => OperationType::CreateAccount,
            OperationResultTr::Payment(_) => OperationType::Payment,
            OperationResultTr::PathPaymentStrictReceive(_) => {
                OperationType::PathPaymentStrictReceive
            }
            OperationResultTr::ManageSellOffer(_) => OperationType::ManageSellOffer,
            OperationResultTr::CreatePassiveSellOffer(_) => OperationType::CreatePassiveSellOffer,
            OperationResultTr::SetOptions(_) => OperationType::SetOptions,
            OperationResultTr::ChangeTrust(_) => OperationType::ChangeTrust,
            OperationResultTr::AllowTrust(_) => OperationType::AllowTrust,
            OperationResultTr::AccountMerge(_) => OperationType::AccountMerge,
            OperationResultTr::Inflation(_) => OperationType::Inflation,
            OperationResultTr::ManageData(_) => OperationType::ManageData,
            OperationResultTr::BumpSequence(_) => OperationType::BumpSequence,
            OperationResultTr::ManageBuyOffer(_) => OperationType::ManageBuyOffer,
            OperationResultTr::PathPaymentStrictSend(_) => OperationType::PathPaymentStrictSend,
        }
    }
}

/// The result of one operation within a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "datasize", derive(DataSize))]
#[serde(rename_all = "snake_case")]
pub enum OperationResult {
    /// The operation was applied; the inner result says how it went.
    Inner(OperationResultTr),
    /// Too few valid signatures, or the transaction was malformed.
    BadAuth,
    /// The source account was not found.
    NoAccount,
    /// The operation is not supported at this protocol version.
    NotSupported,
    /// The source account has too many sub-entries.
    TooManySubentries,
    /// The operation did too much work.
    ExceededWorkLimit,
}

impl Display for OperationResult {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            OperationResult::Inner(inner) => write!(formatter, "{} result", inner.operation_type()),
            OperationResult::BadAuth => write!(formatter, "bad auth"),
            OperationResult::NoAccount => write!(formatter, "no account"),
            OperationResult::NotSupported => write!(formatter, "not supported"),
            OperationResult::TooManySubentries => write!(formatter, "too many subentries"),
            OperationResult::ExceededWorkLimit => write!(formatter, "exceeded work limit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn claim(asset_bought: Asset, amount_bought: i64) -> ClaimOfferAtom {
        ClaimOfferAtom {
            seller_id: AccountId::new([3; 32]),
            offer_id: 1,
            asset_sold: Asset::Native,
            amount_sold: Amount::new(1),
            asset_bought,
            amount_bought: Amount::new(amount_bought),
        }
    }

    fn success(offers: Vec<ClaimOfferAtom>) -> PathPaymentSuccess {
        PathPaymentSuccess {
            offers,
            last: SimplePaymentResult {
                destination: AccountId::new([4; 32]),
                asset: Asset::Native,
                amount: Amount::new(500),
            },
        }
    }

    #[test]
    fn send_amount_without_offers_is_last_amount() {
        assert_eq!(success(vec![]).send_amount(), Some(Amount::new(500)));
    }

    #[test]
    fn send_amount_stops_at_first_other_asset() {
        let usd = Asset::credit("USD", AccountId::new([5; 32])).unwrap();
        let offers = vec![
            claim(Asset::Native, 100),
            claim(usd, 7),
            claim(Asset::Native, 50),
        ];
        assert_eq!(success(offers).send_amount(), Some(Amount::new(100)));
    }

    #[test]
    fn send_amount_overflow_is_none() {
        let offers = vec![claim(Asset::Native, i64::MAX), claim(Asset::Native, 1)];
        assert_eq!(success(offers).send_amount(), None);
    }

    #[test]
    fn empty_claim_requires_both_legs_zero() {
        let rng = &mut StdRng::seed_from_u64(11);
        let mut atom = ClaimOfferAtom::random(rng);
        atom.amount_sold = Amount::ZERO;
        atom.amount_bought = Amount::new(1);
        assert!(!atom.is_empty());
        atom.amount_bought = Amount::ZERO;
        assert!(atom.is_empty());
    }

    #[test]
    fn result_arm_reports_its_type() {
        let result = OperationResultTr::CreatePassiveSellOffer(ManageOfferResult::Success {
            offers_claimed: vec![],
        });
        assert_eq!(result.operation_type(), OperationType::CreatePassiveSellOffer);
        assert!(ResultCode::SUCCESS.is_success());
        assert!(!ResultCode(-1).is_success());
    }
}
