//! Typed view of decoded ledger data: accounts, assets, operations, their results and the ledger
//! entry changes they cause.
//!
//! # Features
//!
//! The `testing` feature exposes `random()` constructors for use in other crates' tests.

#![doc(test(attr(forbid(warnings))))]
#![warn(missing_docs)]

mod account_id;
mod amount;
mod asset;
mod ledger_entry;
mod operation;
mod operation_id;
mod operation_result;
mod signer;
pub mod strkey;

pub use account_id::{AccountId, ACCOUNT_ID_LENGTH};
pub use amount::{Amount, ParseAmountError, STROOPS_PER_UNIT};
pub use asset::{Asset, AssetError, AssetType};
pub use ledger_entry::{
    AccountEntry, AccountFlags, DataEntry, LedgerEntry, LedgerEntryChange, LedgerEntryData,
    LedgerEntryType, OfferEntry, Price, Thresholds, TrustLineEntry,
};
pub use operation::{
    AllowTrustOp, BumpSequenceOp, ChangeTrustOp, CreateAccountOp, CreatePassiveSellOfferOp,
    KnownTypeCodeError, ManageBuyOfferOp, ManageDataOp, ManageSellOfferOp, Operation,
    OperationBody, OperationType, PathPaymentStrictReceiveOp, PathPaymentStrictSendOp, PaymentOp,
    SetOptionsOp, UnknownTypeCode,
};
pub use operation_id::{OperationId, OperationIdError};
pub use operation_result::{
    ClaimOfferAtom, ManageOfferResult, OperationResult, OperationResultTr, PathPaymentResult,
    PathPaymentSuccess, ResultCode, SimplePaymentResult,
};
pub use signer::{Signer, SignerKey, DEFAULT_SIGNER_WEIGHT};
