//! Helpers writing common groups of fields into effect details.

use ledger_types::{AccountFlags, Asset};

use crate::Details;

/// Writes `{prefix}asset_type`, plus `{prefix}asset_code` and `{prefix}asset_issuer` for credit
/// assets.
pub(crate) fn asset_details(details: &mut Details, asset: &Asset, prefix: &str) {
    details.insert(format!("{}asset_type", prefix), asset.asset_type().as_str());
    if let (Some(code), Some(issuer)) = (asset.code(), asset.issuer()) {
        details.insert(format!("{}asset_code", prefix), code);
        details.insert(format!("{}asset_issuer", prefix), issuer.address());
    }
}

/// Writes `value` under the name of each authorization flag present in `flags`.
pub(crate) fn flag_details(details: &mut Details, flags: u32, value: bool) {
    let flags = AccountFlags::from_bits_truncate(flags);
    if flags.contains(AccountFlags::AUTH_REQUIRED) {
        details.insert("auth_required_flag", value);
    }
    if flags.contains(AccountFlags::AUTH_REVOCABLE) {
        details.insert("auth_revocable_flag", value);
    }
    if flags.contains(AccountFlags::AUTH_IMMUTABLE) {
        details.insert("auth_immutable_flag", value);
    }
}

#[cfg(test)]
mod tests {
    use ledger_types::AccountId;

    use super::*;
    use crate::DetailValue;

    #[test]
    fn native_asset_writes_type_only() {
        let mut details = Details::new();
        asset_details(&mut details, &Asset::Native, "");
        assert_eq!(details.len(), 1);
        assert_eq!(
            details.get("asset_type"),
            Some(&DetailValue::String("native".to_string()))
        );
    }

    #[test]
    fn credit_asset_writes_code_and_issuer_with_prefix() {
        let issuer = AccountId::new([1; 32]);
        let asset = Asset::credit("EUR", issuer).unwrap();
        let mut details = Details::new();
        asset_details(&mut details, &asset, "bought_");

        assert_eq!(details.len(), 3);
        assert_eq!(
            details.get("bought_asset_type"),
            Some(&DetailValue::String("credit_alphanum4".to_string()))
        );
        assert_eq!(
            details.get("bought_asset_code"),
            Some(&DetailValue::String("EUR".to_string()))
        );
        assert_eq!(
            details.get("bought_asset_issuer"),
            Some(&DetailValue::String(issuer.address()))
        );
    }

    #[test]
    fn later_flag_writes_win() {
        let mut details = Details::new();
        flag_details(&mut details, 0b011, true);
        flag_details(&mut details, 0b110, false);

        assert_eq!(details.get("auth_required_flag"), Some(&DetailValue::Bool(true)));
        assert_eq!(
            details.get("auth_revocable_flag"),
            Some(&DetailValue::Bool(false))
        );
        assert_eq!(
            details.get("auth_immutable_flag"),
            Some(&DetailValue::Bool(false))
        );
    }

    #[test]
    fn unknown_flag_bits_are_ignored() {
        let mut details = Details::new();
        flag_details(&mut details, 0b1000, true);
        assert!(details.is_empty());
    }
}
