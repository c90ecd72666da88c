//! Filter for the merchant select control.

use crate::state::{FilterState, MerchantSelector};
use crate::traits::Filter;
use catalog::PerkRecord;

/// Keeps perks issued by the selected merchant.
///
/// ## Algorithm
/// 1. Selector `All`: inactive, pass the working set through unchanged
/// 2. Selector `Only(name)`: keep perks whose merchant equals `name`
///
/// Exact, case-sensitive comparison — selecting "Cafe X" must not match
/// "cafe x" or "Cafe Xpress".
pub struct MerchantFilter;

impl Filter for MerchantFilter {
    fn name(&self) -> &str {
        "MerchantFilter"
    }

    fn apply(&self, perks: Vec<PerkRecord>, state: &FilterState) -> Vec<PerkRecord> {
        let selected = match state.merchant() {
            MerchantSelector::All => return perks,
            MerchantSelector::Only(name) => name,
        };

        perks
            .into_iter()
            .filter(|perk| perk.merchant == *selected)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perk(id: &str, merchant: &str) -> PerkRecord {
        PerkRecord {
            id: id.to_string(),
            title: "Some Perk".to_string(),
            merchant: merchant.to_string(),
        }
    }

    #[test]
    fn test_all_selector_is_inactive() {
        let perks = vec![perk("p1", "Cafe X"), perk("p2", "Bookstore Y")];

        let filtered = MerchantFilter.apply(perks.clone(), &FilterState::new());
        assert_eq!(filtered, perks);
    }

    #[test]
    fn test_exact_match_only() {
        let perks = vec![
            perk("p1", "Cafe X"),
            perk("p2", "cafe x"),
            perk("p3", "Cafe Xpress"),
        ];

        let mut state = FilterState::new();
        state.set_merchant(MerchantSelector::Only("Cafe X".to_string()));

        let filtered = MerchantFilter.apply(perks, &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "p1");
    }

    #[test]
    fn test_unknown_merchant_yields_empty() {
        let perks = vec![perk("p1", "Cafe X")];

        let mut state = FilterState::new();
        state.set_merchant(MerchantSelector::Only("Nobody".to_string()));

        let filtered = MerchantFilter.apply(perks, &state);
        assert!(filtered.is_empty());
    }
}
