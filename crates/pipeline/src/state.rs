//! User-entered filter criteria.
//!
//! Owned by the presentation layer and written exclusively by its input
//! events; the filter pipeline only ever reads it.

/// Selects which merchants are visible.
///
/// The all-merchants sentinel is its own variant rather than a reserved
/// string, so it can never collide with a real merchant name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MerchantSelector {
    /// No merchant constraint
    #[default]
    All,
    /// Exact, case-sensitive merchant name
    Only(String),
}

/// Current filter criteria for the directory.
///
/// Each setter replaces its field wholesale and performs no validation:
/// any string is accepted verbatim, including empty (meaning "no
/// constraint" for the name query). The query is not trimmed — whitespace
/// participates in matching literally.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    name_query: String,
    merchant: MerchantSelector,
}

impl FilterState {
    /// The unconstrained state: empty query, all merchants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the free-text name query.
    pub fn set_name_query(&mut self, text: impl Into<String>) {
        self.name_query = text.into();
    }

    /// Replace the merchant selector.
    pub fn set_merchant(&mut self, selector: MerchantSelector) {
        self.merchant = selector;
    }

    pub fn name_query(&self) -> &str {
        &self.name_query
    }

    pub fn merchant(&self) -> &MerchantSelector {
        &self.merchant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_unconstrained() {
        let state = FilterState::new();

        assert_eq!(state.name_query(), "");
        assert_eq!(state.merchant(), &MerchantSelector::All);
    }

    #[test]
    fn test_setters_replace_wholesale() {
        let mut state = FilterState::new();

        state.set_name_query("coffee");
        state.set_name_query("book");
        assert_eq!(state.name_query(), "book");

        state.set_merchant(MerchantSelector::Only("Cafe X".to_string()));
        state.set_merchant(MerchantSelector::All);
        assert_eq!(state.merchant(), &MerchantSelector::All);
    }

    #[test]
    fn test_query_accepted_verbatim() {
        let mut state = FilterState::new();

        state.set_name_query("  spaced  ");
        assert_eq!(state.name_query(), "  spaced  ");
    }
}
