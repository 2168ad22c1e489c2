//! Listing filter values for province and category lookups.

/// Reserved parameter value meaning "no filtering, return everything".
pub const SENTINEL_ALL: &str = "all";

/// Filter applied to province or category lookups.
///
/// The consumer API reserves the literal string `"all"` as a sentinel meaning
/// no filtering. [`ListingFilter::from_param`] preserves that contract: a
/// province or category that is literally named `"all"` can therefore never
/// be selected by exact match. This is a latent ambiguity inherited from the
/// consumer API, kept as-is rather than second-guessed here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingFilter {
    /// Match every record.
    All,
    /// Match records whose field equals the value exactly (case-sensitive).
    Exact(String),
}

impl ListingFilter {
    /// Interprets a raw request parameter, mapping the `"all"` sentinel.
    #[must_use]
    pub fn from_param(param: impl Into<String>) -> Self {
        let value = param.into();
        if value == SENTINEL_ALL {
            Self::All
        } else {
            Self::Exact(value)
        }
    }

    /// Returns whether the filter accepts the given field value.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exact(expected) => expected == value,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn sentinel_parameter_maps_to_all() {
        assert_eq!(ListingFilter::from_param("all"), ListingFilter::All);
    }

    #[rstest]
    #[case::province("کابل")]
    #[case::uppercase_sentinel("All")]
    #[case::empty("")]
    fn other_parameters_map_to_exact(#[case] param: &str) {
        assert_eq!(
            ListingFilter::from_param(param),
            ListingFilter::Exact(param.to_owned())
        );
    }

    #[test]
    fn all_matches_everything() {
        assert!(ListingFilter::All.matches("کابل"));
        assert!(ListingFilter::All.matches(""));
    }

    #[rstest]
    #[case::equal("کابل", "کابل", true)]
    #[case::different("کابل", "هرات", false)]
    #[case::case_sensitive("Kabul", "kabul", false)]
    fn exact_matches_are_case_sensitive(
        #[case] expected: &str,
        #[case] value: &str,
        #[case] outcome: bool,
    ) {
        let filter = ListingFilter::Exact(expected.to_owned());
        assert_eq!(filter.matches(value), outcome);
    }

    #[test]
    fn a_province_literally_named_all_is_unreachable() {
        // The sentinel swallows the name before an exact filter can be built.
        let filter = ListingFilter::from_param("all");
        assert_eq!(filter, ListingFilter::All);
        assert!(filter.matches("somewhere-else"));
    }
}
