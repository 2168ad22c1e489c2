//! Error types for the example-listings crate.
//!
//! This module defines semantic error enums for catalog validation, listing
//! generation, and the JSON dump flow, following the project's error handling
//! conventions with `thiserror`.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when constructing a listing catalog.
///
/// These errors cover structural validation of the province list and the
/// archetype price ranges.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog contains no province names.
    #[error("catalog contains no provinces")]
    NoProvinces,

    /// The catalog contains no listing archetypes.
    #[error("catalog contains no listing archetypes")]
    NoArchetypes,

    /// An archetype declares an empty price range.
    #[error("archetype '{title_en}' at index {index} has empty price range [{min}, {max})")]
    EmptyPriceRange {
        /// Index of the offending archetype in the catalog.
        index: usize,
        /// English title of the offending archetype.
        title_en: String,
        /// Lower price bound (inclusive).
        min: u64,
        /// Upper price bound (exclusive).
        max: u64,
    },
}

/// Errors that can occur during listing generation.
///
/// A validated [`crate::Catalog`] cannot trigger these; they guard the
/// selection steps against an empty catalog slice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The catalog offered no provinces for selection.
    #[error("catalog offered no provinces for selection")]
    NoProvinces,

    /// The catalog offered no listing archetypes for selection.
    #[error("catalog offered no listing archetypes for selection")]
    NoArchetypes,
}

/// Errors surfaced by the listing dump CLI flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DumpError {
    /// Output path was not supplied.
    #[error("missing required flag: --out")]
    MissingOutPath,

    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },

    /// An unsupported argument was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },

    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },

    /// Listing generation failed.
    #[error("listing generation failed: {source}")]
    Generation {
        /// Underlying generation error.
        #[from]
        #[source]
        source: GenerationError,
    },

    /// The listing set could not be serialised to JSON.
    #[error("failed to serialise listings: {message}")]
    Serialize {
        /// Description of the serialisation failure.
        message: String,
    },

    /// The output file could not be written.
    #[error("failed to write listings to '{path}': {message}")]
    Write {
        /// Path to the output file.
        path: Utf8PathBuf,
        /// Description of the write failure.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_error_empty_price_range_formats_correctly() {
        let err = CatalogError::EmptyPriceRange {
            index: 3,
            title_en: "Bicycle".to_owned(),
            min: 15_000,
            max: 5_000,
        };
        assert_eq!(
            err.to_string(),
            "archetype 'Bicycle' at index 3 has empty price range [15000, 5000)"
        );
    }

    #[test]
    fn catalog_error_no_provinces_formats_correctly() {
        assert_eq!(
            CatalogError::NoProvinces.to_string(),
            "catalog contains no provinces"
        );
    }

    #[test]
    fn generation_error_no_archetypes_formats_correctly() {
        assert_eq!(
            GenerationError::NoArchetypes.to_string(),
            "catalog offered no listing archetypes for selection"
        );
    }

    #[test]
    fn dump_error_write_formats_correctly() {
        let err = DumpError::Write {
            path: Utf8PathBuf::from("/tmp/listings.json"),
            message: "permission denied".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write listings to '/tmp/listings.json': permission denied"
        );
    }

    #[test]
    fn dump_error_wraps_generation_error() {
        let err = DumpError::from(GenerationError::NoProvinces);
        assert_eq!(
            err.to_string(),
            "listing generation failed: catalog offered no provinces for selection"
        );
    }
}
