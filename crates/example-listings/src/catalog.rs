//! Listing catalog types and the built-in marketplace data set.
//!
//! A catalog holds the fixed province names and listing archetypes that the
//! generator draws from. Catalogs are validated at construction so the
//! generator can rely on non-empty slices and non-empty price ranges.

use crate::error::CatalogError;

/// Currency code applied to every generated listing.
pub const CURRENCY_CODE: &str = "AFN";

/// Afghanistan provinces used by the built-in catalog.
const AFGHAN_PROVINCES: &[&str] = &[
    "کابل",
    "هرات",
    "قندهار",
    "بلخ",
    "ننگرهار",
    "غزنی",
    "پکتیا",
    "بامیان",
    "لغمان",
    "کنر",
    "خوست",
    "وردک",
    "لوگر",
    "بدخشان",
    "تخار",
    "کندز",
    "بغلان",
    "سمنگان",
    "جوزجان",
    "سر پل",
    "فاریاب",
    "بادغیس",
    "غور",
    "دایکندی",
    "ارزگان",
    "زابل",
    "هلمند",
    "نیمروز",
    "فراه",
    "پکتیکا",
    "کاپیسا",
    "پروان",
    "پنجشیر",
    "نورستان",
];

/// Built-in archetypes as (title_fa, title_en, category, price_min, price_max).
const AFGHAN_ARCHETYPES: &[(&str, &str, &str, u64, u64)] = &[
    (
        "گوشی سامسونگ گلکسی",
        "Samsung Galaxy Phone",
        "موبایل و تبلت",
        25_000,
        80_000,
    ),
    ("آیفون", "iPhone", "موبایل و تبلت", 40_000, 120_000),
    ("لپ تاپ لنوو", "Lenovo Laptop", "کامپیوتر", 35_000, 85_000),
    ("تلویزیون LED", "LED Television", "لوازم خانه", 20_000, 60_000),
    ("یخچال", "Refrigerator", "لوازم خانه", 25_000, 50_000),
    (
        "ماشین لباسشویی",
        "Washing Machine",
        "لوازم خانه",
        18_000,
        45_000,
    ),
    ("کفش ورزشی", "Sports Shoes", "پوشاک", 2_000, 8_000),
    ("کت و شلوار", "Suit", "پوشاک", 3_000, 15_000),
    ("دوچرخه", "Bicycle", "ورزش و تفریح", 5_000, 15_000),
    ("کتاب قرآن", "Quran Book", "کتاب و مجله", 500, 2_000),
    ("فرش افغانی", "Afghan Carpet", "لوازم خانه", 10_000, 50_000),
    ("ساعت مچی", "Wrist Watch", "لوازم شخصی", 2_000, 15_000),
    ("موتور سیکلت", "Motorcycle", "خودرو", 80_000, 200_000),
    ("خانه دو طبقه", "Two-Story House", "املاک", 500_000, 2_000_000),
    (
        "زمین مسکونی",
        "Residential Land",
        "املاک",
        200_000,
        1_500_000,
    ),
    ("کیف دستی چرمی", "Leather Handbag", "پوشاک", 1_500, 6_000),
    ("عینک آفتابی", "Sunglasses", "لوازم شخصی", 800, 4_000),
    ("گیتار", "Guitar", "موسیقی", 8_000, 25_000),
    ("دوربین عکاسی", "Camera", "الکترونیک", 15_000, 80_000),
    ("پرینتر", "Printer", "الکترونیک", 8_000, 25_000),
];

/// A template describing one class of generated listing.
///
/// Each archetype carries a bilingual title pair, a category label, and a
/// half-open price range `[price_min, price_max)` in the catalog currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingArchetype {
    /// Persian display title.
    pub title_fa: String,
    /// English display title.
    pub title_en: String,
    /// Category label shared by listings of this archetype.
    pub category: String,
    /// Lower price bound (inclusive).
    pub price_min: u64,
    /// Upper price bound (exclusive).
    pub price_max: u64,
}

impl ListingArchetype {
    /// Builds an archetype from its title pair, category, and price bounds.
    pub fn new(
        title_fa: impl Into<String>,
        title_en: impl Into<String>,
        category: impl Into<String>,
        price_min: u64,
        price_max: u64,
    ) -> Self {
        Self {
            title_fa: title_fa.into(),
            title_en: title_en.into(),
            category: category.into(),
            price_min,
            price_max,
        }
    }
}

/// A validated catalog of provinces and listing archetypes.
///
/// ## Invariants
/// - The province list is non-empty.
/// - The archetype list is non-empty.
/// - Every archetype satisfies `price_min < price_max`.
///
/// # Example
///
/// ```
/// use example_listings::{Catalog, ListingArchetype};
///
/// let catalog = Catalog::new(
///     vec!["P".to_owned()],
///     vec![ListingArchetype::new("ایکس", "X", "C", 10, 20)],
/// )
/// .expect("valid catalog");
///
/// assert_eq!(catalog.provinces().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    provinces: Vec<String>,
    archetypes: Vec<ListingArchetype>,
}

impl Catalog {
    /// Validates and constructs a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the province list is empty, the archetype
    /// list is empty, or any archetype declares an empty price range.
    pub fn new(
        provinces: Vec<String>,
        archetypes: Vec<ListingArchetype>,
    ) -> Result<Self, CatalogError> {
        if provinces.is_empty() {
            return Err(CatalogError::NoProvinces);
        }
        if archetypes.is_empty() {
            return Err(CatalogError::NoArchetypes);
        }
        for (index, archetype) in archetypes.iter().enumerate() {
            if archetype.price_min >= archetype.price_max {
                return Err(CatalogError::EmptyPriceRange {
                    index,
                    title_en: archetype.title_en.clone(),
                    min: archetype.price_min,
                    max: archetype.price_max,
                });
            }
        }

        Ok(Self {
            provinces,
            archetypes,
        })
    }

    /// Returns the built-in Afghan marketplace catalog.
    ///
    /// The data set covers 34 provinces and 20 listing archetypes and is
    /// known to satisfy the catalog invariants.
    #[must_use]
    pub fn afghan_marketplace() -> Self {
        let provinces = AFGHAN_PROVINCES
            .iter()
            .map(|province| (*province).to_owned())
            .collect();
        let archetypes = AFGHAN_ARCHETYPES
            .iter()
            .map(|(title_fa, title_en, category, price_min, price_max)| {
                ListingArchetype::new(*title_fa, *title_en, *category, *price_min, *price_max)
            })
            .collect();

        Self {
            provinces,
            archetypes,
        }
    }

    /// Returns the province names.
    #[must_use]
    pub fn provinces(&self) -> &[String] {
        &self.provinces
    }

    /// Returns the listing archetypes.
    #[must_use]
    pub fn archetypes(&self) -> &[ListingArchetype] {
        &self.archetypes
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn province() -> Vec<String> {
        vec!["کابل".to_owned()]
    }

    fn archetype() -> ListingArchetype {
        ListingArchetype::new("ایکس", "X", "C", 10, 20)
    }

    #[test]
    fn built_in_catalog_satisfies_validation() {
        let built_in = Catalog::afghan_marketplace();
        let revalidated = Catalog::new(
            built_in.provinces().to_vec(),
            built_in.archetypes().to_vec(),
        )
        .expect("built-in catalog should satisfy invariants");

        assert_eq!(revalidated, built_in);
    }

    #[test]
    fn built_in_catalog_has_expected_shape() {
        let catalog = Catalog::afghan_marketplace();

        assert_eq!(catalog.provinces().len(), 34);
        assert_eq!(catalog.archetypes().len(), 20);
        assert!(
            catalog
                .archetypes()
                .iter()
                .all(|archetype| !archetype.category.is_empty())
        );
    }

    #[test]
    fn rejects_empty_provinces() {
        let result = Catalog::new(Vec::new(), vec![archetype()]);
        assert_eq!(result, Err(CatalogError::NoProvinces));
    }

    #[test]
    fn rejects_empty_archetypes() {
        let result = Catalog::new(province(), Vec::new());
        assert_eq!(result, Err(CatalogError::NoArchetypes));
    }

    #[rstest]
    #[case::inverted(20, 10)]
    #[case::zero_width(10, 10)]
    fn rejects_empty_price_range(#[case] min: u64, #[case] max: u64) {
        let bad = ListingArchetype::new("ایکس", "X", "C", min, max);
        let result = Catalog::new(province(), vec![archetype(), bad]);

        assert_eq!(
            result,
            Err(CatalogError::EmptyPriceRange {
                index: 1,
                title_en: "X".to_owned(),
                min,
                max,
            })
        );
    }
}
