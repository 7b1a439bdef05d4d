//! Built-in ISO 3166-1 alpha-2 → target VAT-country id table.

use std::collections::BTreeMap;

use super::CountryResolver;
use crate::core::{CountryVatId, ExportError};

/// Country resolver backed by the target system's standard country ids,
/// with optional per-merchant overrides and additions.
#[derive(Debug, Clone, Default)]
pub struct CountryTable {
    overrides: BTreeMap<String, CountryVatId>,
}

impl CountryTable {
    /// Table with only the built-in entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `country_code` to `id`, replacing the built-in entry if present.
    pub fn with(mut self, country_code: &str, id: CountryVatId) -> Self {
        self.overrides.insert(country_code.trim().to_uppercase(), id);
        self
    }

    /// Look up a code without producing an error.
    pub fn get(&self, country_code: &str) -> Option<CountryVatId> {
        let code = country_code.trim().to_uppercase();
        if let Some(id) = self.overrides.get(&code) {
            return Some(*id);
        }
        COUNTRY_VAT_IDS
            .binary_search_by(|(iso, _)| (*iso).cmp(code.as_str()))
            .ok()
            .map(|idx| COUNTRY_VAT_IDS[idx].1)
    }
}

impl CountryResolver for CountryTable {
    fn resolve(&self, country_code: &str) -> Result<CountryVatId, ExportError> {
        self.get(country_code)
            .ok_or_else(|| ExportError::unresolved_country(country_code))
    }
}

/// Standard country ids of the target order system.
/// Sorted by ISO code for binary search.
static COUNTRY_VAT_IDS: &[(&str, CountryVatId)] = &[
    ("AL", 52), ("AM", 51), ("AT", 2), ("AU", 29), ("BE", 3), ("BG", 44), ("BR", 39), ("BY", 48),
    ("CA", 30), ("CH", 4), ("CN", 31), ("CY", 5), ("CZ", 6), ("DE", 1), ("DK", 7), ("EE", 9),
    ("EG", 53), ("ES", 8), ("FI", 11), ("FR", 10), ("GB", 12), ("GP", 61), ("GR", 13), ("HK", 57),
    ("HR", 54), ("HU", 14), ("IE", 16), ("IL", 59), ("IN", 38), ("IT", 15), ("JP", 32), ("KG", 46),
    ("KZ", 47), ("LI", 34), ("LT", 33), ("LU", 17), ("LV", 18), ("MA", 50), ("MC", 35), ("MT", 19),
    ("MV", 55), ("MX", 36), ("MY", 56), ("NL", 21), ("NO", 20), ("NZ", 66), ("PL", 23), ("PT", 22),
    ("RO", 41), ("RU", 40), ("SE", 24), ("SG", 25), ("SI", 27), ("SK", 26), ("TH", 62), ("TR", 63),
    ("TW", 60), ("US", 28), ("UZ", 49), ("XK", 45), ("YE", 58),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_countries() {
        let table = CountryTable::new();
        assert_eq!(table.resolve("DE").unwrap(), 1);
        assert_eq!(table.resolve("AT").unwrap(), 2);
        assert_eq!(table.resolve("CH").unwrap(), 4);
        assert_eq!(table.resolve("FR").unwrap(), 10);
        assert_eq!(table.resolve("GB").unwrap(), 12);
        assert_eq!(table.resolve("US").unwrap(), 28);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = CountryTable::new();
        assert_eq!(table.get("de"), Some(1));
        assert_eq!(table.get(" nl "), Some(21));
    }

    #[test]
    fn unknown_countries() {
        let table = CountryTable::new();
        assert!(matches!(
            table.resolve("XX"),
            Err(ExportError::UnresolvedCountry(_))
        ));
        assert!(table.resolve("").is_err());
        assert!(table.resolve("DEU").is_err());
    }

    #[test]
    fn overrides_replace_and_extend() {
        let table = CountryTable::new().with("de", 99).with("ZA", 120);
        assert_eq!(table.resolve("DE").unwrap(), 99);
        assert_eq!(table.resolve("ZA").unwrap(), 120);
        assert_eq!(table.resolve("AT").unwrap(), 2);
    }

    #[test]
    fn list_is_sorted() {
        for window in COUNTRY_VAT_IDS.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "country codes not sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<_> = COUNTRY_VAT_IDS.iter().map(|(_, id)| *id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), COUNTRY_VAT_IDS.len());
    }
}
