//! Country entity as listed by the REST Countries API.

use serde::{Deserialize, Serialize};

/// Placeholder shown when a country has no capital on record.
pub const NO_CAPITAL: &str = "N/A";

/// Common and official names of a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official: Option<String>,
}

/// A country as shown on the listing page.
///
/// Read-only snapshot of upstream data. Identity is the 3-letter `id`
/// (ISO 3166-1 alpha-3), which also addresses the per-country detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    pub id: String,
    pub population: u64,
    pub capital: Vec<String>,
    pub region: String,
    pub flag_image_url: String,
}

impl Country {
    /// Returns the first listed capital, or [`NO_CAPITAL`] if there is none.
    pub fn first_capital(&self) -> &str {
        self.capital.first().map(String::as_str).unwrap_or(NO_CAPITAL)
    }

    /// Population with digits grouped in threes, e.g. `83,240,525`.
    pub fn formatted_population(&self) -> String {
        group_digits(self.population)
    }

    /// Path of the detail view for this country.
    pub fn detail_path(&self) -> String {
        format!("/{}", self.id)
    }
}

/// Formats an integer with `,` between each group of three digits.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_country(capital: Vec<&str>) -> Country {
        Country {
            name: CountryName {
                common: "Germany".to_string(),
                official: Some("Federal Republic of Germany".to_string()),
            },
            id: "DEU".to_string(),
            population: 83_240_525,
            capital: capital.into_iter().map(String::from).collect(),
            region: "Europe".to_string(),
            flag_image_url: "https://flagcdn.com/de.svg".to_string(),
        }
    }

    #[test]
    fn test_first_capital() {
        let country = create_test_country(vec!["Berlin", "Bonn"]);
        assert_eq!(country.first_capital(), "Berlin");
    }

    #[test]
    fn test_first_capital_empty_list() {
        let country = create_test_country(vec![]);
        assert_eq!(country.first_capital(), "N/A");
    }

    #[test]
    fn test_formatted_population() {
        let country = create_test_country(vec!["Berlin"]);
        assert_eq!(country.formatted_population(), "83,240,525");
    }

    #[test]
    fn test_detail_path() {
        let country = create_test_country(vec!["Berlin"]);
        assert_eq!(country.detail_path(), "/DEU");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(56_000), "56,000");
        assert_eq!(group_digits(1_402_112_000), "1,402,112,000");
    }
}
