//! Static country reference data for the phone widget.
//!
//! An immutable table loaded once with the binary: ISO code, display name,
//! dial code (without the `+`), and flag. Lookup is by ISO code; filtering is
//! case-insensitive over name, ISO code and dial code.

/// One selectable country.
#[derive(Debug, PartialEq, Eq)]
pub struct Country {
    pub iso: &'static str,
    pub name: &'static str,
    pub dial: &'static str,
    pub flag: &'static str,
}

pub const COUNTRIES: &[Country] = &[
    Country { iso: "AR", name: "Argentina", dial: "54", flag: "🇦🇷" },
    Country { iso: "AU", name: "Australia", dial: "61", flag: "🇦🇺" },
    Country { iso: "AT", name: "Austria", dial: "43", flag: "🇦🇹" },
    Country { iso: "BE", name: "Belgium", dial: "32", flag: "🇧🇪" },
    Country { iso: "BR", name: "Brazil", dial: "55", flag: "🇧🇷" },
    Country { iso: "CM", name: "Cameroon", dial: "237", flag: "🇨🇲" },
    Country { iso: "CA", name: "Canada", dial: "1", flag: "🇨🇦" },
    Country { iso: "CN", name: "China", dial: "86", flag: "🇨🇳" },
    Country { iso: "DK", name: "Denmark", dial: "45", flag: "🇩🇰" },
    Country { iso: "EG", name: "Egypt", dial: "20", flag: "🇪🇬" },
    Country { iso: "ET", name: "Ethiopia", dial: "251", flag: "🇪🇹" },
    Country { iso: "FI", name: "Finland", dial: "358", flag: "🇫🇮" },
    Country { iso: "FR", name: "France", dial: "33", flag: "🇫🇷" },
    Country { iso: "DE", name: "Germany", dial: "49", flag: "🇩🇪" },
    Country { iso: "GH", name: "Ghana", dial: "233", flag: "🇬🇭" },
    Country { iso: "GR", name: "Greece", dial: "30", flag: "🇬🇷" },
    Country { iso: "IN", name: "India", dial: "91", flag: "🇮🇳" },
    Country { iso: "ID", name: "Indonesia", dial: "62", flag: "🇮🇩" },
    Country { iso: "IE", name: "Ireland", dial: "353", flag: "🇮🇪" },
    Country { iso: "IL", name: "Israel", dial: "972", flag: "🇮🇱" },
    Country { iso: "IT", name: "Italy", dial: "39", flag: "🇮🇹" },
    Country { iso: "JP", name: "Japan", dial: "81", flag: "🇯🇵" },
    Country { iso: "KE", name: "Kenya", dial: "254", flag: "🇰🇪" },
    Country { iso: "LR", name: "Liberia", dial: "231", flag: "🇱🇷" },
    Country { iso: "MY", name: "Malaysia", dial: "60", flag: "🇲🇾" },
    Country { iso: "MX", name: "Mexico", dial: "52", flag: "🇲🇽" },
    Country { iso: "MA", name: "Morocco", dial: "212", flag: "🇲🇦" },
    Country { iso: "NL", name: "Netherlands", dial: "31", flag: "🇳🇱" },
    Country { iso: "NZ", name: "New Zealand", dial: "64", flag: "🇳🇿" },
    Country { iso: "NE", name: "Niger", dial: "227", flag: "🇳🇪" },
    Country { iso: "NG", name: "Nigeria", dial: "234", flag: "🇳🇬" },
    Country { iso: "NO", name: "Norway", dial: "47", flag: "🇳🇴" },
    Country { iso: "PK", name: "Pakistan", dial: "92", flag: "🇵🇰" },
    Country { iso: "PH", name: "Philippines", dial: "63", flag: "🇵🇭" },
    Country { iso: "PL", name: "Poland", dial: "48", flag: "🇵🇱" },
    Country { iso: "PT", name: "Portugal", dial: "351", flag: "🇵🇹" },
    Country { iso: "RW", name: "Rwanda", dial: "250", flag: "🇷🇼" },
    Country { iso: "SA", name: "Saudi Arabia", dial: "966", flag: "🇸🇦" },
    Country { iso: "SN", name: "Senegal", dial: "221", flag: "🇸🇳" },
    Country { iso: "SL", name: "Sierra Leone", dial: "232", flag: "🇸🇱" },
    Country { iso: "SG", name: "Singapore", dial: "65", flag: "🇸🇬" },
    Country { iso: "ZA", name: "South Africa", dial: "27", flag: "🇿🇦" },
    Country { iso: "KR", name: "South Korea", dial: "82", flag: "🇰🇷" },
    Country { iso: "ES", name: "Spain", dial: "34", flag: "🇪🇸" },
    Country { iso: "SE", name: "Sweden", dial: "46", flag: "🇸🇪" },
    Country { iso: "CH", name: "Switzerland", dial: "41", flag: "🇨🇭" },
    Country { iso: "TZ", name: "Tanzania", dial: "255", flag: "🇹🇿" },
    Country { iso: "TG", name: "Togo", dial: "228", flag: "🇹🇬" },
    Country { iso: "TR", name: "Turkey", dial: "90", flag: "🇹🇷" },
    Country { iso: "UG", name: "Uganda", dial: "256", flag: "🇺🇬" },
    Country { iso: "AE", name: "United Arab Emirates", dial: "971", flag: "🇦🇪" },
    Country { iso: "GB", name: "United Kingdom", dial: "44", flag: "🇬🇧" },
    Country { iso: "US", name: "United States", dial: "1", flag: "🇺🇸" },
    Country { iso: "ZM", name: "Zambia", dial: "260", flag: "🇿🇲" },
    Country { iso: "ZW", name: "Zimbabwe", dial: "263", flag: "🇿🇼" },
];

/// Looks a country up by ISO code, case-insensitively.
pub fn find(iso: &str) -> Option<&'static Country> {
    COUNTRIES
        .iter()
        .find(|country| country.iso.eq_ignore_ascii_case(iso))
}

/// Countries matching a search query: substring of the name, the exact ISO
/// code, or a dial-code prefix (with or without a leading `+`). An empty
/// query returns the full table.
pub fn filter(query: &str) -> Vec<&'static Country> {
    let query = query.trim();
    if query.is_empty() {
        return COUNTRIES.iter().collect();
    }

    let lowered = query.to_lowercase();
    let dial_query = query.trim_start_matches('+');
    let dial_search = !dial_query.is_empty() && dial_query.chars().all(|c| c.is_ascii_digit());

    COUNTRIES
        .iter()
        .filter(|country| {
            country.name.to_lowercase().contains(&lowered)
                || country.iso.eq_ignore_ascii_case(query)
                || (dial_search && country.dial.starts_with(dial_query))
        })
        .collect()
}

/// Splits a normalized `+<dial><digits>` value back into its country and
/// national digits, preferring the longest matching dial code. Returns `None`
/// for values without the `+` prefix or with an unknown dial code; dial codes
/// shared by several countries resolve to one of them.
pub fn split_value(value: &str) -> Option<(&'static Country, String)> {
    let digits = value.strip_prefix('+')?;
    COUNTRIES
        .iter()
        .filter(|country| digits.starts_with(country.dial))
        .max_by_key(|country| country.dial.len())
        .map(|country| (country, digits[country.dial.len()..].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find("NG").unwrap().dial, "234");
        assert_eq!(find("ng").unwrap().name, "Nigeria");
        assert!(find("XX").is_none());
    }

    #[test]
    fn empty_query_returns_everything() {
        assert_eq!(filter("").len(), COUNTRIES.len());
        assert_eq!(filter("   ").len(), COUNTRIES.len());
    }

    #[test]
    fn filter_by_name_fragment() {
        let hits = filter("nige");
        let names: Vec<&str> = hits.iter().map(|c| c.name).collect();
        assert!(names.contains(&"Niger"));
        assert!(names.contains(&"Nigeria"));
    }

    #[test]
    fn filter_by_dial_code() {
        let hits = filter("+44");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].iso, "GB");
    }

    #[test]
    fn filter_by_iso_code() {
        let hits = filter("us");
        assert!(hits.iter().any(|c| c.iso == "US"));
    }

    #[test]
    fn no_match_yields_empty_list() {
        assert!(filter("atlantis").is_empty());
    }

    #[test]
    fn split_value_recovers_country_and_national_digits() {
        let (country, national) = split_value("+2340000000000").unwrap();
        assert_eq!(country.iso, "NG");
        assert_eq!(national, "0000000000");

        let (country, national) = split_value("+442079460958").unwrap();
        assert_eq!(country.iso, "GB");
        assert_eq!(national, "2079460958");
    }

    #[test]
    fn split_value_rejects_unprefixed_or_unknown_values() {
        assert!(split_value("2340000000000").is_none());
        assert!(split_value("+9991234").is_none());
        assert!(split_value("").is_none());
    }

    #[test]
    fn shared_dial_codes_resolve_to_one_country() {
        let (country, national) = split_value("+16045551234").unwrap();
        assert_eq!(country.dial, "1");
        assert_eq!(national, "6045551234");
    }
}
