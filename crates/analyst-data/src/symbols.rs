//! Static ISIN to ticker resolution
//!
//! A deliberately small, process-embedded table; the surrounding product
//! decides which securities are supported. Unknown ISINs surface as
//! [`crate::DataError::UnknownIsin`] at the call site.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Supported securities as (ISIN, ticker) pairs
const SECURITIES: &[(&str, &str)] = &[
    // US tech giants
    ("US0378331005", "AAPL"),
    ("US5949181045", "MSFT"),
    ("US88160R1014", "TSLA"),
    ("US02079K3059", "GOOGL"),
    ("US0231351067", "AMZN"),
    ("US30303M1027", "META"),
    ("US67066G1040", "NVDA"),
    // Other major US stocks
    ("US4781601046", "JNJ"),
    ("US91324P1021", "UNH"),
    ("US0846707026", "BRK-B"),
    ("US1912161007", "KO"),
    ("US7427181091", "PG"),
    ("US9311421039", "WMT"),
    ("US17275R1023", "CSCO"),
    ("US4592001014", "IBM"),
    // ETFs
    ("US78462F1030", "SPY"),
    ("US4642872000", "IVV"),
    ("US9229087690", "VOO"),
    ("US46090E1038", "QQQ"),
    ("US4642876555", "IEMG"),
    ("IE00B4L5Y983", "IWDA.AS"),
    ("IE00B4K48X80", "ISPA.AS"),
    ("IE00B4L5YC18", "EIMI.AS"),
    // German blue chips
    ("DE0007164600", "SAP.DE"),
    ("DE0008404005", "ALV.DE"),
    ("DE0007236101", "SIE.DE"),
    ("DE0005557508", "DTE.DE"),
    ("DE0008469008", "EXS1.DE"),
];

fn table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| SECURITIES.iter().copied().collect())
}

/// Resolve an ISIN to its ticker symbol
pub fn resolve_isin(isin: &str) -> Option<&'static str> {
    table().get(isin.trim().to_uppercase().as_str()).copied()
}

/// All supported (ISIN, ticker) pairs
pub fn list_supported() -> &'static [(&'static str, &'static str)] {
    SECURITIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_isin() {
        assert_eq!(resolve_isin("US0378331005"), Some("AAPL"));
        assert_eq!(resolve_isin("US67066G1040"), Some("NVDA"));
    }

    #[test]
    fn test_resolve_is_case_and_whitespace_tolerant() {
        assert_eq!(resolve_isin(" us0378331005 "), Some("AAPL"));
    }

    #[test]
    fn test_resolve_unknown_isin() {
        assert_eq!(resolve_isin("XX0000000000"), None);
    }

    #[test]
    fn test_table_has_no_duplicate_isins() {
        assert_eq!(table().len(), SECURITIES.len());
    }
}
