//! Query-parameter extraction from the page address.

use std::collections::HashMap;

use percent_encoding::percent_decode_str;

/// The query parameters of one page address, parsed once per page load.
#[derive(Debug, Clone, Default)]
pub struct PageQuery {
    parameters: HashMap<String, String>,
}

impl PageQuery {
    /// Parse the query component of a page address.
    ///
    /// Handles percent-encoding and `+`-as-space; for duplicate keys the
    /// last value wins. An address without a query component yields an
    /// empty set.
    #[must_use]
    pub fn from_address(address: &str) -> Self {
        let Some(query_start) = address.find('?') else {
            return Self::default();
        };
        let query = &address[query_start + 1..];
        let query = query.split('#').next().unwrap_or("");

        let parameters = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();

        Self { parameters }
    }

    /// The value for `name`, or the empty string when absent.
    #[must_use]
    pub fn parameter(&self, name: &str) -> &str {
        self.parameters.get(name).map_or("", String::as_str)
    }
}

fn decode_component(raw: &str) -> String {
    let plus_decoded = raw.replace('+', " ");
    percent_decode_str(&plus_decoded)
        .decode_utf8_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_returns_value_when_present() {
        let query = PageQuery::from_address("/find-help?category=dropin&location=manchester");
        assert_eq!(query.parameter("category"), "dropin");
        assert_eq!(query.parameter("location"), "manchester");
    }

    #[test]
    fn parameter_absent_is_empty_string() {
        let query = PageQuery::from_address("/find-help?category=dropin");
        assert_eq!(query.parameter("location"), "");
    }

    #[test]
    fn address_without_query_yields_empty_set() {
        let query = PageQuery::from_address("/find-help");
        assert_eq!(query.parameter("category"), "");
    }

    #[test]
    fn parameter_decodes_percent_encoding_and_plus() {
        let query = PageQuery::from_address("/find-help?category=mental%20health&q=a+b");
        assert_eq!(query.parameter("category"), "mental health");
        assert_eq!(query.parameter("q"), "a b");
    }

    #[test]
    fn fragment_is_not_part_of_the_query() {
        let query = PageQuery::from_address("/find-help?category=dropin#map");
        assert_eq!(query.parameter("category"), "dropin");
    }

    #[test]
    fn duplicate_keys_last_value_wins() {
        let query = PageQuery::from_address("/x?a=1&a=2");
        assert_eq!(query.parameter("a"), "2");
    }
}
