//! Enumerated support-type keys and their display names.

/// Support-type keys as they appear in API payloads, with display names.
const SUPPORT_TYPES: &[(&str, &str)] = &[
    ("alcohol", "Alcohol"),
    ("domestic violence", "Domestic Violence"),
    ("mental health", "Mental Health"),
    ("physical health", "Physical Health"),
    ("substances", "Drug Dependency"),
];

/// Map a support-type key to its display name.
///
/// Total over all inputs: an unmapped key returns `None` rather than
/// panicking, and the caller decides how to handle the miss.
#[must_use]
pub fn support_type_label(key: &str) -> Option<&'static str> {
    SUPPORT_TYPES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_type_label_maps_known_keys() {
        assert_eq!(support_type_label("alcohol"), Some("Alcohol"));
        assert_eq!(support_type_label("substances"), Some("Drug Dependency"));
        assert_eq!(support_type_label("mental health"), Some("Mental Health"));
    }

    #[test]
    fn support_type_label_unknown_key_is_none() {
        assert_eq!(support_type_label("gambling"), None);
    }
}
