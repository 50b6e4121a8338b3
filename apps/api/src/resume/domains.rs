//! The fixed domain enumeration, shared by prompt construction and result
//! validation so both sides stay in sync.

/// Label used when classification is inconclusive.
pub const FALLBACK_DOMAIN: &str = "Core Engineering";

/// Stable id → label mapping. The ids appear verbatim in the extraction
/// prompt, so validation accepts either form back from the generator.
pub const DOMAINS: &[(u32, &str)] = &[
    (1, "AI/ML"),
    (2, "Data Science"),
    (3, "Web Development"),
    (4, "Mobile App Development"),
    (5, "Cybersecurity"),
    (6, "DevOps & Cloud"),
    (7, "Blockchain"),
    (8, "UI/UX Design"),
    (9, "Game Development"),
    (10, "Embedded Systems"),
    (11, "IoT"),
    (12, "Robotics"),
    (13, "EEE"),
    (14, "ECE"),
    (15, "Mechanical Engineering"),
    (16, "Civil Engineering"),
    (17, "Chemical Engineering"),
    (18, "Core Engineering"),
];

/// One "id - label" line per domain, embedded in the extraction prompt.
pub fn domain_listing() -> String {
    DOMAINS
        .iter()
        .map(|(id, label)| format!("{id} - {label}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Canonicalizes a generator-provided domain value: a numeric id from the
/// listing, or an exact / case-insensitive label match. Anything else maps to
/// the fallback label.
pub fn canonical_domain(raw: &str) -> &'static str {
    let trimmed = raw.trim();
    if let Ok(id) = trimmed.parse::<u32>() {
        if let Some(label) = DOMAINS
            .iter()
            .find(|(domain_id, _)| *domain_id == id)
            .map(|(_, label)| *label)
        {
            return label;
        }
    }
    DOMAINS
        .iter()
        .find(|(_, label)| label.eq_ignore_ascii_case(trimmed))
        .map(|(_, label)| *label)
        .unwrap_or(FALLBACK_DOMAIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_label_is_canonical() {
        assert_eq!(canonical_domain("Web Development"), "Web Development");
    }

    #[test]
    fn test_label_match_is_case_insensitive() {
        assert_eq!(canonical_domain("ai/ml"), "AI/ML");
        assert_eq!(canonical_domain("  cybersecurity  "), "Cybersecurity");
    }

    #[test]
    fn test_numeric_id_resolves_to_label() {
        assert_eq!(canonical_domain("3"), "Web Development");
        assert_eq!(canonical_domain("18"), "Core Engineering");
    }

    #[test]
    fn test_unknown_value_falls_back() {
        assert_eq!(canonical_domain("Astrology"), FALLBACK_DOMAIN);
        assert_eq!(canonical_domain(""), FALLBACK_DOMAIN);
        assert_eq!(canonical_domain("99"), FALLBACK_DOMAIN);
    }

    #[test]
    fn test_listing_names_every_domain() {
        let listing = domain_listing();
        for (id, label) in DOMAINS {
            assert!(listing.contains(&format!("{id} - {label}")));
        }
    }
}
