use validator::ValidationError;

/// Trims `label` and checks it against the labels already on the wheel.
/// Matching is exact and case-sensitive.
pub fn validate_label<'a, S: AsRef<str>>(
    label: &'a str,
    existing: &[S],
) -> Result<&'a str, ValidationError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("empty_label"));
    }
    if existing.iter().any(|item| item.as_ref() == trimmed) {
        let mut err = ValidationError::new("duplicate_label");
        err.add_param("label".into(), &trimmed);
        return Err(err);
    }
    Ok(trimmed)
}

pub fn is_blank(label: &str) -> bool {
    label.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_label() {
        let existing: [&str; 0] = [];
        assert_eq!(validate_label("  Dinner ", &existing), Ok("Dinner"));
    }

    #[test]
    fn test_rejects_blank() {
        let existing = ["A"];
        assert_eq!(validate_label("", &existing).unwrap_err().code, "empty_label");
        assert_eq!(validate_label("   ", &existing).unwrap_err().code, "empty_label");
        assert!(is_blank(" \t"));
    }

    #[test]
    fn test_rejects_duplicate_after_trim() {
        let existing = vec!["A".to_string(), "B".to_string()];
        let err = validate_label(" B ", &existing).unwrap_err();
        assert_eq!(err.code, "duplicate_label");
    }

    #[test]
    fn test_duplicate_is_case_sensitive() {
        let existing = ["Pizza"];
        assert_eq!(validate_label("pizza", &existing), Ok("pizza"));
    }
}
