#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    #[default]
    Upper,
    Lower,
}

impl From<Option<bool>> for CaseMode {
    /// Only an explicit `false` selects lowercase; an absent flag means uppercase.
    fn from(to_upper: Option<bool>) -> Self {
        match to_upper {
            Some(false) => CaseMode::Lower,
            Some(true) | None => CaseMode::Upper,
        }
    }
}

pub fn format_case(input: &str, to_upper: Option<bool>) -> String {
    apply_case(input, CaseMode::from(to_upper))
}

pub fn apply_case(input: &str, mode: CaseMode) -> String {
    match mode {
        CaseMode::Upper => input.to_uppercase(),
        CaseMode::Lower => input.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_by_default() {
        assert_eq!(format_case("Hello", None), "HELLO");
        assert_eq!(format_case("Hello", Some(true)), "HELLO");
    }

    #[test]
    fn test_lowercase_only_when_explicitly_false() {
        assert_eq!(format_case("Hello", Some(false)), "hello");
    }

    #[test]
    fn test_non_ascii_and_empty() {
        assert_eq!(format_case("straße", None), "STRASSE");
        assert_eq!(format_case("ÉCOLE", Some(false)), "école");
        assert_eq!(format_case("", None), "");
    }
}
