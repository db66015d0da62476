//! Gender normalization into the engine-native vocabulary.

use crate::error::ChartError;

const MALE_FORMS: [&str; 7] = ["m", "male", "man", "남", "남자", "남성", "男"];
const FEMALE_FORMS: [&str; 7] = ["f", "female", "woman", "여", "여자", "여성", "女"];

/// Canonical gender in the vocabulary chart engines validate against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Engine-native token. Current engine versions validate gender strictly
    /// and expect exactly these; this is the one place to change if a future
    /// version uses a different canonical vocabulary.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }

    /// Normalize a free-form input, case-insensitive and whitespace-trimmed.
    /// An absent value is reported distinctly from an unrecognized one.
    pub fn normalize(value: Option<&str>) -> Result<Self, ChartError> {
        let Some(raw) = value else {
            return Err(ChartError::MissingGender);
        };
        let v = raw.trim().to_lowercase();
        if MALE_FORMS.contains(&v.as_str()) {
            return Ok(Self::Male);
        }
        if FEMALE_FORMS.contains(&v.as_str()) {
            return Ok(Self::Female);
        }
        Err(ChartError::UnrecognizedGender(raw.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn male_variants_normalize_to_one_token() {
        for input in ["male", "Male", " MALE ", "m", "man", "남", "남자", "남성", "男"] {
            let g = Gender::normalize(Some(input)).unwrap();
            assert_eq!(g, Gender::Male, "input {input:?}");
            assert_eq!(g.token(), "男");
        }
    }

    #[test]
    fn female_variants_normalize_to_one_token() {
        for input in ["female", "F", " Woman ", "여", "여자", "여성", "女"] {
            let g = Gender::normalize(Some(input)).unwrap();
            assert_eq!(g, Gender::Female, "input {input:?}");
            assert_eq!(g.token(), "女");
        }
    }

    #[test]
    fn unrecognized_input_is_rejected() {
        assert!(matches!(
            Gender::normalize(Some("other")),
            Err(ChartError::UnrecognizedGender(_))
        ));
        assert!(matches!(
            Gender::normalize(Some("")),
            Err(ChartError::UnrecognizedGender(_))
        ));
    }

    #[test]
    fn absent_input_is_reported_distinctly() {
        assert_eq!(Gender::normalize(None), Err(ChartError::MissingGender));
    }
}
