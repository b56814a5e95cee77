//! 문자열 변환 모듈
//!
//! 이름으로 선택되는 원소 단위 대소문자 변환을 제공합니다.

use std::fmt;
use std::str::FromStr;

use crate::error::{CaseConvError, Result};

/// 원소 하나를 변환하는 순수 함수
pub type TransformFn = fn(&str) -> String;

/// 문서 (순서가 보존되는 문자열 목록)
pub type Document = Vec<String>;

/// 지원하는 변환 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transformation {
    /// 모든 문자를 대문자로
    #[default]
    Capitalise,
    /// 모든 문자를 소문자로
    Decapitalise,
}

impl Transformation {
    /// 지원 변환 전체 목록
    pub const ALL: [Transformation; 2] = [Transformation::Capitalise, Transformation::Decapitalise];

    /// 대표 이름
    pub fn name(self) -> &'static str {
        match self {
            Transformation::Capitalise => "CAPITALISE",
            Transformation::Decapitalise => "DECAPITALISE",
        }
    }

    /// 변환 함수 반환
    pub fn function(self) -> TransformFn {
        match self {
            Transformation::Capitalise => str::to_uppercase,
            Transformation::Decapitalise => str::to_lowercase,
        }
    }

    /// 문서의 모든 원소에 변환 적용 (길이와 순서 보존)
    pub fn apply(self, document: &[String]) -> Document {
        let f = self.function();
        document.iter().map(|element| f(element)).collect()
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Transformation {
    type Err = CaseConvError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CaseConvError::UnknownTransformation {
                name: s.to_string(),
            })
    }
}

/// 이름으로 변환 함수 선택
///
/// # Examples
/// ```
/// use caseconv::transform::select;
///
/// let capitalise = select("CAPITALISE").unwrap();
/// assert_eq!(capitalise("Foo"), "FOO");
/// assert!(select("REVERSE").is_err());
/// ```
pub fn select(name: &str) -> Result<TransformFn> {
    name.parse::<Transformation>().map(Transformation::function)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(items: &[&str]) -> Document {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_capitalise() {
        let f = select("CAPITALISE").unwrap();
        assert_eq!(f("foo"), "FOO");
        assert_eq!(f("Foo"), "FOO");
        assert_eq!(f("FOO"), "FOO");
    }

    #[test]
    fn test_decapitalise() {
        let f = select("DECAPITALISE").unwrap();
        assert_eq!(f("foo"), "foo");
        assert_eq!(f("Foo"), "foo");
        assert_eq!(f("FOO"), "foo");
    }

    #[test]
    fn test_unknown_transformation() {
        assert!(matches!(
            select("TITLECASE"),
            Err(CaseConvError::UnknownTransformation { ref name }) if name == "TITLECASE"
        ));
        assert!(select("").is_err());
    }

    #[test]
    fn test_name_is_case_insensitive() {
        assert_eq!(
            "decapitalise".parse::<Transformation>().unwrap(),
            Transformation::Decapitalise
        );
    }

    #[test]
    fn test_apply_preserves_length_and_order() {
        let input = doc(&["Foo", "BAR", "wibble", "", "Foo"]);
        let output = Transformation::Capitalise.apply(&input);
        assert_eq!(output, doc(&["FOO", "BAR", "WIBBLE", "", "FOO"]));
        assert_eq!(output.len(), input.len());
    }

    #[test]
    fn test_idempotence() {
        let input = doc(&["Foo", "straße", "ÀÉÎ", "mIxEd 123"]);
        for t in Transformation::ALL {
            let once = t.apply(&input);
            assert_eq!(t.apply(&once), once);
        }
    }
}
