//! 포맷 판별 모듈
//!
//! 명시된 포맷 이름 또는 파일 확장자로부터 직렬화 포맷을 결정합니다.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{CaseConvError, Result};

/// 지원하는 직렬화 포맷
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// 문자열 JSON 배열
    Json,
    /// 문자열 YAML 시퀀스
    Yaml,
}

impl Format {
    /// 지원 포맷 전체 목록
    pub const ALL: [Format; 2] = [Format::Json, Format::Yaml];

    /// 대표 이름 (대문자)
    pub fn name(self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
        }
    }

    /// 이 포맷으로 인식되는 파일 확장자
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Format::Json => &["json"],
            Format::Yaml => &["yaml", "yml"],
        }
    }

    /// 파일 확장자로 포맷 추론 (대소문자 무시)
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|format| {
            format
                .extensions()
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
    }

    /// 경로의 확장자로 포맷 추론
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|s| s.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = CaseConvError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CaseConvError::UnknownFormat {
                format: s.to_string(),
            })
    }
}

/// 한쪽 엔드포인트(입력 또는 출력)의 포맷 결정
///
/// 명시된 포맷이 비어 있지 않으면 확장자와 상관없이 항상 우선합니다.
/// 명시값이 없으면 파일 확장자를 보고, 그것도 없으면 `UndeterminedFormat`을 반환합니다.
///
/// # Arguments
/// * `path` - 엔드포인트의 파일 경로 (스트림이면 None)
/// * `explicit` - 사용자가 지정한 포맷 이름
///
/// # Examples
/// ```
/// use std::path::Path;
/// use caseconv::format::{resolve, Format};
///
/// assert_eq!(resolve(Some(Path::new("foo.json")), Some("YAML")).unwrap(), Format::Yaml);
/// assert_eq!(resolve(Some(Path::new("foo.yml")), None).unwrap(), Format::Yaml);
/// assert!(resolve(None, None).is_err());
/// ```
pub fn resolve(path: Option<&Path>, explicit: Option<&str>) -> Result<Format> {
    match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(name) => name.parse(),
        None => path
            .and_then(Format::from_path)
            .ok_or_else(|| CaseConvError::UndeterminedFormat {
                endpoint: path
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "스트림".to_string()),
            }),
    }
}
