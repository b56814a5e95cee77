//! 에러 타입 정의 모듈
//!
//! caseconv에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::io;
use std::path::Path;
use thiserror::Error;

use crate::format::Format;

/// caseconv에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum CaseConvError {
    /// 명시된 포맷이 지원 목록(JSON, YAML)에 없음
    #[error("알 수 없는 포맷입니다: '{format}' (지원: JSON, YAML)")]
    UnknownFormat { format: String },

    /// 포맷이 명시되지 않았고 확장자로도 판별할 수 없음
    #[error("포맷을 판별할 수 없습니다 ({endpoint}): 포맷을 직접 지정하세요")]
    UndeterminedFormat { endpoint: String },

    /// 지원하지 않는 변환 이름
    #[error("알 수 없는 변환입니다: '{name}' (지원: CAPITALISE, DECAPITALISE)")]
    UnknownTransformation { name: String },

    /// 입력 데이터 파싱 실패 또는 문자열 배열이 아님
    #[error("{format} 디코딩 실패: {reason}")]
    Decode { format: Format, reason: String },

    /// 출력 직렬화 실패
    #[error("{format} 인코딩 실패: {reason}")]
    Encode { format: Format, reason: String },

    /// 파일/스트림 입출력 실패
    #[error("입출력 실패 ({target}): {source}")]
    Io {
        target: String,
        #[source]
        source: io::Error,
    },
}

impl CaseConvError {
    /// 경로 기반 입출력 에러 생성
    pub fn io_at(path: &Path, source: io::Error) -> Self {
        Self::Io {
            target: path.display().to_string(),
            source,
        }
    }

    /// 디코딩 에러 생성
    pub fn decode(format: Format, reason: impl Into<String>) -> Self {
        Self::Decode {
            format,
            reason: reason.into(),
        }
    }
}

/// caseconv 결과 타입 별칭
pub type Result<T> = std::result::Result<T, CaseConvError>;
