//! 직렬화 코덱 모듈
//!
//! 포맷별 디코더/인코더 구현과, `Format` 값에서 구체 구현을 고르는 단일 매핑을 담당합니다.
//! 새 포맷을 추가할 때는 여기에 디코더/인코더 한 쌍과 매핑 한 줄만 더하면 됩니다.

use serde_yaml::Value as YamlValue;

use crate::error::{CaseConvError, Result};
use crate::format::Format;
use crate::pipeline::PipelineOptions;
use crate::transform::Document;

/// UTF-8 BOM
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// 바이트열 → 문서
pub trait Decoder {
    /// 직렬화된 문자열 배열을 파싱
    fn decode(&self, bytes: &[u8]) -> Result<Document>;
}

/// 문서 → 바이트열
pub trait Encoder {
    /// 문자열 배열을 포맷의 표준 배열 표현으로 직렬화 (순서 보존, 중복 제거 없음)
    fn encode(&self, document: &[String]) -> Result<Vec<u8>>;
}

/// JSON 코덱
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec {
    /// 들여쓰기 출력 여부
    pub pretty: bool,
}

impl JsonCodec {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Decoder for JsonCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Document> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        serde_json::from_slice::<Document>(bytes)
            .map_err(|e| CaseConvError::decode(Format::Json, e.to_string()))
    }
}

impl Encoder for JsonCodec {
    fn encode(&self, document: &[String]) -> Result<Vec<u8>> {
        let mut bytes = if self.pretty {
            serde_json::to_vec_pretty(document)
        } else {
            serde_json::to_vec(document)
        }
        .map_err(|e| CaseConvError::Encode {
            format: Format::Json,
            reason: e.to_string(),
        })?;

        bytes.push(b'\n');
        Ok(bytes)
    }
}

/// YAML 코덱
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl Decoder for YamlCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Document> {
        // 스칼라 1, true 등이 문자열로 조용히 바뀌지 않도록 Value를 거쳐 검사
        let value: YamlValue = serde_yaml::from_slice(bytes)
            .map_err(|e| CaseConvError::decode(Format::Yaml, e.to_string()))?;

        match value {
            YamlValue::Sequence(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| match item {
                    YamlValue::String(s) => Ok(s),
                    other => Err(CaseConvError::decode(
                        Format::Yaml,
                        format!("{}번째 원소가 문자열이 아닙니다: {}", index, describe(&other)),
                    )),
                })
                .collect(),
            other => Err(CaseConvError::decode(
                Format::Yaml,
                format!("최상위 값이 시퀀스가 아닙니다: {}", describe(&other)),
            )),
        }
    }
}

impl Encoder for YamlCodec {
    fn encode(&self, document: &[String]) -> Result<Vec<u8>> {
        serde_yaml::to_string(document)
            .map(String::into_bytes)
            .map_err(|e| CaseConvError::Encode {
                format: Format::Yaml,
                reason: e.to_string(),
            })
    }
}

/// YAML 값 종류 설명 (에러 메시지용)
fn describe(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "null",
        YamlValue::Bool(_) => "bool",
        YamlValue::Number(_) => "number",
        YamlValue::String(_) => "string",
        YamlValue::Sequence(_) => "sequence",
        YamlValue::Mapping(_) => "mapping",
        YamlValue::Tagged(_) => "tagged value",
    }
}

/// 포맷에 맞는 디코더 선택
pub fn decoder_for(format: Format) -> Box<dyn Decoder> {
    match format {
        Format::Json => Box::new(JsonCodec::default()),
        Format::Yaml => Box::new(YamlCodec),
    }
}

/// 포맷에 맞는 인코더 선택
///
/// `options.pretty`는 JSON에만 의미가 있습니다.
/// YAML은 블록 시퀀스로 쓰되, 빈 문서는 `[]`로 씁니다.
pub fn encoder_for(format: Format, options: &PipelineOptions) -> Box<dyn Encoder> {
    match format {
        Format::Json => Box::new(JsonCodec::new(options.pretty)),
        Format::Yaml => Box::new(YamlCodec),
    }
}
