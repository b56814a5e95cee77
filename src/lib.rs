//! caseconv - JSON/YAML CASE CONVERTER
//!
//! JSON 배열 또는 YAML 시퀀스로 된 문자열 목록을 읽어 대소문자를 변환하고,
//! 같은(또는 다른) 포맷으로 다시 쓰는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🔁 **포맷 변환**: 입력과 출력 포맷을 독립적으로 지정 (JSON ↔ YAML)
//! - 🔍 **포맷 자동 판별**: 명시값이 없으면 `.json`, `.yaml`, `.yml` 확장자로 판별
//! - 🔤 **대소문자 변환**: `CAPITALISE`, `DECAPITALISE`
//! - 📥 **표준 스트림**: `-`로 표준 입력/출력 사용
//! - 🧩 **코덱 추상화**: 새 포맷은 디코더/인코더 한 쌍만 추가하면 됨
//!
//! # 예제
//!
//! ```bash
//! # 기본 사용법
//! caseconv -i words.json -o upper.json
//!
//! # YAML을 읽어 JSON으로 출력
//! caseconv -i words.yaml -o - -F JSON
//! ```

pub mod cli;
pub mod codec;
pub mod endpoint;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod stats;
pub mod transform;

// Re-exports for convenient access
pub use cli::Args;
pub use codec::{decoder_for, encoder_for, Decoder, Encoder, JsonCodec, YamlCodec};
pub use endpoint::{InputEndpoint, OutputEndpoint};
pub use error::{CaseConvError, Result};
pub use format::Format;
pub use pipeline::{run, PipelineOptions};
pub use stats::{format_bytes, RunReport};
pub use transform::{Document, Transformation};
