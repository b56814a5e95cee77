//! 변환 파이프라인 모듈
//!
//! 포맷 판별, 디코딩, 원소 변환, 인코딩, 입출력 바인딩을 정해진 순서로 조합합니다.
//! 어느 단계든 실패하면 즉시 첫 에러를 반환합니다.

use std::io::Write;
use std::time::Instant;

use crate::codec::{decoder_for, encoder_for};
use crate::endpoint::{with_input, with_output, InputEndpoint, OutputEndpoint};
use crate::error::{CaseConvError, Result};
use crate::format::{self, Format};
use crate::stats::RunReport;
use crate::transform::Transformation;

/// 파이프라인 옵션
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// JSON 출력 들여쓰기
    pub pretty: bool,
    /// 출력 포맷을 판별할 수 없으면 입력 포맷을 그대로 사용
    pub inherit_output_format: bool,
    /// 대용량 파일 임계값 (이상이면 메모리 매핑 사용)
    pub mmap_threshold: u64,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            inherit_output_format: false,
            mmap_threshold: 10 * 1024 * 1024, // 10MB
        }
    }
}

impl PipelineOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretty 출력 설정
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// 출력 포맷 상속 설정
    pub fn with_inherit_output_format(mut self, inherit: bool) -> Self {
        self.inherit_output_format = inherit;
        self
    }

    /// 메모리 매핑 임계값 설정
    pub fn with_mmap_threshold(mut self, threshold: u64) -> Self {
        self.mmap_threshold = threshold;
        self
    }
}

/// 입력을 읽어 변환한 뒤 출력에 씀
///
/// # Arguments
/// * `input` - 입력 엔드포인트
/// * `input_format` - 입력 포맷 명시값 (비어 있으면 확장자로 판별)
/// * `output` - 출력 엔드포인트
/// * `output_format` - 출력 포맷 명시값 (비어 있으면 확장자로 판별)
/// * `transformation` - 변환 이름 (CAPITALISE, DECAPITALISE)
/// * `options` - 파이프라인 옵션
///
/// # Returns
/// 성공 시 실행 결과 `RunReport`, 실패 시 처음 발생한 에러
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use caseconv::{run, InputEndpoint, OutputEndpoint, PipelineOptions};
///
/// let mut input = Cursor::new(br#"["Foo","BAR","wibble"]"#.to_vec());
/// let mut output = Vec::new();
/// run(
///     InputEndpoint::Stream(&mut input),
///     Some("JSON"),
///     OutputEndpoint::Stream(&mut output),
///     Some("YAML"),
///     "CAPITALISE",
///     &PipelineOptions::new(),
/// )
/// .unwrap();
/// assert_eq!(output, b"- FOO\n- BAR\n- WIBBLE\n");
/// ```
pub fn run(
    input: InputEndpoint<'_>,
    input_format: Option<&str>,
    output: OutputEndpoint<'_>,
    output_format: Option<&str>,
    transformation: &str,
    options: &PipelineOptions,
) -> Result<RunReport> {
    let started = Instant::now();

    let transformation: Transformation = transformation.parse()?;
    let input_format = format::resolve(input.path(), input_format)?;
    let output_format = resolve_output_format(&output, output_format, input_format, options)?;

    let decoder = decoder_for(input_format);
    let encoder = encoder_for(output_format, options);

    let (document, bytes_read) = with_input(input, options.mmap_threshold, |bytes| {
        Ok((decoder.decode(bytes)?, bytes.len() as u64))
    })?;

    let transformed = transformation.apply(&document);
    let encoded = encoder.encode(&transformed)?;

    // 인코딩까지 성공한 뒤에야 출력을 열어 실패한 실행이 기존 파일을 비우지 않게 함
    with_output(output, |writer: &mut dyn Write| writer.write_all(&encoded))?;

    Ok(RunReport {
        input_format,
        output_format,
        transformation,
        elements: transformed.len(),
        bytes_read,
        bytes_written: encoded.len() as u64,
        elapsed: started.elapsed(),
    })
}

fn resolve_output_format(
    output: &OutputEndpoint<'_>,
    explicit: Option<&str>,
    input_format: Format,
    options: &PipelineOptions,
) -> Result<Format> {
    match format::resolve(output.path(), explicit) {
        Err(CaseConvError::UndeterminedFormat { .. }) if options.inherit_output_format => {
            Ok(input_format)
        }
        resolved => resolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_streams(
        input: &str,
        input_format: Option<&str>,
        output_format: Option<&str>,
        transformation: &str,
        options: &PipelineOptions,
    ) -> Result<String> {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut sink = Vec::new();
        run(
            InputEndpoint::Stream(&mut reader),
            input_format,
            OutputEndpoint::Stream(&mut sink),
            output_format,
            transformation,
            options,
        )?;
        Ok(String::from_utf8(sink).unwrap())
    }

    #[test]
    fn test_json_capitalise() {
        let out = run_streams(
            r#"["Foo","BAR","wibble"]"#,
            Some("JSON"),
            Some("JSON"),
            "CAPITALISE",
            &PipelineOptions::new(),
        )
        .unwrap();
        assert_eq!(out, "[\"FOO\",\"BAR\",\"WIBBLE\"]\n");
    }

    #[test]
    fn test_yaml_decapitalise() {
        let out = run_streams(
            "- Foo\n- BAR\n- wibble\n",
            Some("YAML"),
            Some("YAML"),
            "DECAPITALISE",
            &PipelineOptions::new(),
        )
        .unwrap();
        assert_eq!(out, "- foo\n- bar\n- wibble\n");
    }

    #[test]
    fn test_stream_output_without_format_fails() {
        let err = run_streams(
            r#"["a"]"#,
            Some("JSON"),
            None,
            "CAPITALISE",
            &PipelineOptions::new(),
        )
        .unwrap_err();
        assert!(matches!(err, CaseConvError::UndeterminedFormat { .. }));
    }

    #[test]
    fn test_inherit_output_format() {
        let options = PipelineOptions::new().with_inherit_output_format(true);
        let out = run_streams("- a\n", Some("YAML"), None, "CAPITALISE", &options).unwrap();
        assert_eq!(out, "- A\n");
    }

    #[test]
    fn test_inherit_does_not_hide_unknown_format() {
        let options = PipelineOptions::new().with_inherit_output_format(true);
        let err = run_streams("- a\n", Some("YAML"), Some("XML"), "CAPITALISE", &options)
            .unwrap_err();
        assert!(matches!(err, CaseConvError::UnknownFormat { .. }));
    }

    #[test]
    fn test_transformation_checked_before_input_is_read() {
        let err = run_streams(
            "this is not json",
            Some("JSON"),
            Some("JSON"),
            "SHOUT",
            &PipelineOptions::new(),
        )
        .unwrap_err();
        assert!(matches!(err, CaseConvError::UnknownTransformation { .. }));
    }

    #[test]
    fn test_decode_error_writes_nothing() {
        let mut reader = Cursor::new(br#"{"not":"an array"}"#.to_vec());
        let mut sink = Vec::new();
        let err = run(
            InputEndpoint::Stream(&mut reader),
            Some("JSON"),
            OutputEndpoint::Stream(&mut sink),
            Some("JSON"),
            "DECAPITALISE",
            &PipelineOptions::new(),
        )
        .unwrap_err();
        assert!(matches!(err, CaseConvError::Decode { .. }));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_report_counts() {
        let mut reader = Cursor::new(br#"["a","b","c"]"#.to_vec());
        let mut sink = Vec::new();
        let report = run(
            InputEndpoint::Stream(&mut reader),
            Some("json"),
            OutputEndpoint::Stream(&mut sink),
            Some("yaml"),
            "capitalise",
            &PipelineOptions::new(),
        )
        .unwrap();

        assert_eq!(report.input_format, Format::Json);
        assert_eq!(report.output_format, Format::Yaml);
        assert_eq!(report.transformation, Transformation::Capitalise);
        assert_eq!(report.elements, 3);
        assert_eq!(report.bytes_read, 13);
        assert_eq!(report.bytes_written, sink.len() as u64);
    }
}
