//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

use crate::endpoint::{InputEndpoint, OutputEndpoint};
use crate::pipeline::PipelineOptions;

/// caseconv CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "caseconv",
    author = "YourName <your@email.com>",
    version,
    about = "JSON/YAML 문자열 배열의 대소문자를 변환하는 CLI 도구",
    long_about = r#"
CASE CONVERTER
==============

JSON 배열 또는 YAML 시퀀스로 된 문자열 목록을 읽어
각 원소의 대소문자를 바꾼 뒤 같은(또는 다른) 포맷으로 씁니다.

포맷은 -f / -F 로 직접 지정하거나, 파일 확장자(.json, .yaml, .yml)로 판별합니다.
'-' 는 표준 입력/표준 출력을 뜻합니다.

예제:
  caseconv -i words.json -o upper.json
  caseconv -i words.yaml -o lower.yaml -t DECAPITALISE
  caseconv -i words.json -o words.yml
  cat words.json | caseconv -i - -f JSON -o - -F YAML
"#
)]
pub struct Args {
    /// 읽을 파일 경로, 또는 표준 입력을 뜻하는 '-'
    #[arg(short, long)]
    pub input: String,

    /// 입력 포맷 (JSON, YAML). 비우면 입력 파일 확장자로 판별
    #[arg(short = 'f', long = "format")]
    pub input_format: Option<String>,

    /// 쓸 파일 경로, 또는 표준 출력을 뜻하는 '-'
    #[arg(short, long)]
    pub output: String,

    /// 출력 포맷 (JSON, YAML). 비우면 출력 파일 확장자로 판별
    #[arg(short = 'F', long)]
    pub output_format: Option<String>,

    /// 적용할 변환 (CAPITALISE, DECAPITALISE)
    #[arg(short, long, default_value = "CAPITALISE")]
    pub transformation: String,

    /// 들여쓰기된 JSON 출력
    #[arg(long)]
    pub pretty: bool,

    /// 출력 포맷을 판별할 수 없으면 입력 포맷을 그대로 사용
    #[arg(long = "inherit-format")]
    pub inherit_format: bool,

    /// 상세 출력 모드 (표준 에러)
    #[arg(short, long)]
    pub verbose: bool,

    /// 실패 시 에러 로그 파일 경로
    #[arg(long)]
    pub log: Option<PathBuf>,
}

impl Args {
    /// 입력 엔드포인트
    pub fn input_endpoint(&self) -> InputEndpoint<'static> {
        InputEndpoint::from_locator(&self.input)
    }

    /// 출력 엔드포인트
    pub fn output_endpoint(&self) -> OutputEndpoint<'static> {
        OutputEndpoint::from_locator(&self.output)
    }

    /// 인자로부터 파이프라인 옵션 생성
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions::new()
            .with_pretty(self.pretty)
            .with_inherit_output_format(self.inherit_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_flags() {
        let args = Args::try_parse_from([
            "caseconv", "-i", "in.json", "-f", "JSON", "-o", "-", "-F", "YAML", "-t",
            "DECAPITALISE",
        ])
        .unwrap();

        assert_eq!(args.input, "in.json");
        assert_eq!(args.input_format.as_deref(), Some("JSON"));
        assert_eq!(args.output, "-");
        assert_eq!(args.output_format.as_deref(), Some("YAML"));
        assert_eq!(args.transformation, "DECAPITALISE");
        assert!(matches!(args.output_endpoint(), OutputEndpoint::Stdout));
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["caseconv", "-i", "-", "-o", "out.yml"]).unwrap();

        assert_eq!(args.transformation, "CAPITALISE");
        assert!(args.input_format.is_none());
        assert!(!args.pretty);
        assert!(matches!(args.input_endpoint(), InputEndpoint::Stdin));

        let options = args.pipeline_options();
        assert!(!options.inherit_output_format);
    }

    #[test]
    fn test_long_flags() {
        let args = Args::try_parse_from([
            "caseconv",
            "--input",
            "a.yaml",
            "--output",
            "b.json",
            "--output-format",
            "JSON",
            "--pretty",
            "--inherit-format",
            "--verbose",
        ])
        .unwrap();

        let options = args.pipeline_options();
        assert!(options.pretty);
        assert!(options.inherit_output_format);
        assert!(args.verbose);
    }

    #[test]
    fn test_missing_output_is_rejected() {
        assert!(Args::try_parse_from(["caseconv", "-i", "in.json"]).is_err());
    }
}
