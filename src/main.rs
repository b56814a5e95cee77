//! caseconv - JSON/YAML CASE CONVERTER
//!
//! 메인 엔트리포인트

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use caseconv::{cli::Args, pipeline::run, CaseConvError};

fn main() -> Result<()> {
    let args = Args::parse();

    if args.verbose {
        print_header(&args);
    }

    let result = run(
        args.input_endpoint(),
        args.input_format.as_deref(),
        args.output_endpoint(),
        args.output_format.as_deref(),
        &args.transformation,
        &args.pipeline_options(),
    );

    match result {
        Ok(report) => {
            if args.verbose {
                report.print_summary();
                eprintln!("\n{} 변환 완료: {}\n", "✅".bright_green(), args.output);
            }
            Ok(())
        }
        Err(error) => Err(fail_with_log(error, args.log.as_deref())),
    }
}

/// 실패 처리: 로그 파일 작성 후 원래 에러 반환
///
/// 로그 파일을 쓰지 못해도 변환 에러가 가려지지 않도록 경고만 출력합니다.
fn fail_with_log(error: CaseConvError, log_path: Option<&Path>) -> anyhow::Error {
    if let Some(log_path) = log_path {
        if let Err(log_error) = write_error_log(log_path, &error) {
            eprintln!(
                "{} 에러 로그 저장 실패 ({:?}): {}",
                "⚠️".bright_yellow(),
                log_path,
                log_error
            );
        }
    }

    error.into()
}

/// 헤더 출력
fn print_header(args: &Args) {
    let auto = || "자동".to_string();

    eprintln!("\n{}", "═".repeat(50).bright_blue());
    eprintln!("{}", " 🔤 JSON/YAML CASE CONVERTER".bright_white().bold());
    eprintln!("{}", "═".repeat(50).bright_blue());
    eprintln!(
        "  {} 입력:   {} ({})",
        "📂".bright_cyan(),
        args.input,
        args.input_format.clone().unwrap_or_else(auto)
    );
    eprintln!(
        "  {} 출력:   {} ({})",
        "📄".bright_green(),
        args.output,
        args.output_format.clone().unwrap_or_else(auto)
    );
    eprintln!("  {} 변환:   {}", "⚙️".bright_yellow(), args.transformation);

    if args.inherit_format {
        eprintln!(
            "  {} {}",
            "ℹ️".bright_blue(),
            "출력 포맷 미지정 시 입력 포맷 사용".cyan()
        );
    }

    if args.pretty {
        eprintln!(
            "  {} {}",
            "✨".bright_magenta(),
            "Pretty 출력 모드".magenta()
        );
    }

    eprintln!("{}", "═".repeat(50).bright_blue());
}

/// 에러 로그 파일 작성
fn write_error_log(log_path: &Path, error: &CaseConvError) -> Result<()> {
    let mut log_file = File::create(log_path)?;

    writeln!(log_file, "caseconv 에러 로그")?;
    writeln!(log_file, "생성 시간: {}", unix_now())?;
    writeln!(log_file, "{}", "=".repeat(50))?;
    writeln!(log_file, "에러: {}", error)?;

    let mut source = error.source();
    while let Some(cause) = source {
        writeln!(log_file, "원인: {}", cause)?;
        source = cause.source();
    }

    eprintln!("{} 에러 로그 저장: {:?}", "📝".bright_cyan(), log_path);

    Ok(())
}

/// 현재 시간 문자열 반환
fn unix_now() -> String {
    use std::time::SystemTime;
    let duration = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    format!("Unix timestamp: {}", duration.as_secs())
}
