//! 실행 결과 및 유틸리티 모듈
//!
//! 한 번의 변환 결과 요약과 포맷팅을 담당합니다.
//! 표준 출력은 변환 데이터가 쓰일 수 있으므로 모든 요약은 표준 에러로 출력합니다.

use colored::Colorize;
use std::time::Duration;

use crate::format::Format;
use crate::transform::Transformation;

/// 변환 실행 결과
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// 입력 포맷
    pub input_format: Format,
    /// 출력 포맷
    pub output_format: Format,
    /// 적용한 변환
    pub transformation: Transformation,
    /// 변환한 원소 수
    pub elements: usize,
    /// 읽은 바이트
    pub bytes_read: u64,
    /// 쓴 바이트
    pub bytes_written: u64,
    /// 처리 시간
    pub elapsed: Duration,
}

impl RunReport {
    /// 실행 요약 출력
    pub fn print_summary(&self) {
        eprintln!("\n{}", "═".repeat(50).bright_blue());
        eprintln!("{}", " 📊 변환 결과".bright_white().bold());
        eprintln!("{}", "═".repeat(50).bright_blue());

        eprintln!(
            "  {} 포맷:         {} → {}",
            "🔁".bright_cyan(),
            self.input_format,
            self.output_format
        );
        eprintln!(
            "  {} 변환:         {}",
            "🔤".bright_magenta(),
            self.transformation
        );
        eprintln!(
            "  {} 원소 수:      {}",
            "✅".bright_green(),
            self.elements.to_string().green()
        );
        eprintln!(
            "  {} 입력 용량:    {}",
            "📥".bright_yellow(),
            format_bytes(self.bytes_read)
        );
        eprintln!(
            "  {} 출력 용량:    {}",
            "📤".bright_magenta(),
            format_bytes(self.bytes_written)
        );
        eprintln!(
            "  {} 처리 시간:    {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed)
        );

        eprintln!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Examples
/// ```
/// use caseconv::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1536), "1.50 KB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

/// 경과 시간을 읽기 쉬운 형식으로 변환
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    match secs {
        0 if millis == 0 => format!("{}µs", duration.as_micros()),
        0 => format!("{}ms", millis),
        1..=59 => format!("{}.{:03}초", secs, millis),
        _ => format!("{}분 {}초", secs / 60, secs % 60),
    }
}
