//! 통계 및 유틸리티 모듈
//!
//! 변환 결과 보고서와 포맷팅을 담당합니다.

use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;

use crate::infer::ColumnKind;

/// 변환 결과 보고서
#[derive(Debug, Clone, Default)]
pub struct ConvertReport {
    /// 출력 파일 경로
    pub out_path: PathBuf,
    /// 쓴 레코드 수 (= 입력 데이터 행 수)
    pub records: usize,
    /// 출력에 포함된 키와 추론된 타입 (키 순서)
    pub columns: Vec<(&'static str, ColumnKind)>,
    /// 입력에 없던 원본 열 이름
    pub missing_columns: Vec<&'static str>,
    /// 읽은 바이트
    pub bytes_read: u64,
    /// 쓴 바이트
    pub bytes_written: u64,
    /// 처리 시간
    pub elapsed: Duration,
}

impl ConvertReport {
    /// 누락된 열 경고 문구 (누락 없으면 `None`)
    pub fn missing_warning(&self) -> Option<String> {
        if self.missing_columns.is_empty() {
            return None;
        }
        Some(format!(
            "Warning: Missing columns in CSV: [{}]. Including what is available.",
            self.missing_columns.join(", ")
        ))
    }

    /// 결과 한 줄 요약
    pub fn result_line(&self) -> String {
        format!(
            "Wrote {} players to {}",
            self.records,
            self.out_path.display()
        )
    }

    /// 상세 통계 요약 출력
    pub fn print_summary(&self) {
        println!("\n{}", "═".repeat(50).bright_blue());
        println!("{}", " 📊 Conversion summary".bright_white().bold());
        println!("{}", "═".repeat(50).bright_blue());

        println!(
            "  {} Records:      {}",
            "📋".bright_cyan(),
            self.records.to_string().green()
        );

        let columns: Vec<String> = self
            .columns
            .iter()
            .map(|(key, kind)| format!("{} ({})", key, kind))
            .collect();
        println!(
            "  {} Keys:         {}",
            "🎯".bright_cyan(),
            if columns.is_empty() {
                "-".to_string()
            } else {
                columns.join(", ")
            }
        );

        if !self.missing_columns.is_empty() {
            println!(
                "  {} Missing:      {}",
                "⚠️".bright_yellow(),
                self.missing_columns.join(", ").yellow()
            );
        }

        println!(
            "  {} Input size:   {}",
            "📥".bright_yellow(),
            format_bytes(self.bytes_read)
        );
        println!(
            "  {} Output size:  {}",
            "📤".bright_magenta(),
            format_bytes(self.bytes_written)
        );
        println!(
            "  {} Elapsed:      {}",
            "⏱️".bright_cyan(),
            format_duration(self.elapsed)
        );

        println!("{}", "═".repeat(50).bright_blue());
    }
}

/// 바이트를 읽기 쉬운 형식으로 변환
///
/// # Arguments
/// * `bytes` - 바이트 수
///
/// # Returns
/// 형식화된 문자열 (예: "1.25 MB")
///
/// # Examples
/// ```
/// use playerjson::stats::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(1024), "1.00 KB");
/// assert_eq!(format_bytes(1048576), "1.00 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 3] = ["KB", "MB", "GB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit + 1 < UNITS.len() {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", size, UNITS[unit])
}

/// 경과 시간을 읽기 쉬운 형식으로 변환 (예: "1m 5s", "2.500s", "40ms")
pub fn format_duration(duration: Duration) -> String {
    match duration.as_secs() {
        0 => format!("{}ms", duration.subsec_millis()),
        secs @ 1..=59 => format!("{}.{:03}s", secs, duration.subsec_millis()),
        secs => format!("{}m {}s", secs / 60, secs % 60),
    }
}
