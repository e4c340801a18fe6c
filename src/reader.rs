//! CSV 읽기 모듈
//!
//! CSV 파일을 헤더와 행 목록으로 이루어진 메모리 내 테이블로 읽어 들입니다.

use csv::{ReaderBuilder, StringRecord, Trim};
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{ConvertError, Result};

/// 대용량 파일 기준 (이상이면 메모리 매핑 사용)
pub const DEFAULT_MMAP_THRESHOLD: u64 = 10 * 1024 * 1024; // 10MB

/// 헤더 행과 데이터 행 (입력 순서 유지)
#[derive(Debug, Clone, Default)]
pub struct Table {
    /// 열 이름 (앞뒤 공백 제거됨)
    pub headers: Vec<String>,
    /// 데이터 행
    pub rows: Vec<StringRecord>,
    /// 원본 파일 크기
    pub file_size: u64,
}

impl Table {
    /// 데이터 행 수 (헤더 제외)
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 특정 행/열의 셀 값. 짧은 행의 빈 자리는 `None`
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(column))
    }
}

/// CSV 파일을 테이블로 읽기
///
/// # Arguments
/// * `path` - 읽을 CSV 파일 경로
/// * `mmap_threshold` - 이 크기 이상이면 메모리 매핑으로 읽음
pub fn load_table(path: &Path, mmap_threshold: u64) -> Result<Table> {
    if !path.exists() {
        return Err(ConvertError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(ConvertError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|e| ConvertError::FileOpenError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let file_size = file
        .metadata()
        .map_err(|e| ConvertError::FileOpenError {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?
        .len();

    let mut table = if file_size >= mmap_threshold {
        // 대용량 파일: 메모리 매핑 사용
        let mmap = unsafe {
            Mmap::map(&file).map_err(|e| ConvertError::FileOpenError {
                file: path.to_path_buf(),
                reason: format!("메모리 매핑 실패: {}", e),
            })?
        };
        read_table(&mmap[..], path)?
    } else {
        read_table(BufReader::new(file), path)?
    };

    table.file_size = file_size;
    Ok(table)
}

/// 임의의 리더에서 CSV 테이블 읽기
///
/// 빈 줄은 건너뛰고, 헤더보다 짧거나 긴 행도 허용합니다.
/// 따옴표로 시작한 필드가 파일 끝까지 닫히지 않으면 `ParseError`.
pub fn read_table<R: Read>(reader: R, path: &Path) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(QuoteTracker::new(reader));

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| parse_error(path, e))?
        .iter()
        .map(str::to_string)
        .collect();

    if headers.is_empty() {
        return Err(ConvertError::EmptyInput {
            file: path.to_path_buf(),
        });
    }

    let rows = rdr
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| parse_error(path, e))?;

    if let Some(line) = rdr.get_ref().unclosed_quote_line() {
        return Err(ConvertError::ParseError {
            file: path.to_path_buf(),
            reason: format!("{}번째 줄에서 시작한 따옴표가 파일 끝까지 닫히지 않았습니다", line),
        });
    }

    Ok(Table {
        headers,
        rows,
        file_size: 0,
    })
}

/// 따옴표 필드 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    /// 따옴표 필드 안에서 `"`를 만남 (닫힘 또는 `""` 이스케이프)
    QuoteInQuoted,
}

/// 읽는 바이트를 그대로 넘기면서 따옴표 필드가 열려 있는지 추적하는 리더
///
/// csv 파서와 같은 규칙: 필드 첫 바이트의 `"`만 따옴표 필드를 열고,
/// 따옴표 필드 안의 `""`는 이스케이프된 따옴표.
struct QuoteTracker<R> {
    inner: R,
    state: QuoteState,
    line: u64,
    quote_line: u64,
}

impl<R> QuoteTracker<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            state: QuoteState::FieldStart,
            line: 1,
            quote_line: 0,
        }
    }

    fn feed(&mut self, byte: u8) {
        let separator = matches!(byte, b',' | b'\n' | b'\r');

        self.state = match (self.state, byte) {
            (QuoteState::FieldStart, b'"') => {
                self.quote_line = self.line;
                QuoteState::Quoted
            }
            (QuoteState::Quoted, b'"') => QuoteState::QuoteInQuoted,
            (QuoteState::Quoted, _) => QuoteState::Quoted,
            (QuoteState::QuoteInQuoted, b'"') => QuoteState::Quoted,
            (_, _) if separator => QuoteState::FieldStart,
            (_, _) => QuoteState::Unquoted,
        };

        if byte == b'\n' {
            self.line += 1;
        }
    }

    /// 입력이 따옴표 필드 안에서 끝났으면 그 필드가 시작된 줄 번호
    fn unclosed_quote_line(&self) -> Option<u64> {
        (self.state == QuoteState::Quoted).then_some(self.quote_line)
    }
}

impl<R: Read> Read for QuoteTracker<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        for &byte in &buf[..n] {
            self.feed(byte);
        }
        Ok(n)
    }
}

fn parse_error(path: &Path, e: csv::Error) -> ConvertError {
    ConvertError::ParseError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<Table> {
        read_table(text.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn test_read_headers_and_rows() {
        let table = read("player_id,name\n1,Alice\n2,Bob\n").unwrap();

        assert_eq!(table.headers, vec!["player_id", "name"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 1), Some("Alice"));
        assert_eq!(table.cell(1, 0), Some("2"));
    }

    #[test]
    fn test_headers_trimmed() {
        let table = read(" player_id , name\n1, Alice \n").unwrap();

        assert_eq!(table.headers, vec!["player_id", "name"]);
        // 값은 그대로 유지
        assert_eq!(table.cell(0, 1), Some(" Alice "));
    }

    #[test]
    fn test_quoted_fields() {
        let table = read("name,team\n\"Smith, John\",\"The \"\"Reds\"\"\"\n").unwrap();

        assert_eq!(table.cell(0, 0), Some("Smith, John"));
        assert_eq!(table.cell(0, 1), Some("The \"Reds\""));
    }

    #[test]
    fn test_short_and_long_rows() {
        let table = read("a,b,c\n1\n1,2,3,4\n").unwrap();

        assert_eq!(table.cell(0, 0), Some("1"));
        assert_eq!(table.cell(0, 2), None);
        assert_eq!(table.cell(1, 3), Some("4"));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let table = read("a,b\n\n1,2\n\n3,4\n").unwrap();
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let table = read("a,b\r\n1,2\r\n").unwrap();
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.cell(0, 1), Some("2"));
    }

    #[test]
    fn test_empty_input() {
        let err = read("").unwrap_err();
        assert!(matches!(err, ConvertError::EmptyInput { .. }));
    }

    #[test]
    fn test_unclosed_quote() {
        let err = read("player_id,name\n1,\"Alice\n2,Bob\n").unwrap_err();

        match err {
            ConvertError::ParseError { reason, .. } => assert!(reason.contains("2번째 줄")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unclosed_quote_after_escaped_quote() {
        let err = read("name\n\"Al \"\"Ace\"\"\n").unwrap_err();
        assert!(matches!(err, ConvertError::ParseError { .. }));
    }

    #[test]
    fn test_quote_inside_unquoted_field_is_literal() {
        let table = read("name,height\nAlice,5'6\"\nBob,6\"\n").unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 1), Some("5'6\""));
    }

    #[test]
    fn test_quoted_field_ending_file() {
        let table = read("name\n\"Alice\"").unwrap();
        assert_eq!(table.cell(0, 0), Some("Alice"));
    }

    #[test]
    fn test_invalid_utf8() {
        let bytes: &[u8] = b"name\n\xff\xfe\n";
        let err = read_table(bytes, Path::new("bad.csv")).unwrap_err();
        assert!(matches!(err, ConvertError::ParseError { .. }));
    }
}
