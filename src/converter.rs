//! CSV → JSON 변환 모듈
//!
//! 테이블에서 기대 열을 골라 키 이름을 바꾸고, JSON 배열로 직렬화하여
//! 출력 파일에 씁니다.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use crate::columns::ColumnSelection;
use crate::error::{ConvertError, Result};
use crate::infer::{infer_kind, to_value, ColumnKind};
use crate::reader::{load_table, Table, DEFAULT_MMAP_THRESHOLD};
use crate::stats::ConvertReport;

/// 선수 한 명의 출력 레코드 (키 순서 유지)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

/// 변환 옵션
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// 열 단위 값 타입 추론 여부 (false면 모두 문자열)
    pub infer_types: bool,
    /// 대용량 파일 임계값 (이상이면 메모리 매핑 사용)
    pub mmap_threshold: u64,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            infer_types: true,
            mmap_threshold: DEFAULT_MMAP_THRESHOLD,
        }
    }
}

impl ConvertOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 타입 추론 설정
    pub fn with_infer_types(mut self, infer_types: bool) -> Self {
        self.infer_types = infer_types;
        self
    }

    /// 메모리 매핑 임계값 설정
    pub fn with_mmap_threshold(mut self, mmap_threshold: u64) -> Self {
        self.mmap_threshold = mmap_threshold;
        self
    }
}

/// CSV 파일을 JSON 파일로 변환
///
/// # Arguments
/// * `csv_path` - 입력 CSV 파일 경로
/// * `out_path` - 출력 JSON 파일 경로 (상위 폴더는 없으면 생성)
/// * `options` - 변환 옵션
///
/// # Returns
/// 쓴 레코드 수와 누락 열 등을 담은 `ConvertReport`
pub fn convert(csv_path: &Path, out_path: &Path, options: &ConvertOptions) -> Result<ConvertReport> {
    let start = Instant::now();

    let table = load_table(csv_path, options.mmap_threshold)?;
    let selection = ColumnSelection::from_headers(&table.headers);
    let (records, columns) = build_records(&table, &selection, options.infer_types);

    let json = render_json(&records, out_path)?;
    let bytes_written = write_output(out_path, &json)?;

    Ok(ConvertReport {
        out_path: out_path.to_path_buf(),
        records: records.len(),
        columns,
        missing_columns: selection.missing,
        bytes_read: table.file_size,
        bytes_written,
        elapsed: start.elapsed(),
    })
}

/// 선택된 열로 레코드 목록 생성 (입력 행 순서 유지)
///
/// 선택된 열이 하나도 없으면 행마다 빈 객체가 됩니다.
pub fn build_records(
    table: &Table,
    selection: &ColumnSelection,
    infer_types: bool,
) -> (Vec<Record>, Vec<(&'static str, ColumnKind)>) {
    let kinds: Vec<ColumnKind> = selection
        .existing
        .iter()
        .map(|column| {
            if infer_types {
                infer_kind((0..table.row_count()).map(|row| table.cell(row, column.index)))
            } else {
                ColumnKind::Text
            }
        })
        .collect();

    let records = (0..table.row_count())
        .map(|row| {
            let map = selection
                .existing
                .iter()
                .zip(&kinds)
                .map(|(column, kind)| {
                    let value = to_value(table.cell(row, column.index), *kind);
                    (column.key.to_string(), value)
                })
                .collect();
            Record(map)
        })
        .collect();

    let columns = selection.keys().into_iter().zip(kinds).collect();

    (records, columns)
}

/// 레코드 목록을 2칸 들여쓰기 JSON 배열로 직렬화
///
/// ASCII 이외의 문자는 이스케이프하지 않고 그대로 씁니다.
pub fn render_json(records: &[Record], out_path: &Path) -> Result<String> {
    serde_json::to_string_pretty(records).map_err(|e| ConvertError::SerializeError {
        file: out_path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// 출력 파일 쓰기 (기존 내용은 덮어씀)
///
/// # Returns
/// 쓴 바이트 수
pub fn write_output(out_path: &Path, contents: &str) -> Result<u64> {
    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ConvertError::CreateDirError {
            path: parent.to_path_buf(),
            reason: e.to_string(),
        })?;
    }

    let write_error = |e: std::io::Error| ConvertError::WriteError {
        file: out_path.to_path_buf(),
        reason: e.to_string(),
    };

    let file = File::create(out_path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(contents.as_bytes()).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    Ok(contents.len() as u64)
}
