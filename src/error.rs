//! 에러 타입 정의 모듈
//!
//! playerjson에서 발생할 수 있는 모든 에러 타입을 정의합니다.

use std::path::PathBuf;
use thiserror::Error;

/// playerjson에서 발생할 수 있는 에러 타입
#[derive(Error, Debug)]
pub enum ConvertError {
    /// 입력 CSV 파일이 존재하지 않음
    #[error("입력 CSV 파일을 찾을 수 없습니다: {path}")]
    InputNotFound { path: PathBuf },

    /// 입력 경로가 일반 파일이 아님
    #[error("입력 경로가 파일이 아닙니다: {path}")]
    NotAFile { path: PathBuf },

    /// CSV 파일 열기 실패
    #[error("파일을 열 수 없습니다 ({file}): {reason}")]
    FileOpenError { file: PathBuf, reason: String },

    /// 헤더 행이 없음
    #[error("헤더 행이 없습니다: {file}")]
    EmptyInput { file: PathBuf },

    /// CSV 파싱 실패
    #[error("CSV 파싱 실패 ({file}): {reason}")]
    ParseError { file: PathBuf, reason: String },

    /// JSON 직렬화 실패
    #[error("JSON 직렬화 실패 ({file}): {reason}")]
    SerializeError { file: PathBuf, reason: String },

    /// 출력 폴더 생성 실패
    #[error("출력 폴더를 만들 수 없습니다 ({path}): {reason}")]
    CreateDirError { path: PathBuf, reason: String },

    /// 파일 쓰기 실패
    #[error("파일 쓰기 실패 ({file}): {reason}")]
    WriteError { file: PathBuf, reason: String },
}

/// playerjson 결과 타입 별칭
pub type Result<T> = std::result::Result<T, ConvertError>;
