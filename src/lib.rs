//! playerjson - PLAYER CSV TO JSON CONVERTER
//!
//! 선수 정보 CSV 파일을 읽어 필드 이름을 바꾼 JSON 배열 파일로 변환하는 CLI 도구입니다.
//!
//! # 열 매핑
//!
//! | CSV 열        | JSON 키      |
//! |---------------|--------------|
//! | `player_id`   | `id`         |
//! | `name`        | `name`       |
//! | `team`        | `team`       |
//! | `position`    | `position`   |
//! | `base_rating` | `baseRating` |
//!
//! - 🎯 **열 선택**: 위 다섯 열만 추출하고 나머지 열은 무시
//! - ⚠️ **관대한 처리**: 없는 열은 경고만 출력하고 있는 열로 변환
//! - 🔢 **타입 추론**: 열 단위로 정수/실수/불리언/문자열 추론, 결측값은 `null`
//! - 📝 **출력 형식**: 2칸 들여쓰기, 비ASCII 문자 그대로 유지
//!
//! # 예제
//!
//! ```bash
//! playerjson --csv ./players_standardized.csv --out ./data/private/players.json
//! ```

pub mod cli;
pub mod columns;
pub mod converter;
pub mod error;
pub mod infer;
pub mod reader;
pub mod stats;

// Re-exports for convenient access
pub use cli::Args;
pub use columns::{ColumnSelection, EXPECTED_COLUMNS};
pub use converter::{convert, ConvertOptions, Record};
pub use error::{ConvertError, Result};
pub use stats::{format_bytes, ConvertReport};
