//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 명령줄 인자 정의 및 파싱을 담당합니다.

use clap::Parser;
use std::path::PathBuf;

use crate::converter::ConvertOptions;

/// playerjson CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "playerjson",
    author = "YourName <your@email.com>",
    version,
    about = "PLAYER CSV TO JSON CONVERTER - 선수 CSV 파일을 JSON 배열로 변환",
    long_about = r#"
PLAYER CSV TO JSON CONVERTER
============================

player_id, name, team, position, base_rating 열을 가진 CSV 파일을 읽어
id, name, team, position, baseRating 키를 가진 JSON 배열로 저장합니다.

없는 열은 경고만 출력하고 나머지 열로 변환을 계속합니다.

예제:
  playerjson --csv ./players_standardized.csv --out ./data/private/players.json
  playerjson --csv players.csv --out out/players.json --verbose
  playerjson --csv players.csv --out players.json --raw
"#
)]
pub struct Args {
    /// 입력 CSV 파일 경로
    #[arg(long)]
    pub csv: PathBuf,

    /// 생성될 JSON 파일 경로 (상위 폴더는 자동 생성)
    #[arg(long)]
    pub out: PathBuf,

    /// 변환 후 상세 통계 출력
    #[arg(short, long)]
    pub verbose: bool,

    /// 값 타입 추론 없이 모든 셀을 문자열로 출력
    #[arg(long)]
    pub raw: bool,
}

impl Args {
    /// 인자로부터 변환 옵션 생성
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions::new().with_infer_types(!self.raw)
    }
}
