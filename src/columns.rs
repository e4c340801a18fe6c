//! 열 선택 모듈
//!
//! 기대하는 CSV 열 목록과 JSON 키 이름 매핑, 헤더 기반 열 선택을 담당합니다.

/// 기대하는 원본 열 이름과 출력 키 이름 (출력 키 순서 그대로)
pub const EXPECTED_COLUMNS: [(&str, &str); 5] = [
    ("player_id", "id"),
    ("name", "name"),
    ("team", "team"),
    ("position", "position"),
    ("base_rating", "baseRating"),
];

/// 헤더에서 찾은 열 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedColumn {
    /// 원본 CSV 열 이름
    pub source: &'static str,
    /// 출력 JSON 키
    pub key: &'static str,
    /// 헤더 내 위치
    pub index: usize,
}

/// 열 선택 결과
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSelection {
    /// 헤더에 있는 열 (기대 열 순서)
    pub existing: Vec<SelectedColumn>,
    /// 헤더에 없는 열 (기대 열 순서)
    pub missing: Vec<&'static str>,
}

impl ColumnSelection {
    /// 헤더 목록에서 기대 열을 찾아 선택
    ///
    /// 같은 이름의 열이 여러 개면 첫 번째 열을 사용합니다.
    ///
    /// # Examples
    /// ```
    /// use playerjson::columns::ColumnSelection;
    ///
    /// let headers = vec!["team".to_string(), "player_id".to_string()];
    /// let selection = ColumnSelection::from_headers(&headers);
    /// assert_eq!(selection.keys(), vec!["id", "team"]);
    /// assert_eq!(selection.missing, vec!["name", "position", "base_rating"]);
    /// ```
    pub fn from_headers(headers: &[String]) -> Self {
        let mut selection = Self::default();

        for (source, key) in EXPECTED_COLUMNS {
            match headers.iter().position(|h| h == source) {
                Some(index) => selection.existing.push(SelectedColumn { source, key, index }),
                None => selection.missing.push(source),
            }
        }

        selection
    }

    /// 선택된 열의 출력 키 목록
    pub fn keys(&self) -> Vec<&'static str> {
        self.existing.iter().map(|c| c.key).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_all_columns_present() {
        let selection = ColumnSelection::from_headers(&headers(&[
            "player_id",
            "name",
            "team",
            "position",
            "base_rating",
        ]));

        assert!(selection.missing.is_empty());
        assert_eq!(
            selection.keys(),
            vec!["id", "name", "team", "position", "baseRating"]
        );
    }

    #[test]
    fn test_expected_order_not_file_order() {
        let selection =
            ColumnSelection::from_headers(&headers(&["base_rating", "extra", "name", "player_id"]));

        assert_eq!(selection.keys(), vec!["id", "name", "baseRating"]);
        assert_eq!(selection.existing[0].index, 3);
        assert_eq!(selection.existing[1].index, 2);
        assert_eq!(selection.existing[2].index, 0);
        assert_eq!(selection.missing, vec!["team", "position"]);
    }

    #[test]
    fn test_no_expected_columns() {
        let selection = ColumnSelection::from_headers(&headers(&["a", "b"]));

        assert!(selection.existing.is_empty());
        assert_eq!(selection.missing.len(), 5);
    }

    #[test]
    fn test_duplicate_header_uses_first() {
        let selection = ColumnSelection::from_headers(&headers(&["name", "name"]));
        assert_eq!(selection.existing[0].index, 0);
    }
}
