//! 값 타입 추론 모듈
//!
//! 열 단위로 셀 값의 타입(정수/실수/불리언/문자열)을 추론하고
//! JSON 값으로 변환합니다.

use serde_json::{Number, Value};

/// 결측값으로 취급하는 문자열
pub const NA_VALUES: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "<NA>", "#N/A",
    "#NA", "#N/A N/A", "1.#IND", "1.#QNAN", "-1.#IND", "-1.#QNAN",
];

const TRUE_VALUES: &[&str] = &["True", "true", "TRUE"];
const FALSE_VALUES: &[&str] = &["False", "false", "FALSE"];

/// 열의 값 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnKind {
    Integer,
    Float,
    Boolean,
    /// 추론 실패 또는 추론 비활성화
    #[default]
    Text,
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnKind::Integer => write!(f, "integer"),
            ColumnKind::Float => write!(f, "float"),
            ColumnKind::Boolean => write!(f, "boolean"),
            ColumnKind::Text => write!(f, "text"),
        }
    }
}

/// 결측값이 아닌 셀. 행이 짧아 셀이 없는 경우도 결측값
fn present(cell: Option<&str>) -> Option<&str> {
    cell.filter(|s| !NA_VALUES.contains(s))
}

/// 부호와 숫자로만 된 문자열인지
fn is_integral(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// 정수 파싱. `i64` 범위를 넘는 양수는 `u64`로
fn parse_int(s: &str) -> Option<Number> {
    let s = s.trim();
    s.parse::<i64>()
        .map(Number::from)
        .or_else(|_| s.parse::<u64>().map(Number::from))
        .ok()
}

/// 실수 파싱. 정수 범위를 넘는 정수 문자열은 자릿수가 사라지므로 제외
fn parse_float(s: &str) -> Option<f64> {
    let s = s.trim();
    if is_integral(s) && parse_int(s).is_none() {
        return None;
    }
    s.parse::<f64>().ok().filter(|f| f.is_finite())
}

fn parse_bool(s: &str) -> Option<bool> {
    let s = s.trim();
    if TRUE_VALUES.contains(&s) {
        Some(true)
    } else if FALSE_VALUES.contains(&s) {
        Some(false)
    } else {
        None
    }
}

/// 열의 셀 목록으로부터 타입 추론
///
/// 결측값을 제외한 모든 셀이 정수면 `Integer`, 실수면 `Float`,
/// 불리언이면 `Boolean`, 그 외에는 `Text`.
///
/// # Examples
/// ```
/// use playerjson::infer::{infer_kind, ColumnKind};
///
/// assert_eq!(infer_kind([Some("1"), Some(""), Some("3")]), ColumnKind::Integer);
/// assert_eq!(infer_kind([Some("1"), Some("2.5")]), ColumnKind::Float);
/// assert_eq!(infer_kind([Some("GK"), Some("7")]), ColumnKind::Text);
/// ```
pub fn infer_kind<'a, I>(cells: I) -> ColumnKind
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut seen = false;
    let mut all_int = true;
    let mut all_float = true;
    let mut all_bool = true;

    for cell in cells {
        let Some(s) = present(cell) else { continue };
        seen = true;

        all_int = all_int && parse_int(s).is_some();
        all_float = all_float && parse_float(s).is_some();
        all_bool = all_bool && parse_bool(s).is_some();

        if !all_float && !all_bool {
            return ColumnKind::Text;
        }
    }

    match (seen, all_int, all_float, all_bool) {
        (false, ..) => ColumnKind::Text,
        (true, true, _, _) => ColumnKind::Integer,
        (true, _, true, _) => ColumnKind::Float,
        (true, _, _, true) => ColumnKind::Boolean,
        _ => ColumnKind::Text,
    }
}

/// 셀 값을 열 타입에 맞는 JSON 값으로 변환
///
/// 결측값은 `null`, 그 외 변환할 수 없는 값은 원본 문자열 그대로 유지합니다.
pub fn to_value(cell: Option<&str>, kind: ColumnKind) -> Value {
    let Some(s) = present(cell) else {
        return Value::Null;
    };

    let typed = match kind {
        ColumnKind::Integer => parse_int(s).map(Value::Number),
        ColumnKind::Float => parse_float(s).map(Value::from),
        ColumnKind::Boolean => parse_bool(s).map(Value::Bool),
        ColumnKind::Text => None,
    };

    typed.unwrap_or_else(|| Value::String(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_values() {
        assert_eq!(present(None), None);
        assert_eq!(present(Some("")), None);
        assert_eq!(present(Some("NA")), None);
        assert_eq!(present(Some("NaN")), None);
        assert_eq!(present(Some("0")), Some("0"));
        assert_eq!(present(Some(" ")), Some(" "));
    }

    #[test]
    fn test_large_integers_kept_exact() {
        let cells = [Some("12345678901234567890"), Some("1")];
        assert_eq!(infer_kind(cells), ColumnKind::Integer);

        let value = to_value(Some("12345678901234567890"), ColumnKind::Integer);
        assert_eq!(value, json!(12345678901234567890u64));
        assert_eq!(value.to_string(), "12345678901234567890");
    }

    #[test]
    fn test_integers_beyond_u64_are_text() {
        let big = "123456789012345678901234567890";
        assert_eq!(infer_kind([Some(big), Some("2")]), ColumnKind::Text);
        assert_eq!(infer_kind([Some("-9223372036854775809")]), ColumnKind::Text);
        assert_eq!(to_value(Some(big), ColumnKind::Text), json!(big));
    }

    #[test]
    fn test_infer_integer() {
        assert_eq!(infer_kind([Some("1"), Some("-2"), Some(" 30 ")]), ColumnKind::Integer);
        assert_eq!(infer_kind([Some("1"), None, Some("NA")]), ColumnKind::Integer);
    }

    #[test]
    fn test_infer_float() {
        assert_eq!(infer_kind([Some("80.5"), Some("75")]), ColumnKind::Float);
        assert_eq!(infer_kind([Some("1e3")]), ColumnKind::Float);
    }

    #[test]
    fn test_infer_boolean() {
        assert_eq!(infer_kind([Some("true"), Some("False")]), ColumnKind::Boolean);
    }

    #[test]
    fn test_infer_text() {
        assert_eq!(infer_kind([Some("Alice"), Some("Bob")]), ColumnKind::Text);
        assert_eq!(infer_kind([Some("1"), Some("true")]), ColumnKind::Text);
        assert_eq!(infer_kind([Some("inf")]), ColumnKind::Text);
        assert_eq!(infer_kind(Vec::<Option<&str>>::new()), ColumnKind::Text);
        assert_eq!(infer_kind([Some(""), None]), ColumnKind::Text);
    }

    #[test]
    fn test_to_value() {
        assert_eq!(to_value(Some("80"), ColumnKind::Integer), json!(80));
        assert_eq!(to_value(Some("75"), ColumnKind::Float), json!(75.0));
        assert_eq!(to_value(Some("TRUE"), ColumnKind::Boolean), json!(true));
        assert_eq!(to_value(Some("007"), ColumnKind::Text), json!("007"));
        assert_eq!(to_value(Some(""), ColumnKind::Integer), Value::Null);
        assert_eq!(to_value(None, ColumnKind::Text), Value::Null);
    }

    #[test]
    fn test_text_preserved_exactly() {
        assert_eq!(to_value(Some(" José "), ColumnKind::Text), json!(" José "));
    }
}
