//! 宽松反序列化工具
//!
//! Porkbun 的 JSON 字段类型并不稳定：
//! - 布尔值可能是 `true`、`1`、`"1"`、`"yes"`，也可能是 `null`
//! - 数值型字段（TTL、优先级、记录 ID）有时是字符串，有时是数字
//! - 时间是 `YYYY-MM-DD HH:MM:SS`（UTC，无时区后缀）
//!
//! 以下函数配合 `#[serde(deserialize_with = "...")]` 使用。

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Porkbun 时间格式
const PORKBUN_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    I64(i64),
    F64(f64),
    String(String),
}

/// 反序列化为 bool；`null`、空串、`"0"`、`"no"` 视为 `false`
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        None => false,
        Some(Loose::Bool(b)) => b,
        Some(Loose::I64(n)) => n != 0,
        Some(Loose::F64(n)) => n != 0.0,
        Some(Loose::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "1" | "yes" | "true" | "on"
        ),
    })
}

/// 反序列化为 String；数字按原样转文本，`null` 为空串
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        None => String::new(),
        Some(Loose::Bool(b)) => b.to_string(),
        Some(Loose::I64(n)) => n.to_string(),
        Some(Loose::F64(n)) => n.to_string(),
        Some(Loose::String(s)) => s,
    })
}

/// 反序列化 Porkbun 时间：`YYYY-MM-DD HH:MM:SS` 或 RFC3339；`null`/空串为 `None`
pub fn datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_datetime(s.trim())
            .map(Some)
            .ok_or_else(|| Error::custom(format!("Invalid Porkbun timestamp: {s}"))),
    }
}

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, PORKBUN_DATETIME_FORMAT) {
        return Some(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
