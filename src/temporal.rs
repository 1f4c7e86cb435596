//! 时间值规范化：把输入时间转换为方言正确的字面量字符串。
//!
//! 不同方言存储的小数秒精度不同：作为闭区间上界的「整天/整秒」必须按方言
//! 实际精度补 `9`，否则精度更高的存量值会被 `<=` 排除在外；下界同理补 `0`。

use crate::dialect::DialectProfile;
use crate::value::FilterValue;
use time::format_description::FormatItem;
use time::macros::{format_description, time};
use time::{Date, PrimitiveDateTime};

/// 过滤条件构造过程中的调用方错误。
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid temporal value: {0}")]
    InvalidValue(String),
}

const SECOND_PRECISION: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

const DATETIME_FORMATS: [&[FormatItem<'static>]; 4] = [
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
];

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// 解析输入值为日期时间。接受 `DateTime` 值与常见的 ISO 字符串写法；
/// 纯日期解析为当天零点。其他输入是调用方错误，这里不做兜底。
pub fn parse_temporal(value: &FilterValue) -> Result<PrimitiveDateTime, FilterError> {
    match value {
        FilterValue::DateTime(dt) => Ok(*dt),
        FilterValue::String(s) => parse_datetime_str(s),
        other => Err(FilterError::InvalidValue(format!("{other:?}"))),
    }
}

fn parse_datetime_str(input: &str) -> Result<PrimitiveDateTime, FilterError> {
    let s = strip_subseconds(input.trim());
    for format in DATETIME_FORMATS {
        if let Ok(dt) = PrimitiveDateTime::parse(s, format) {
            return Ok(dt);
        }
    }
    if let Ok(d) = Date::parse(s, DATE_FORMAT) {
        return Ok(d.midnight());
    }
    Err(FilterError::InvalidValue(input.to_string()))
}

/// 丢弃输入自带的小数秒：所有格式化策略都只保留到秒。
fn strip_subseconds(s: &str) -> &str {
    match s.rfind('.') {
        Some(i) if i + 1 < s.len() && s[i + 1..].bytes().all(|b| b.is_ascii_digit()) => &s[..i],
        _ => s,
    }
}

pub(crate) fn day_start(dt: PrimitiveDateTime) -> PrimitiveDateTime {
    dt.date().midnight()
}

pub(crate) fn day_end(dt: PrimitiveDateTime) -> PrimitiveDateTime {
    PrimitiveDateTime::new(dt.date(), time!(23:59:59))
}

fn second_precision(dt: PrimitiveDateTime) -> String {
    dt.format(SECOND_PRECISION).expect("datetime format")
}

impl DialectProfile {
    /// 等值比较使用的时间字面量：精确到秒，不带小数秒。
    pub fn format_instant(&self, dt: PrimitiveDateTime) -> String {
        second_precision(dt)
    }

    /// 范围下界与大小比较：小数秒补 `0`，即该精度下最早的一刻。
    pub fn format_lower_bound(&self, dt: PrimitiveDateTime) -> String {
        self.padded(dt, '0')
    }

    /// 范围上界：小数秒补 `9`，即该精度下最晚的一刻。
    pub fn format_upper_bound(&self, dt: PrimitiveDateTime) -> String {
        self.padded(dt, '9')
    }

    /// 截断到当天零点，再按下界格式化。
    pub fn format_date_only_start(&self, dt: PrimitiveDateTime) -> String {
        self.padded(day_start(dt), '0')
    }

    /// 截断到当天 23:59:59，再按上界格式化。
    pub fn format_date_only_end(&self, dt: PrimitiveDateTime) -> String {
        self.padded(day_end(dt), '9')
    }

    fn padded(&self, dt: PrimitiveDateTime, fill: char) -> String {
        let mut s = second_precision(dt);
        s.push('.');
        for _ in 0..self.sub_second_digits {
            s.push(fill);
        }
        s
    }
}
