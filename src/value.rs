//! 过滤条件的参数值类型。

use std::borrow::Cow;

/// 过滤条件中的一个参数值。
///
/// `Null` 同时承担「值为 NULL」与「条件缺省」两种角色，
/// 见 [`FilterBuilder`](crate::filter::FilterBuilder) 的缺省策略说明。
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(Cow<'static, str>),
    DateTime(time::PrimitiveDateTime),
}

/// 值的粗粒度类别。BETWEEN 的两端要求类别一致；数值类型视为同一类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    Text,
    DateTime,
}

impl FilterValue {
    /// 将 `Option<T>` 映射为 `FilterValue`：`None => Null`，`Some(v) => v.into()`。
    pub fn from_option<T: Into<FilterValue>>(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::I64(_) | Self::U64(_) | Self::F64(_) => ValueKind::Number,
            Self::String(_) => ValueKind::Text,
            Self::DateTime(_) => ValueKind::DateTime,
        }
    }
}

impl From<()> for FilterValue {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for FilterValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i8> for FilterValue {
    fn from(v: i8) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i16> for FilterValue {
    fn from(v: i16) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i32> for FilterValue {
    fn from(v: i32) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<u8> for FilterValue {
    fn from(v: u8) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u16> for FilterValue {
    fn from(v: u16) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u32> for FilterValue {
    fn from(v: u32) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u64> for FilterValue {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

impl From<f32> for FilterValue {
    fn from(v: f32) -> Self {
        Self::F64(v as f64)
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        Self::String(Cow::Owned(v))
    }
}

impl From<&'static str> for FilterValue {
    fn from(v: &'static str) -> Self {
        Self::String(Cow::Borrowed(v))
    }
}

impl From<time::PrimitiveDateTime> for FilterValue {
    fn from(v: time::PrimitiveDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl From<time::Date> for FilterValue {
    fn from(v: time::Date) -> Self {
        Self::DateTime(v.midnight())
    }
}

#[cfg(test)]
mod tests {
    use super::{FilterValue, ValueKind};
    use time::macros::{date, datetime};

    #[test]
    fn from_option_some() {
        assert_eq!(FilterValue::from_option(Some(123_i64)), FilterValue::I64(123));
    }

    #[test]
    fn from_option_none() {
        assert_eq!(FilterValue::from_option::<i64>(None), FilterValue::Null);
    }

    #[test]
    fn numbers_share_one_kind() {
        assert_eq!(FilterValue::I64(1).kind(), ValueKind::Number);
        assert_eq!(FilterValue::U64(1).kind(), ValueKind::Number);
        assert_eq!(FilterValue::F64(1.5).kind(), ValueKind::Number);
        assert_ne!(FilterValue::I64(1).kind(), FilterValue::Bool(true).kind());
    }

    #[test]
    fn string_and_datetime_kinds() {
        let s: FilterValue = "abc".into();
        assert_eq!(s.kind(), ValueKind::Text);
        let dt: FilterValue = datetime!(2017-01-01 18:00).into();
        assert_eq!(dt.kind(), ValueKind::DateTime);
    }

    #[test]
    fn date_converts_to_midnight() {
        let v: FilterValue = date!(2017 - 01 - 01).into();
        assert_eq!(v, FilterValue::DateTime(datetime!(2017-01-01 0:00)));
    }
}
