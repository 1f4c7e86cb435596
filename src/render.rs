//! 条件树序列化：渲染为方言正确的 SQL 片段。

use crate::dialect::{Dialect, DialectProfile};
use crate::node::{Combinator, ConditionNode, Predicate};
use crate::string_builder::{StringBuilder, filter_empty_strings};
use crate::value::FilterValue;

impl ConditionNode {
    /// 渲染为 SQL 片段。空分组渲染为空字符串，由消费方解释为「匹配所有行」。
    pub fn to_sql(&self, profile: &DialectProfile) -> String {
        match self {
            Self::Comparison {
                column,
                cast,
                predicate,
            } => render_comparison(column, *cast, predicate, profile),
            Self::Raw(raw) => raw.to_sql(profile),
            Self::Group {
                combinator,
                children,
            } => render_group(*combinator, children, profile),
        }
    }
}

fn render_group(
    combinator: Combinator,
    children: &[ConditionNode],
    profile: &DialectProfile,
) -> String {
    let parts = filter_empty_strings(children.iter().map(|c| c.to_sql(profile)).collect());
    if parts.is_empty() {
        return String::new();
    }
    let sep = match combinator {
        Combinator::And => " AND ",
        Combinator::Or => " OR ",
    };
    let mut buf = StringBuilder::new();
    buf.write_str("(");
    buf.write_strings(&parts, sep);
    buf.write_str(")");
    buf.into_string()
}

fn render_column(column: &str, cast: Option<&'static str>, profile: &DialectProfile) -> String {
    let quoted = profile.quote_path(column);
    match cast {
        Some(ty) => format!("CAST({quoted} AS {ty})"),
        None => quoted,
    }
}

fn render_comparison(
    column: &str,
    cast: Option<&'static str>,
    predicate: &Predicate,
    profile: &DialectProfile,
) -> String {
    let col = render_column(column, cast, profile);
    match predicate {
        Predicate::Eq(v) => format!("{col} = {}", encode_value(v, profile)),
        Predicate::Ne(v) => format!("{col} <> {}", encode_value(v, profile)),
        Predicate::Gt(v) => format!("{col} > {}", encode_value(v, profile)),
        Predicate::Gte(v) => format!("{col} >= {}", encode_value(v, profile)),
        Predicate::Lt(v) => format!("{col} < {}", encode_value(v, profile)),
        Predicate::Lte(v) => format!("{col} <= {}", encode_value(v, profile)),
        Predicate::Like {
            pattern,
            case_insensitive,
        } => format!(
            "{col} {} {}",
            like_operator(*case_insensitive, false),
            quote_string(pattern, profile)
        ),
        Predicate::NotLike {
            pattern,
            case_insensitive,
        } => format!(
            "{col} {} {}",
            like_operator(*case_insensitive, true),
            quote_string(pattern, profile)
        ),
        Predicate::In(values) => format!("{col} IN ({})", encode_list(values, profile)),
        Predicate::NotIn(values) => format!("{col} NOT IN ({})", encode_list(values, profile)),
        Predicate::Between(lower, upper) => format!(
            "{col} BETWEEN {} AND {}",
            encode_value(lower, profile),
            encode_value(upper, profile)
        ),
        Predicate::NotBetween(lower, upper) => format!(
            "{col} NOT BETWEEN {} AND {}",
            encode_value(lower, profile),
            encode_value(upper, profile)
        ),
        Predicate::IsNull => format!("{col} IS NULL"),
        Predicate::IsNotNull => format!("{col} IS NOT NULL"),
        Predicate::IsNot(v) => format!("{col} IS NOT {}", encode_value(v, profile)),
    }
}

fn like_operator(case_insensitive: bool, negated: bool) -> &'static str {
    match (case_insensitive, negated) {
        (true, false) => "ILIKE",
        (true, true) => "NOT ILIKE",
        (false, false) => "LIKE",
        (false, true) => "NOT LIKE",
    }
}

fn encode_list(values: &[FilterValue], profile: &DialectProfile) -> String {
    values
        .iter()
        .map(|v| encode_value(v, profile))
        .collect::<Vec<_>>()
        .join(", ")
}

fn encode_value(v: &FilterValue, profile: &DialectProfile) -> String {
    match v {
        FilterValue::Null => "NULL".to_string(),
        FilterValue::Bool(b) => encode_bool(*b, profile).to_string(),
        FilterValue::I64(n) => n.to_string(),
        FilterValue::U64(n) => n.to_string(),
        FilterValue::F64(n) => n.to_string(),
        FilterValue::String(s) => quote_string(s, profile),
        FilterValue::DateTime(dt) => quote_string(&profile.format_instant(*dt), profile),
    }
}

fn encode_bool(b: bool, profile: &DialectProfile) -> &'static str {
    match profile.dialect {
        // SQLite 与 SQL Server 没有布尔字面量。
        Dialect::SQLite | Dialect::SQLServer => {
            if b {
                "1"
            } else {
                "0"
            }
        }
        _ => {
            if b {
                "TRUE"
            } else {
                "FALSE"
            }
        }
    }
}

fn quote_string(s: &str, profile: &DialectProfile) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    if profile.dialect == Dialect::SQLServer {
        out.push('N');
    }
    out.push('\'');
    for ch in s.chars() {
        if profile.dialect == Dialect::MySQL {
            // MySQL 走反斜杠转义。
            match ch {
                '\'' => out.push_str("\\'"),
                '\\' => out.push_str("\\\\"),
                '\u{0000}' => out.push_str("\\0"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\u{001a}' => out.push_str("\\Z"),
                _ => out.push(ch),
            }
        } else if ch == '\'' {
            out.push_str("''");
        } else {
            out.push(ch);
        }
    }
    out.push('\'');
    out
}
