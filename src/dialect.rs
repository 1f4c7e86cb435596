//! SQL 方言与字面量格式化规则。

use std::fmt;

/// 目标数据库方言。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// 通用的 MySQL 系方言，也是未知方言名的回退目标。
    #[default]
    MySQL,
    PostgreSQL,
    SQLite,
    SQLServer,
}

impl Dialect {
    /// 解析连接层报告的方言名；未知名称返回 `None`。
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "mysql" | "mariadb" => Some(Self::MySQL),
            "postgres" | "postgresql" => Some(Self::PostgreSQL),
            "sqlite" => Some(Self::SQLite),
            "mssql" | "sqlserver" => Some(Self::SQLServer),
            _ => None,
        }
    }

    /// 为单个标识符加引号。
    pub fn quote(self, name: &str) -> String {
        match self {
            Self::MySQL | Self::SQLite => format!("`{name}`"),
            Self::PostgreSQL => format!("\"{name}\""),
            Self::SQLServer => format!("[{name}]"),
        }
    }

    /// 为列路径加引号；`a.b` 按段分别加引号。
    pub fn quote_path(self, path: &str) -> String {
        path.split('.')
            .map(|seg| self.quote(seg))
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MySQL => "mysql",
            Self::PostgreSQL => "postgres",
            Self::SQLite => "sqlite",
            Self::SQLServer => "mssql",
        };
        f.write_str(s)
    }
}

/// 方言的字面量格式化规则。构造后不可变，可在多个 builder 间共享。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectProfile {
    pub dialect: Dialect,
    /// 时间字面量的小数秒位数。
    pub sub_second_digits: u8,
    /// 方言是否有原生的大小写不敏感 LIKE。
    pub supports_case_insensitive_like: bool,
    /// 日期时间 CAST 使用的类型名。
    pub timestamp_cast: &'static str,
    /// 日期 CAST 使用的类型名。
    pub date_cast: &'static str,
}

impl DialectProfile {
    /// 按方言查表得到格式化规则。
    pub fn for_dialect(dialect: Dialect) -> Self {
        Self {
            dialect,
            sub_second_digits: match dialect {
                Dialect::SQLServer => 3,
                _ => 5,
            },
            supports_case_insensitive_like: dialect == Dialect::PostgreSQL,
            timestamp_cast: match dialect {
                Dialect::PostgreSQL => "TIMESTAMP(0)",
                _ => "DATETIME",
            },
            date_cast: "DATE",
        }
    }

    /// 按连接层报告的方言名查表；未知名称回退到默认规则而不是报错。
    pub fn for_name(name: &str) -> Self {
        Self::for_dialect(Dialect::from_name(name).unwrap_or_default())
    }

    pub(crate) fn quote_path(&self, path: &str) -> String {
        self.dialect.quote_path(path)
    }
}

impl Default for DialectProfile {
    fn default() -> Self {
        Self::for_dialect(Dialect::default())
    }
}
