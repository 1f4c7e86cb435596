//! halo-filter-builder：方言感知的查询过滤条件构造库。
//!
//! 把类型化的过滤请求（等值、范围、集合、模式匹配）累积为可组合的布尔
//! 条件树，并按目标方言渲染为 SQL 片段；附带别名映射、排序翻译与
//! 校验错误翻译工具。

pub mod dialect;
pub mod filter;
#[cfg(test)]
mod filter_where_tests;
pub mod map;
pub mod node;
pub mod order;
pub mod render;
pub mod report;
pub mod string_builder;
pub mod temporal;
pub mod value;

pub use crate::dialect::{Dialect, DialectProfile};
pub use crate::filter::{ColumnType, FilterBuilder};
pub use crate::map::{AliasMap, aliases_to_record, record_to_aliases, rows_to_aliases};
pub use crate::node::{Combinator, ConditionNode, Predicate, RawCondition, RawSql};
pub use crate::order::order_by;
pub use crate::report::{EngineError, Report, SubReport, VALIDATION_KIND};
pub use crate::temporal::{FilterError, parse_temporal};
pub use crate::value::{FilterValue, ValueKind};
