//! 条件树：布尔表达式的显式节点表示。

use crate::dialect::DialectProfile;
use crate::value::FilterValue;
use dyn_clone::DynClone;
use std::fmt;

/// AND/OR 组合子。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    And,
    Or,
}

/// 叶子比较的谓词；载荷即比较所需的值，入树前已经规范化完毕。
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Eq(FilterValue),
    Ne(FilterValue),
    Gt(FilterValue),
    Gte(FilterValue),
    Lt(FilterValue),
    Lte(FilterValue),
    Like {
        pattern: String,
        case_insensitive: bool,
    },
    NotLike {
        pattern: String,
        case_insensitive: bool,
    },
    In(Vec<FilterValue>),
    NotIn(Vec<FilterValue>),
    Between(FilterValue, FilterValue),
    NotBetween(FilterValue, FilterValue),
    IsNull,
    IsNotNull,
    /// 布尔取反，渲染为 `IS NOT <literal>`。
    IsNot(FilterValue),
}

/// 逃生通道条件：由调用方提供、按方言渲染自身。
/// 方言特有的操作符（数组重叠等）通过它注入，核心不逐个建模。
pub trait RawCondition: DynClone + fmt::Debug {
    fn to_sql(&self, profile: &DialectProfile) -> String;
}

dyn_clone::clone_trait_object!(RawCondition);

/// 不随方言变化的纯 SQL 文本条件。
#[derive(Debug, Clone)]
pub struct RawSql(pub String);

impl RawCondition for RawSql {
    fn to_sql(&self, _profile: &DialectProfile) -> String {
        self.0.clone()
    }
}

/// 布尔表达式树中的一个节点。
#[derive(Debug, Clone)]
pub enum ConditionNode {
    /// 单列比较；`cast` 存在时列先被 CAST 为对应类型。
    Comparison {
        column: String,
        cast: Option<&'static str>,
        predicate: Predicate,
    },
    /// 外部提供的不透明条件。
    Raw(Box<dyn RawCondition>),
    /// 组合分组；子节点保持插入顺序。
    Group {
        combinator: Combinator,
        children: Vec<ConditionNode>,
    },
}

impl ConditionNode {
    /// 纯文本条件节点。
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw(Box::new(RawSql(sql.into())))
    }

    pub fn group(combinator: Combinator, children: Vec<ConditionNode>) -> Self {
        Self::Group {
            combinator,
            children,
        }
    }
}

impl From<&str> for ConditionNode {
    fn from(sql: &str) -> Self {
        Self::raw(sql)
    }
}

impl From<String> for ConditionNode {
    fn from(sql: String) -> Self {
        Self::raw(sql)
    }
}

impl From<Box<dyn RawCondition>> for ConditionNode {
    fn from(raw: Box<dyn RawCondition>) -> Self {
        Self::Raw(raw)
    }
}
