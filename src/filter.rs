//! FilterBuilder：把类型化谓词按序累积为方言正确的条件树。

use crate::dialect::{Dialect, DialectProfile};
use crate::node::{Combinator, ConditionNode, Predicate};
use crate::temporal::{self, FilterError};
use crate::value::FilterValue;

/// 列值的语义类型标注，决定时间规范化策略。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnType {
    /// 按值原样比较。
    #[default]
    Plain,
    /// 日期时间：字面量按方言的小数秒精度规范化。
    Date,
    /// 日历日期：先截断到天边界再规范化。
    DateOnly,
    /// 布尔列：不等比较渲染为 `IS NOT`。
    Boolean,
}

/// 有状态的条件累积器，绑定一个方言 profile。
///
/// 每个逻辑过滤表达式创建一个 builder，顺序调用 `add_*`，最后用
/// [`where_all`](Self::where_all) / [`where_any`](Self::where_any)
/// 取出组合结果；取出是幂等的，之后仍可继续累积。嵌套过滤块通过
/// [`add_condition`](Self::add_condition) 把子 builder 的组合结果挂进来。
///
/// 缺省策略：列名为空串、或范围/集合操作的值为 [`FilterValue::Null`] 时，
/// 该调用是静默 no-op，调用方可以无分支地拼装可选筛选条件。`0`、`false`
/// 和空字符串都是合法的比较值，不会被当作缺省；只有 `add_like` 保留
/// 「模式串非空」的要求。
#[derive(Debug, Clone)]
pub struct FilterBuilder {
    profile: DialectProfile,
    conditions: Vec<ConditionNode>,
}

impl FilterBuilder {
    pub fn new(dialect: Dialect) -> Self {
        Self::with_profile(DialectProfile::for_dialect(dialect))
    }

    /// 按连接层报告的方言名构造；未知名称回退到通用格式化规则。
    pub fn for_dialect_name(name: &str) -> Self {
        Self::with_profile(DialectProfile::for_name(name))
    }

    pub fn with_profile(profile: DialectProfile) -> Self {
        Self {
            profile,
            conditions: Vec::new(),
        }
    }

    pub fn profile(&self) -> &DialectProfile {
        &self.profile
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// 等值。`Null` 值生成 `IS NULL`；时间类型先 CAST 列再与规范化的
    /// 字面量比较，`DateOnly` 额外截断到当天零点。
    pub fn add_equal(
        &mut self,
        column: &str,
        value: impl Into<FilterValue>,
        ty: ColumnType,
    ) -> Result<&mut Self, FilterError> {
        if column.is_empty() {
            return Ok(self);
        }
        let value = value.into();
        if value.is_null() {
            self.push_plain(column, Predicate::IsNull);
            return Ok(self);
        }
        match ty {
            ColumnType::Date => {
                let dt = temporal::parse_temporal(&value)?;
                let literal = self.profile.format_instant(dt);
                self.push_cast(
                    column,
                    self.profile.timestamp_cast,
                    Predicate::Eq(literal.into()),
                );
            }
            ColumnType::DateOnly => {
                let dt = temporal::parse_temporal(&value)?;
                let literal = self.profile.format_instant(temporal::day_start(dt));
                self.push_cast(column, self.profile.date_cast, Predicate::Eq(literal.into()));
            }
            _ => self.push_plain(column, Predicate::Eq(value)),
        }
        Ok(self)
    }

    /// 不等。`Null` 值生成 `IS NOT NULL`；布尔列渲染为 `IS NOT`。
    pub fn add_not_equal(
        &mut self,
        column: &str,
        value: impl Into<FilterValue>,
        ty: ColumnType,
    ) -> Result<&mut Self, FilterError> {
        if column.is_empty() {
            return Ok(self);
        }
        let value = value.into();
        if value.is_null() {
            self.push_plain(column, Predicate::IsNotNull);
            return Ok(self);
        }
        match ty {
            ColumnType::Date => {
                let dt = temporal::parse_temporal(&value)?;
                let literal = self.profile.format_instant(dt);
                self.push_cast(
                    column,
                    self.profile.timestamp_cast,
                    Predicate::Ne(literal.into()),
                );
            }
            ColumnType::DateOnly => {
                let dt = temporal::parse_temporal(&value)?;
                let literal = self.profile.format_instant(temporal::day_start(dt));
                self.push_cast(column, self.profile.date_cast, Predicate::Ne(literal.into()));
            }
            ColumnType::Boolean => self.push_plain(column, Predicate::IsNot(value)),
            _ => self.push_plain(column, Predicate::Ne(value)),
        }
        Ok(self)
    }

    pub fn add_greater_than(
        &mut self,
        column: &str,
        value: impl Into<FilterValue>,
        ty: ColumnType,
    ) -> Result<&mut Self, FilterError> {
        self.add_ordered(column, value.into(), ty, Predicate::Gt)
    }

    pub fn add_greater_equal(
        &mut self,
        column: &str,
        value: impl Into<FilterValue>,
        ty: ColumnType,
    ) -> Result<&mut Self, FilterError> {
        self.add_ordered(column, value.into(), ty, Predicate::Gte)
    }

    pub fn add_less_than(
        &mut self,
        column: &str,
        value: impl Into<FilterValue>,
        ty: ColumnType,
    ) -> Result<&mut Self, FilterError> {
        self.add_ordered(column, value.into(), ty, Predicate::Lt)
    }

    pub fn add_less_equal(
        &mut self,
        column: &str,
        value: impl Into<FilterValue>,
        ty: ColumnType,
    ) -> Result<&mut Self, FilterError> {
        self.add_ordered(column, value.into(), ty, Predicate::Lte)
    }

    /// 大小比较共用实现：时间类型 CAST 列并与下界格式化的字面量比较。
    fn add_ordered(
        &mut self,
        column: &str,
        value: FilterValue,
        ty: ColumnType,
        predicate: fn(FilterValue) -> Predicate,
    ) -> Result<&mut Self, FilterError> {
        if column.is_empty() || value.is_null() {
            return Ok(self);
        }
        match ty {
            ColumnType::Date => {
                let dt = temporal::parse_temporal(&value)?;
                let literal = self.profile.format_lower_bound(dt);
                self.push_cast(column, self.profile.timestamp_cast, predicate(literal.into()));
            }
            ColumnType::DateOnly => {
                let dt = temporal::parse_temporal(&value)?;
                let literal = self.profile.format_date_only_start(dt);
                self.push_cast(column, self.profile.date_cast, predicate(literal.into()));
            }
            _ => self.push_plain(column, predicate(value)),
        }
        Ok(self)
    }

    /// 闭区间。两端必须同时存在且类别一致，否则整个调用被跳过。
    /// 时间区间下界补 `0`、上界补 `9`；`DateOnly` 先展开到天边界。
    pub fn add_between(
        &mut self,
        column: &str,
        from: impl Into<FilterValue>,
        to: impl Into<FilterValue>,
        ty: ColumnType,
    ) -> Result<&mut Self, FilterError> {
        self.add_range(column, from.into(), to.into(), ty, Predicate::Between)
    }

    /// 取反的闭区间，规范化规则与 [`add_between`](Self::add_between) 相同。
    pub fn add_not_between(
        &mut self,
        column: &str,
        from: impl Into<FilterValue>,
        to: impl Into<FilterValue>,
        ty: ColumnType,
    ) -> Result<&mut Self, FilterError> {
        self.add_range(column, from.into(), to.into(), ty, Predicate::NotBetween)
    }

    fn add_range(
        &mut self,
        column: &str,
        from: FilterValue,
        to: FilterValue,
        ty: ColumnType,
        predicate: fn(FilterValue, FilterValue) -> Predicate,
    ) -> Result<&mut Self, FilterError> {
        if column.is_empty() || from.is_null() || to.is_null() || from.kind() != to.kind() {
            return Ok(self);
        }
        match ty {
            ColumnType::Date => {
                let from = temporal::parse_temporal(&from)?;
                let to = temporal::parse_temporal(&to)?;
                self.push_plain(
                    column,
                    predicate(
                        self.profile.format_lower_bound(from).into(),
                        self.profile.format_upper_bound(to).into(),
                    ),
                );
            }
            ColumnType::DateOnly => {
                let from = temporal::parse_temporal(&from)?;
                let to = temporal::parse_temporal(&to)?;
                self.push_plain(
                    column,
                    predicate(
                        self.profile.format_date_only_start(from).into(),
                        self.profile.format_date_only_end(to).into(),
                    ),
                );
            }
            _ => self.push_plain(column, predicate(from, to)),
        }
        Ok(self)
    }

    /// IN 集合；时间类型 CAST 列，并把每个元素统一按下界格式化。
    /// 空列表生成恒假条件。
    pub fn add_in(
        &mut self,
        column: &str,
        values: impl IntoIterator<Item = impl Into<FilterValue>>,
        ty: ColumnType,
    ) -> Result<&mut Self, FilterError> {
        self.add_membership(column, values, ty, false)
    }

    /// NOT IN 集合；空列表生成恒真条件。
    pub fn add_not_in(
        &mut self,
        column: &str,
        values: impl IntoIterator<Item = impl Into<FilterValue>>,
        ty: ColumnType,
    ) -> Result<&mut Self, FilterError> {
        self.add_membership(column, values, ty, true)
    }

    fn add_membership(
        &mut self,
        column: &str,
        values: impl IntoIterator<Item = impl Into<FilterValue>>,
        ty: ColumnType,
        negated: bool,
    ) -> Result<&mut Self, FilterError> {
        if column.is_empty() {
            return Ok(self);
        }
        let values: Vec<FilterValue> = values.into_iter().map(|v| v.into()).collect();
        if values.is_empty() {
            self.push(ConditionNode::raw(if negated { "0 = 0" } else { "0 = 1" }));
            return Ok(self);
        }
        let predicate: fn(Vec<FilterValue>) -> Predicate = if negated {
            Predicate::NotIn
        } else {
            Predicate::In
        };
        match ty {
            ColumnType::Date => {
                let mut literals: Vec<FilterValue> = Vec::with_capacity(values.len());
                for value in &values {
                    let dt = temporal::parse_temporal(value)?;
                    literals.push(self.profile.format_lower_bound(dt).into());
                }
                self.push_cast(column, self.profile.timestamp_cast, predicate(literals));
            }
            ColumnType::DateOnly => {
                let mut literals: Vec<FilterValue> = Vec::with_capacity(values.len());
                for value in &values {
                    let dt = temporal::parse_temporal(value)?;
                    literals.push(self.profile.format_date_only_start(dt).into());
                }
                self.push_cast(column, self.profile.date_cast, predicate(literals));
            }
            _ => self.push_plain(column, predicate(values)),
        }
        Ok(self)
    }

    /// 模式匹配：每个列一个子条件，OR 组合；只在方言支持时使用
    /// 大小写不敏感操作符。模式串为空时整个调用跳过。
    pub fn add_like(&mut self, columns: &[&str], pattern: &str) -> &mut Self {
        self.add_pattern(columns, pattern, false)
    }

    /// 取反的模式匹配：每个列一个子条件，AND 组合。
    pub fn add_not_like(&mut self, columns: &[&str], pattern: &str) -> &mut Self {
        self.add_pattern(columns, pattern, true)
    }

    fn add_pattern(&mut self, columns: &[&str], pattern: &str, negated: bool) -> &mut Self {
        if pattern.is_empty() {
            return self;
        }
        let case_insensitive = self.profile.supports_case_insensitive_like;
        let children: Vec<ConditionNode> = columns
            .iter()
            .filter(|column| !column.is_empty())
            .map(|column| ConditionNode::Comparison {
                column: (*column).to_string(),
                cast: None,
                predicate: if negated {
                    Predicate::NotLike {
                        pattern: pattern.to_string(),
                        case_insensitive,
                    }
                } else {
                    Predicate::Like {
                        pattern: pattern.to_string(),
                        case_insensitive,
                    }
                },
            })
            .collect();
        if children.is_empty() {
            return self;
        }
        let combinator = if negated { Combinator::And } else { Combinator::Or };
        self.push(ConditionNode::Group {
            combinator,
            children,
        });
        self
    }

    /// 逃生通道：原样插入一个预构建条件——另一个 builder 的组合结果、
    /// 纯 SQL 文本、或自定义的 [`RawCondition`](crate::node::RawCondition)。
    pub fn add_condition(&mut self, condition: impl Into<ConditionNode>) -> &mut Self {
        self.push(condition.into());
        self
    }

    /// 把累积的条件 AND 连接。未添加任何条件时返回空分组，
    /// 渲染为空片段（匹配所有行）。
    pub fn where_all(&self) -> ConditionNode {
        ConditionNode::Group {
            combinator: Combinator::And,
            children: self.conditions.clone(),
        }
    }

    /// 同一组条件 OR 连接。
    pub fn where_any(&self) -> ConditionNode {
        ConditionNode::Group {
            combinator: Combinator::Or,
            children: self.conditions.clone(),
        }
    }

    fn push(&mut self, node: ConditionNode) {
        self.conditions.push(node);
    }

    fn push_plain(&mut self, column: &str, predicate: Predicate) {
        self.push(ConditionNode::Comparison {
            column: column.to_string(),
            cast: None,
            predicate,
        });
    }

    fn push_cast(&mut self, column: &str, cast: &'static str, predicate: Predicate) {
        self.push(ConditionNode::Comparison {
            column: column.to_string(),
            cast: Some(cast),
            predicate,
        });
    }
}
