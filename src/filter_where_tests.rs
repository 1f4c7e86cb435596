#[cfg(test)]
mod tests {
    use crate::dialect::{Dialect, DialectProfile};
    use crate::filter::{ColumnType, FilterBuilder};
    use crate::node::{ConditionNode, RawCondition};
    use crate::temporal::FilterError;
    use crate::value::FilterValue;
    use pretty_assertions::assert_eq;

    fn sql(filter: &FilterBuilder) -> String {
        filter.where_all().to_sql(filter.profile())
    }

    #[test]
    fn empty_builder_renders_empty_fragment() {
        let filter = FilterBuilder::new(Dialect::PostgreSQL);
        assert!(filter.is_empty());
        assert_eq!(filter.where_all().to_sql(filter.profile()), "");
        assert_eq!(filter.where_any().to_sql(filter.profile()), "");
    }

    #[test]
    fn reads_are_idempotent_and_accumulation_continues() {
        let mut filter = FilterBuilder::new(Dialect::MySQL);
        filter.add_equal("column1", 1, ColumnType::Plain).unwrap();

        let first = filter.where_all().to_sql(filter.profile());
        let second = filter.where_all().to_sql(filter.profile());
        assert_eq!(first, second);
        assert_eq!(first, "(`column1` = 1)");

        filter.add_equal("column2", 2, ColumnType::Plain).unwrap();
        assert_eq!(sql(&filter), "(`column1` = 1 AND `column2` = 2)");
    }

    #[test]
    fn nested_or_block_becomes_one_child() {
        for dialect in [
            Dialect::MySQL,
            Dialect::SQLite,
            Dialect::PostgreSQL,
            Dialect::SQLServer,
        ] {
            let mut filter = FilterBuilder::new(dialect);
            filter.add_like(&["column1"], "%test%");

            let mut or_block = FilterBuilder::new(dialect);
            or_block
                .add_equal("column2", "abc", ColumnType::Plain)
                .unwrap()
                .add_equal("column3", "2017-11-01", ColumnType::DateOnly)
                .unwrap();
            filter.add_condition(or_block.where_any());

            let expected = match dialect {
                Dialect::MySQL | Dialect::SQLite => {
                    "((`column1` LIKE '%test%') AND (`column2` = 'abc' OR CAST(`column3` AS DATE) = '2017-11-01T00:00:00'))"
                }
                Dialect::PostgreSQL => {
                    "((\"column1\" ILIKE '%test%') AND (\"column2\" = 'abc' OR CAST(\"column3\" AS DATE) = '2017-11-01T00:00:00'))"
                }
                Dialect::SQLServer => {
                    "(([column1] LIKE N'%test%') AND ([column2] = N'abc' OR CAST([column3] AS DATE) = N'2017-11-01T00:00:00'))"
                }
            };
            assert_eq!(sql(&filter), expected);
        }
    }

    #[test]
    fn nested_empty_block_contributes_nothing() {
        let mut filter = FilterBuilder::new(Dialect::MySQL);
        filter.add_equal("column1", 1, ColumnType::Plain).unwrap();
        filter.add_condition(FilterBuilder::new(Dialect::MySQL).where_any());
        assert_eq!(sql(&filter), "(`column1` = 1)");
    }

    /// PostgreSQL 的数组重叠操作符，核心不建模，由调用方经逃生通道注入。
    #[derive(Debug, Clone)]
    struct ArrayOverlap {
        column: &'static str,
        values: Vec<i64>,
    }

    impl RawCondition for ArrayOverlap {
        fn to_sql(&self, profile: &DialectProfile) -> String {
            let items = self
                .values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(",");
            format!("{} && ARRAY[{}]", profile.dialect.quote_path(self.column), items)
        }
    }

    #[test]
    fn raw_condition_renders_dialect_specific_operator() {
        let mut filter = FilterBuilder::new(Dialect::PostgreSQL);
        filter.add_condition(ConditionNode::Raw(Box::new(ArrayOverlap {
            column: "column1",
            values: vec![1, 2],
        })));
        assert_eq!(sql(&filter), "(\"column1\" && ARRAY[1,2])");
    }

    #[test]
    fn raw_text_condition_passes_through() {
        let mut filter = FilterBuilder::new(Dialect::MySQL);
        filter
            .add_condition("`column1` REGEXP '^a'")
            .add_equal("column2", 1, ColumnType::Plain)
            .unwrap();
        assert_eq!(sql(&filter), "(`column1` REGEXP '^a' AND `column2` = 1)");
    }

    #[test]
    fn empty_column_is_a_noop() {
        let mut filter = FilterBuilder::new(Dialect::MySQL);
        filter.add_equal("", 1, ColumnType::Plain).unwrap();
        filter.add_greater_than("", 1, ColumnType::Plain).unwrap();
        filter.add_in("", [1, 2], ColumnType::Plain).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn null_bound_is_a_noop() {
        let mut filter = FilterBuilder::new(Dialect::MySQL);
        filter
            .add_greater_than("column1", FilterValue::Null, ColumnType::Plain)
            .unwrap()
            .add_between("column1", FilterValue::Null, 2, ColumnType::Plain)
            .unwrap()
            .add_between("column1", 1, FilterValue::Null, ColumnType::Plain)
            .unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn between_with_mismatched_kinds_is_skipped() {
        let mut filter = FilterBuilder::new(Dialect::MySQL);
        filter.add_between("column1", 1, "2", ColumnType::Plain).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn between_unifies_numeric_kinds() {
        let mut filter = FilterBuilder::new(Dialect::MySQL);
        filter.add_between("column1", 1, 2.5, ColumnType::Plain).unwrap();
        assert_eq!(sql(&filter), "(`column1` BETWEEN 1 AND 2.5)");
    }

    #[test]
    fn zero_and_false_are_values_not_absence() {
        let mut filter = FilterBuilder::new(Dialect::MySQL);
        filter
            .add_greater_than("column1", 0, ColumnType::Plain)
            .unwrap()
            .add_equal("column2", false, ColumnType::Plain)
            .unwrap();
        assert_eq!(sql(&filter), "(`column1` > 0 AND `column2` = FALSE)");
    }

    #[test]
    fn empty_like_pattern_is_a_noop() {
        let mut filter = FilterBuilder::new(Dialect::MySQL);
        filter.add_like(&["column1"], "");
        filter.add_not_like(&["column1"], "");
        filter.add_like(&[], "%x%");
        assert!(filter.is_empty());
    }

    #[test]
    fn empty_in_list_is_a_constant_condition() {
        let mut filter = FilterBuilder::new(Dialect::MySQL);
        filter
            .add_in("column1", std::iter::empty::<i64>(), ColumnType::Plain)
            .unwrap();
        assert_eq!(sql(&filter), "(0 = 1)");

        let mut filter = FilterBuilder::new(Dialect::MySQL);
        filter
            .add_not_in("column1", std::iter::empty::<i64>(), ColumnType::Plain)
            .unwrap();
        assert_eq!(sql(&filter), "(0 = 0)");
    }

    #[test]
    fn invalid_temporal_value_is_a_caller_error() {
        let mut filter = FilterBuilder::new(Dialect::MySQL);
        let err = filter
            .add_equal("column1", "not a date", ColumnType::Date)
            .unwrap_err();
        assert_eq!(err, FilterError::InvalidValue("not a date".to_string()));
        assert!(filter.is_empty());

        let err = filter
            .add_in("column1", ["2017-01-01", "bogus"], ColumnType::Date)
            .unwrap_err();
        assert_eq!(err, FilterError::InvalidValue("bogus".to_string()));
        assert!(filter.is_empty());
    }

    #[test]
    fn unknown_dialect_name_uses_generic_formatting() {
        let mut filter = FilterBuilder::for_dialect_name("weird-db");
        filter
            .add_between("column1", "2017-01-01 18:00", "2017-01-01 19:00", ColumnType::Date)
            .unwrap();
        assert_eq!(
            sql(&filter),
            "(`column1` BETWEEN '2017-01-01T18:00:00.00000' AND '2017-01-01T19:00:00.99999')"
        );
    }
}
