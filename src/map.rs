//! 别名映射：在对外字段名与内部列路径之间双向改名。

use std::collections::BTreeMap;

/// 平面别名表：内部列路径 → 对外别名。
pub type AliasMap = BTreeMap<String, String>;

/// 把一组行的键从内部列路径改为对外别名；没有映射项的键保持原名。
pub fn rows_to_aliases<V>(
    rows: Vec<BTreeMap<String, V>>,
    aliases: &AliasMap,
) -> Vec<BTreeMap<String, V>> {
    rows.into_iter()
        .map(|row| record_to_aliases(row, aliases))
        .collect()
}

/// 单条记录版本的 [`rows_to_aliases`]。
pub fn record_to_aliases<V>(record: BTreeMap<String, V>, aliases: &AliasMap) -> BTreeMap<String, V> {
    record
        .into_iter()
        .map(|(key, value)| match aliases.get(&key) {
            Some(alias) => (alias.clone(), value),
            None => (key, value),
        })
        .collect()
}

/// 反向映射：把别名键还原为内部列路径；没有映射项的键保持原名。
pub fn aliases_to_record<V>(record: BTreeMap<String, V>, aliases: &AliasMap) -> BTreeMap<String, V> {
    record
        .into_iter()
        .map(|(key, value)| {
            match aliases.iter().find(|(_, alias)| alias.as_str() == key) {
                Some((field, _)) => (field.clone(), value),
                None => (key, value),
            }
        })
        .collect()
}
