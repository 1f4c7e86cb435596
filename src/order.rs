//! 排序翻译：把别名排序对解析为规范列路径段。

use crate::map::AliasMap;

/// 把 `[别名, 方向?]` 排序对翻译为规范列路径段序列，方向附加在末尾；
/// 没有映射项的别名被跳过。
pub fn order_by(pairs: &[(&str, Option<&str>)], aliases: &AliasMap) -> Vec<Vec<String>> {
    let mut order = Vec::with_capacity(pairs.len());
    for (alias, direction) in pairs {
        let Some((field, _)) = aliases.iter().find(|(_, a)| a.as_str() == *alias) else {
            continue;
        };
        let mut item: Vec<String> = field.split('.').map(str::to_string).collect();
        if let Some(direction) = direction {
            item.push((*direction).to_string());
        }
        order.push(item);
    }
    order
}
