/// 转义 LIKE 模式中的通配符
///
/// 搜索词作为 contains 过滤传入 SQL LIKE，`%`、`_` 和转义符本身
/// 需要先转义，否则用户输入会被解释为通配符。
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' | '%' | '_' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_like_pattern("zhang wei"), "zhang wei");
    }

    #[test]
    fn test_wildcards_escaped() {
        assert_eq!(escape_like_pattern("100%"), "100\\%");
        assert_eq!(escape_like_pattern("a_b"), "a\\_b");
        assert_eq!(escape_like_pattern("back\\slash"), "back\\\\slash");
    }
}
