/// 截断长文本用于回显或日志显示
///
/// 超出 `max_len` 个字符时截断并追加 "..."，按字符计数而非字节
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
