//! Span - 源码位置信息

/// 源码位置范围 (字节偏移)
pub type Span = std::ops::Range<usize>;

/// 把字节偏移范围换算成字符偏移范围
///
/// ariadne 按字符计数，轨迹里的 span 是字节偏移；两者只在
/// 出现多字节字符（例如中文注释）时不同。超出源码的偏移按末尾计算。
pub fn char_span(source: &str, span: &Span) -> Span {
    char_offset(source, span.start)..char_offset(source, span.end)
}

fn char_offset(source: &str, byte: usize) -> usize {
    let mut byte = byte.min(source.len());
    while !source.is_char_boundary(byte) {
        byte -= 1;
    }
    source[..byte].chars().count()
}
