/// 翻转一个字节的位序
///
/// 显示端按与数值相反的顺序读取每个字节的位，因此写入前需要翻转，
/// 例如 `0b0000_0001` -> `0b1000_0000`
#[inline]
pub const fn reverse_bits(b: u8) -> u8 {
    b.reverse_bits()
}

/// 编码一条扫描线
///
/// ## 参数
///
/// - `v` - 扫描线的低16位
///
/// ## 返回值
///
/// `[翻转后的低字节, 翻转后的高字节]`
#[inline]
pub const fn encode_scanline(v: u16) -> [u8; 2] {
    let [low, high] = v.to_le_bytes();
    [reverse_bits(low), reverse_bits(high)]
}
