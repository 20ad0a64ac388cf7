use std::ops::Range;

/// 需要编译的字符码范围（不包含255）
pub const CHAR_CODES: Range<u32> = 0..255;

/// 字体文件中的字符数量
pub const TOTAL_CHARS: usize = 255;

/// 每个字形的扫描线数量
pub const GLYPH_HEIGHT: usize = 16;

/// 每条扫描线的有效位数
pub const SCANLINE_BITS: u32 = 16;
pub const SCANLINE_MASK: u64 = (1 << SCANLINE_BITS) - 1;

/// 每条扫描线编码后的字节数
pub const SCANLINE_BYTES: usize = 2;

/// 每个字符编码后的字节数
pub const CHAR_BYTE_SIZE: usize = GLYPH_HEIGHT * SCANLINE_BYTES;

/// 完整字体文件的字节数
pub const FONT_BLOB_SIZE: usize = TOTAL_CHARS * CHAR_BYTE_SIZE;

/// 字符的像素宽度
pub const CHAR_BIT_WIDTH: usize = SCANLINE_BYTES * 8;

/// 空白字符的显示宽度
pub const CHAR_WHITE_SPACE_WIDTH: u32 = 5;

/// 字符之间的间距
pub const TEXT_MARGIN: u32 = 3;

pub const DEFAULT_INPUT_PATH: &str = "fonts/fontcreate/font.json";
pub const DEFAULT_OUTPUT_PATH: &str = "fonts/font.dat";
