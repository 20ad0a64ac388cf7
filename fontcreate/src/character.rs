//! 编译产物的解码
//!
//! 按照渲染端读取 `font.dat` 的方式把字节还原为字符位图，用于校验和预览

use std::{fmt::Write, fs, path::Path};

use log::warn;

use crate::{
    compiler::CompileReport,
    constant::{
        CHAR_BIT_WIDTH, CHAR_BYTE_SIZE, CHAR_WHITE_SPACE_WIDTH, FONT_BLOB_SIZE, GLYPH_HEIGHT,
        SCANLINE_BYTES, TEXT_MARGIN, TOTAL_CHARS,
    },
    error::FontError,
};

/// 一个字符的位图
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontCharacter {
    bytes: [u8; CHAR_BYTE_SIZE],
    width: u32,
}

pub const EMPTY_CHARACTER: FontCharacter = FontCharacter {
    bytes: [0; CHAR_BYTE_SIZE],
    width: CHAR_WHITE_SPACE_WIDTH,
};

impl FontCharacter {
    pub fn from_bytes(bytes: [u8; CHAR_BYTE_SIZE]) -> Self {
        let mut ch = Self { bytes, width: 0 };
        ch.width = ch.measure_width();
        ch
    }

    /// 字符的显示宽度，没有任何像素时为空白宽度
    pub fn width(&self) -> u32 {
        self.width
    }

    /// 获取像素
    ///
    /// `y` 是字节流中的行号，0 对应字形表里最后一条扫描线
    pub fn get_bit(&self, x: usize, y: usize) -> bool {
        let mask = 1u8 << (x % 8);
        self.bytes[y * SCANLINE_BYTES + x / 8] & mask != 0
    }

    fn column_set(&self, x: usize) -> bool {
        (0..GLYPH_HEIGHT).any(|y| self.get_bit(x, y))
    }

    fn measure_width(&self) -> u32 {
        let left = (0..CHAR_BIT_WIDTH).find(|&x| self.column_set(x));
        let right = (0..CHAR_BIT_WIDTH).rev().find(|&x| self.column_set(x));
        match (left, right) {
            (Some(l), Some(r)) => (r - l + 1) as u32,
            _ => CHAR_WHITE_SPACE_WIDTH,
        }
    }

    /// 以文本形式绘制字符，第一行对应字形表中的第一条扫描线
    pub fn render(&self) -> String {
        let mut s = String::with_capacity((CHAR_BIT_WIDTH + 1) * GLYPH_HEIGHT);
        for y in (0..GLYPH_HEIGHT).rev() {
            for x in 0..CHAR_BIT_WIDTH {
                s.push(if self.get_bit(x, y) { '#' } else { '.' });
            }
            s.push('\n');
        }
        s
    }
}

impl Default for FontCharacter {
    fn default() -> Self {
        EMPTY_CHARACTER
    }
}

/// 完整字体文件中的所有字符
#[derive(Debug, Clone)]
pub struct FontData {
    characters: [FontCharacter; TOTAL_CHARS],
}

impl FontData {
    /// 从编译好的字节流加载全部字符
    ///
    /// 字节流长度不足 [`FONT_BLOB_SIZE`] 时返回错误，多余的字节被忽略
    pub fn from_blob(blob: &[u8]) -> Result<Self, FontError> {
        if blob.len() < FONT_BLOB_SIZE {
            return Err(FontError::Blob { len: blob.len() });
        }

        let mut characters = [EMPTY_CHARACTER; TOTAL_CHARS];
        for (ch, chunk) in characters
            .iter_mut()
            .zip(blob.chunks_exact(CHAR_BYTE_SIZE))
        {
            let mut bytes = [0u8; CHAR_BYTE_SIZE];
            bytes.copy_from_slice(chunk);
            *ch = FontCharacter::from_bytes(bytes);
        }
        Ok(Self { characters })
    }

    /// 读取字体文件
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FontError> {
        let path = path.as_ref();
        let blob = fs::read(path).map_err(|e| FontError::load(path, e))?;
        Self::from_blob(&blob)
    }

    pub fn character(&self, code: u32) -> Option<&FontCharacter> {
        self.characters.get(code as usize)
    }

    /// 按给定字号计算文本宽度
    ///
    /// 字体文件中没有的字符不计入宽度
    pub fn text_width(&self, text: &str, size: u32) -> u32 {
        let mut w = 0;
        for ch in text.chars() {
            if let Some(c) = self.character(ch as u32) {
                w += ((c.width() + TEXT_MARGIN) as f32 * size as f32 / CHAR_BIT_WIDTH as f32)
                    as u32;
            }
        }
        w + TEXT_MARGIN
    }

    /// 字符的预览文本
    pub fn preview(&self, code: u32) -> Result<String, FontError> {
        let ch = self.character(code).ok_or(FontError::Preview { code })?;
        let mut s = ch.render();
        // 写入String不会失败
        let _ = writeln!(s, "width: {}", ch.width());
        Ok(s)
    }
}

/// 读取刚编译出的字体文件，生成指定字符的预览
///
/// 存在高度不为16的字形时，字体文件的长度和字符偏移都不正确，此时跳过预览并返回 `None`
pub fn preview_compiled(
    path: impl AsRef<Path>,
    report: &CompileReport,
    codes: &[u32],
) -> Result<Option<String>, FontError> {
    if report.bytes_written != FONT_BLOB_SIZE {
        warn!(
            "Skip preview: {} bytes written, expected {}",
            report.bytes_written, FONT_BLOB_SIZE
        );
        return Ok(None);
    }

    let font = FontData::load(path)?;
    let mut s = String::new();
    for &code in codes {
        let _ = writeln!(s, "{}:", code);
        s.push_str(&font.preview(code)?);
    }
    Ok(Some(s))
}
