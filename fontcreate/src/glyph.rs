use std::{collections::BTreeMap, fs, path::Path};

use log::debug;
use serde::{
    de::{self, Unexpected},
    Deserialize, Deserializer,
};

use crate::{
    constant::{GLYPH_HEIGHT, SCANLINE_MASK},
    error::FontError,
};

/// 扫描线
///
/// 只保存低16位；原始值超过16位时额外保存其十进制文本，用于告警
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scanline {
    bits: u16,
    overflow: Option<String>,
}

impl Scanline {
    /// 从十进制数字串构造，不是非负整数时返回 `None`
    ///
    /// 数字串可以任意长，低16位通过逐位取模得到
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let mut low: u32 = 0;
        let mut exceeds = false;
        let mut full: u64 = 0;
        for b in digits.bytes() {
            let d = (b - b'0') as u32;
            low = (low * 10 + d) % (1 << 16);
            if !exceeds {
                full = full * 10 + d as u64;
                exceeds = full > SCANLINE_MASK;
            }
        }

        Some(Self {
            bits: low as u16,
            overflow: exceeds.then(|| digits.trim_start_matches('0').to_string()),
        })
    }

    /// 低16位
    pub fn bits(&self) -> u16 {
        self.bits
    }

    /// 原始值超过16位时返回其十进制文本
    pub fn overflow(&self) -> Option<&str> {
        self.overflow.as_deref()
    }
}

impl From<u64> for Scanline {
    fn from(v: u64) -> Self {
        Self {
            bits: (v & SCANLINE_MASK) as u16,
            overflow: (v > SCANLINE_MASK).then(|| v.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Scanline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // arbitrary_precision 下 Number 保留原始文本，超过u64的值不会变成浮点数
        let n = serde_json::Number::deserialize(deserializer)?;
        let text = n.to_string();
        Self::from_digits(&text).ok_or_else(|| {
            de::Error::invalid_value(Unexpected::Other(&text), &"a non-negative integer")
        })
    }
}

/// 字形
///
/// 每个元素是一条扫描线，正常情况下应当恰好有16条，每条不超过16位
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Glyph {
    scanlines: Vec<Scanline>,
}

impl Glyph {
    pub fn new(scanlines: Vec<u64>) -> Self {
        Self {
            scanlines: scanlines.into_iter().map(Scanline::from).collect(),
        }
    }

    /// 16条全为0的空白字形
    pub fn blank() -> Self {
        Self::new(vec![0; GLYPH_HEIGHT])
    }

    pub fn scanlines(&self) -> &[Scanline] {
        &self.scanlines
    }

    pub fn height(&self) -> usize {
        self.scanlines.len()
    }

    pub fn is_well_formed(&self) -> bool {
        self.height() == GLYPH_HEIGHT
    }
}

/// 字形表
///
/// 键为十进制字符码字符串（"0".."254"），超出范围的键会被保留但不会被编译
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct GlyphTable {
    inner: BTreeMap<String, Glyph>,
}

impl GlyphTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从文件加载字形表
    ///
    /// 文件在解析前被完整读入内存并关闭
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FontError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| FontError::load(path, e))?;
        let table = Self::from_json(&content).map_err(|e| FontError::load(path, e))?;
        debug!("loaded {} glyphs from {:?}", table.len(), path);
        Ok(table)
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn get(&self, code: u32) -> Option<&Glyph> {
        self.inner.get(&code.to_string())
    }

    pub fn insert(&mut self, code: u32, glyph: Glyph) -> Option<Glyph> {
        self.inner.insert(code.to_string(), glyph)
    }

    /// 获取字符码对应的字形，不存在时插入空白字形
    ///
    /// 注意：这会修改字形表，并影响最终统计的字形数量
    pub fn get_or_insert_blank(&mut self, code: u32) -> &Glyph {
        self.inner
            .entry(code.to_string())
            .or_insert_with(Glyph::blank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table() {
        let table =
            GlyphTable::from_json(r#"{"65": [1, 2, 3], "300": [], "name": [65535]}"#).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(65), Some(&Glyph::new(vec![1, 2, 3])));
        assert_eq!(table.get(300).unwrap().height(), 0);
        assert!(table.get(66).is_none());
    }

    #[test]
    fn test_parse_invalid() {
        // 不是对象
        assert!(GlyphTable::from_json("[1, 2, 3]").is_err());
        // 负数
        assert!(GlyphTable::from_json(r#"{"1": [-1]}"#).is_err());
        // 非整数
        assert!(GlyphTable::from_json(r#"{"1": ["a"]}"#).is_err());
        assert!(GlyphTable::from_json(r#"{"1": [1.5]}"#).is_err());
        assert!(GlyphTable::from_json("{").is_err());
    }

    #[test]
    fn test_get_or_insert_blank() {
        let mut table = GlyphTable::new();
        table.insert(1, Glyph::new(vec![7; 16]));

        assert_eq!(table.get_or_insert_blank(1), &Glyph::new(vec![7; 16]));
        assert_eq!(table.len(), 1);

        let blank = table.get_or_insert_blank(2).clone();
        assert_eq!(blank, Glyph::blank());
        assert!(blank.is_well_formed());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_scanline_from_digits() {
        let s = Scanline::from_digits("65535").unwrap();
        assert_eq!(s.bits(), 0xFFFF);
        assert_eq!(s.overflow(), None);

        let s = Scanline::from_digits("131071").unwrap();
        assert_eq!(s.bits(), 0xFFFF);
        assert_eq!(s.overflow(), Some("131071"));

        // 2^64 + 1
        let s = Scanline::from_digits("18446744073709551617").unwrap();
        assert_eq!(s.bits(), 1);
        assert_eq!(s.overflow(), Some("18446744073709551617"));

        assert_eq!(Scanline::from_digits("007").unwrap(), Scanline::from(7));
        assert!(Scanline::from_digits("").is_none());
        assert!(Scanline::from_digits("-1").is_none());
        assert!(Scanline::from_digits("1.5").is_none());
        assert!(Scanline::from_digits("1e5").is_none());
    }

    #[test]
    fn test_parse_huge_scanline() {
        let table = GlyphTable::from_json(r#"{"65": [18446744073709551617, 65536, 3]}"#).unwrap();
        let scanlines = table.get(65).unwrap().scanlines();
        assert_eq!(scanlines[0].bits(), 1);
        assert_eq!(scanlines[0].overflow(), Some("18446744073709551617"));
        assert_eq!(scanlines[1].bits(), 0);
        assert_eq!(scanlines[1].overflow(), Some("65536"));
        assert_eq!(scanlines[2], Scanline::from(3));
    }
}
