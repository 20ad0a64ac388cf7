use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use log::{info, warn};

use crate::{
    bits::encode_scanline,
    constant::CHAR_CODES,
    error::{CompileWarning, FontError},
    glyph::{Glyph, GlyphTable},
};

/// 一次编译的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileReport {
    /// 编译结束后字形表中的字形数量（包含补齐的空白字形）
    pub glyph_count: usize,
    pub bytes_written: usize,
    pub warnings: Vec<CompileWarning>,
}

/// 字体编译器
///
/// 按字符码 0..255 的顺序，把每个字形的扫描线逆序写出，
/// 每条扫描线输出两个位序翻转后的字节（低字节在前）
#[derive(Debug, Default)]
pub struct FontCompiler {
    warnings: Vec<CompileWarning>,
    bytes_written: usize,
}

impl FontCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// 将字形表编译到输出流
    ///
    /// ## 参数
    ///
    /// - `table` - 字形表，缺失的字符码会被插入空白字形
    /// - `out` - 输出流
    ///
    /// ## 返回值
    ///
    /// 编译结果，只有写出失败时才会返回错误
    pub fn compile_table<W: Write>(
        mut self,
        table: &mut GlyphTable,
        out: &mut W,
    ) -> io::Result<CompileReport> {
        for code in CHAR_CODES {
            let glyph = table.get_or_insert_blank(code);
            self.encode_glyph(code, glyph, out)?;
        }

        Ok(CompileReport {
            glyph_count: table.len(),
            bytes_written: self.bytes_written,
            warnings: self.warnings,
        })
    }

    fn encode_glyph<W: Write>(&mut self, code: u32, glyph: &Glyph, out: &mut W) -> io::Result<()> {
        if !glyph.is_well_formed() {
            // 高度不对时不补齐也不截断，输出内容是未定义的
            self.warn(CompileWarning::Height {
                code,
                height: glyph.height(),
            });
        }

        for scanline in glyph.scanlines().iter().rev() {
            if let Some(value) = scanline.overflow() {
                // 高位直接丢弃
                self.warn(CompileWarning::TooManyBits {
                    code,
                    value: value.to_string(),
                });
            }
            let bytes = encode_scanline(scanline.bits());
            out.write_all(&bytes)?;
            self.bytes_written += bytes.len();
        }
        Ok(())
    }

    fn warn(&mut self, w: CompileWarning) {
        warn!("{}", w);
        self.warnings.push(w);
    }
}

/// 编译字体文件
///
/// 先完整加载字形表，加载成功后才创建输出文件，因此加载失败不会留下残缺的输出
pub fn compile(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<CompileReport, FontError> {
    let (input, output) = (input.as_ref(), output.as_ref());
    let mut table = GlyphTable::load(input)?;

    let file = File::create(output).map_err(|e| FontError::write(output, e))?;
    let mut writer = BufWriter::new(file);
    let report = FontCompiler::new()
        .compile_table(&mut table, &mut writer)
        .map_err(|e| FontError::write(output, e))?;
    writer.flush().map_err(|e| FontError::write(output, e))?;

    info!(
        "compiled {:?} -> {:?}: {} bytes, {} warnings",
        input,
        output,
        report.bytes_written,
        report.warnings.len()
    );
    Ok(report)
}
