//! 位图字体编译工具
//!
//! 将人工编辑的字形表（`font.json`）编译为渲染端使用的定长二进制字体文件（`font.dat`）。

extern crate clap;

pub mod bits;
pub mod character;
pub mod command;
pub mod compiler;
pub mod constant;
pub mod error;
pub mod glyph;
pub mod logging;

pub use compiler::{compile, CompileReport, FontCompiler};
pub use error::{CompileWarning, FontError};
pub use glyph::{Glyph, GlyphTable};
