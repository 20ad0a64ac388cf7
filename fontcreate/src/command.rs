use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::constant::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};

/// 不带参数运行时使用固定的输入输出路径
#[derive(Debug, Parser, Clone)]
#[command(version, about)]
pub struct CommandLineArgs {
    /// The glyph table to compile.
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Where to write the font blob.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,

    /// Print the compiled glyph of the given character code.
    #[arg(long, value_name = "CODE", value_parser = char_code_parser)]
    pub preview: Vec<u32>,
}

/// 用于解析preview参数的函数
fn char_code_parser(s: &str) -> Result<u32, String> {
    let code: u32 = s.parse().map_err(|e| format!("{}: {}", s, e))?;
    if code >= 255 {
        return Err(format!("character code {} is out of range 0..255", code));
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CommandLineArgs::try_parse_from(["fontcreate"]).unwrap();
        assert_eq!(args.input, PathBuf::from("fonts/fontcreate/font.json"));
        assert_eq!(args.output, PathBuf::from("fonts/font.dat"));
        assert_eq!(args.log_level, LevelFilter::Warn);
        assert!(args.preview.is_empty());
    }

    #[test]
    fn test_preview_codes() {
        let args = CommandLineArgs::try_parse_from([
            "fontcreate",
            "-i",
            "a.json",
            "--preview",
            "65",
            "--preview",
            "0",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("a.json"));
        assert_eq!(args.preview, vec![65, 0]);

        assert!(CommandLineArgs::try_parse_from(["fontcreate", "--preview", "255"]).is_err());
        assert!(CommandLineArgs::try_parse_from(["fontcreate", "--preview", "x"]).is_err());
    }
}
