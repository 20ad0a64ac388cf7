use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

/// 字体编译过程中的致命错误
#[derive(Debug, Error)]
pub enum FontError {
    /// 字形表不存在或无法解析
    #[error("Failed to load {path:?}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: LoadErrorKind,
    },

    #[error("Failed to write font file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Font blob too short: {len} bytes")]
    Blob { len: usize },

    #[error("Character code {code} is out of range 0..255")]
    Preview { code: u32 },
}

#[derive(Debug, Error)]
pub enum LoadErrorKind {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] serde_json::Error),
}

impl FontError {
    pub fn load(path: impl Into<PathBuf>, source: impl Into<LoadErrorKind>) -> Self {
        Self::Load {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

/// 编译过程中的非致命异常
///
/// 出现时只记录日志，编译继续进行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileWarning {
    /// 字形的扫描线数量不等于16
    Height { code: u32, height: usize },
    /// 扫描线的值超过16位，高位被丢弃
    ///
    /// `value` 是原始值的十进制文本，可能超出任何整数类型的范围
    TooManyBits { code: u32, value: String },
}

impl CompileWarning {
    pub fn code(&self) -> u32 {
        match self {
            CompileWarning::Height { code, .. } => *code,
            CompileWarning::TooManyBits { code, .. } => *code,
        }
    }
}

impl Display for CompileWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileWarning::Height { code, .. } => write!(f, "Height != 16 for {}", code),
            CompileWarning::TooManyBits { value, .. } => {
                write!(f, "Warning {} contains too many bits", value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_messages() {
        let w = CompileWarning::Height {
            code: 65,
            height: 10,
        };
        assert_eq!(w.to_string(), "Height != 16 for 65");
        assert_eq!(w.code(), 65);

        let w = CompileWarning::TooManyBits {
            code: 66,
            value: "131071".to_string(),
        };
        assert_eq!(w.to_string(), "Warning 131071 contains too many bits");
        assert_eq!(w.code(), 66);
    }

    #[test]
    fn test_load_error_keeps_path() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = FontError::load("fonts/missing.json", io_err);
        let msg = err.to_string();
        assert!(msg.contains("fonts/missing.json"), "{}", msg);
        assert!(matches!(
            err,
            FontError::Load {
                source: LoadErrorKind::Io(_),
                ..
            }
        ));
    }
}
