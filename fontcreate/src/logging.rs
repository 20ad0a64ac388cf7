use std::io::Write;

use env_logger::{Builder, Target};
use log::LevelFilter;

/// 初始化日志
///
/// 设置了 `RUST_LOG` 时以环境变量为准，否则使用 `level`。
/// 日志输出到标准输出，不带时间戳
pub fn init(level: LevelFilter) {
    let result = Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .try_init();

    if let Err(e) = result {
        eprintln!("Failed to init logger: {}", e);
    }
}
