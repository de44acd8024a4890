//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `models/`, `physics/`, `utils/`
//! - 子模块: calc, map, sweep, visualize, explain

pub mod calc;
pub mod explain;
pub mod map;
pub mod sweep;
pub mod visualize;

use crate::cli::{Commands, OutputFormat};
use crate::error::{Result, TunnelError};

use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Calc(args) => calc::execute(args),
        Commands::Map(args) => map::execute(args),
        Commands::Sweep(args) => sweep::execute(args),
        Commands::Visualize(args) => visualize::execute(args),
        Commands::Explain => explain::execute(),
    }
}

/// 从文件扩展名推断输出格式
pub(crate) fn guess_format_from_extension(path: &Path) -> OutputFormat {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .as_deref()
    {
        Some("svg") => OutputFormat::Svg,
        Some("csv") => OutputFormat::Csv,
        Some("xy") | Some("dat") | Some("txt") => OutputFormat::Xy,
        _ => OutputFormat::Png,
    }
}

/// 检查输出路径是否可写（已存在且未指定 --overwrite 时报错）
pub(crate) fn ensure_writable(path: &Path, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        return Err(TunnelError::FileExists {
            path: path.display().to_string(),
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| TunnelError::FileWriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_format() {
        assert_eq!(guess_format_from_extension(Path::new("a.SVG")), OutputFormat::Svg);
        assert_eq!(guess_format_from_extension(Path::new("a.csv")), OutputFormat::Csv);
        assert_eq!(guess_format_from_extension(Path::new("a.dat")), OutputFormat::Xy);
        assert_eq!(guess_format_from_extension(Path::new("a.png")), OutputFormat::Png);
        assert_eq!(guess_format_from_extension(Path::new("noext")), OutputFormat::Png);
    }

    #[test]
    fn test_ensure_writable() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("map.png");
        ensure_writable(&nested, false).unwrap();
        assert!(dir.path().join("out").is_dir());

        std::fs::write(&nested, b"x").unwrap();
        assert!(matches!(
            ensure_writable(&nested, false),
            Err(TunnelError::FileExists { .. })
        ));
        assert!(ensure_writable(&nested, true).is_ok());
    }
}
