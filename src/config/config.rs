use clap::{Parser, ValueEnum};
use std::io;
use std::path::Path;

/// 來源格式的副檔名（比對時忽略大小寫）
pub const SOURCE_EXTENSION: &str = "icns";

#[derive(Parser, Clone, Debug)]
#[command(
    name = "icns_to_png",
    about = "將 .icns 圖示檔批次轉換為 PNG（保留透明度）",
    long_about = "掃描輸入目錄中的 .icns 檔案，取出每個圖示家族中最大的圖像並輸出為 PNG，完成後顯示大小統計。\n不帶任何參數執行時進入互動模式。"
)]
pub struct Cli {
    #[arg(short, long, default_value = "input")]
    pub input: String,
    #[arg(short, long, default_value = "output")]
    pub output: String,
    #[arg(long, default_value = "png")]
    pub format: OutputFormat,
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
    #[arg(long, default_value = "info", value_parser = ["info", "warn", "error"])]
    pub log_level: String,
}

/// 輸出格式，目前固定只有 PNG 一種
#[derive(Clone, Copy, ValueEnum, PartialEq, Eq, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Png,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Png => "PNG（保留透明度）",
        }
    }
}

pub fn validate_input_dir(input: &str) -> io::Result<&Path> {
    let path = Path::new(input);
    if path.exists() && !path.is_dir() {
        log::error!("輸入路徑不是目錄：{}", input);
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("輸入路徑 '{}' 不是目錄", input)
        ));
    }
    Ok(path)
}

pub fn validate_dirs(input: &str, output: &str) -> io::Result<()> {
    validate_input_dir(input)?;
    if Path::new(input) == Path::new(output) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "輸出目錄不可與輸入目錄相同"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_same_input_and_output() {
        let err = validate_dirs("icons", "icons").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn accepts_missing_input_dir() {
        assert!(validate_dirs("does-not-exist-yet", "output").is_ok());
    }

    #[test]
    fn rejects_file_as_input_dir() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_string_lossy().to_string();
        assert!(validate_input_dir(&path).is_err());
    }

    #[test]
    fn png_is_the_only_format() {
        assert_eq!(OutputFormat::default(), OutputFormat::Png);
        assert_eq!(OutputFormat::value_variants().len(), 1);
        assert_eq!(OutputFormat::Png.extension(), "png");
    }

    #[test]
    fn parses_cli_defaults() {
        let cli = Cli::parse_from(["icns_to_png", "--no-progress"]);
        assert_eq!(cli.input, "input");
        assert_eq!(cli.output, "output");
        assert_eq!(cli.format, OutputFormat::Png);
        assert!(cli.no_progress);
        assert_eq!(cli.log_level, "info");
    }
}
