use std::io;
use crate::config::config::OutputFormat;
use crate::models::conversion::ConversionOutput;

// 應用配置結構體，封裝一次轉換所需的參數
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub input: String,
    pub output: String,
    pub format: OutputFormat,
    pub no_progress: bool,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}

// 轉換執行的 Port
pub trait ConversionPort {
    fn execute(&self, config: AppConfig) -> io::Result<ConversionOutput>;
}
