use std::path::PathBuf;
use crate::config::config::OutputFormat;
use crate::error::ConvertError;

#[derive(Clone)]
pub struct ConversionInput {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub no_progress: bool,
}

/// 單一檔案成功轉換後的大小紀錄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    pub filename: String,
    pub original_size: u64,
    pub converted_size: u64,
}

#[derive(Debug)]
pub struct ConversionFailure {
    pub filename: String,
    pub error: ConvertError,
}

/// 一次批次轉換的結果，成功與失敗皆保留掃描順序
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub results: Vec<ConversionResult>,
    pub failures: Vec<ConversionFailure>,
}

impl BatchOutcome {
    /// 將逐檔結果拆分為成功與失敗兩組
    pub fn partition<I>(items: I) -> Self
    where
        I: IntoIterator<Item = (String, Result<ConversionResult, ConvertError>)>,
    {
        let mut outcome = BatchOutcome::default();
        for (filename, item) in items {
            match item {
                Ok(result) => outcome.results.push(result),
                Err(error) => outcome.failures.push(ConversionFailure { filename, error }),
            }
        }
        outcome
    }

    pub fn processed(&self) -> usize {
        self.results.len() + self.failures.len()
    }
}

#[derive(Debug)]
pub struct ConversionOutput {
    pub output_path: String,
    pub discovered: usize,
    pub outcome: BatchOutcome,
}
