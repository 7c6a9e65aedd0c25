use std::path::PathBuf;

/// 掃描時找到的來源檔案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
}

impl InputFile {
    /// 不含副檔名的檔名，用於決定輸出檔名
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.name.clone())
    }
}

#[derive(Clone)]
pub struct FileCollectInput {
    pub input_dir: PathBuf,
    pub extension: String,
}

/// 掃描結果；沒有檔案是正常狀態，不是錯誤
#[derive(Debug, PartialEq, Eq)]
pub enum Discovery {
    Empty,
    Found(Vec<InputFile>),
}

impl Discovery {
    pub fn from_files(files: Vec<InputFile>) -> Self {
        if files.is_empty() {
            Discovery::Empty
        } else {
            Discovery::Found(files)
        }
    }
}
