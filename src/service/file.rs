use std::fs;
use std::io;
use std::path::Path;
use log::{info, warn};
use walkdir::WalkDir;
use crate::models::file::{Discovery, FileCollectInput, InputFile};
use crate::service::traits::i_service::FileServiceTrait;

/// 檔案服務，負責掃描輸入目錄並實現 FileServiceTrait
pub struct FileService;

impl FileService {
    pub fn new() -> Self {
        FileService
    }
}

impl Default for FileService {
    fn default() -> Self {
        Self::new()
    }
}

impl FileServiceTrait for FileService {
    fn collect_files(&self, input: FileCollectInput) -> io::Result<Discovery> {
        fs::create_dir_all(&input.input_dir)?;

        let mut files = Vec::new();
        for entry in WalkDir::new(&input.input_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            // 失效的連結只略過該項目，目錄本身無法讀取才是致命錯誤
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() > 0 => {
                    warn!("無法讀取項目，略過：{}", e);
                    continue;
                }
                Err(e) => return Err(io::Error::from(e)),
            };
            if !entry.file_type().is_file() || !has_extension(entry.path(), &input.extension) {
                continue;
            }
            match entry.metadata() {
                Ok(metadata) => files.push(InputFile {
                    path: entry.path().to_path_buf(),
                    name: entry.file_name().to_string_lossy().to_string(),
                    size: metadata.len(),
                }),
                Err(e) => warn!("無法讀取檔案資訊，略過：{}，原因：{}", entry.path().display(), e),
            }
        }

        info!("掃描目錄：{}，找到 {} 個 .{} 檔案", input.input_dir.display(), files.len(), input.extension);
        Ok(Discovery::from_files(files))
    }
}

pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}
