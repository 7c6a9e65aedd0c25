use std::io;
use std::path::Path;
use crate::error::ConvertError;
use crate::models::conversion::ConversionResult;
use crate::models::file::{Discovery, FileCollectInput, InputFile};

// File 服務接口，負責掃描來源檔案
pub trait FileServiceTrait: Send + Sync {
    /// 掃描輸入目錄中符合副檔名的檔案
    /// # 參數
    /// - input: 掃描所需的輸入參數
    /// # 回傳
    /// - 成功時返回掃描結果（可能為空），目錄無法建立或讀取時返回 IO 錯誤
    fn collect_files(&self, input: FileCollectInput) -> io::Result<Discovery>;
}

// Image 服務接口，負責單一檔案的解碼、正規化與編碼
pub trait ImageServiceTrait: Send + Sync {
    /// 將單一來源檔案轉換為輸出目錄中的 PNG
    /// # 參數
    /// - file: 來源檔案
    /// - output_dir: 輸出目錄（必須已存在）
    /// # 回傳
    /// - 成功時返回大小紀錄，失敗時返回該檔案的轉換錯誤
    fn convert_file(&self, file: &InputFile, output_dir: &Path) -> Result<ConversionResult, ConvertError>;
}
