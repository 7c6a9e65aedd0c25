use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 單一檔案在讀取、解碼、正規化或寫入時發生的錯誤。
/// 這類錯誤只影響該檔案，批次轉換會繼續處理下一個檔案。
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("檔案讀寫失敗：{0}")]
    Io(#[from] io::Error),

    #[error("無法解析圖示檔：{0}")]
    Decode(String),

    #[error("圖示檔中沒有可解碼的圖像")]
    NoIcon,

    #[error("像素資料與尺寸 {width}x{height} 不符")]
    InvalidPixelData { width: u32, height: u32 },

    #[error("PNG 編碼失敗：{0}")]
    Encode(#[from] image::ImageError),

    #[error("輸出檔案大小為 0：{}", .0.display())]
    EmptyOutput(PathBuf),
}
