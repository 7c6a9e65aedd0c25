use std::io;
use std::path::Path;
use crate::models::conversion::{BatchOutcome, ConversionInput, ConversionOutput};
use crate::models::file::{Discovery, InputFile};
use crate::utils::utils::ProgressManager;

// Facade 接口，負責協調掃描、批次轉換流程
pub trait ConversionFacadeTrait: Send + Sync {
    /// 掃描輸入目錄
    /// # 回傳
    /// - 成功時返回掃描結果，目錄無法建立或讀取時返回 IO 錯誤
    fn discover(&self, input_dir: &Path) -> io::Result<Discovery>;

    /// 依序轉換所有檔案，單一檔案失敗不會中斷批次
    /// # 參數
    /// - files: 掃描得到的來源檔案
    /// - output_dir: 輸出目錄，不存在時會建立
    /// - progress: 進度顯示
    /// # 回傳
    /// - 成功與失敗的逐檔結果；只有輸出目錄無法建立時返回 IO 錯誤
    fn convert(&self, files: &[InputFile], output_dir: &Path, progress: &ProgressManager) -> io::Result<BatchOutcome>;

    /// 執行一次完整的掃描與轉換
    fn execute_conversion(&self, input: ConversionInput) -> io::Result<ConversionOutput>;
}
