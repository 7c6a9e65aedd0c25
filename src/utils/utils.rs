use std::io;
use indicatif::{ProgressBar, ProgressStyle};

/// 截斷進度列上顯示的檔名
const MAX_NAME_CHARS: usize = 25;

pub fn setup_logging(log_level: &str) -> io::Result<()> {
    let log_level_filter = match log_level {
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    // 互動模式每輪都會呼叫，已初始化時忽略即可
    let _ = env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init();
    Ok(())
}

pub struct ProgressManager {
    pb: ProgressBar,
    no_progress: bool,
}

impl ProgressManager {
    pub fn new(total: u64, no_progress: bool) -> Self {
        let pb = if no_progress {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:40}] {pos}/{len} [{elapsed_precise}<{eta_precise}, {per_sec}]")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("##-"),
            );
            pb.set_message("轉換中");
            pb
        };
        ProgressManager { pb, no_progress }
    }

    pub fn hidden() -> Self {
        Self::new(0, true)
    }

    /// 一個檔案處理完畢（不論成功與否）
    pub fn advance(&self, output_name: Option<&str>) {
        if let Some(name) = output_name {
            self.pb.set_message(name.to_string());
        }
        self.pb.inc(1);
    }

    /// 在進度列上方輸出一行訊息，不打亂進度列
    pub fn println(&self, msg: &str) {
        if self.no_progress {
            println!("{}", msg);
        } else {
            self.pb.println(msg);
        }
    }

    pub fn finish(&self) {
        if self.no_progress {
            return;
        }
        self.pb.finish_with_message("完成");
    }
}

pub fn create_progress_bar(total: u64, no_progress: bool) -> ProgressManager {
    ProgressManager::new(total, no_progress)
}

pub fn truncate_name(name: &str, max_chars: usize) -> String {
    name.chars().take(max_chars).collect()
}

/// 進度列顯示的輸出檔名：只截斷主檔名，副檔名完整保留
pub fn progress_label(stem: &str, extension: &str) -> String {
    format!("{}.{}", truncate_name(stem, MAX_NAME_CHARS), extension)
}

pub fn format_file_size(size: u64) -> String {
    const KB: f64 = 1024.0;
    let size_f = size as f64;
    if size < 1024 {
        format!("{} B", size)
    } else if size_f < KB * KB {
        format!("{:.2} KB", size_f / KB)
    } else if size_f < KB * KB * KB {
        format!("{:.2} MB", size_f / (KB * KB))
    } else {
        format!("{:.2} GB", size_f / (KB * KB * KB))
    }
}
