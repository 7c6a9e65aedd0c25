use std::fmt::Write;
use crate::config::config::{OutputFormat, SOURCE_EXTENSION};
use crate::models::conversion::ConversionFailure;
use crate::models::summary::{SizeChange, Summary};
use crate::utils::utils::format_file_size;

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn render_header() -> String {
    format!(" 將 {} 轉換為 png \n{}\n", SOURCE_EXTENSION, rule())
}

pub fn render_found(count: usize, format: OutputFormat) -> String {
    format!(
        "找到 {} 個 .{} 檔案，開始轉換為 {}...",
        count, SOURCE_EXTENSION, format.label()
    )
}

pub fn render_empty(input_dir: &str) -> String {
    format!("'{}' 目錄中沒有 .{} 檔案。", input_dir, SOURCE_EXTENSION)
}

pub fn render_failure(filename: &str, error: &dyn std::fmt::Display) -> String {
    format!("錯誤 {}：{}", filename, error)
}

pub fn render_failures(failures: &[ConversionFailure]) -> String {
    let mut out = format!("轉換失敗 {} 個檔案：", failures.len());
    for failure in failures {
        let _ = write!(out, "\n   • {}", render_failure(&failure.filename, &failure.error));
    }
    out
}

pub fn render_change(change: SizeChange) -> String {
    match change {
        SizeChange::Increased(bytes) => format!("↑ {}", format_file_size(bytes)),
        SizeChange::Decreased(bytes) => format!("↓ {}", format_file_size(bytes)),
        SizeChange::Unchanged => format!("= {}", format_file_size(0)),
    }
}

/// 將統計結果轉為終端輸出文字，不含任何副作用
pub fn render_summary(summary: &Summary, format: OutputFormat) -> String {
    let mut out = String::new();
    let _ = writeln!(out, " 轉換完成 ");
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "已轉換檔案：{}", summary.file_count);
    let _ = writeln!(out, "格式：{}", format.label());
    let _ = writeln!(out, "大小統計：");
    let _ = writeln!(out, "   原始：{}", format_file_size(summary.total_original));
    let _ = writeln!(out, "   轉換後：{}", format_file_size(summary.total_converted));
    let _ = writeln!(out, "   變化：{}", render_change(summary.change));

    if !summary.largest.is_empty() {
        let _ = writeln!(out, "\n輸出最大的 {} 個檔案：", summary.largest.len());
        for entry in &summary.largest {
            let _ = writeln!(
                out,
                "   • {}：{} → {}（{:.2}x）",
                entry.filename,
                format_file_size(entry.original_size),
                format_file_size(entry.converted_size),
                entry.ratio
            );
        }
    }
    out
}
