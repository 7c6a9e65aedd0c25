use crate::models::conversion::{BatchOutcome, ConversionResult};
use crate::models::summary::{SizeChange, Summary, TopEntry};

pub const TOP_LARGEST: usize = 3;

/// 計算批次轉換的大小統計；沒有成功結果時返回 None
pub fn summarize(outcome: &BatchOutcome) -> Option<Summary> {
    let results = &outcome.results;
    if results.is_empty() {
        return None;
    }

    let total_original: u64 = results.iter().map(|r| r.original_size).sum();
    let total_converted: u64 = results.iter().map(|r| r.converted_size).sum();
    let delta = total_converted as i64 - total_original as i64;

    Some(Summary {
        file_count: results.len(),
        total_original,
        total_converted,
        delta,
        change: SizeChange::from_delta(delta),
        largest: largest_outputs(results, TOP_LARGEST),
    })
}

/// 依輸出大小由大到小取前 n 筆，同大小時維持掃描順序
pub fn largest_outputs(results: &[ConversionResult], n: usize) -> Vec<TopEntry> {
    let mut sorted: Vec<&ConversionResult> = results.iter().collect();
    sorted.sort_by(|a, b| b.converted_size.cmp(&a.converted_size));
    sorted
        .into_iter()
        .take(n)
        .map(|r| TopEntry {
            filename: r.filename.clone(),
            original_size: r.original_size,
            converted_size: r.converted_size,
            ratio: size_ratio(r.original_size, r.converted_size),
        })
        .collect()
}

/// 原始大小為 0 時固定為 1.0
pub fn size_ratio(original_size: u64, converted_size: u64) -> f64 {
    if original_size == 0 {
        1.0
    } else {
        converted_size as f64 / original_size as f64
    }
}
