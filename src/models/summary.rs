/// 總大小變化方向與幅度（位元組）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeChange {
    Increased(u64),
    Decreased(u64),
    Unchanged,
}

impl SizeChange {
    pub fn from_delta(delta: i64) -> Self {
        match delta {
            d if d > 0 => SizeChange::Increased(d.unsigned_abs()),
            d if d < 0 => SizeChange::Decreased(d.unsigned_abs()),
            _ => SizeChange::Unchanged,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopEntry {
    pub filename: String,
    pub original_size: u64,
    pub converted_size: u64,
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub file_count: usize,
    pub total_original: u64,
    pub total_converted: u64,
    pub delta: i64,
    pub change: SizeChange,
    pub largest: Vec<TopEntry>,
}
