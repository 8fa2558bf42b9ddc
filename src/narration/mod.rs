pub mod batch;

pub use batch::{generate_all, generate_segment, BatchReport, SegmentOutcome, SegmentReport};

/// One narration line of the promo script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub id: &'static str,
    pub text: &'static str,
}

impl Segment {
    pub const fn new(id: &'static str, text: &'static str) -> Self {
        Self { id, text }
    }

    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{}", self.id, extension)
    }
}

/// Narration for the promo video, in playback order
pub const PROMO_SEGMENTS: [Segment; 8] = [
    Segment::new("01_hook", "拍片一时爽，选片火葬场"),
    Segment::new("02_problem", "800张照片，哪张最锐？让AI帮你3分钟搞定"),
    Segment::new("03_feature1", "自动检测鸟眼位置"),
    Segment::new("04_feature2", "计算头部锐度"),
    Segment::new("05_feature3", "识别飞行姿态"),
    Segment::new("06_feature4", "一键评分分类"),
    Segment::new("07_result", "精选照片，张张能打"),
    Segment::new("08_cta", "免费下载 able SuperPicky 慧眼选鸟"),
];
