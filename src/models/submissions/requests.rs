use serde::Deserialize;
use ts_rs::TS;

/// 评分表单（分数以原始文本提交）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradeSubmissionRequest {
    pub score: String,
    #[serde(default)]
    pub feedback: String,
}
