use serde::Serialize;
use ts_rs::TS;

use super::entities::Submission;

/// 提交卡片
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionCard {
    #[serde(flatten)]
    #[ts(flatten)]
    pub submission: Submission,
    // 已评分显示 "score/max"，否则显示 "Pending"
    pub badge: String,
    pub can_grade: bool,
}
