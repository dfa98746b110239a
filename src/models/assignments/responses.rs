use chrono::NaiveDate;
use serde::Serialize;
use ts_rs::TS;

use super::entities::{StudentAssignment, TeacherAssignment};

/// 学生作业卡片
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct StudentAssignmentCard {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: StudentAssignment,
    pub status_label: String,
    // 可能为负数（已逾期）
    pub days_until_due: i64,
    // 仅未开始且剩余天数为正时显示
    pub show_days_left: bool,
    pub score_percent: Option<i64>,
    pub can_submit: bool,
}

/// 教师作业卡片
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct TeacherAssignmentCard {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: TeacherAssignment,
    pub days_until_due: i64,
    pub submission_percent: i64,
    pub completion_label: String,
}

/// 临近截止的作业
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct UpcomingDeadline {
    pub id: String,
    pub title: String,
    pub due_date: NaiveDate,
    pub days_until_due: i64,
}
