use serde::Serialize;
use ts_rs::TS;

use crate::models::assignments::responses::{
    StudentAssignmentCard, TeacherAssignmentCard, UpcomingDeadline,
};
use crate::models::submissions::responses::SubmissionCard;

/// 学生统计卡片
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct StudentStats {
    pub completed: usize,
    pub pending: usize,
    pub to_do: usize,
    pub average_score: f64,
}

/// 学习进度概览
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct ProgressOverview {
    pub total: usize,
    pub completed: usize,
    pub completion_percent: i64,
    pub average_score: i64,
}

/// 学生面板快照，各标签页共享同一次分区结果
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct StudentDashboardSnapshot {
    pub username: String,
    pub stats: StudentStats,
    pub overview: ProgressOverview,
    pub all: Vec<StudentAssignmentCard>,
    pub to_do: Vec<StudentAssignmentCard>,
    pub submitted: Vec<StudentAssignmentCard>,
    pub graded: Vec<StudentAssignmentCard>,
    pub upcoming_deadlines: Vec<UpcomingDeadline>,
}

/// 教师统计卡片
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct TeacherStats {
    pub active_assignments: usize,
    pub pending_reviews: usize,
    pub graded: usize,
    pub average_score: f64,
}

/// 教师面板快照
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct TeacherDashboardSnapshot {
    pub username: String,
    pub stats: TeacherStats,
    pub assignments: Vec<TeacherAssignmentCard>,
    pub submissions: Vec<SubmissionCard>,
    pub pending: Vec<SubmissionCard>,
    pub graded: Vec<SubmissionCard>,
}

/// 当前挂载的面板快照
#[derive(Debug, Clone, Serialize, TS)]
#[serde(tag = "role", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub enum DashboardSnapshot {
    Teacher(TeacherDashboardSnapshot),
    Student(StudentDashboardSnapshot),
}
