use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{PortalError, Result};

/// 作业状态（学生视角），只能单向推进
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum AssignmentStatus {
    NotStarted,
    Submitted,
    Graded,
}

impl AssignmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AssignmentStatus::NotStarted => "Not Started",
            AssignmentStatus::Submitted => "Submitted",
            AssignmentStatus::Graded => "Graded",
        }
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentStatus::NotStarted => write!(f, "not_started"),
            AssignmentStatus::Submitted => write!(f, "submitted"),
            AssignmentStatus::Graded => write!(f, "graded"),
        }
    }
}

/// 作业进度，附带各状态下才存在的字段
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum AssignmentProgress {
    NotStarted,
    Submitted {
        #[serde(rename = "submittedAt")]
        submitted_at: String,
    },
    Graded {
        #[serde(rename = "submittedAt")]
        submitted_at: String,
        score: i64,
        feedback: String,
    },
}

/// 学生视角的作业
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct StudentAssignment {
    pub id: String,
    pub title: String,
    pub description: String,
    // 截止日期，不含时区
    pub due_date: NaiveDate,
    pub max_score: i64,
    #[serde(flatten)]
    #[ts(flatten)]
    pub progress: AssignmentProgress,
}

impl StudentAssignment {
    pub fn status(&self) -> AssignmentStatus {
        match self.progress {
            AssignmentProgress::NotStarted => AssignmentStatus::NotStarted,
            AssignmentProgress::Submitted { .. } => AssignmentStatus::Submitted,
            AssignmentProgress::Graded { .. } => AssignmentStatus::Graded,
        }
    }

    pub fn score(&self) -> Option<i64> {
        match self.progress {
            AssignmentProgress::Graded { score, .. } => Some(score),
            _ => None,
        }
    }

    pub fn feedback(&self) -> Option<&str> {
        match &self.progress {
            AssignmentProgress::Graded { feedback, .. } => Some(feedback),
            _ => None,
        }
    }

    pub fn submitted_at(&self) -> Option<&str> {
        match &self.progress {
            AssignmentProgress::NotStarted => None,
            AssignmentProgress::Submitted { submitted_at }
            | AssignmentProgress::Graded { submitted_at, .. } => Some(submitted_at),
        }
    }

    /// NotStarted → Submitted
    pub fn submit(&mut self, submitted_at: impl Into<String>) -> Result<()> {
        match self.progress {
            AssignmentProgress::NotStarted => {
                self.progress = AssignmentProgress::Submitted {
                    submitted_at: submitted_at.into(),
                };
                Ok(())
            }
            _ => Err(PortalError::invalid_transition(format!(
                "Assignment {} is already {}, cannot submit again",
                self.id,
                self.status()
            ))),
        }
    }

    /// Submitted → Graded
    pub fn grade(&mut self, score: i64, feedback: impl Into<String>) -> Result<()> {
        match &self.progress {
            AssignmentProgress::Submitted { submitted_at } => {
                self.progress = AssignmentProgress::Graded {
                    submitted_at: submitted_at.clone(),
                    score,
                    feedback: feedback.into(),
                };
                Ok(())
            }
            _ => Err(PortalError::invalid_transition(format!(
                "Assignment {} is {}, only submitted work can be graded",
                self.id,
                self.status()
            ))),
        }
    }
}

/// 教师视角的作业（聚合提交数）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct TeacherAssignment {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    pub max_score: i64,
    // 已收到的提交数，与提交列表无关联
    pub submissions: i64,
    pub total_students: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn not_started() -> StudentAssignment {
        StudentAssignment {
            id: "3".to_string(),
            title: "API Integration Project".to_string(),
            description: String::new(),
            due_date: NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(),
            max_score: 90,
            progress: AssignmentProgress::NotStarted,
        }
    }

    #[test]
    fn test_forward_only_progression() {
        let mut assignment = not_started();
        assignment.submit("2024-12-20 10:00").unwrap();
        assert_eq!(assignment.status(), AssignmentStatus::Submitted);
        assert_eq!(assignment.submitted_at(), Some("2024-12-20 10:00"));

        assignment.grade(80, "Solid").unwrap();
        assert_eq!(assignment.status(), AssignmentStatus::Graded);
        assert_eq!(assignment.score(), Some(80));
        assert_eq!(assignment.feedback(), Some("Solid"));
        // 评分后保留提交时间
        assert_eq!(assignment.submitted_at(), Some("2024-12-20 10:00"));
    }

    #[test]
    fn test_cannot_skip_submitted() {
        let mut assignment = not_started();
        let err = assignment.grade(80, "").unwrap_err();
        assert_eq!(err.code(), "P004");
        assert_eq!(assignment.status(), AssignmentStatus::NotStarted);
    }

    #[test]
    fn test_cannot_resubmit_graded() {
        let mut assignment = not_started();
        assignment.submit("2024-12-20 10:00").unwrap();
        assignment.grade(80, "").unwrap();

        assert!(assignment.submit("2024-12-21 10:00").is_err());
        assert!(assignment.grade(10, "again").is_err());
        assert_eq!(assignment.status(), AssignmentStatus::Graded);
        assert_eq!(assignment.score(), Some(80));
    }

    #[test]
    fn test_serialized_shape_is_flat() {
        let mut assignment = not_started();
        assignment.submit("2024-12-20 10:00").unwrap();
        let value = serde_json::to_value(&assignment).unwrap();
        assert_eq!(value["status"], "submitted");
        assert_eq!(value["submittedAt"], "2024-12-20 10:00");
        assert_eq!(value["dueDate"], "2024-12-25");
        assert_eq!(value["maxScore"], 90);
        assert!(value.get("score").is_none());
    }

    #[test]
    fn test_status_ordering_follows_lifecycle() {
        assert!(AssignmentStatus::NotStarted < AssignmentStatus::Submitted);
        assert!(AssignmentStatus::Submitted < AssignmentStatus::Graded);
    }
}
