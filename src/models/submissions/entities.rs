use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{PortalError, Result};

/// 提交状态（教师视角）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionStatus {
    Pending,
    Graded,
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Pending => write!(f, "pending"),
            SubmissionStatus::Graded => write!(f, "graded"),
        }
    }
}

/// 评分状态，分数与评语同时写入
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum GradeState {
    Pending,
    Graded { score: i64, feedback: String },
}

/// 学生提交记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: String,
    pub student_name: String,
    // 作业标题的文本副本，并非外键
    pub assignment_title: String,
    pub submitted_at: String,
    pub max_score: i64,
    #[serde(flatten)]
    #[ts(flatten)]
    pub grade: GradeState,
}

impl Submission {
    pub fn status(&self) -> SubmissionStatus {
        match self.grade {
            GradeState::Pending => SubmissionStatus::Pending,
            GradeState::Graded { .. } => SubmissionStatus::Graded,
        }
    }

    pub fn score(&self) -> Option<i64> {
        match self.grade {
            GradeState::Graded { score, .. } => Some(score),
            GradeState::Pending => None,
        }
    }

    pub fn feedback(&self) -> Option<&str> {
        match &self.grade {
            GradeState::Graded { feedback, .. } => Some(feedback),
            GradeState::Pending => None,
        }
    }

    /// Pending → Graded
    pub fn grade(&mut self, score: i64, feedback: impl Into<String>) -> Result<()> {
        if self.status() == SubmissionStatus::Graded {
            return Err(PortalError::invalid_transition(format!(
                "Submission {} has already been graded",
                self.id
            )));
        }
        self.grade = GradeState::Graded {
            score,
            feedback: feedback.into(),
        };
        Ok(())
    }
}
