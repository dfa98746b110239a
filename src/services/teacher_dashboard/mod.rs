pub mod create;
pub mod grade;
pub mod snapshot;

use crate::config::PortalConfig;
use crate::models::{Submission, SubmissionStatus, TeacherAssignment};
use crate::storage::{TeacherStorage, create_teacher_storage};
use crate::utils::TimestampIdGenerator;
use crate::utils::score::parse_max_score_input;

pub use snapshot::TeacherPartitions;

/// 新建作业表单的暂存状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentDraft {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub max_score: i64,
}

impl AssignmentDraft {
    pub fn new(default_max_score: i64) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            due_date: String::new(),
            max_score: default_max_score,
        }
    }
}

/// 评分对话框的暂存状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradingDialog {
    pub submission_id: String,
    pub score: String,
    pub feedback: String,
}

/// 教师面板
pub struct TeacherDashboard {
    username: String,
    storage: Box<dyn TeacherStorage>,
    settings: PortalConfig,
    ids: TimestampIdGenerator,
    draft: AssignmentDraft,
    grading_dialog: Option<GradingDialog>,
}

impl TeacherDashboard {
    /// 挂载面板并载入演示数据
    pub fn mount(username: impl Into<String>, config: &PortalConfig) -> Self {
        Self::with_storage(username, config, create_teacher_storage(config))
    }

    pub fn with_storage(
        username: impl Into<String>,
        config: &PortalConfig,
        storage: Box<dyn TeacherStorage>,
    ) -> Self {
        Self {
            username: username.into(),
            storage,
            settings: config.clone(),
            ids: TimestampIdGenerator::new(),
            draft: AssignmentDraft::new(config.default_max_score),
            grading_dialog: None,
        }
    }

    pub fn assignments(&self) -> &[TeacherAssignment] {
        self.storage.list_assignments()
    }

    pub fn submissions(&self) -> &[Submission] {
        self.storage.list_submissions()
    }

    // 新建作业表单

    pub fn draft(&self) -> &AssignmentDraft {
        &self.draft
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_draft_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    pub fn set_draft_due_date(&mut self, due_date: impl Into<String>) {
        self.draft.due_date = due_date.into();
    }

    /// 满分输入框，无法解析或为 0 时使用默认满分
    pub fn set_draft_max_score(&mut self, input: &str) {
        self.draft.max_score = parse_max_score_input(input, self.settings.default_max_score);
    }

    // 评分对话框

    pub fn grading_dialog(&self) -> Option<&GradingDialog> {
        self.grading_dialog.as_ref()
    }

    /// 打开评分对话框，仅限待评分的提交
    pub fn open_grading_dialog(&mut self, submission_id: &str) -> bool {
        match self.storage.get_submission_by_id(submission_id) {
            Some(submission) if submission.status() == SubmissionStatus::Pending => {
                self.grading_dialog = Some(GradingDialog {
                    submission_id: submission_id.to_string(),
                    score: String::new(),
                    feedback: String::new(),
                });
                true
            }
            _ => false,
        }
    }

    pub fn set_grade_score(&mut self, score: impl Into<String>) {
        if let Some(dialog) = self.grading_dialog.as_mut() {
            dialog.score = score.into();
        }
    }

    pub fn set_grade_feedback(&mut self, feedback: impl Into<String>) {
        if let Some(dialog) = self.grading_dialog.as_mut() {
            dialog.feedback = feedback.into();
        }
    }

    pub fn close_grading_dialog(&mut self) {
        self.grading_dialog = None;
    }
}
