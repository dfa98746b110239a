pub mod snapshot;
pub mod submit;

use crate::config::PortalConfig;
use crate::models::{AssignmentStatus, StudentAssignment};
use crate::storage::{StudentStorage, create_student_storage};

pub use snapshot::StudentPartitions;

/// 提交对话框的暂存状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionDialog {
    pub assignment_id: String,
    pub text: String,
}

/// 学生面板
pub struct StudentDashboard {
    username: String,
    storage: Box<dyn StudentStorage>,
    upcoming_deadline_limit: usize,
    submission_dialog: Option<SubmissionDialog>,
}

impl StudentDashboard {
    /// 挂载面板并载入演示数据
    pub fn mount(username: impl Into<String>, config: &PortalConfig) -> Self {
        Self::with_storage(username, config, create_student_storage())
    }

    pub fn with_storage(
        username: impl Into<String>,
        config: &PortalConfig,
        storage: Box<dyn StudentStorage>,
    ) -> Self {
        Self {
            username: username.into(),
            storage,
            upcoming_deadline_limit: config.upcoming_deadline_limit,
            submission_dialog: None,
        }
    }

    pub fn assignments(&self) -> &[StudentAssignment] {
        self.storage.list_assignments()
    }

    pub fn submission_dialog(&self) -> Option<&SubmissionDialog> {
        self.submission_dialog.as_ref()
    }

    /// 打开提交对话框，仅限未开始的作业
    pub fn open_submission_dialog(&mut self, assignment_id: &str) -> bool {
        match self.storage.get_assignment_by_id(assignment_id) {
            Some(assignment) if assignment.status() == AssignmentStatus::NotStarted => {
                self.submission_dialog = Some(SubmissionDialog {
                    assignment_id: assignment_id.to_string(),
                    text: String::new(),
                });
                true
            }
            _ => false,
        }
    }

    /// 更新暂存的提交内容
    pub fn set_submission_text(&mut self, text: impl Into<String>) {
        if let Some(dialog) = self.submission_dialog.as_mut() {
            dialog.text = text.into();
        }
    }

    pub fn close_submission_dialog(&mut self) {
        self.submission_dialog = None;
    }
}
