use chrono::Local;
use tracing::{debug, info};

use super::StudentDashboard;
use crate::errors::{PortalError, Result};
use crate::models::StudentAssignment;
use crate::models::assignments::requests::SubmitAssignmentRequest;
use crate::storage::StudentStorage;
use crate::utils::submission_timestamp;
use crate::utils::validate::validate_submission_content;

/// 提交作业：NotStarted → Submitted
///
/// 内容为空或仅含空白时拒绝，作业保持原状态。
pub fn submit_assignment<'a>(
    storage: &'a mut dyn StudentStorage,
    assignment_id: &str,
    req: &SubmitAssignmentRequest,
    submitted_at: String,
) -> Result<&'a StudentAssignment> {
    validate_submission_content(&req.content).map_err(PortalError::validation)?;
    storage.submit_assignment(assignment_id, submitted_at)
}

impl StudentDashboard {
    /// 提交按钮，使用当前本地时间
    pub fn handle_submit_assignment(&mut self) -> bool {
        self.handle_submit_assignment_at(submission_timestamp(Local::now()))
    }

    /// 提交按钮；被拒绝时不做任何改动，对话框与内容保持不变
    pub fn handle_submit_assignment_at(&mut self, submitted_at: impl Into<String>) -> bool {
        let Some(dialog) = &self.submission_dialog else {
            debug!("Submit ignored: no assignment selected");
            return false;
        };

        let req = SubmitAssignmentRequest {
            content: dialog.text.clone(),
        };

        match submit_assignment(
            self.storage.as_mut(),
            &dialog.assignment_id,
            &req,
            submitted_at.into(),
        ) {
            Ok(assignment) => {
                info!(
                    "Assignment {} ({}) submitted by {}",
                    assignment.id, assignment.title, self.username
                );
            }
            Err(e) => {
                debug!("Submit declined: {}", e);
                return false;
            }
        }

        self.submission_dialog = None;
        true
    }
}
