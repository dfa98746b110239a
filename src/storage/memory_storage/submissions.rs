//! 提交存储操作

use super::MemoryTeacherStorage;
use crate::errors::{PortalError, Result};
use crate::models::Submission;

impl MemoryTeacherStorage {
    /// 通过 ID 获取提交
    pub(crate) fn get_submission_by_id_impl(&self, submission_id: &str) -> Option<&Submission> {
        self.submissions.iter().find(|s| s.id == submission_id)
    }

    /// 为提交评分，只影响目标记录
    pub(crate) fn grade_submission_impl(
        &mut self,
        submission_id: &str,
        score: i64,
        feedback: String,
    ) -> Result<&Submission> {
        let submission = self
            .submissions
            .iter_mut()
            .find(|s| s.id == submission_id)
            .ok_or_else(|| {
                PortalError::not_found(format!("Submission {submission_id} not found"))
            })?;

        submission.grade(score, feedback)?;
        Ok(submission)
    }
}
