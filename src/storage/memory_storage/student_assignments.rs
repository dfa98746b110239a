//! 学生作业存储操作

use super::MemoryStudentStorage;
use crate::errors::{PortalError, Result};
use crate::models::StudentAssignment;

impl MemoryStudentStorage {
    /// 通过 ID 获取作业
    pub(crate) fn get_assignment_by_id_impl(
        &self,
        assignment_id: &str,
    ) -> Option<&StudentAssignment> {
        self.assignments.iter().find(|a| a.id == assignment_id)
    }

    /// 提交作业，只影响目标记录
    pub(crate) fn submit_assignment_impl(
        &mut self,
        assignment_id: &str,
        submitted_at: String,
    ) -> Result<&StudentAssignment> {
        let assignment = self
            .assignments
            .iter_mut()
            .find(|a| a.id == assignment_id)
            .ok_or_else(|| {
                PortalError::not_found(format!("Assignment {assignment_id} not found"))
            })?;

        assignment.submit(submitted_at)?;
        Ok(assignment)
    }
}
