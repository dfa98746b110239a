//! 教师作业存储操作

use super::MemoryTeacherStorage;
use crate::errors::Result;
use crate::models::TeacherAssignment;

impl MemoryTeacherStorage {
    /// 追加作业，标题允许重复
    pub(crate) fn create_assignment_impl(
        &mut self,
        assignment: TeacherAssignment,
    ) -> Result<&TeacherAssignment> {
        self.assignments.push(assignment);
        Ok(&self.assignments[self.assignments.len() - 1])
    }
}
