//! 内存存储实现
//!
//! 数据只存在于面板的生命周期内，面板卸载即丢失；记录从不删除。

mod seed;
mod student_assignments;
mod submissions;
mod teacher_assignments;

use crate::config::PortalConfig;
use crate::errors::Result;
use crate::models::{StudentAssignment, Submission, TeacherAssignment};
use crate::storage::{StudentStorage, TeacherStorage};

/// 教师面板内存存储
#[derive(Debug, Clone, Default)]
pub struct MemoryTeacherStorage {
    pub(crate) assignments: Vec<TeacherAssignment>,
    pub(crate) submissions: Vec<Submission>,
}

impl MemoryTeacherStorage {
    pub fn new(assignments: Vec<TeacherAssignment>, submissions: Vec<Submission>) -> Self {
        Self {
            assignments,
            submissions,
        }
    }

    /// 使用演示数据初始化
    pub fn seeded(config: &PortalConfig) -> Self {
        Self::new(
            seed::teacher_assignments(config.total_students),
            seed::teacher_submissions(),
        )
    }
}

impl TeacherStorage for MemoryTeacherStorage {
    // 作业模块
    fn list_assignments(&self) -> &[TeacherAssignment] {
        &self.assignments
    }

    fn create_assignment(&mut self, assignment: TeacherAssignment) -> Result<&TeacherAssignment> {
        self.create_assignment_impl(assignment)
    }

    // 提交模块
    fn list_submissions(&self) -> &[Submission] {
        &self.submissions
    }

    fn get_submission_by_id(&self, submission_id: &str) -> Option<&Submission> {
        self.get_submission_by_id_impl(submission_id)
    }

    fn grade_submission(
        &mut self,
        submission_id: &str,
        score: i64,
        feedback: String,
    ) -> Result<&Submission> {
        self.grade_submission_impl(submission_id, score, feedback)
    }
}

/// 学生面板内存存储
#[derive(Debug, Clone, Default)]
pub struct MemoryStudentStorage {
    pub(crate) assignments: Vec<StudentAssignment>,
}

impl MemoryStudentStorage {
    pub fn new(assignments: Vec<StudentAssignment>) -> Self {
        Self { assignments }
    }

    /// 使用演示数据初始化
    pub fn seeded() -> Self {
        Self::new(seed::student_assignments())
    }
}

impl StudentStorage for MemoryStudentStorage {
    fn list_assignments(&self) -> &[StudentAssignment] {
        &self.assignments
    }

    fn get_assignment_by_id(&self, assignment_id: &str) -> Option<&StudentAssignment> {
        self.get_assignment_by_id_impl(assignment_id)
    }

    fn submit_assignment(
        &mut self,
        assignment_id: &str,
        submitted_at: String,
    ) -> Result<&StudentAssignment> {
        self.submit_assignment_impl(assignment_id, submitted_at)
    }
}
