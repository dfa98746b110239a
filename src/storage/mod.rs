use crate::config::PortalConfig;
use crate::errors::Result;
use crate::models::{StudentAssignment, Submission, TeacherAssignment};

pub mod memory_storage;

/// 教师面板的数据存储
pub trait TeacherStorage: Send + Sync {
    /// 作业管理方法
    // 列出全部作业（保持插入顺序）
    fn list_assignments(&self) -> &[TeacherAssignment];
    // 追加作业
    fn create_assignment(&mut self, assignment: TeacherAssignment) -> Result<&TeacherAssignment>;

    /// 提交管理方法
    // 列出全部提交
    fn list_submissions(&self) -> &[Submission];
    // 通过ID获取提交
    fn get_submission_by_id(&self, submission_id: &str) -> Option<&Submission>;
    // 评分：Pending → Graded
    fn grade_submission(
        &mut self,
        submission_id: &str,
        score: i64,
        feedback: String,
    ) -> Result<&Submission>;
}

/// 学生面板的数据存储
pub trait StudentStorage: Send + Sync {
    // 列出全部作业
    fn list_assignments(&self) -> &[StudentAssignment];
    // 通过ID获取作业
    fn get_assignment_by_id(&self, assignment_id: &str) -> Option<&StudentAssignment>;
    // 提交：NotStarted → Submitted
    fn submit_assignment(
        &mut self,
        assignment_id: &str,
        submitted_at: String,
    ) -> Result<&StudentAssignment>;
}

/// 创建带演示数据的教师存储
pub fn create_teacher_storage(config: &PortalConfig) -> Box<dyn TeacherStorage> {
    Box::new(memory_storage::MemoryTeacherStorage::seeded(config))
}

/// 创建带演示数据的学生存储
pub fn create_student_storage() -> Box<dyn StudentStorage> {
    Box::new(memory_storage::MemoryStudentStorage::seeded())
}
