pub mod assignments;
pub mod auth;
pub mod dashboards;
pub mod submissions;

pub use assignments::entities::{
    AssignmentProgress, AssignmentStatus, StudentAssignment, TeacherAssignment,
};
pub use auth::entities::{Role, User};
pub use submissions::entities::{GradeState, Submission, SubmissionStatus};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
