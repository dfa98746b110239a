pub mod auth;
pub mod portal;
pub mod student_dashboard;
pub mod teacher_dashboard;

pub use auth::AuthService;
pub use portal::{Dashboard, Portal};
pub use student_dashboard::StudentDashboard;
pub use teacher_dashboard::TeacherDashboard;
