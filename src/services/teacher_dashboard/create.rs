use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::{AssignmentDraft, TeacherDashboard};
use crate::config::PortalConfig;
use crate::errors::{PortalError, Result};
use crate::models::TeacherAssignment;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::storage::TeacherStorage;
use crate::utils::validate::validate_assignment_title;
use crate::utils::{TimestampIdGenerator, parse_due_date};

/// 创建作业
///
/// 标题与截止日期必填；满分缺省时取默认值。新作业追加在列表末尾，
/// 提交数从 0 开始，班级人数取配置值。
pub fn create_assignment<'a>(
    storage: &'a mut dyn TeacherStorage,
    ids: &mut TimestampIdGenerator,
    settings: &PortalConfig,
    req: CreateAssignmentRequest,
    now: DateTime<Utc>,
) -> Result<&'a TeacherAssignment> {
    validate_assignment_title(&req.title).map_err(PortalError::validation)?;
    let due_date = parse_due_date(&req.due_date)?;

    let max_score = req.max_score.unwrap_or(settings.default_max_score);
    if max_score <= 0 {
        return Err(PortalError::validation(format!(
            "Maximum score must be positive, got {max_score}"
        )));
    }

    let assignment = TeacherAssignment {
        id: ids.next_id_at(now),
        title: req.title,
        description: req.description,
        due_date,
        max_score,
        submissions: 0,
        total_students: settings.total_students,
    };

    storage.create_assignment(assignment)
}

impl TeacherDashboard {
    /// 创建按钮，使用当前时间生成 ID
    pub fn handle_create_assignment(&mut self) -> bool {
        self.handle_create_assignment_at(Utc::now())
    }

    /// 创建按钮；成功后重置表单，失败时表单保持不变
    pub fn handle_create_assignment_at(&mut self, now: DateTime<Utc>) -> bool {
        let req = CreateAssignmentRequest {
            title: self.draft.title.clone(),
            description: self.draft.description.clone(),
            due_date: self.draft.due_date.clone(),
            max_score: Some(self.draft.max_score),
        };

        match create_assignment(
            self.storage.as_mut(),
            &mut self.ids,
            &self.settings,
            req,
            now,
        ) {
            Ok(assignment) => {
                info!(
                    "Assignment {} ({}) created by {}, due {}",
                    assignment.id, assignment.title, self.username, assignment.due_date
                );
            }
            Err(e) => {
                debug!("Create assignment declined: {}", e);
                return false;
            }
        }

        self.draft = AssignmentDraft::new(self.settings.default_max_score);
        true
    }
}
