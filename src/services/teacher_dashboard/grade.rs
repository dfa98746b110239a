use tracing::{debug, info};

use super::TeacherDashboard;
use crate::config::PortalConfig;
use crate::errors::{PortalError, Result};
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::models::{Submission, SubmissionStatus};
use crate::storage::TeacherStorage;
use crate::utils::validate::validate_score_input;
use crate::utils::{parse_score, validate_score_range};

/// 为提交评分：Pending → Graded
///
/// 分数必填并按整数解析；严格模式下分数必须落在 [0, max_score]。
/// 评语可以为空。
pub fn grade_submission<'a>(
    storage: &'a mut dyn TeacherStorage,
    settings: &PortalConfig,
    submission_id: &str,
    req: GradeSubmissionRequest,
) -> Result<&'a Submission> {
    validate_score_input(&req.score).map_err(PortalError::validation)?;
    let score = parse_score(&req.score)?;

    let submission = storage.get_submission_by_id(submission_id).ok_or_else(|| {
        PortalError::not_found(format!("Submission {submission_id} not found"))
    })?;

    if submission.status() != SubmissionStatus::Pending {
        return Err(PortalError::invalid_transition(format!(
            "Submission {submission_id} has already been graded"
        )));
    }

    if settings.strict_grading {
        validate_score_range(score, submission.max_score)?;
    }

    storage.grade_submission(submission_id, score, req.feedback)
}

impl TeacherDashboard {
    /// 提交评分按钮；成功后关闭对话框，失败时对话框内容保持不变
    pub fn handle_grade_submission(&mut self) -> bool {
        let Some(dialog) = &self.grading_dialog else {
            debug!("Grade ignored: no submission selected");
            return false;
        };

        let req = GradeSubmissionRequest {
            score: dialog.score.clone(),
            feedback: dialog.feedback.clone(),
        };

        match grade_submission(
            self.storage.as_mut(),
            &self.settings,
            &dialog.submission_id,
            req,
        ) {
            Ok(submission) => {
                info!(
                    "Submission {} by {} graded {}/{} by {}",
                    submission.id,
                    submission.student_name,
                    submission.score().unwrap_or_default(),
                    submission.max_score,
                    self.username
                );
            }
            Err(e) => {
                debug!("Grade declined: {}", e);
                return false;
            }
        }

        self.grading_dialog = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn dashboard(strict: bool) -> TeacherDashboard {
        let mut config = AppConfig::default().portal;
        config.strict_grading = strict;
        TeacherDashboard::mount("teacher123", &config)
    }

    fn submission<'a>(dashboard: &'a TeacherDashboard, id: &str) -> &'a Submission {
        dashboard.submissions().iter().find(|s| s.id == id).unwrap()
    }

    #[test]
    fn test_grade_pending_submission() {
        let mut dashboard = dashboard(true);
        assert!(dashboard.open_grading_dialog("1"));
        dashboard.set_grade_score("92");
        dashboard.set_grade_feedback("Clean component design");

        assert!(dashboard.handle_grade_submission());
        let graded = submission(&dashboard, "1");
        assert_eq!(graded.status(), SubmissionStatus::Graded);
        assert_eq!(graded.score(), Some(92));
        assert_eq!(graded.feedback(), Some("Clean component design"));
        assert!(dashboard.grading_dialog().is_none());
    }

    #[test]
    fn test_missing_score_leaves_pending() {
        let mut dashboard = dashboard(true);
        assert!(dashboard.open_grading_dialog("1"));
        dashboard.set_grade_feedback("Looks good");

        assert!(!dashboard.handle_grade_submission());
        assert_eq!(submission(&dashboard, "1").status(), SubmissionStatus::Pending);
        assert_eq!(dashboard.grading_dialog().unwrap().feedback, "Looks good");
    }

    #[test]
    fn test_empty_feedback_allowed() {
        let mut dashboard = dashboard(true);
        dashboard.open_grading_dialog("3");
        dashboard.set_grade_score("70");

        assert!(dashboard.handle_grade_submission());
        assert_eq!(submission(&dashboard, "3").feedback(), Some(""));
    }

    #[test]
    fn test_non_numeric_score_rejected() {
        let mut dashboard = dashboard(false);
        dashboard.open_grading_dialog("1");
        dashboard.set_grade_score("abc");

        assert!(!dashboard.handle_grade_submission());
        assert_eq!(submission(&dashboard, "1").status(), SubmissionStatus::Pending);
    }

    #[test]
    fn test_strict_grading_rejects_out_of_range() {
        let mut dashboard = dashboard(true);
        dashboard.open_grading_dialog("3");
        dashboard.set_grade_score("80"); // 满分 75

        assert!(!dashboard.handle_grade_submission());
        assert_eq!(submission(&dashboard, "3").status(), SubmissionStatus::Pending);

        dashboard.set_grade_score("-1");
        assert!(!dashboard.handle_grade_submission());
        assert_eq!(submission(&dashboard, "3").status(), SubmissionStatus::Pending);
    }

    #[test]
    fn test_lenient_grading_accepts_out_of_range() {
        let mut dashboard = dashboard(false);
        dashboard.open_grading_dialog("3");
        dashboard.set_grade_score("80");

        assert!(dashboard.handle_grade_submission());
        assert_eq!(submission(&dashboard, "3").score(), Some(80));
    }

    #[test]
    fn test_lenient_extreme_score_keeps_snapshot_working() {
        let mut dashboard = dashboard(false);
        dashboard.open_grading_dialog("1");
        dashboard.set_grade_score("9223372036854775807");
        assert!(dashboard.handle_grade_submission());

        let snapshot = dashboard.snapshot();
        assert_eq!(snapshot.stats.graded, 2);
        assert!(snapshot.stats.average_score.is_finite());
        assert_eq!(snapshot.stats.average_score, i64::MAX as f64 / 2.0);
    }

    #[test]
    fn test_dialog_only_opens_for_pending() {
        let mut dashboard = dashboard(true);
        assert!(!dashboard.open_grading_dialog("2"));
        assert!(!dashboard.open_grading_dialog("missing"));
        assert!(dashboard.grading_dialog().is_none());
    }

    #[test]
    fn test_grade_function_rejects_graded() {
        let settings = AppConfig::default().portal;
        let mut dashboard = dashboard(true);
        let req = GradeSubmissionRequest {
            score: "50".to_string(),
            feedback: String::new(),
        };
        let err = grade_submission(dashboard.storage.as_mut(), &settings, "2", req).unwrap_err();
        assert_eq!(err.code(), "P004");
        assert_eq!(submission(&dashboard, "2").score(), Some(85));
    }

    #[test]
    fn test_grading_leaves_assignment_counters() {
        let mut dashboard = dashboard(true);
        let before: Vec<i64> = dashboard.assignments().iter().map(|a| a.submissions).collect();
        dashboard.open_grading_dialog("1");
        dashboard.set_grade_score("90");
        assert!(dashboard.handle_grade_submission());
        let after: Vec<i64> = dashboard.assignments().iter().map(|a| a.submissions).collect();
        assert_eq!(before, after);
    }
}
