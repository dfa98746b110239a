use chrono::{DateTime, Utc};

use super::TeacherDashboard;
use crate::models::assignments::responses::TeacherAssignmentCard;
use crate::models::dashboards::responses::{TeacherDashboardSnapshot, TeacherStats};
use crate::models::submissions::responses::SubmissionCard;
use crate::models::{Submission, SubmissionStatus, TeacherAssignment};
use crate::utils::{average_score, days_until_due, percent};

/// 按评分状态分区后的提交
#[derive(Debug)]
pub struct TeacherPartitions<'a> {
    pub assignments: &'a [TeacherAssignment],
    pub submissions: &'a [Submission],
    pub pending: Vec<&'a Submission>,
    pub graded: Vec<&'a Submission>,
}

impl<'a> TeacherPartitions<'a> {
    pub fn new(assignments: &'a [TeacherAssignment], submissions: &'a [Submission]) -> Self {
        let (pending, graded) = submissions
            .iter()
            .partition(|s| s.status() == SubmissionStatus::Pending);
        Self {
            assignments,
            submissions,
            pending,
            graded,
        }
    }

    pub fn stats(&self) -> TeacherStats {
        TeacherStats {
            active_assignments: self.assignments.len(),
            pending_reviews: self.pending.len(),
            graded: self.graded.len(),
            average_score: average_score(self.graded.iter().filter_map(|s| s.score())),
        }
    }
}

pub fn assignment_card(assignment: &TeacherAssignment, now: DateTime<Utc>) -> TeacherAssignmentCard {
    let completion_label = if assignment.submissions == assignment.total_students {
        "Complete"
    } else {
        "In Progress"
    };

    TeacherAssignmentCard {
        assignment: assignment.clone(),
        days_until_due: days_until_due(assignment.due_date, now),
        submission_percent: percent(assignment.submissions, assignment.total_students),
        completion_label: completion_label.to_string(),
    }
}

pub fn submission_card(submission: &Submission) -> SubmissionCard {
    let badge = match submission.score() {
        Some(score) => format!("{}/{}", score, submission.max_score),
        None => "Pending".to_string(),
    };

    SubmissionCard {
        submission: submission.clone(),
        badge,
        can_grade: submission.status() == SubmissionStatus::Pending,
    }
}

impl TeacherDashboard {
    pub fn partitions(&self) -> TeacherPartitions<'_> {
        TeacherPartitions::new(
            self.storage.list_assignments(),
            self.storage.list_submissions(),
        )
    }

    pub fn snapshot(&self) -> TeacherDashboardSnapshot {
        self.snapshot_at(Utc::now())
    }

    /// 渲染快照：分区只计算一次，各标签页共用
    pub fn snapshot_at(&self, now: DateTime<Utc>) -> TeacherDashboardSnapshot {
        let partitions = self.partitions();

        TeacherDashboardSnapshot {
            username: self.username.clone(),
            stats: partitions.stats(),
            assignments: partitions
                .assignments
                .iter()
                .map(|a| assignment_card(a, now))
                .collect(),
            submissions: partitions.submissions.iter().map(submission_card).collect(),
            pending: partitions.pending.iter().map(|s| submission_card(s)).collect(),
            graded: partitions.graded.iter().map(|s| submission_card(s)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 12, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_seed_stats() {
        let dashboard = TeacherDashboard::mount("teacher123", &AppConfig::default().portal);
        let snapshot = dashboard.snapshot_at(now());

        assert_eq!(snapshot.stats.active_assignments, 2);
        assert_eq!(snapshot.stats.pending_reviews, 2);
        assert_eq!(snapshot.stats.graded, 1);
        assert_eq!(snapshot.stats.average_score, 85.0);
        assert_eq!(snapshot.submissions.len(), 3);
    }

    #[test]
    fn test_assignment_progress_cards() {
        let dashboard = TeacherDashboard::mount("teacher123", &AppConfig::default().portal);
        let snapshot = dashboard.snapshot_at(now());

        let react = &snapshot.assignments[0];
        assert_eq!(react.submission_percent, 72);
        assert_eq!(react.completion_label, "In Progress");
        assert_eq!(react.days_until_due, 3);

        let database = &snapshot.assignments[1];
        assert_eq!(database.submission_percent, 48);
    }

    #[test]
    fn test_complete_label_when_everyone_submitted() {
        let assignment = TeacherAssignment {
            id: "9".to_string(),
            title: "Quiz".to_string(),
            description: String::new(),
            due_date: chrono::NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            max_score: 10,
            submissions: 25,
            total_students: 25,
        };
        let card = assignment_card(&assignment, now());
        assert_eq!(card.completion_label, "Complete");
        assert_eq!(card.submission_percent, 100);
    }

    #[test]
    fn test_submission_badges() {
        let dashboard = TeacherDashboard::mount("teacher123", &AppConfig::default().portal);
        let snapshot = dashboard.snapshot_at(now());

        assert_eq!(snapshot.submissions[0].badge, "Pending");
        assert!(snapshot.submissions[0].can_grade);
        assert_eq!(snapshot.submissions[1].badge, "85/100");
        assert!(!snapshot.submissions[1].can_grade);
        assert_eq!(snapshot.graded.len(), 1);
        assert_eq!(snapshot.pending.len(), 2);
    }

    #[test]
    fn test_average_without_graded_is_zero() {
        let partitions = TeacherPartitions::new(&[], &[]);
        let stats = partitions.stats();
        assert_eq!(stats.average_score, 0.0);
        assert_eq!(stats.graded, 0);
    }

    #[test]
    fn test_snapshot_reflects_grading() {
        let mut dashboard = TeacherDashboard::mount("teacher123", &AppConfig::default().portal);
        dashboard.open_grading_dialog("1");
        dashboard.set_grade_score("95");
        assert!(dashboard.handle_grade_submission());

        let snapshot = dashboard.snapshot_at(now());
        assert_eq!(snapshot.stats.pending_reviews, 1);
        assert_eq!(snapshot.stats.graded, 2);
        assert_eq!(snapshot.stats.average_score, 90.0);
    }
}
