use chrono::{DateTime, Utc};

use super::StudentDashboard;
use crate::models::assignments::responses::{StudentAssignmentCard, UpcomingDeadline};
use crate::models::dashboards::responses::{
    ProgressOverview, StudentDashboardSnapshot, StudentStats,
};
use crate::models::{AssignmentStatus, StudentAssignment};
use crate::utils::score::round_half_up;
use crate::utils::{average_score, days_until_due, percent};

/// 按状态分区后的只读视图，每次渲染计算一次
#[derive(Debug)]
pub struct StudentPartitions<'a> {
    pub all: &'a [StudentAssignment],
    pub not_started: Vec<&'a StudentAssignment>,
    pub submitted: Vec<&'a StudentAssignment>,
    pub graded: Vec<&'a StudentAssignment>,
}

impl<'a> StudentPartitions<'a> {
    pub fn from_assignments(all: &'a [StudentAssignment]) -> Self {
        let mut partitions = Self {
            all,
            not_started: Vec::new(),
            submitted: Vec::new(),
            graded: Vec::new(),
        };
        for assignment in all {
            match assignment.status() {
                AssignmentStatus::NotStarted => partitions.not_started.push(assignment),
                AssignmentStatus::Submitted => partitions.submitted.push(assignment),
                AssignmentStatus::Graded => partitions.graded.push(assignment),
            }
        }
        partitions
    }

    /// 已评分作业的平均分，没有时为 0
    pub fn average_score(&self) -> f64 {
        average_score(self.graded.iter().filter_map(|a| a.score()))
    }

    /// 按截止日期升序的未开始作业，日期相同保持原顺序
    pub fn upcoming_deadlines(&self, limit: usize) -> Vec<&'a StudentAssignment> {
        let mut upcoming = self.not_started.clone();
        upcoming.sort_by_key(|a| a.due_date);
        upcoming.truncate(limit);
        upcoming
    }

    pub fn stats(&self) -> StudentStats {
        StudentStats {
            completed: self.graded.len(),
            pending: self.submitted.len(),
            to_do: self.not_started.len(),
            average_score: self.average_score(),
        }
    }

    pub fn overview(&self) -> ProgressOverview {
        ProgressOverview {
            total: self.all.len(),
            completed: self.graded.len(),
            completion_percent: percent(self.graded.len() as i64, self.all.len() as i64),
            average_score: round_half_up(self.average_score()),
        }
    }
}

/// 作业卡片
pub fn assignment_card(assignment: &StudentAssignment, now: DateTime<Utc>) -> StudentAssignmentCard {
    let status = assignment.status();
    let days = days_until_due(assignment.due_date, now);

    StudentAssignmentCard {
        assignment: assignment.clone(),
        status_label: status.label().to_string(),
        days_until_due: days,
        show_days_left: status == AssignmentStatus::NotStarted && days > 0,
        score_percent: assignment
            .score()
            .map(|score| percent(score, assignment.max_score)),
        can_submit: status == AssignmentStatus::NotStarted,
    }
}

impl StudentDashboard {
    pub fn partitions(&self) -> StudentPartitions<'_> {
        StudentPartitions::from_assignments(self.storage.list_assignments())
    }

    pub fn snapshot(&self) -> StudentDashboardSnapshot {
        self.snapshot_at(Utc::now())
    }

    /// 渲染快照：分区只计算一次，各标签页共用
    pub fn snapshot_at(&self, now: DateTime<Utc>) -> StudentDashboardSnapshot {
        let partitions = self.partitions();
        let cards = |items: &[&StudentAssignment]| -> Vec<StudentAssignmentCard> {
            items.iter().map(|a| assignment_card(a, now)).collect()
        };

        let upcoming_deadlines = partitions
            .upcoming_deadlines(self.upcoming_deadline_limit)
            .into_iter()
            .map(|a| UpcomingDeadline {
                id: a.id.clone(),
                title: a.title.clone(),
                due_date: a.due_date,
                days_until_due: days_until_due(a.due_date, now),
            })
            .collect();

        StudentDashboardSnapshot {
            username: self.username.clone(),
            stats: partitions.stats(),
            overview: partitions.overview(),
            all: partitions
                .all
                .iter()
                .map(|a| assignment_card(a, now))
                .collect(),
            to_do: cards(partitions.not_started.as_slice()),
            submitted: cards(partitions.submitted.as_slice()),
            graded: cards(partitions.graded.as_slice()),
            upcoming_deadlines,
        }
    }
}
