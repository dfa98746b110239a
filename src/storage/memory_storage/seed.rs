//! 面板挂载时载入的演示数据
//!
//! 教师与学生两套数据互不关联。

use chrono::NaiveDate;

use crate::models::{
    AssignmentProgress, GradeState, StudentAssignment, Submission, TeacherAssignment,
};

const REACT_TITLE: &str = "React Fundamentals Project";
const REACT_DESCRIPTION: &str =
    "Build a React application demonstrating component lifecycle and state management";
const DATABASE_TITLE: &str = "Database Design Assignment";
const DATABASE_DESCRIPTION: &str =
    "Design a normalized database schema for an e-commerce application";
const REACT_FEEDBACK: &str =
    "Great work on component structure. Consider adding more error handling.";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("Invalid seed date")
}

pub(super) fn teacher_assignments(total_students: i64) -> Vec<TeacherAssignment> {
    vec![
        TeacherAssignment {
            id: "1".to_string(),
            title: REACT_TITLE.to_string(),
            description: REACT_DESCRIPTION.to_string(),
            due_date: date(2024, 12, 15),
            max_score: 100,
            submissions: 18,
            total_students,
        },
        TeacherAssignment {
            id: "2".to_string(),
            title: DATABASE_TITLE.to_string(),
            description: DATABASE_DESCRIPTION.to_string(),
            due_date: date(2024, 12, 20),
            max_score: 75,
            submissions: 12,
            total_students,
        },
    ]
}

pub(super) fn teacher_submissions() -> Vec<Submission> {
    vec![
        Submission {
            id: "1".to_string(),
            student_name: "Alice Johnson".to_string(),
            assignment_title: REACT_TITLE.to_string(),
            submitted_at: "2024-12-10 14:30".to_string(),
            max_score: 100,
            grade: GradeState::Pending,
        },
        Submission {
            id: "2".to_string(),
            student_name: "Bob Smith".to_string(),
            assignment_title: REACT_TITLE.to_string(),
            submitted_at: "2024-12-09 16:45".to_string(),
            max_score: 100,
            grade: GradeState::Graded {
                score: 85,
                feedback: REACT_FEEDBACK.to_string(),
            },
        },
        Submission {
            id: "3".to_string(),
            student_name: "Carol Davis".to_string(),
            assignment_title: DATABASE_TITLE.to_string(),
            submitted_at: "2024-12-11 09:15".to_string(),
            max_score: 75,
            grade: GradeState::Pending,
        },
    ]
}

pub(super) fn student_assignments() -> Vec<StudentAssignment> {
    vec![
        StudentAssignment {
            id: "1".to_string(),
            title: REACT_TITLE.to_string(),
            description: REACT_DESCRIPTION.to_string(),
            due_date: date(2024, 12, 15),
            max_score: 100,
            progress: AssignmentProgress::Graded {
                submitted_at: "2024-12-10 14:30".to_string(),
                score: 85,
                feedback: REACT_FEEDBACK.to_string(),
            },
        },
        StudentAssignment {
            id: "2".to_string(),
            title: DATABASE_TITLE.to_string(),
            description: DATABASE_DESCRIPTION.to_string(),
            due_date: date(2024, 12, 20),
            max_score: 75,
            progress: AssignmentProgress::Submitted {
                submitted_at: "2024-12-11 09:15".to_string(),
            },
        },
        StudentAssignment {
            id: "3".to_string(),
            title: "API Integration Project".to_string(),
            description: "Create a web application that integrates with a RESTful API"
                .to_string(),
            due_date: date(2024, 12, 25),
            max_score: 90,
            progress: AssignmentProgress::NotStarted,
        },
        StudentAssignment {
            id: "4".to_string(),
            title: "CSS Responsive Design".to_string(),
            description: "Build a responsive website using modern CSS techniques".to_string(),
            due_date: date(2024, 12, 30),
            max_score: 80,
            progress: AssignmentProgress::NotStarted,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssignmentStatus, SubmissionStatus};

    #[test]
    fn test_teacher_seed_uses_roster_size() {
        let assignments = teacher_assignments(25);
        assert_eq!(assignments.len(), 2);
        assert!(assignments.iter().all(|a| a.total_students == 25));
        assert_eq!(assignments[0].submissions, 18);
        assert_eq!(
            assignments[0].due_date,
            NaiveDate::from_ymd_opt(2024, 12, 15).unwrap()
        );
    }

    #[test]
    fn test_teacher_submissions_seed() {
        let submissions = teacher_submissions();
        let pending = submissions
            .iter()
            .filter(|s| s.status() == SubmissionStatus::Pending)
            .count();
        assert_eq!(pending, 2);
        assert_eq!(submissions[1].score(), Some(85));
    }

    #[test]
    fn test_student_seed_covers_every_status() {
        let statuses: Vec<AssignmentStatus> =
            student_assignments().iter().map(|a| a.status()).collect();
        assert_eq!(
            statuses,
            vec![
                AssignmentStatus::Graded,
                AssignmentStatus::Submitted,
                AssignmentStatus::NotStarted,
                AssignmentStatus::NotStarted,
            ]
        );
    }
}
