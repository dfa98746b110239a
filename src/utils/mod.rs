pub mod dates;
pub mod id;
pub mod score;
pub mod validate;

pub use dates::{days_until_due, parse_due_date, submission_timestamp};
pub use id::TimestampIdGenerator;
pub use score::{average_score, parse_score, percent, validate_score_range};
