//! 日期工具
//!
//! 截止日期只有日历日期，没有时区；计算剩余天数时按 UTC 零点处理。

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::errors::{PortalError, Result};

const DUE_DATE_FORMAT: &str = "%Y-%m-%d";
const SUBMITTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";
const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// 解析日期选择器提交的截止日期
pub fn parse_due_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(PortalError::validation("Due date is required"));
    }
    Ok(NaiveDate::parse_from_str(input, DUE_DATE_FORMAT)?)
}

/// 距离截止日期的天数，向上取整，逾期为负数
pub fn days_until_due(due_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let due = due_date.and_time(chrono::NaiveTime::MIN).and_utc();
    let diff = due.signed_duration_since(now).num_milliseconds();

    let days = diff.div_euclid(MILLIS_PER_DAY);
    if diff.rem_euclid(MILLIS_PER_DAY) != 0 {
        days + 1
    } else {
        days
    }
}

/// 提交时间戳，取本地时间
pub fn submission_timestamp(now: DateTime<Local>) -> String {
    now.format(SUBMITTED_AT_FORMAT).to_string()
}
