use chrono::{DateTime, Utc};

/// 基于时间戳（毫秒）的作业 ID 生成器
///
/// 同一毫秒内多次生成时顺延 1，保证单个面板内 ID 不重复。
#[derive(Debug, Default)]
pub struct TimestampIdGenerator {
    last_issued: Option<i64>,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id_at(&mut self, now: DateTime<Utc>) -> String {
        let candidate = match self.last_issued {
            Some(last) if now.timestamp_millis() <= last => last + 1,
            _ => now.timestamp_millis(),
        };
        self.last_issued = Some(candidate);
        candidate.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_id_is_timestamp_millis() {
        let now = Utc.timestamp_millis_opt(1_735_689_600_000).unwrap();
        let mut generator = TimestampIdGenerator::new();
        assert_eq!(generator.next_id_at(now), "1735689600000");
    }

    #[test]
    fn test_same_millisecond_bumps() {
        let now = Utc.timestamp_millis_opt(1_735_689_600_000).unwrap();
        let mut generator = TimestampIdGenerator::new();
        let first = generator.next_id_at(now);
        let second = generator.next_id_at(now);
        let third = generator.next_id_at(now);
        assert_eq!(first, "1735689600000");
        assert_eq!(second, "1735689600001");
        assert_eq!(third, "1735689600002");
    }
}
