//! 分数解析与统计

use crate::errors::{PortalError, Result};

/// 解析分数输入，接受前导整数部分（"85.5" 解析为 85）
pub fn parse_score(input: &str) -> Result<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return Err(PortalError::validation(format!(
            "Score '{input}' is not a number"
        )));
    }

    let value: i64 = digits
        .parse()
        .map_err(|_| PortalError::validation(format!("Score '{input}' is too large")))?;
    Ok(if negative { -value } else { value })
}

/// 检查分数是否落在 [0, max_score]
pub fn validate_score_range(score: i64, max_score: i64) -> Result<()> {
    if score < 0 || score > max_score {
        return Err(PortalError::score_out_of_range(format!(
            "Score {score} must be between 0 and {max_score}"
        )));
    }
    Ok(())
}

/// 解析满分输入，非数字或 0 时回退到默认值
pub fn parse_max_score_input(input: &str, default_max_score: i64) -> i64 {
    match parse_score(input) {
        Ok(0) | Err(_) => default_max_score,
        Ok(value) => value,
    }
}

/// 四舍五入（.5 向正无穷方向）
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// 百分比，分母为 0 时返回 0
pub fn percent(numerator: i64, denominator: i64) -> i64 {
    if denominator == 0 {
        return 0;
    }
    round_half_up(numerator as f64 / denominator as f64 * 100.0)
}

/// 平均分，没有已评分项时为 0
pub fn average_score<I>(scores: I) -> f64
where
    I: IntoIterator<Item = i64>,
{
    // 宽松评分下分数不设上限，用 i128 累加避免溢出
    let (sum, count) = scores
        .into_iter()
        .fold((0i128, 0usize), |(sum, count), score| {
            (sum + i128::from(score), count + 1)
        });
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("85").unwrap(), 85);
        assert_eq!(parse_score(" 85").unwrap(), 85);
        assert_eq!(parse_score("85.5").unwrap(), 85);
        assert_eq!(parse_score("-3").unwrap(), -3);
        assert_eq!(parse_score("120abc").unwrap(), 120);
    }

    #[test]
    fn test_parse_score_rejects_non_numeric() {
        assert_eq!(parse_score("abc").unwrap_err().code(), "P002");
        assert_eq!(parse_score("").unwrap_err().code(), "P002");
        assert_eq!(parse_score("-").unwrap_err().code(), "P002");
        assert_eq!(parse_score("99999999999999999999").unwrap_err().code(), "P002");
    }

    #[test]
    fn test_validate_score_range() {
        assert!(validate_score_range(0, 75).is_ok());
        assert!(validate_score_range(75, 75).is_ok());
        assert_eq!(validate_score_range(76, 75).unwrap_err().code(), "P005");
        assert_eq!(validate_score_range(-1, 75).unwrap_err().code(), "P005");
    }

    #[test]
    fn test_parse_max_score_input_falls_back() {
        assert_eq!(parse_max_score_input("50", 100), 50);
        assert_eq!(parse_max_score_input("", 100), 100);
        assert_eq!(parse_max_score_input("0", 100), 100);
        assert_eq!(parse_max_score_input("abc", 100), 100);
    }

    #[test]
    fn test_average_of_nothing_is_zero() {
        let avg = average_score(std::iter::empty());
        assert_eq!(avg, 0.0);
        assert!(!avg.is_nan());
    }

    #[test]
    fn test_average_score() {
        assert_eq!(average_score([85, 90]), 87.5);
    }

    #[test]
    fn test_average_score_with_extreme_values() {
        let avg = average_score([i64::MAX, 85]);
        assert_eq!(avg, i64::MAX as f64 / 2.0);

        let avg = average_score([i64::MIN, i64::MIN]);
        assert_eq!(avg, i64::MIN as f64);
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(18, 25), 72);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(1, 8), 13); // 12.5 进位
        assert_eq!(percent(5, 0), 0);
    }
}
