use chrono::NaiveDate;
use std::path::PathBuf;

/// # Errors
///
/// Will return `Err` if the path is not a readable file
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || std::fs::metadata(&path).is_err() {
        return Err(format!("The file '{file}' is not readable."));
    }
    Ok(path)
}

/// Dates are compared as strings downstream, so they come back zero-padded.
///
/// # Errors
///
/// Will return `Err` if the value is not a calendar date
pub fn check_date(value: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string())
        .map_err(|e| format!("'{value}' is not a YYYY-MM-DD date: {e}"))
}

/// # Errors
///
/// Will return `Err` if the window is not a positive whole number
pub fn check_window(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(format!("window must be a positive number, got '{value}'")),
        Ok(n) => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_are_normalized() {
        assert_eq!(check_date("2025-3-7"), Ok("2025-03-07".to_string()));
        assert_eq!(check_date("2025-03-07"), Ok("2025-03-07".to_string()));
        assert!(check_date("2025-02-30").is_err());
        assert!(check_date("03/07/2025").is_err());
    }

    #[test]
    fn window_must_be_positive() {
        assert_eq!(check_window("3"), Ok(3));
        assert!(check_window("0").is_err());
        assert!(check_window("-1").is_err());
    }

    #[test]
    fn missing_file_is_rejected() {
        assert!(check_readable_file("/definitely/not/here.json").is_err());
    }
}
