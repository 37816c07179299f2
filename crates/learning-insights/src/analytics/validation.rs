use super::domain::InjectedMetrics;

/// Structural problems with an incoming request.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    #[error("student_id must be a positive integer, got {0}")]
    InvalidStudentId(i64),
    #[error("module_code must not be blank")]
    BlankModuleCode,
    #[error("avg_score must be within 0-100, got {0}")]
    ScoreOutOfRange(f64),
}

pub fn student_id(raw: i64) -> Result<u32, RequestError> {
    match u32::try_from(raw) {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(RequestError::InvalidStudentId(raw)),
    }
}

/// Rejects blank codes; anything else passes through untouched.
pub fn module_code(raw: &str) -> Result<&str, RequestError> {
    if raw.trim().is_empty() {
        return Err(RequestError::BlankModuleCode);
    }
    Ok(raw)
}

pub fn metrics(metrics: &InjectedMetrics) -> Result<(), RequestError> {
    match metrics.avg_score {
        Some(score) if !(0.0..=100.0).contains(&score) => {
            Err(RequestError::ScoreOutOfRange(score))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_ids_must_be_positive() {
        assert_eq!(student_id(3), Ok(3));
        assert_eq!(student_id(0), Err(RequestError::InvalidStudentId(0)));
        assert_eq!(student_id(-4), Err(RequestError::InvalidStudentId(-4)));
        assert_eq!(
            student_id(i64::from(u32::MAX) + 1),
            Err(RequestError::InvalidStudentId(i64::from(u32::MAX) + 1))
        );
    }

    #[test]
    fn module_codes_pass_through_unchanged() {
        assert_eq!(module_code("  CS101 "), Ok("  CS101 "));
        assert_eq!(module_code("   "), Err(RequestError::BlankModuleCode));
    }

    #[test]
    fn injected_scores_must_be_percentages() {
        let valid = InjectedMetrics {
            avg_score: Some(100.0),
            prev_attempts: None,
        };
        let invalid = InjectedMetrics {
            avg_score: Some(130.0),
            prev_attempts: None,
        };
        assert!(metrics(&valid).is_ok());
        assert!(metrics(&InjectedMetrics::default()).is_ok());
        assert_eq!(metrics(&invalid), Err(RequestError::ScoreOutOfRange(130.0)));
    }
}
