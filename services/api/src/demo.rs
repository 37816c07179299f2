use crate::infra::{build_service, InsightsService};
use clap::Args;
use learning_insights::analytics::validation;
use learning_insights::analytics::{InjectedMetrics, PredictionResult, StudentKey};
use learning_insights::error::AppError;
use serde::Serialize;

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Student identifier
    #[arg(long)]
    pub(crate) student_id: u32,
    /// Module code, e.g. CS101
    #[arg(long)]
    pub(crate) module_code: String,
    /// Injected average score (0-100); switches to the real-time path
    #[arg(long)]
    pub(crate) avg_score: Option<f64>,
    /// Injected number of previous attempts; switches to the real-time path
    #[arg(long)]
    pub(crate) prev_attempts: Option<u32>,
    /// Use the reproducible simulation instead of stored or injected data
    #[arg(long, conflicts_with_all = ["avg_score", "prev_attempts"])]
    pub(crate) simulate: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Student identifier
    #[arg(long)]
    pub(crate) student_id: u32,
    /// Module code, e.g. CS201
    #[arg(long)]
    pub(crate) module_code: String,
}

#[derive(Args, Debug)]
pub(crate) struct QuizArgs {
    /// Module code used to pick the question bank
    #[arg(long)]
    pub(crate) module_code: String,
    /// Requested difficulty; recorded but does not filter questions
    #[arg(long)]
    pub(crate) difficulty: Option<String>,
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn injected_metrics(args: &PredictArgs) -> Option<InjectedMetrics> {
    if args.avg_score.is_none() && args.prev_attempts.is_none() {
        return None;
    }
    Some(InjectedMetrics {
        avg_score: args.avg_score,
        prev_attempts: args.prev_attempts,
    })
}

/// Applies the same checks as the HTTP layer before scoring.
fn predict(service: &InsightsService, args: &PredictArgs) -> Result<PredictionResult, AppError> {
    let module_code = validation::module_code(&args.module_code)?;
    if args.simulate {
        return Ok(service.simulate(StudentKey::from(args.student_id), module_code));
    }

    let student_id = validation::student_id(i64::from(args.student_id))?;
    let metrics = injected_metrics(args);
    if let Some(metrics) = &metrics {
        validation::metrics(metrics)?;
    }
    Ok(service.predict(student_id, module_code, metrics.as_ref()))
}

pub(crate) fn run_predict(args: PredictArgs) -> Result<(), AppError> {
    let service = build_service();
    print_json(&predict(&service, &args)?)
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let service = build_service();
    print_json(&service.recommend(args.student_id, &args.module_code))
}

pub(crate) fn run_quiz(args: QuizArgs) -> Result<(), AppError> {
    let service = build_service();
    print_json(&service.quiz(&args.module_code, args.difficulty.as_deref()))
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let service = build_service();

    println!("Learning insights demo");
    for student in service.students() {
        for module in service.modules() {
            let prediction = service.predict(student.student_id, &module.module_code, None);
            println!(
                "  {:<16} {:<8} {:>5.2} {}",
                student.name, module.module_code, prediction.success_proba, prediction.risk_level
            );
        }
    }

    println!("\nReal-time prediction (first attempt, average 50)");
    let metrics = InjectedMetrics {
        avg_score: Some(50.0),
        prev_attempts: Some(0),
    };
    print_json(&service.predict(1, "CS201", Some(&metrics)))?;

    println!("\nSimulated prediction for an unknown pair");
    print_json(&service.simulate(StudentKey::from(99), "CS101"))?;

    println!("\nRecommendations for student 2 in CS201");
    print_json(&service.recommend(2, "CS201"))?;

    println!("\nQuiz for DevOps101");
    print_json(&service.quiz("DevOps101", None))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use learning_insights::analytics::RiskLevel;

    fn args(avg_score: Option<f64>, prev_attempts: Option<u32>, simulate: bool) -> PredictArgs {
        PredictArgs {
            student_id: 1,
            module_code: "CS101".to_string(),
            avg_score,
            prev_attempts,
            simulate,
        }
    }

    #[test]
    fn cli_prediction_defaults_to_stored_profile() {
        let result = predict(&build_service(), &args(None, None, false)).expect("scores");
        assert_eq!(result.success_proba, 1.0);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn any_injected_flag_switches_to_real_time_path() {
        let result = predict(&build_service(), &args(None, Some(3), false)).expect("scores");
        // default score 50, minus the repeat-attempt penalty
        assert_eq!(result.success_proba, 0.4);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn simulate_flag_is_reproducible() {
        let service = build_service();
        let first = predict(&service, &args(None, None, true)).expect("simulates");
        let second = predict(&service, &args(None, None, true)).expect("simulates");
        assert_eq!(first, second);
        assert_eq!(first.message, "Simulation (missing data)");
    }

    #[test]
    fn out_of_range_score_is_rejected_like_http() {
        let err = predict(&build_service(), &args(Some(150.0), None, false))
            .expect_err("score above 100 rejected");
        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[test]
    fn zero_student_id_is_rejected() {
        let mut zero = args(None, None, false);
        zero.student_id = 0;
        assert!(predict(&build_service(), &zero).is_err());
    }
}
