use crate::demo::{
    run_demo, run_predict, run_quiz, run_recommend, PredictArgs, QuizArgs, RecommendArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use learning_insights::config::AppConfig;
use learning_insights::error::AppError;
use learning_insights::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Learning Insights",
    about = "Serve or query success predictions, recommendations and quizzes",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Predict success probability and risk level for a student and module
    Predict(PredictArgs),
    /// List recommended resources for a student and module
    Recommend(RecommendArgs),
    /// Print the quiz question bank selected for a module
    Quiz(QuizArgs),
    /// Run every operation against the known catalog
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::Predict(args) => run_predict(args),
        Command::Recommend(args) => run_recommend(args),
        Command::Quiz(args) => run_quiz(args),
        Command::Demo => run_demo(),
    }
}
