use blockgrade::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult, ErrorResponse},
    models::dto::response::{
        GradeResponse, HealthResponse, RegradeBlockResponse, TaskTotalsResponse,
    },
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "blockgrade", version, about = "Grade stored block results")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Re-score one block result, optionally with a manual score
    Regrade {
        #[arg(long)]
        result: String,
        #[arg(long = "override")]
        override_score: Option<i32>,
    },
    /// Re-score every result of a block after its point value changed
    RegradeBlock {
        #[arg(long)]
        block: String,
    },
    /// Check that the configured database answers
    Health,
    /// Recompute a task result's totals from its linked block results
    Totals {
        #[arg(long)]
        task_result: String,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(output) => println!("{}", output),
        Err(err) => {
            log::error!("{}", err);
            let response = ErrorResponse::from(&err);
            eprintln!(
                "{}",
                serde_json::to_string(&response).unwrap_or_else(|_| err.to_string())
            );
            std::process::exit(1);
        }
    }
}

async fn run(command: Command) -> AppResult<String> {
    let state = AppState::new(Config::from_env()).await?;

    let output = match command {
        Command::Health => {
            state.db.health_check().await?;
            to_json(&HealthResponse {
                database: state.config.mongo_db_name.clone(),
                status: "ok",
            })?
        }
        Command::Regrade {
            result,
            override_score,
        } => {
            let service = &state.block_result_service;
            let mut outcome = service.regrade(&result, override_score).await?;
            if !outcome.persisted {
                outcome.result = service.save(outcome.result).await?;
            }
            to_json(&GradeResponse::new(&outcome.result, true))?
        }
        Command::RegradeBlock { block } => {
            let regraded = state.block_result_service.regrade_block(&block).await?;
            to_json(&RegradeBlockResponse {
                block_id: block,
                regraded,
            })?
        }
        Command::Totals { task_result } => {
            let totals = state.task_result_service.refresh_totals(&task_result).await?;
            to_json(&TaskTotalsResponse::new(&task_result, totals))?
        }
    };

    Ok(output)
}

fn to_json<T: serde::Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|err| AppError::InternalError(err.to_string()))
}
