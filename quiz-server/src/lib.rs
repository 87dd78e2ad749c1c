use quiz_core::QuestionProvider;
use quiz_types::{ApiError, CategoryInfo, GameType};
use std::sync::Arc;
use warp::Filter;
use warp::http::StatusCode;

pub mod config;
pub mod gemini;

pub fn create_routes(
    provider: Arc<dyn QuestionProvider>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let provider_filter = warp::any().map(move || provider.clone());

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", StatusCode::OK));

    // Category listing for the home screen
    let categories = warp::path("categories")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| {
            let categories: Vec<CategoryInfo> =
                GameType::ALL.into_iter().map(CategoryInfo::from).collect();
            warp::reply::json(&categories)
        });

    // Question set for one level
    let questions = warp::path!("questions" / String)
        .and(warp::get())
        .and(provider_filter)
        .and_then(handle_questions_request);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET"]);

    health
        .or(categories)
        .or(questions)
        .recover(handle_rejection)
        .with(cors)
        .with(warp::log("carnaval_quiz"))
}

async fn handle_questions_request(
    category: String,
    provider: Arc<dyn QuestionProvider>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let category = match category.parse::<GameType>() {
        Ok(category) => category,
        Err(e) => {
            tracing::debug!("Rejected question request: {}", e);
            return Ok(warp::reply::with_status(
                warp::reply::json(&ApiError::UnknownCategory { name: e.name }),
                StatusCode::BAD_REQUEST,
            ));
        }
    };

    let questions = provider.questions_for(category).await;
    tracing::info!("Serving {} {} questions", questions.len(), category);

    Ok(warp::reply::with_status(
        warp::reply::json(&questions),
        StatusCode::OK,
    ))
}

async fn handle_rejection(err: warp::Rejection) -> Result<impl warp::Reply, warp::Rejection> {
    if err.is_not_found() {
        Ok(warp::reply::with_status(
            warp::reply::json(&ApiError::NotFound),
            StatusCode::NOT_FOUND,
        ))
    } else {
        Err(err)
    }
}
