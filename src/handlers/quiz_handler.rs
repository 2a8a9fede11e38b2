use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{GenerateQuizRequest, SubmitQuizRequest},
};

#[post("/generate-quiz")]
async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.quiz_service.generate_quiz(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/submit-quiz")]
async fn submit_quiz(
    state: web::Data<AppState>,
    request: web::Json<SubmitQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.quiz_service.submit_quiz(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/")]
async fn root() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "YTQuiz API is running.",
        "health": "/health",
        "generateQuiz": "/generate-quiz",
        "submitQuiz": "/submit-quiz",
    }))
}
