use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::ValidatedJson;
use crate::repos::sleepers::Sleeper;
use crate::services::sleepers as sleeper_service;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSleepersRequest {
    pub number: i64,
}

/// Wire shape of a sleeper record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleeperResponse {
    pub sleeper_uuid: String,
    pub sleeper_time: f64,
}

impl From<Sleeper> for SleeperResponse {
    fn from(value: Sleeper) -> Self {
        Self {
            sleeper_uuid: value.id,
            sleeper_time: value.value,
        }
    }
}

async fn create_sleepers(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateSleepersRequest>,
) -> Result<HttpResponse, AppError> {
    let number = body.into_inner().number;
    let created = sleeper_service::create_sleepers(&app_state, number).await?;

    let response: Vec<SleeperResponse> = created.into_iter().map(SleeperResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

async fn delete_sleepers(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    sleeper_service::delete_sleepers(&app_state).await?;
    Ok(HttpResponse::Ok().finish())
}

async fn get_sleeper(
    app_state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let sleeper = sleeper_service::get_sleeper(&app_state, &id).await?;
    Ok(HttpResponse::Ok().json(SleeperResponse::from(sleeper)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/create", web::post().to(create_sleepers))
        .route("/delete", web::post().to(delete_sleepers))
        .route("/get/{id}", web::get().to(get_sleeper));
}
