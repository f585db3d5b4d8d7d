use crate::models::request::CountryRequest;
use crate::models::response::GciResponse;
use crate::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::warn;

/// `POST /gci`. Always answers 200; failures travel in the body.
pub async fn gci(
    State(app_state): State<AppState>,
    payload: Result<Json<CountryRequest>, JsonRejection>,
) -> Json<GciResponse> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected /gci body: {}", rejection.body_text());
            return Json(GciResponse::failed(rejection.body_text()));
        }
    };

    Json(app_state.country_service.lookup(&request.country_name).await)
}
