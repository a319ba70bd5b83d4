use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::process_bill::{__path_process_bill, process_bill};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(process_bill))]
pub struct BillApiDoc;

pub fn bill_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/bill/process", state.args.server.root_path),
        post(process_bill),
    )
}
