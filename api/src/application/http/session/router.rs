use axum::{
    Router,
    routing::{get, patch, post},
};
use utoipa::OpenApi;

use super::handlers::{
    add_person::{__path_add_person, add_person},
    commit_split::{__path_commit_split, commit_split},
    create_session::{__path_create_session, create_session},
    finalize_session::{__path_finalize_session, finalize_session},
    get_allocation::{__path_get_allocation, get_allocation},
    get_session::{__path_get_session, get_session},
    remove_person::{__path_remove_person, remove_person},
    update_person::{__path_update_person, update_person},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(
    create_session,
    get_session,
    add_person,
    update_person,
    remove_person,
    commit_split,
    get_allocation,
    finalize_session
))]
pub struct SessionApiDoc;

pub fn session_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/sessions", state.args.server.root_path),
            post(create_session),
        )
        .route(
            &format!("{}/sessions/{{session_id}}", state.args.server.root_path),
            get(get_session),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/people",
                state.args.server.root_path
            ),
            post(add_person),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/people/{{person_id}}",
                state.args.server.root_path
            ),
            patch(update_person).delete(remove_person),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/splits",
                state.args.server.root_path
            ),
            post(commit_split),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/allocation",
                state.args.server.root_path
            ),
            get(get_allocation),
        )
        .route(
            &format!(
                "{}/sessions/{{session_id}}/finalize",
                state.args.server.root_path
            ),
            post(finalize_session),
        )
}
