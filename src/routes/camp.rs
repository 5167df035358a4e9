//! Camper, activity, and signup routes. Each route keeps its own status for unsupported
//! methods; activities use axum's default 405.

use crate::handlers::{activities, campers, signups};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn camp_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/campers",
            get(campers::list)
                .post(campers::create)
                .fallback(campers::collection_fallback),
        )
        .route(
            "/campers/:id",
            get(campers::read)
                .patch(campers::update)
                .fallback(campers::member_fallback),
        )
        .route("/activities", get(activities::list))
        .route("/activities/:id", get(activities::read).delete(activities::delete))
        .route(
            "/signups",
            get(signups::list)
                .post(signups::create)
                .fallback(signups::collection_fallback),
        )
        .with_state(state)
}
