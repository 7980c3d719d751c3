use axum::{
    extract::{FromRef, State},
    routing::{get, post},
    Form, Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use super::dto::{PublicUser, TokenRequest, TokenResponse};
use super::jwt::{AuthUser, JwtKeys};
use super::store::authenticate_user;
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/token", post(login_for_access_token))
        .route("/users/me", get(read_users_me))
        .route("/user/me/items/", get(read_own_items))
}

#[instrument(skip(state, form))]
pub async fn login_for_access_token(
    State(state): State<AppState>,
    Form(form): Form<TokenRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = authenticate_user(state.users.as_ref(), &form.username, &form.password).await?;
    let Some(user) = user else {
        warn!(username = %form.username, "login failed");
        return Err(ApiError::Unauthorized(
            "Incorrect username or password".into(),
        ));
    };

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign_access(&user.username)?;

    info!(username = %user.username, "token issued");
    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer".into(),
    }))
}

#[instrument(skip(state))]
pub async fn read_users_me(
    State(state): State<AppState>,
    AuthUser(username): AuthUser,
) -> Result<Json<PublicUser>, ApiError> {
    let user = state
        .users
        .find_user(&username)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("User not found".into()))?;
    Ok(Json(user.into()))
}

/// Demo list of items owned by the authenticated user.
#[instrument]
pub async fn read_own_items(AuthUser(username): AuthUser) -> Json<Value> {
    Json(json!([{ "item_id": "Foo", "owner": username }]))
}
