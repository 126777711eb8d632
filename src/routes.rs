use std::str::FromStr;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use mongodb::bson::oid::ObjectId;

use crate::{error::ApiError, pet::NewPet, startup::ApplicationState};

pub fn pet_routes() -> Router<ApplicationState> {
    Router::new()
        .route("/pets", post(create_pet).get(list_pets))
        .route(
            "/pets/:pet_id",
            get(get_pet).put(replace_pet).delete(delete_pet),
        )
}

async fn create_pet(
    State(state): State<ApplicationState>,
    Json(new_pet): Json<NewPet>,
) -> Result<impl IntoResponse, ApiError> {
    let pet = state.store.insert(new_pet).await?;
    Ok((StatusCode::CREATED, Json(pet)))
}

async fn list_pets(State(state): State<ApplicationState>) -> Result<impl IntoResponse, ApiError> {
    let pets = state.store.list().await?;
    Ok(Json(pets))
}

async fn get_pet(
    State(state): State<ApplicationState>,
    Path(pet_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let pet_id = parse_pet_id(&pet_id)?;
    let pet = state
        .store
        .get(pet_id)
        .await?
        .ok_or(ApiError::PetNotFound(pet_id))?;

    Ok(Json(pet))
}

async fn replace_pet(
    State(state): State<ApplicationState>,
    Path(pet_id): Path<String>,
    Json(new_pet): Json<NewPet>,
) -> Result<impl IntoResponse, ApiError> {
    let pet_id = parse_pet_id(&pet_id)?;
    let pet = state
        .store
        .replace(pet_id, new_pet)
        .await?
        .ok_or(ApiError::PetNotFound(pet_id))?;

    Ok(Json(pet))
}

async fn delete_pet(
    State(state): State<ApplicationState>,
    Path(pet_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let pet_id = parse_pet_id(&pet_id)?;
    if !state.store.delete(pet_id).await? {
        return Err(ApiError::PetNotFound(pet_id));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn parse_pet_id(pet_id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::from_str(pet_id)
        .map_err(|_| ApiError::BadRequest("please provide a valid pet id".to_string()))
}
