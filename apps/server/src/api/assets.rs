use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult, ValidationDetail},
    main_lib::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use maintenance_core::assets::{Asset, Criticality, NewAsset};
use serde::Deserialize;

/// Body of `POST /assets`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateAssetRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub criticality: Option<String>,
}

impl CreateAssetRequest {
    /// Checks the request-level rules and converts to the domain input.
    pub fn into_new_asset(self) -> ApiResult<NewAsset> {
        let mut details = Vec::new();

        if self.name.is_empty() {
            details.push(ValidationDetail::new("name", "required"));
        } else if self.name.chars().count() < 2 {
            details.push(ValidationDetail::new("name", "min"));
        }

        let criticality = match self.criticality.as_deref() {
            None | Some("") => None,
            Some(value) => match value.parse::<Criticality>() {
                Ok(c) => Some(c),
                Err(_) => {
                    details.push(ValidationDetail::new("criticality", "oneof"));
                    None
                }
            },
        };

        if !details.is_empty() {
            return Err(ApiError::Validation(details));
        }

        Ok(NewAsset {
            name: self.name,
            location: self.location,
            criticality,
        })
    }
}

async fn create_asset(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateAssetRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Asset>)> {
    let Json(request) = payload?;
    let new_asset = request.into_new_asset()?;
    let asset = state.asset_service.create_asset(new_asset).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

async fn list_assets(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Asset>>> {
    let assets = state.asset_service.get_assets()?;
    Ok(Json(assets))
}

async fn get_asset(
    Path(id): Path<i64>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Asset>> {
    let asset = state.asset_service.get_asset(id)?;
    Ok(Json(asset))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assets", get(list_assets).post(create_asset))
        .route("/assets/{id}", get(get_asset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, criticality: Option<&str>) -> CreateAssetRequest {
        CreateAssetRequest {
            name: name.to_string(),
            location: None,
            criticality: criticality.map(str::to_string),
        }
    }

    fn rules(err: ApiError) -> Vec<ValidationDetail> {
        match err {
            ApiError::Validation(details) => details,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn missing_and_short_names_are_rejected() {
        let err = request("", None).into_new_asset().unwrap_err();
        assert_eq!(rules(err), vec![ValidationDetail::new("name", "required")]);

        let err = request("X", None).into_new_asset().unwrap_err();
        assert_eq!(rules(err), vec![ValidationDetail::new("name", "min")]);
    }

    #[test]
    fn unknown_criticality_is_rejected_alongside_other_failures() {
        let err = request("", Some("Z")).into_new_asset().unwrap_err();
        assert_eq!(
            rules(err),
            vec![
                ValidationDetail::new("name", "required"),
                ValidationDetail::new("criticality", "oneof"),
            ]
        );
    }

    #[test]
    fn empty_criticality_is_treated_as_absent() {
        let new_asset = request("Pump", Some("")).into_new_asset().unwrap();
        assert_eq!(new_asset.criticality, None);

        let new_asset = request("Pump", Some("C")).into_new_asset().unwrap();
        assert_eq!(new_asset.criticality, Some(Criticality::C));
    }
}
