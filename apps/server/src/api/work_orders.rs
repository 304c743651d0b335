use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult, ValidationDetail},
    main_lib::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use maintenance_core::work_orders::{NewWorkOrder, WorkOrder, WorkOrderStatus, WorkOrderType};
use serde::Deserialize;
use std::str::FromStr;

/// Body of `POST /work-orders`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateWorkOrderRequest {
    #[serde(default)]
    pub asset_id: i64,
    #[serde(default, rename = "type")]
    pub order_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

// Empty strings count as absent; anything else must name a variant.
fn optional_enum<T: FromStr>(
    value: Option<&str>,
    field: &str,
    details: &mut Vec<ValidationDetail>,
) -> Option<T> {
    match value {
        None | Some("") => None,
        Some(v) => v.parse().map_or_else(
            |_| {
                details.push(ValidationDetail::new(field, "oneof"));
                None
            },
            Some,
        ),
    }
}

impl CreateWorkOrderRequest {
    pub fn into_new_work_order(self) -> ApiResult<NewWorkOrder> {
        let mut details = Vec::new();

        if self.asset_id == 0 {
            details.push(ValidationDetail::new("asset_id", "required"));
        } else if self.asset_id < 0 {
            details.push(ValidationDetail::new("asset_id", "gt"));
        }

        let order_type =
            optional_enum::<WorkOrderType>(self.order_type.as_deref(), "type", &mut details);
        let status = optional_enum::<WorkOrderStatus>(self.status.as_deref(), "status", &mut details);

        if self.title.is_empty() {
            details.push(ValidationDetail::new("title", "required"));
        } else if self.title.chars().count() < 3 {
            details.push(ValidationDetail::new("title", "min"));
        }

        if !details.is_empty() {
            return Err(ApiError::Validation(details));
        }

        Ok(NewWorkOrder {
            asset_id: self.asset_id,
            order_type,
            status,
            title: self.title,
            description: self.description,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListWorkOrdersQuery {
    pub status: Option<String>,
}

async fn create_work_order(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateWorkOrderRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<WorkOrder>)> {
    let Json(request) = payload?;
    let new_order = request.into_new_work_order()?;
    let order = state.work_order_service.create_work_order(new_order).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

async fn list_work_orders(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListWorkOrdersQuery>,
) -> ApiResult<Json<Vec<WorkOrder>>> {
    let filter = query.status.unwrap_or_default();
    let orders = state.work_order_service.get_work_orders(&filter)?;
    Ok(Json(orders))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/work-orders",
        get(list_work_orders).post(create_work_order),
    )
}
