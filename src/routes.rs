//! Generic list and retrieve handlers for (possibly nested) resources.
//!
//! Handlers read every resolved path placeholder as a string map, derive the
//! parent filter from the resource's lookup mapping, and hand the narrowed
//! condition to the resource's query operations. Resources without a mapping
//! run unfiltered; this serves top-level collections and deliberately
//! unscoped nested ones alike.

use axum::{
    Json,
    extract::{Path, State},
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::collections::HashMap;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::filter::parent_condition;
use crate::traits::NestedResource;

/// Lists a collection, narrowed to the parents named in the URL path.
///
/// # Errors
///
/// Responds 500 for a lookup placeholder missing from the route or for a
/// database failure; both leave detail in the log only.
pub async fn get_all<T>(
    State(db): State<DatabaseConnection>,
    Path(params): Path<HashMap<String, String>>,
) -> Result<Json<Vec<T>>, ApiError>
where
    T: NestedResource + Serialize,
{
    let condition = parent_condition(&T::parent_lookups(), &params)?;
    let items = T::get_all(&db, condition).await?;
    Ok(Json(items))
}

/// Retrieves one record by id, within the scope of the parents named in the
/// URL path. A record living under a different parent responds 404.
///
/// The id is read from the placeholder named by the resource's `ID_PARAM`.
///
/// # Errors
///
/// Responds 400 for a malformed id, 404 for a record absent from the
/// narrowed collection, 500 for lookup or database failures.
pub async fn get_one<T>(
    State(db): State<DatabaseConnection>,
    Path(params): Path<HashMap<String, String>>,
) -> Result<Json<T>, ApiError>
where
    T: NestedResource + Serialize,
{
    let raw_id = params
        .get(T::ID_PARAM)
        .ok_or_else(|| ApiError::internal(
            "Server error".to_string(),
            Some(format!("id placeholder '{}' not found in route", T::ID_PARAM)),
        ))?;
    let id = Uuid::parse_str(raw_id)
        .map_err(|_| ApiError::bad_request(format!("Invalid {} id", T::RESOURCE_NAME_SINGULAR)))?;
    let condition = parent_condition(&T::parent_lookups(), &params)?;
    let item = T::get_one(&db, id, condition).await?;
    Ok(Json(item))
}
