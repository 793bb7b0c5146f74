//! Beer stock API handlers
//!
//! Contains HTTP request handlers for beer CRUD and stock operations.

use crate::beers::{Beer, BeerType, NewBeer};
use crate::error::AppError;
use crate::services::StockService;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Beer response type
#[derive(Debug, Serialize)]
pub struct BeerResponse {
    /// Unique identifier for the beer
    pub id: i64,
    /// Name of the beer
    pub name: String,
    /// Brand that produces the beer
    pub brand: String,
    /// Maximum stock capacity
    pub max: i64,
    /// Current stock quantity
    pub quantity: i64,
    /// Style of the beer (uppercase style name)
    pub beer_type: String,
}

impl From<Beer> for BeerResponse {
    fn from(beer: Beer) -> Self {
        Self {
            id: beer.id,
            name: beer.name,
            brand: beer.brand,
            max: beer.max,
            quantity: beer.quantity,
            beer_type: beer.beer_type,
        }
    }
}

/// Create beer request
#[derive(Debug, Deserialize)]
pub struct CreateBeerRequest {
    /// Name for the new beer (must be unique)
    pub name: String,
    /// Brand that produces the beer
    pub brand: String,
    /// Maximum stock capacity
    pub max: i64,
    /// Initial stock quantity (defaults to 0)
    pub quantity: Option<i64>,
    /// Style of the beer
    pub beer_type: BeerType,
}

impl CreateBeerRequest {
    /// Validate the request fields
    /// Returns Ok(()) if valid, Err with message if invalid
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Beer name cannot be empty".to_string());
        }
        if self.brand.trim().is_empty() {
            return Err("Beer brand cannot be empty".to_string());
        }
        if self.max <= 0 {
            return Err("Max stock capacity must be positive".to_string());
        }
        let quantity = self.quantity.unwrap_or(0);
        if quantity < 0 || quantity > self.max {
            return Err(format!(
                "Initial quantity must be between 0 and max ({})",
                self.max
            ));
        }
        Ok(())
    }
}

/// Quantity request for increment/decrement
#[derive(Debug, Deserialize)]
pub struct QuantityRequest {
    /// Amount to move the stock by (non-negative)
    pub quantity: i64,
}

impl QuantityRequest {
    /// Validate the request fields
    /// Returns Ok(()) if valid, Err with message if invalid
    pub fn validate(&self) -> Result<(), String> {
        if self.quantity < 0 {
            return Err("Quantity to move cannot be negative".to_string());
        }
        Ok(())
    }
}

/// POST /api/v1/beers - Register a new beer
pub async fn create_beer(
    State(service): State<Arc<StockService>>,
    Json(request): Json<CreateBeerRequest>,
) -> Result<(StatusCode, Json<BeerResponse>), AppError> {
    // Validate request fields before touching the service
    request.validate().map_err(AppError::InvalidBeer)?;

    let new_beer = NewBeer {
        name: request.name,
        brand: request.brand,
        max: request.max,
        quantity: request.quantity.unwrap_or(0),
        beer_type: request.beer_type,
    };

    let beer = service.create(new_beer).await?;
    Ok((StatusCode::CREATED, Json(BeerResponse::from(beer))))
}

/// GET /api/v1/beers - List all beers
pub async fn list_beers(
    State(service): State<Arc<StockService>>,
) -> Result<Json<Vec<BeerResponse>>, AppError> {
    let beers = service.list_all().await?;
    let responses: Vec<BeerResponse> = beers.into_iter().map(BeerResponse::from).collect();

    Ok(Json(responses))
}

/// GET /api/v1/beers/name/:name - Find a beer by its unique name
pub async fn find_beer_by_name(
    State(service): State<Arc<StockService>>,
    Path(name): Path<String>,
) -> Result<Json<BeerResponse>, AppError> {
    let beer = service.find_by_name(&name).await?;
    Ok(Json(BeerResponse::from(beer)))
}

/// GET /api/v1/beers/:id - Find a beer by id
pub async fn find_beer_by_id(
    State(service): State<Arc<StockService>>,
    Path(id): Path<i64>,
) -> Result<Json<BeerResponse>, AppError> {
    let beer = service.find_by_id(id).await?;
    Ok(Json(BeerResponse::from(beer)))
}

/// DELETE /api/v1/beers/:id - Delete a beer
pub async fn delete_beer(
    State(service): State<Arc<StockService>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/v1/beers/:id/increment - Increase the stock of a beer
pub async fn increment_beer(
    State(service): State<Arc<StockService>>,
    Path(id): Path<i64>,
    Json(request): Json<QuantityRequest>,
) -> Result<Json<BeerResponse>, AppError> {
    request.validate().map_err(AppError::InvalidBeer)?;

    let beer = service.increment(id, request.quantity).await?;
    Ok(Json(BeerResponse::from(beer)))
}

/// PATCH /api/v1/beers/:id/decrement - Decrease the stock of a beer
pub async fn decrement_beer(
    State(service): State<Arc<StockService>>,
    Path(id): Path<i64>,
    Json(request): Json<QuantityRequest>,
) -> Result<Json<BeerResponse>, AppError> {
    request.validate().map_err(AppError::InvalidBeer)?;

    let beer = service.decrement(id, request.quantity).await?;
    Ok(Json(BeerResponse::from(beer)))
}
