//! Beer stock domain service
//!
//! Business rules for the beer inventory: a beer name may be registered only
//! once, and the stock quantity never leaves [0, max]. Any operation that
//! would break a rule is rejected without touching stored state.

use crate::beers::{Beer, BeerDb, NewBeer};
use crate::error::AppError;
use tracing::info;

/// Domain service for beer stock operations
///
/// Owns the database handle and is shared across requests via `Arc`.
pub struct StockService {
    db: BeerDb,
}

impl StockService {
    /// Create a service on top of an initialized database
    pub fn new(db: BeerDb) -> Self {
        Self { db }
    }

    /// Register a new beer
    ///
    /// Fails with `BeerAlreadyRegistered` if the name is already taken.
    pub async fn create(&self, new_beer: NewBeer) -> Result<Beer, AppError> {
        self.verify_not_registered(&new_beer.name).await?;
        let beer = self.db.insert(&new_beer).await?;
        info!("Registered beer {} ({})", beer.id, beer.name);
        Ok(beer)
    }

    /// List every registered beer in storage order
    pub async fn list_all(&self) -> Result<Vec<Beer>, AppError> {
        self.db.list_all().await
    }

    /// Find a beer by its unique name
    pub async fn find_by_name(&self, name: &str) -> Result<Beer, AppError> {
        self.db
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::BeerNotFound(name.to_string()))
    }

    /// Find a beer by id
    pub async fn find_by_id(&self, id: i64) -> Result<Beer, AppError> {
        self.verify_exists(id).await
    }

    /// Delete a beer by id
    ///
    /// Fails with `BeerNotFound` if no such beer is registered.
    pub async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        self.verify_exists(id).await?;
        self.db.delete_by_id(id).await?;
        info!("Deleted beer {}", id);
        Ok(())
    }

    /// Increase the stock of a beer
    ///
    /// Fails with `StockExceededOnIncrement` if the result would exceed the
    /// beer's max capacity; stored state is left unchanged in that case.
    pub async fn increment(&self, id: i64, quantity: i64) -> Result<Beer, AppError> {
        let beer = self.verify_exists(id).await?;

        let quantity_after_increment = beer.quantity + quantity;
        if quantity_after_increment > beer.max {
            return Err(AppError::StockExceededOnIncrement { id, quantity });
        }

        self.db.update_quantity(id, quantity_after_increment).await?;
        self.verify_exists(id).await
    }

    /// Decrease the stock of a beer
    ///
    /// Fails with `StockExceededOnDecrement` if the result would drop below
    /// zero; stored state is left unchanged in that case. The floor is a
    /// fixed zero, not a configured minimum.
    pub async fn decrement(&self, id: i64, quantity: i64) -> Result<Beer, AppError> {
        let beer = self.verify_exists(id).await?;

        let quantity_after_decrement = beer.quantity - quantity;
        if quantity_after_decrement < 0 {
            return Err(AppError::StockExceededOnDecrement { id, quantity });
        }

        self.db.update_quantity(id, quantity_after_decrement).await?;
        self.verify_exists(id).await
    }

    async fn verify_exists(&self, id: i64) -> Result<Beer, AppError> {
        self.db
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::BeerNotFound(id.to_string()))
    }

    async fn verify_not_registered(&self, name: &str) -> Result<(), AppError> {
        if self.db.find_by_name(name).await?.is_some() {
            return Err(AppError::BeerAlreadyRegistered(name.to_string()));
        }
        Ok(())
    }
}
