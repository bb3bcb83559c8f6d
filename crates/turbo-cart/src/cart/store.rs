//! The cart store: the only way to change a cart.

use std::sync::Arc;

use tracing::{debug, info, warn};
use turbo_cache::Cache;

use crate::cart::{CartConfig, CartState};
use crate::catalog::CatalogService;
use crate::error::{CartError, CartOperation};
use crate::ids::ProductId;
use crate::notify::Notifier;

/// Owns the current cart snapshot and mediates every mutation.
///
/// Each operation either commits (storage written, then the in-memory
/// snapshot swapped) or fails with the snapshot untouched. Failures are
/// reported to the [`Notifier`] and returned as a typed [`CartError`].
///
/// Mutations take `&mut self`, so at most one operation is in flight.
///
/// # Example
///
/// ```rust,ignore
/// let mut store = CartStore::open(catalog, Cache::open(dir)?, TracingNotifier, &CartConfig::default())?;
/// store.add_product(ProductId::new(1)).await?;
/// store.update_product_amount(ProductId::new(1), 3).await?;
/// println!("{} items", store.cart().item_count());
/// ```
pub struct CartStore<C, N> {
    catalog: C,
    notifier: N,
    cache: Cache,
    key: String,
    snapshot: Arc<CartState>,
}

impl<C, N> CartStore<C, N>
where
    C: CatalogService,
    N: Notifier,
{
    /// Create a store, loading any cart persisted under the configured key.
    ///
    /// An absent key yields an empty cart. A persisted cart that cannot be
    /// read or breaks the cart invariants is an error.
    pub fn open(
        catalog: C,
        cache: Cache,
        notifier: N,
        config: &CartConfig,
    ) -> Result<Self, CartError> {
        let key = config.storage_key();
        let snapshot = cache.get::<CartState>(&key)?.unwrap_or_default();
        debug!(key = %key, entries = snapshot.len(), "cart loaded");

        Ok(Self {
            catalog,
            notifier,
            cache,
            key,
            snapshot: Arc::new(snapshot),
        })
    }

    /// Current cart snapshot.
    pub fn cart(&self) -> Arc<CartState> {
        Arc::clone(&self.snapshot)
    }

    /// Storage key the cart is persisted under.
    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Add one unit of a product, fetching its catalog data on first add.
    #[tracing::instrument(skip(self), fields(operation = "add"))]
    pub async fn add_product(&mut self, product_id: ProductId) -> Result<Arc<CartState>, CartError> {
        let next = self.prepare_add(product_id).await;
        self.settle(CartOperation::Add, next)
    }

    /// Remove a product from the cart entirely.
    #[tracing::instrument(skip(self), fields(operation = "remove"))]
    pub fn remove_product(&mut self, product_id: ProductId) -> Result<Arc<CartState>, CartError> {
        let next = self
            .snapshot
            .without(product_id)
            .ok_or(CartError::NotFound(product_id));
        self.settle(CartOperation::Remove, next)
    }

    /// Set the held quantity of a product already in the cart.
    #[tracing::instrument(skip(self), fields(operation = "update_amount"))]
    pub async fn update_product_amount(
        &mut self,
        product_id: ProductId,
        amount: i64,
    ) -> Result<Arc<CartState>, CartError> {
        let next = self.prepare_update(product_id, amount).await;
        self.settle(CartOperation::UpdateAmount, next)
    }

    async fn prepare_add(&self, product_id: ProductId) -> Result<CartState, CartError> {
        let held = self.snapshot.amount_of(product_id);

        let stock = self.catalog.stock(product_id).await?;
        debug!(%product_id, held, available = stock.amount, "stock checked");

        let requested = match held.checked_add(1) {
            Some(requested) if stock.can_fulfill(requested) => requested,
            requested => {
                return Err(CartError::OutOfStock {
                    product_id,
                    requested: requested.unwrap_or(i64::MAX),
                    available: stock.amount,
                });
            }
        };

        if self.snapshot.contains(product_id) {
            return self
                .snapshot
                .with_amount(product_id, requested)
                .ok_or(CartError::NotFound(product_id));
        }

        let product = self.catalog.product(product_id).await?;
        if product.id != product_id {
            return Err(CartError::OperationFailed(format!(
                "catalog returned product {} for {}",
                product.id, product_id
            )));
        }
        Ok(self.snapshot.with_appended(product.with_amount(1)))
    }

    async fn prepare_update(
        &self,
        product_id: ProductId,
        amount: i64,
    ) -> Result<CartState, CartError> {
        if amount <= 0 {
            return Err(CartError::InvalidAmount(amount));
        }
        if !self.snapshot.contains(product_id) {
            return Err(CartError::NotFound(product_id));
        }

        let stock = self.catalog.stock(product_id).await?;
        debug!(%product_id, amount, available = stock.amount, "stock checked");

        if !stock.can_fulfill(amount) {
            return Err(CartError::OutOfStock {
                product_id,
                requested: amount,
                available: stock.amount,
            });
        }

        self.snapshot
            .with_amount(product_id, amount)
            .ok_or(CartError::NotFound(product_id))
    }

    /// Commit a prepared snapshot, or report why there is none.
    fn settle(
        &mut self,
        operation: CartOperation,
        next: Result<CartState, CartError>,
    ) -> Result<Arc<CartState>, CartError> {
        let outcome = next.and_then(|state| self.commit(state));
        match &outcome {
            Ok(state) => {
                info!(%operation, entries = state.len(), items = state.item_count(), "cart updated");
            }
            Err(err) => {
                warn!(%operation, error = %err, "cart operation rejected");
                self.notifier.error(err.notice(operation));
            }
        }
        outcome
    }

    /// Storage first, then memory, so a failed write leaves both on the
    /// previous snapshot.
    fn commit(&mut self, state: CartState) -> Result<Arc<CartState>, CartError> {
        self.cache.set(&self.key, &state)?;
        self.snapshot = Arc::new(state);
        Ok(Arc::clone(&self.snapshot))
    }
}

impl<C, N> std::fmt::Debug for CartStore<C, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("key", &self.key)
            .field("snapshot", &self.snapshot)
            .finish_non_exhaustive()
    }
}
