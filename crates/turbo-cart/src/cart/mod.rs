//! Shopping cart module.
//!
//! Contains the cart snapshot type, its configuration, and the store that
//! mediates every mutation.

mod config;
mod state;
mod store;

pub use config::{CartConfig, DEFAULT_NAMESPACE};
pub use state::CartState;
pub use store::CartStore;
