//! CLI command implementations.

pub mod add;
pub mod config;
pub mod remove;
pub mod show;
pub mod update;

use std::fmt;

use clap::{Args, Subcommand};
use turbo_cart::{CartError, ProductId};

/// A cart failure whose notice the store's notifier already printed.
#[derive(Debug)]
pub struct Reported(pub CartError);

impl fmt::Display for Reported {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Reported {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.0)
    }
}

/// Whether `err` was already shown to the user and only needs logging.
pub fn already_reported(err: &anyhow::Error) -> bool {
    err.downcast_ref::<Reported>().is_some()
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {}

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product ID.
    pub product_id: ProductId,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Product ID.
    pub product_id: ProductId,

    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Product ID.
    pub product_id: ProductId,

    /// New quantity.
    #[arg(allow_negative_numbers = true)]
    pub amount: i64,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_notified_failures_are_reported() {
        let notified = anyhow::Error::new(Reported(CartError::NotFound(ProductId::new(3))))
            .context("Failed to remove product");
        assert!(already_reported(&notified));
        assert_eq!(format!("{:#}", notified), "Failed to remove product: Item not in cart: 3");

        let load = anyhow::Error::new(CartError::OperationFailed("bad json".to_string()));
        assert!(!already_reported(&load));
    }
}
