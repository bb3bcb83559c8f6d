//! Remove a product from the cart.

use anyhow::Result;
use dialoguer::Confirm;

use super::{RemoveArgs, Reported};
use crate::context::Context;

/// Run the remove command.
pub async fn run(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;

    if !args.yes && !ctx.output.is_json() {
        let title = store
            .cart()
            .get(args.product_id)
            .map(|item| item.title.clone());
        // missing products fall through so the store reports them
        if let Some(title) = title {
            let confirmed = Confirm::new()
                .with_prompt(format!("Remove {} from the cart?", title))
                .default(false)
                .interact()?;
            if !confirmed {
                ctx.output.info("Cancelled");
                return Ok(());
            }
        }
    }

    let cart = store.remove_product(args.product_id).map_err(Reported)?;
    if ctx.output.is_json() {
        ctx.output.json(&*cart);
        return Ok(());
    }

    ctx.output
        .success(&format!("Removed product {}", args.product_id));
    Ok(())
}
