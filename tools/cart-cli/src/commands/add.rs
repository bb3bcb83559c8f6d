//! Add a product to the cart.

use anyhow::Result;

use super::{AddArgs, Reported};
use crate::context::Context;

/// Run the add command.
pub async fn run(args: AddArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;

    let spinner = ctx
        .output
        .spinner(&format!("Checking stock for product {}...", args.product_id));
    let result = store.add_product(args.product_id).await;
    spinner.finish_and_clear();

    let cart = result.map_err(Reported)?;
    if ctx.output.is_json() {
        ctx.output.json(&*cart);
        return Ok(());
    }

    let amount = cart.amount_of(args.product_id);
    let title = cart
        .get(args.product_id)
        .map(|item| item.title.as_str())
        .unwrap_or_default();
    ctx.output.success(&format!(
        "Added {} (product {}, {} in cart)",
        title, args.product_id, amount
    ));
    Ok(())
}
