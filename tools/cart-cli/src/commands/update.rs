//! Change the quantity of a product in the cart.

use anyhow::Result;

use super::{Reported, UpdateArgs};
use crate::context::Context;

/// Run the update command.
pub async fn run(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.open_store()?;

    let spinner = ctx
        .output
        .spinner(&format!("Checking stock for product {}...", args.product_id));
    let result = store
        .update_product_amount(args.product_id, args.amount)
        .await;
    spinner.finish_and_clear();

    let cart = result.map_err(Reported)?;
    if ctx.output.is_json() {
        ctx.output.json(&*cart);
        return Ok(());
    }

    ctx.output.success(&format!(
        "Product {} quantity set to {}",
        args.product_id, args.amount
    ));
    Ok(())
}
