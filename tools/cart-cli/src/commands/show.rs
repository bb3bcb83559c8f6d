//! Show the cart.

use anyhow::Result;
use serde::Serialize;
use turbo_cart::CartState;

use super::ShowArgs;
use crate::context::Context;
use crate::output::{format_price, truncate};

const WIDTHS: [usize; 5] = [6, 40, 6, 10, 10];

#[derive(Serialize)]
struct CartView<'a> {
    items: &'a CartState,
    item_count: i64,
    total: f64,
}

/// Run the show command.
pub async fn run(_args: ShowArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let cart = store.cart();

    if ctx.output.is_json() {
        ctx.output.json(&CartView {
            items: cart.as_ref(),
            item_count: cart.item_count(),
            total: cart.total(),
        });
        return Ok(());
    }

    print_cart(&cart, ctx);
    Ok(())
}

/// Print the cart as a table.
fn print_cart(cart: &CartState, ctx: &Context) {
    ctx.output.header("Cart");

    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
        return;
    }

    ctx.output
        .table_row(&["ID", "PRODUCT", "QTY", "PRICE", "SUBTOTAL"], &WIDTHS);
    for item in cart {
        let id = item.id.to_string();
        let title = truncate(&item.title, WIDTHS[1]);
        let amount = item.amount.to_string();
        let price = format_price(item.price);
        let subtotal = format_price(item.subtotal());
        ctx.output
            .table_row(&[&id, &title, &amount, &price, &subtotal], &WIDTHS);
    }

    println!();
    ctx.output.kv("items", &cart.item_count().to_string());
    ctx.output.kv("total", &format_price(cart.total()));
}
