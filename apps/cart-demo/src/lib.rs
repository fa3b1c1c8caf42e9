//! # cart-demo
//!
//! A shopping cart built on `money_core::Money`, plus the demo script the
//! `cart-demo` binary runs.
//!
//! ## Demo Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Add configured items              ──► print cart, count, total     │
//! │  2. Add extra items (merge quantity)  ──► print cart                   │
//! │  3. Remove configured product names   ──► print final cart             │
//! │  4. Per-line breakdown                ──► "3 x $29.95 = $89.85"        │
//! │  5. Totals with tax                   ──► subtotal / tax / total       │
//! │  6. Money operations on first item    ──► tax, total, 3-way split      │
//! │  7. Clear                             ──► "Shopping cart is empty."    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sequence lives here rather than in `main.rs` so it can be run
//! against an in-memory writer in tests.

pub mod cart;
pub mod config;
pub mod error;

use std::io::Write;

use money_core::Money;
use tracing::info;

pub use cart::{CartItem, CartTotals, SharedCart, ShoppingCart};
pub use config::{DemoConfig, ItemConfig};
pub use error::{CartError, CartResult, DemoError, DemoResult};

fn add_items(cart: &mut ShoppingCart, items: &[ItemConfig]) -> CartResult<()> {
    for item in items {
        cart.add(&item.name, &item.description, item.price, item.quantity)?;
    }
    Ok(())
}

/// Runs the demo sequence, writing the report to `out`.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> DemoResult<()> {
    info!(
        version = money_core::VERSION,
        tax_rate = config.tax_rate,
        "Starting cart demo"
    );
    let tax_label = format!("{:.2}%", config.tax_rate * 100.0);

    writeln!(out, "Shopping Cart Demo (money-core {})\n", money_core::VERSION)?;

    let mut cart = ShoppingCart::new();
    info!(created_at = %cart.created_at(), "Opened cart");
    add_items(&mut cart, &config.items)?;

    writeln!(out, "After adding items:")?;
    write!(out, "{cart}")?;
    writeln!(out, "\nCart has {} items", cart.item_count())?;
    writeln!(out, "Cart total: {}\n", cart.total()?)?;

    if !config.extra_items.is_empty() {
        add_items(&mut cart, &config.extra_items)?;
        writeln!(out, "After adding extra items (duplicates update quantity):")?;
        write!(out, "{cart}")?;
    }

    for name in &config.remove {
        writeln!(out, "\nRemoving {name}...")?;
        match cart.remove_item(name) {
            Ok(_) => writeln!(out, "{name} removed successfully.")?,
            Err(CartError::ItemNotFound(_)) => writeln!(out, "{name} not found in cart.")?,
            Err(err) => return Err(err.into()),
        }
    }

    writeln!(out, "\nFinal cart:")?;
    write!(out, "{cart}")?;

    writeln!(out, "\nDetailed breakdown:")?;
    for item in cart.items() {
        writeln!(
            out,
            "{} x {} = {}",
            item.quantity,
            item.unit_price,
            item.line_total()?
        )?;
    }

    let totals = cart.totals(config.tax_rate)?;
    writeln!(out, "\nSubtotal: {}", totals.subtotal)?;
    writeln!(out, "Tax ({tax_label}): {}", totals.tax)?;
    writeln!(out, "Total: {}", totals.total)?;

    if let Some(first) = config.items.first() {
        let price: Money = first.price;
        let tax = price.checked_scale(config.tax_rate)?;
        let total_with_tax = price.checked_add(tax)?;
        let shares = price
            .split(3)?
            .iter()
            .map(Money::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(out, "\nDemo of various Money operations:")?;
        writeln!(out, "{} price: {price}", first.name)?;
        writeln!(out, "Tax ({tax_label}): {tax}")?;
        writeln!(out, "Total with tax: {total_with_tax}")?;
        writeln!(out, "Split 3 ways: {shares}")?;
    }

    writeln!(out, "\nClearing cart...")?;
    cart.clear();
    write!(out, "{cart}")?;

    info!("Cart demo finished");
    Ok(())
}
