//! # Shopping Cart
//!
//! A list of priced lines built on top of [`Money`].
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  add_item("Mouse", $29.95, 2) ──► new line, or quantity += 2           │
//! │                                                                         │
//! │  update_quantity("Mouse", n) ───► line.quantity = n (0 removes)        │
//! │                                                                         │
//! │  remove_item("Keyboard") ───────► line removed / ItemNotFound          │
//! │                                                                         │
//! │  total() ───────────────────────► Σ unit_price × quantity (checked)    │
//! │                                                                         │
//! │  totals(0.08) ──────────────────► subtotal, tax = subtotal × 0.08      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! `ShoppingCart` is a plain value. Share it between threads through
//! [`SharedCart`], which serialises every mutation behind a `Mutex`.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use money_core::{Money, MoneyResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CartError, CartResult};

/// Maximum lines allowed in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line.
///
/// Prevents accidental over-ordering (typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: u32 = 999;

fn validate_quantity(quantity: u64) -> CartResult<()> {
    if quantity == 0 {
        return Err(CartError::QuantityMustBePositive);
    }

    if quantity > u64::from(MAX_ITEM_QUANTITY) {
        return Err(CartError::QuantityTooLarge {
            requested: quantity,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Cart Item
// =============================================================================

/// A line in the shopping cart.
///
/// Lines are unique by `product_name`; adding the same product again
/// merges into the existing line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_name: String,

    pub description: String,

    /// Price of one unit, frozen when the line is created.
    pub unit_price: Money,

    pub quantity: u32,

    /// When this line was first added.
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new cart line.
    ///
    /// ## Errors
    /// - `QuantityMustBePositive` for quantity 0
    /// - `QuantityTooLarge` above [`MAX_ITEM_QUANTITY`]
    pub fn new(
        product_name: impl Into<String>,
        description: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> CartResult<Self> {
        validate_quantity(u64::from(quantity))?;

        Ok(CartItem {
            product_name: product_name.into(),
            description: description.into(),
            unit_price,
            quantity,
            added_at: Utc::now(),
        })
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> MoneyResult<Money> {
        self.unit_price.checked_mul(i64::from(self.quantity))
    }
}

// =============================================================================
// Shopping Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_name`
/// - Quantity of every line is in `1..=999`
/// - At most [`MAX_CART_ITEMS`] lines
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingCart {
    items: Vec<CartItem>,

    /// When the cart was created/last cleared
    created_at: DateTime<Utc>,
}

impl ShoppingCart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        ShoppingCart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a line, or increases the quantity of an existing line with the
    /// same product name. A merged line keeps its original price and
    /// description.
    pub fn add_item(&mut self, item: CartItem) -> CartResult<()> {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.product_name == item.product_name)
        {
            let new_qty = u64::from(existing.quantity) + u64::from(item.quantity);
            validate_quantity(new_qty)?;

            debug!(
                product = %existing.product_name,
                quantity = new_qty,
                "Merging cart line"
            );
            // validated above: new_qty <= MAX_ITEM_QUANTITY
            existing.quantity = new_qty as u32;
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CartError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        debug!(
            product = %item.product_name,
            unit_price = %item.unit_price,
            quantity = item.quantity,
            "Adding cart line"
        );
        self.items.push(item);
        Ok(())
    }

    /// Builds a [`CartItem`] and adds it.
    pub fn add(
        &mut self,
        product_name: impl Into<String>,
        description: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> CartResult<()> {
        self.add_item(CartItem::new(product_name, description, unit_price, quantity)?)
    }

    /// Removes a line by product name and returns it.
    pub fn remove_item(&mut self, product_name: &str) -> CartResult<CartItem> {
        let index = self
            .items
            .iter()
            .position(|i| i.product_name == product_name)
            .ok_or_else(|| CartError::ItemNotFound(product_name.to_string()))?;

        debug!(product = %product_name, "Removing cart line");
        Ok(self.items.remove(index))
    }

    /// Sets the quantity of a line. A quantity of 0 removes it.
    pub fn update_quantity(&mut self, product_name: &str, quantity: u32) -> CartResult<()> {
        if quantity == 0 {
            return self.remove_item(product_name).map(|_| ());
        }

        validate_quantity(u64::from(quantity))?;

        let item = self
            .items
            .iter_mut()
            .find(|i| i.product_name == product_name)
            .ok_or_else(|| CartError::ItemNotFound(product_name.to_string()))?;

        debug!(product = %product_name, quantity, "Updating cart line quantity");
        item.quantity = quantity;
        Ok(())
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        debug!(lines = self.items.len(), "Clearing cart");
        self.items.clear();
        self.created_at = Utc::now();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Returns the number of lines in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all lines.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// When the cart was opened (or last cleared).
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Sums every line total (before tax).
    pub fn total(&self) -> MoneyResult<Money> {
        self.items
            .iter()
            .try_fold(Money::zero(), |sum, item| sum.checked_add(item.line_total()?))
    }

    /// Calculates subtotal, tax at `tax_rate` (0.08 = 8%) and grand total.
    ///
    /// Tax is computed once on the subtotal, not per line, so it is rounded
    /// exactly once.
    pub fn totals(&self, tax_rate: f64) -> CartResult<CartTotals> {
        let subtotal = self.total()?;
        let tax = subtotal.checked_scale(tax_rate)?;
        let total = subtotal.checked_add(tax)?;

        Ok(CartTotals {
            item_count: self.item_count(),
            total_quantity: self.total_quantity(),
            subtotal,
            tax,
            total,
        })
    }
}

impl Default for ShoppingCart {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the cart as the fixed-width table used by the demo.
impl fmt::Display for ShoppingCart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "Shopping cart is empty.");
        }

        writeln!(f, "Shopping Cart:")?;
        writeln!(
            f,
            "{:<20} {:<30} {:<12} {:<8} {:<12}",
            "Product", "Description", "Unit Price", "Qty", "Line Total"
        )?;
        writeln!(f, "{:-<82}", "")?;

        for item in &self.items {
            writeln!(
                f,
                "{:<20} {:<30} {:<12} {:<8} {:<12}",
                item.product_name,
                item.description,
                item.unit_price,
                item.quantity,
                render_amount(item.line_total()),
            )?;
        }

        writeln!(f, "{:-<82}", "")?;
        writeln!(f, "{:<70} {:<12}", "Total:", render_amount(self.total()))
    }
}

fn render_amount(amount: MoneyResult<Money>) -> String {
    match amount {
        Ok(money) => money.to_string(),
        Err(err) => err.to_string(),
    }
}

/// Cart totals summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: u64,
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

// =============================================================================
// Shared Cart
// =============================================================================

/// A cart that can be mutated from several threads.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<ShoppingCart>>`: cart operations are short and most of
/// them mutate, so a `RwLock` would buy nothing. A poisoned lock is
/// recovered, since every cart mutation leaves the cart consistent.
#[derive(Debug, Clone, Default)]
pub struct SharedCart {
    cart: Arc<Mutex<ShoppingCart>>,
}

impl SharedCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ShoppingCart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ShoppingCart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}
