//! # Error Types
//!
//! Error types for the cart client and the demo binary.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  money-core                                                             │
//! │  └── MoneyError   - InvalidArgument, InvalidFormat, Overflow, ...      │
//! │                                                                         │
//! │  cart-demo (this file)                                                  │
//! │  ├── CartError    - Cart rule violations (wraps MoneyError)             │
//! │  └── DemoError    - Config, I/O, anything main() reports                │
//! │                                                                         │
//! │  Flow: MoneyError → CartError → DemoError → tracing::error! + exit 1   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use money_core::MoneyError;
use thiserror::Error;

// =============================================================================
// Cart Error
// =============================================================================

/// Shopping cart rule violations.
#[derive(Debug, Error)]
pub enum CartError {
    /// Quantity of zero on a new line.
    #[error("Quantity must be positive")]
    QuantityMustBePositive,

    /// Item quantity exceeds maximum allowed.
    ///
    /// ## When This Occurs
    /// - A single add with quantity > 999
    /// - Merging a duplicate product pushes the line past 999
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: u64, max: u32 },

    /// Cart has exceeded maximum allowed lines.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// No line with that product name.
    #[error("Product not in cart: {0}")]
    ItemNotFound(String),

    /// Money arithmetic failed (overflow while totalling).
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

/// Convenience type alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

// =============================================================================
// Demo Error
// =============================================================================

/// Everything the demo binary can fail with.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Config file is not valid TOML for `DemoConfig`.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Convenience type alias for Results with DemoError.
pub type DemoResult<T> = Result<T, DemoError>;
