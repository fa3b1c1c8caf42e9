//! # money-core: Fixed-Point Money
//!
//! A monetary value type stored as an integer count of cents, with checked
//! arithmetic, strict parsing and deterministic formatting.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Money Workspace                                  │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cart-demo                               │   │
//! │  │    ShoppingCart ──► CartItem.line_total ──► totals / tax        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Money public contract                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ money-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   parse   │  │  format   │  │ rounding  │  │   │
//! │  │   │  Money    │  │ "$1.23"   │  │ "-$1,000" │  │ half away │  │   │
//! │  │   │  ops      │  │  FromStr  │  │  Display  │  │ from zero │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOCALE • NO FLOAT STORAGE • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type, constructors, checked and operator arithmetic
//! - [`error`] - Money error taxonomy
//! - `parse` - `"$1,234.56"` → Money (`FromStr`)
//! - `format` - Money → `"$1,234.56"` (`Display`)
//! - `serialize` - serde as the display string
//!
//! ## Design Principles
//!
//! 1. **Integer Money**: i64 cents is the only stored state
//! 2. **No Silent Overflow**: checked methods return errors, operators panic
//! 3. **One Rounding Mode**: half away from zero on every lossy path
//! 4. **Round Trip**: `parse(m.to_string()) == m` for every value
//!
//! ## Example Usage
//!
//! ```rust
//! use money_core::Money;
//!
//! let laptop: Money = "$1,299.99".parse()?;
//! let tax = laptop * 0.08;
//!
//! assert_eq!(tax.to_string(), "$104.00");
//! assert_eq!((laptop + tax).to_string(), "$1,403.99");
//! # Ok::<(), money_core::MoneyError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
mod format;
pub mod money;
mod parse;
mod rounding;
mod serialize;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{MoneyError, MoneyResult};
pub use money::Money;

/// Library version, printed by the demo banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
