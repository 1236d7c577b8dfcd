//! # bloom-core - Core Domain Types
//!
//! Foundation crate for Bloom. Provides domain types, the built-in sample
//! catalog, the front-end independent visual tree, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, toml, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Theme`] - A titled, image-backed browse card
//! - [`PlantItem`] - A titled, described, checkable plant row
//! - [`NavigationTab`] - One of the four bottom-navigation destinations
//! - [`Screen`] - Welcome, Login or Home
//!
//! ### Sample Data (`sample`)
//! - [`sample_themes()`], [`sample_items()`] - The fixed demo catalog
//!
//! ### Visual Tree (`visual_tree`)
//! - [`VisualTree`], [`Node`] - What a screen looks like, independent of any toolkit
//! - [`LazyRow`], [`LazyColumn`] - Theme strip and plant list sequences
//! - [`Action`] - Callback slots raised by buttons and links
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use bloom_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod sample;
pub mod types;
pub mod visual_tree;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use sample::{sample_items, sample_themes};
pub use types::{IconRef, NavigationTab, PlantItem, Screen, Theme};
pub use visual_tree::{
    Action, BrandAsset, ButtonKind, FieldId, ImageInfo, ImageSlot, ImageSource, ImageStatus,
    ItemRow, LazyColumn, LazyRow, NavItem, Node, Span, TextRole, ThemeCard, VisualTree,
};
