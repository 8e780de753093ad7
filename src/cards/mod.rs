//! Card types: ranks, suits, and owned card instances.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`: value-like card identity components
//! - `Card`: an owned instance with mutable face-up/face-down orientation
//! - `CardToken`: copyable identity handle for the presentation proxy
//! - `Dimensions`: fixed physical size, used for stacking offsets

pub mod card;
pub mod rank;
pub mod suit;

pub use card::{Card, CardToken, Dimensions};
pub use rank::Rank;
pub use suit::Suit;
