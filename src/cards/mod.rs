//! Cards and decks.
//!
//! ## Key Types
//!
//! - `Card`: Rank/suit value, ordered and compared by rank only
//! - `Suit`: The four French suits
//! - `Deck`: Owned draw pile with shuffle and draw-from-top

pub mod card;
pub mod deck;

pub use card::{Card, Suit, MAX_RANK, MIN_RANK, RANK_MIDPOINT};
pub use deck::{Deck, STANDARD_DECK_SIZE};
