pub mod escrow;
pub mod price_cache;

pub use escrow::*;
pub use price_cache::*;
