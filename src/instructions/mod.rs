pub mod initialize_stable_mint;
pub mod process_escrow;
pub mod process_mint_burn_token;
pub mod stable_supply;

pub use initialize_stable_mint::*;
pub use process_escrow::*;
pub use process_mint_burn_token::*;
pub use stable_supply::*;
