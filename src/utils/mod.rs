pub mod account_init;
pub mod mul_div;
pub mod price;
pub mod supply;

pub use account_init::*;
pub use mul_div::*;
pub use price::*;
pub use supply::*;
