pub mod gyc_to_sol;
pub mod initialize;
pub mod update_price;
pub mod withdraw;

pub use gyc_to_sol::*;
pub use initialize::*;
pub use update_price::*;
pub use withdraw::*;
