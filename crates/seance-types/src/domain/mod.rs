pub mod filter;
pub mod role;
pub mod session;

pub use filter::*;
pub use role::*;
pub use session::*;
