pub mod constants;
pub mod error;
pub mod menu;
pub mod orbit;
pub mod pagination;
pub mod session;
pub mod streaks;
pub mod viewport;
pub mod welcome;

pub use constants::*;
pub use error::{Error, Result};
pub use menu::*;
pub use orbit::*;
pub use pagination::*;
pub use session::*;
pub use streaks::*;
pub use viewport::*;
pub use welcome::*;
