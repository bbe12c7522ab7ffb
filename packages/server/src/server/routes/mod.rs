// HTTP routes
pub mod health;
pub mod inspect;
pub mod live;

pub use health::*;
pub use inspect::*;
pub use live::*;
