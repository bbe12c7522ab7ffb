// Types shared by routes and the CLI
pub mod errors;

pub use errors::*;
