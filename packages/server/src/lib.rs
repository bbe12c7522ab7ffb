// Madison Market Insight Engine - server core
//
// Web front end for an n8n market intelligence workflow. The live form posts
// brand + goal to the workflow webhook; the inspect form renders an exported
// output file. Both share the extraction in the n8n-payload crate.

pub mod common;
pub mod config;
pub mod runs;
pub mod server;
pub mod views;

pub use config::*;
