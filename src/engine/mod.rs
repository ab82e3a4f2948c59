pub mod aggregate;
pub mod definition;
pub mod errors;
pub mod hypermap;
pub mod report;
pub mod source;
pub mod types;

pub use errors::*;
