pub mod delete_flow;
pub mod error;
pub mod service;

pub use delete_flow::*;
pub use error::*;
pub use service::*;
