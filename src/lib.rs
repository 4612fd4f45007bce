pub mod application;
pub mod domain;
pub mod io;
pub mod rates;
pub mod storage;

pub use domain::*;
pub use storage::LedgerStore;
