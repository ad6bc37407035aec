pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod filter;
pub mod locate;
pub mod log;
pub mod snapshot;
pub mod stats;
pub mod summary;
