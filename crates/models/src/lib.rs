pub mod ack;
pub mod db;
pub mod errors;
pub mod review;
pub mod service;

pub use db::Store;
pub use errors::StoreError;
