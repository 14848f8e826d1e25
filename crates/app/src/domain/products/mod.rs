//! Products

pub mod codec;
pub mod errors;
pub mod models;
mod repository;
pub mod seed;
pub mod service;
pub mod validation;

pub use codec::CodecError;
pub use errors::ProductsServiceError;
pub use service::*;
pub use validation::ValidationError;
