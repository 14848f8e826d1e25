//! Shared application domain and storage modules.

pub mod context;
pub mod domain;
pub mod store;

#[cfg(test)]
mod test;
