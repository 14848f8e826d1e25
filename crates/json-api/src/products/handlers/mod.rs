//! Product Handlers

pub(crate) mod create;
pub(crate) mod index;
pub(crate) mod not_allowed;
pub(crate) mod update;
