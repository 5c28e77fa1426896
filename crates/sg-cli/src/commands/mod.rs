//! CLI command implementations

pub(crate) mod clean;
pub(crate) mod common;
pub(crate) mod compare;
pub(crate) mod normalize;
pub(crate) mod tables;
