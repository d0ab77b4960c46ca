//! CLI command implementations

pub(crate) mod common;
pub(crate) mod recreate;
pub(crate) mod revert;
pub(crate) mod status;
pub(crate) mod upgrade;
