//! Cross-module tests for netpanel-validator.

mod bag;
mod boundaries;
mod properties;
