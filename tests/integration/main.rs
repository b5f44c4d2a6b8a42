//! Integration tests for the favorites engine.

mod helpers;
mod properties;
mod scenarios;
