//! End-to-end tests for each binary.

mod config;
mod viewer;
mod writer;
