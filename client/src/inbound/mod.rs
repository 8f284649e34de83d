//! Inbound adapters driving the client core.

pub mod cli;
