//! Command-line front end for ticket label normalization.
//!
//! The binary (`ticket-normalizer`) wires argument parsing to these modules;
//! they are kept in the library so they can be tested without a terminal.

pub mod logging;
pub mod review;
pub mod summary;
pub mod types;
