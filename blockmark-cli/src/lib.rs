//! Support code for the blockmark binary: pattern headers and directory conversion.
//!
//! Everything that touches the terminal lives in main.rs.

pub mod batch;
pub mod header;
