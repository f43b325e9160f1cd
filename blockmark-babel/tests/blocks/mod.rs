//! Block markup tests
//!
//! Serialization of block trees, parsing them back, and sharing one registry across threads.

mod concurrency;
mod export;
mod roundtrip;
