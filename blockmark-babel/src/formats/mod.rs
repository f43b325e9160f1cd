//! Format implementations
//!
//! This module contains all format implementations that convert between
//! block trees and their text representations.

pub mod blocks;
pub mod html;
pub mod json;

pub use blocks::BlockMarkupFormat;
pub use html::HtmlFormat;
pub use json::JsonFormat;
