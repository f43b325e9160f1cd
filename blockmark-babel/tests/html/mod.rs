//! HTML format tests
//!
//! Tests for markup → block conversion through the html5ever document.

mod import;
