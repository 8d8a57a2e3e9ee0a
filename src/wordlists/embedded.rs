//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

// Generated by build.rs from data/sample_words.txt
include!(concat!(env!("OUT_DIR"), "/sample.rs"));
