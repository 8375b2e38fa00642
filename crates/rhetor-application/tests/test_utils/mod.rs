//! Test utilities for rhetor-application
//!
//! Mock providers with call counters and fixture builders.

#![allow(dead_code)]
