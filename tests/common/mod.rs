//! Common test utilities for hawaii-climate.
//!
//! This module provides shared utilities for testing the hawaii-climate server.

#![allow(dead_code)]

pub mod assertions;
pub mod http_client;
pub mod test_data;
