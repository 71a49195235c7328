//! Shared fixtures and assertion helpers for the integration suite.
#![allow(dead_code)]

pub mod assertions;
pub mod corpus;
