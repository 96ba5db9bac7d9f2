//! Tests for the Reflect derive macro
