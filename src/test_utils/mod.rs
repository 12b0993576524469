//! Consolidated test utilities and helpers for the bill scraper.
//!
//! Fixture pages and configuration builders shared by the unit tests.

#![cfg(test)]

pub mod config;
pub mod html;
