//! Test fixtures for ev-trip-planner.
//!
//! Provides charging stations along Indian highways and builders for
//! stations and trip requests.

#![allow(dead_code)]

pub mod indian_stations;

pub use indian_stations::*;
