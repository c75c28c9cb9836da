//! Integration tests for static index generation

mod generation_scenarios;
mod listing_properties;
mod overwrite_safety;
mod support;
