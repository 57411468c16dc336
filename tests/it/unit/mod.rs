//! Unit tests for HeartRate.

mod classifier_property_tests;
mod settings_tests;
mod snapshot_tests;
