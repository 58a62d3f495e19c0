//! Wanderplan - Travel Preference Onboarding & Recommendation Engine
//!
//! This crate turns a completed travel questionnaire into a categorized
//! set of trip recommendations via static rule matching, and persists the
//! resulting plan as a single wholesale-overwritten record.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
