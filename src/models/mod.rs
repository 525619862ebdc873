// src/models/mod.rs
pub mod activity;
pub mod attendance;
pub mod exam;
pub mod ids;
pub mod report;
pub mod user;
