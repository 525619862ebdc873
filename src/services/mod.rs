// src/services/mod.rs
pub mod activity_service;
pub mod auth_service;
pub mod class_service;
pub mod enrollment_service;
pub mod exam_service;
pub mod presence_service;
pub mod report_service;
pub mod user_service;
