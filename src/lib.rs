// src/lib.rs
// Núcleo da gestão escolar: repositórios em memória e as regras que os mantêm consistentes.
pub mod audit;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod store;

pub use error::{AppError, AppResult};
pub use state::School;
