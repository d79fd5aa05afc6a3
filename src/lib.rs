// src/lib.rs
pub mod config;
pub mod models;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;
