// src/routes/mod.rs
pub mod team_routes;
