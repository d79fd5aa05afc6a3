// src/services/mod.rs
pub mod team_store;
pub mod team_view;
pub mod team_workflow;
