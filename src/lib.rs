//! Core library of the category administration client.
//!
//! This crate exposes the domain model, wire DTOs, resource client, local
//! list store and screen flows behind the category management view of the
//! intranet dashboard. Rendering is left to the embedding shell.

pub mod config;
pub mod domain;
pub mod dto;
pub mod pagination;
pub mod repository;
pub mod screen;
pub mod store;
