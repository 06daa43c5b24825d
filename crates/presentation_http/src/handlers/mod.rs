//! HTTP request handlers

pub mod health;
pub mod news;
pub mod notes;
pub mod weather;
