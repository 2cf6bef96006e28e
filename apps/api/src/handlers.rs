//! HTTP handlers for the plugin surface.

pub mod cohort_roles;
pub mod contentbank;
pub mod events;
pub mod health;
