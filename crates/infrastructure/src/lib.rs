//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod http_platform_client;
mod in_memory_cohort_role_repository;
mod in_process_event_bus;
mod postgres_cohort_role_repository;

pub use http_platform_client::HttpPlatformClient;
pub use in_memory_cohort_role_repository::InMemoryCohortRoleRepository;
pub use in_process_event_bus::InProcessEventBus;
pub use postgres_cohort_role_repository::PostgresCohortRoleRepository;
