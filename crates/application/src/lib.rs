//! Application services and ports.

#![forbid(unsafe_code)]

mod cohort_role_ports;
mod cohort_role_service;
mod content_browser;
mod content_ports;
mod content_search_service;
mod event_observers;

pub use cohort_role_ports::{CohortRoleRepository, NewCohortRoleAssignment};
pub use cohort_role_service::CohortRoleService;
pub use content_browser::{
    ContentBrowser, CourseCategoryContentBrowser, CourseContentBrowser, SystemContentBrowser,
    content_browser_for,
};
pub use content_ports::{CapabilityChecker, ContentBank, ContextProvider};
pub use content_search_service::ContentSearchService;
pub use event_observers::{CohortRoleCleanupObserver, UserDeletedObserver};
