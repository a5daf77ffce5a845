//! `vendora-auth` — roles, permissions, and the management hierarchy.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod access;
pub mod hierarchy;
pub mod permissions;
pub mod principal;
pub mod roles;
pub mod templates;

pub use access::{can_manage, effective_permissions, has_permission};
pub use hierarchy::PrincipalDirectory;
pub use permissions::Permission;
pub use principal::Principal;
pub use roles::Role;
pub use templates::RoleTemplates;
