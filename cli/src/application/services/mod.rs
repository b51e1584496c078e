//! Application services: use-case orchestration.
//!
//! Each service module implements a single use-case by composing domain logic
//! with port trait calls. Services import only from `crate::domain` and
//! `crate::application::ports`, never from `crate::infra`, `crate::commands`,
//! or `crate::output`.

pub mod archive;
pub mod container;
pub mod galleon;
pub mod main_class;
pub mod process;
pub mod release;
pub mod staging;
pub mod wildfly_custom;
