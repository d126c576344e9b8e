//! Idempotent creation of Bodhi releases, packaged as an Ansible binary module.

pub mod ensure;
pub mod error;
pub mod logging;
pub mod model;
pub mod module_runtime;
pub mod remote;
