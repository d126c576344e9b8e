mod coerce;
mod outcome;
mod params;
mod release;

pub use self::outcome::{FailureReport, ModuleResult};
pub use self::params::{DEFAULT_URL, MODULE_NAME, ReleaseParams, ReleaseState};
pub use self::release::{Release, ReleaseRequest};
