//! Create-if-absent for Bodhi releases.

use tracing::{debug, info, warn};

use crate::error::ModuleError;
use crate::model::{ModuleResult, ReleaseParams};
use crate::remote::{CreateOutcome, ReleaseApi};

/// Makes sure a release named `params.name` exists on the server.
///
/// Issues one lookup and, only when nothing matches, one creation request. An
/// existing release is left untouched even if its fields differ. In check mode
/// the creation is predicted instead of performed.
pub fn ensure_release<C>(
    client: &C,
    params: &ReleaseParams,
    check_mode: bool,
) -> Result<ModuleResult, ModuleError>
where
    C: ReleaseApi + ?Sized,
{
    let mut result = ModuleResult::unchanged();

    let existing = client.list_releases_by_name(&params.name)?;
    if let Some(found) = existing.first() {
        let drifted = params.drifted_fields(found);
        if drifted.is_empty() {
            debug!(release = %params.name, "release already exists");
        } else {
            warn!(
                release = %params.name,
                fields = %drifted.join(", "),
                "release already exists with different values; leaving it unchanged"
            );
        }
        return Ok(result);
    }

    if check_mode {
        info!(release = %params.name, "check mode: release would be created");
        result.changed = true;
        result
            .stdout_lines
            .push(format!("Would create the bodhi release {}", params.long_name));
        return Ok(result);
    }

    let token = client.csrf_token()?;
    match client.create_release(&token, &params.release_request())? {
        CreateOutcome::Created(release) => {
            info!(release = %release.name, state = %params.state, "created release");
            result.changed = true;
            result
                .stdout_lines
                .push(format!("Created the bodhi release {}", params.long_name));
            Ok(result)
        }
        CreateOutcome::Rejected(errors) => {
            warn!(release = %params.name, %errors, "bodhi rejected the release");
            Err(ModuleError::RemoteRejected { errors })
        }
    }
}

#[cfg(test)]
#[path = "tests/ensure_tests.rs"]
mod tests;
