//! Service deletion action

use crate::error::{RazeError, Result};
use crate::host::ServiceControl;
use tracing::debug;

/// Delete the registration of service `name`.
///
/// A running service is only marked for deletion; the host removes it once
/// it stops. Deleting a service that is already gone fails with
/// `ServiceNotFoundError`.
pub fn delete_service(services: &dyn ServiceControl, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(RazeError::InvalidTarget(
            "service name must not be empty".to_string(),
        ));
    }

    services.delete_service(name)?;
    debug!(service = name, "service marked for deletion");
    Ok(())
}
