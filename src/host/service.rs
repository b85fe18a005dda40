//! Service control manager access

use crate::error::{RazeError, Result};
use crate::host::ServiceControl;

#[derive(Debug, Default)]
pub struct SystemServices;

#[cfg(windows)]
impl ServiceControl for SystemServices {
    fn delete_service(&self, name: &str) -> Result<()> {
        use windows_service::service::ServiceAccess;
        use windows_service::service_manager::{ServiceManager, ServiceManagerAccess};

        // Both handles close on drop, whichever way this returns.
        let manager = ServiceManager::local_computer(None::<&str>, ServiceManagerAccess::all())
            .map_err(|e| map_service_error(name, e))?;
        let service = manager
            .open_service(name, ServiceAccess::all())
            .map_err(|e| map_service_error(name, e))?;
        service.delete().map_err(|e| map_service_error(name, e))
    }
}

#[cfg(not(windows))]
impl ServiceControl for SystemServices {
    fn delete_service(&self, name: &str) -> Result<()> {
        Err(RazeError::ServiceControlError {
            name: name.to_string(),
            reason: "service control manager is only available on Windows".to_string(),
        })
    }
}

#[cfg(windows)]
const ERROR_ACCESS_DENIED: i32 = 5;
#[cfg(windows)]
const ERROR_SERVICE_DOES_NOT_EXIST: i32 = 1060;

#[cfg(windows)]
fn map_service_error(name: &str, err: windows_service::Error) -> RazeError {
    if let windows_service::Error::Winapi(io) = &err {
        match io.raw_os_error() {
            Some(ERROR_SERVICE_DOES_NOT_EXIST) => {
                return RazeError::ServiceNotFoundError(name.to_string())
            }
            Some(ERROR_ACCESS_DENIED) => {
                return RazeError::AccessError(format!("service {}: {}", name, io))
            }
            _ => {}
        }
    }
    RazeError::ServiceControlError {
        name: name.to_string(),
        reason: err.to_string(),
    }
}
