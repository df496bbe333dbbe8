//! Process-wide [`Environment`].
//!
//! The first successful [`init`] wins; later calls are no-ops. A failed
//! initialization leaves the global empty so it can be retried.

use drishti_astrometry::{Environment, EnvironmentConfig};
use once_cell::sync::OnceCell;

use crate::error::DrishtiError;

static ENVIRONMENT: OnceCell<Environment> = OnceCell::new();

/// Build the global environment from `config` unless one already exists.
pub fn init(config: &EnvironmentConfig) -> Result<(), DrishtiError> {
    if ENVIRONMENT.get().is_some() {
        log::debug!("global environment already initialized; ignoring new config");
        return Ok(());
    }
    ENVIRONMENT.get_or_try_init(|| {
        let env = Environment::from_config(config)?;
        log::debug!("global environment initialized: {env:?}");
        Ok::<_, DrishtiError>(env)
    })?;
    Ok(())
}

/// Whether [`init`] has succeeded.
pub fn is_initialized() -> bool {
    ENVIRONMENT.get().is_some()
}

/// The global environment, or [`DrishtiError::NotInitialized`].
pub fn environment() -> Result<&'static Environment, DrishtiError> {
    ENVIRONMENT.get().ok_or(DrishtiError::NotInitialized)
}
