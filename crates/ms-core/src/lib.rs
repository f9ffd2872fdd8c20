//! ms-core: shared foundation for the SOLPS run manager.
//!
//! Contains:
//! - numeric (finiteness and ordering checks)
//! - ids (scheduler job ids)
//! - params (canonical parameter names + resolved parameter sets)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod params;

pub use error::{CoreError, CoreResult};
pub use ids::JobId;
pub use numeric::*;
pub use params::{
    CONDUCTIVITY_PROFILE, DIFFUSIVITY_PROFILE, PROFILE_PARAMETER_COUNT, ParameterSet,
    is_required, required_parameters,
};
