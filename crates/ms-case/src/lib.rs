//! ms-case: materialize a SOLPS case directory from a reference run.
//!
//! Provides:
//! - the fixed case layout (file names, template suffix, cleanup allow-list)
//! - placeholder substitution for `.mesa` template files
//! - the case builder
//! - the `b2.transport.inputfile` writer

pub mod builder;
pub mod error;
pub mod layout;
pub mod template;
pub mod transport;

pub use builder::{BuiltCase, build_case};
pub use error::{CaseError, CaseResult};
pub use transport::{TransportInput, write_transport_inputfile};
