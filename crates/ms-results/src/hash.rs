//! Content-based fingerprint of a parameter set.

use ms_core::ParameterSet;
use sha2::{Digest, Sha256};

/// SHA-256 over the name-ordered `name=value` pairs. Values use their bit
/// pattern so that two sets hash equal only if every value is identical.
pub fn compute_parameters_hash(parameters: &ParameterSet) -> String {
    let mut hasher = Sha256::new();
    for (name, value) in parameters.iter() {
        hasher.update(name.as_bytes());
        hasher.update(b"=");
        hasher.update(value.to_bits().to_le_bytes());
        hasher.update(b";");
    }
    let result = hasher.finalize();
    format!("{:x}", result)
}
