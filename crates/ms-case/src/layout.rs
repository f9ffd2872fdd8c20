//! File names making up a SOLPS case.

/// Converged plasma state in the reference directory.
pub const BASE_STATE_FILE: &str = "b2fstate";

/// Name the base state is copied to, so the new run restarts from it.
pub const RESTART_FILE: &str = "b2fstati";

/// Input files copied verbatim when present in the reference directory.
pub const AUXILIARY_FILES: [&str; 8] = [
    "input.dat",
    "fort.1",
    "fort.13",
    "b2.neutrals.parameters",
    "b2.boundary.parameters",
    "b2.numerics.parameters",
    "b2.transport.parameters",
    "b2mn.dat",
];

/// Suffix marking a template variant of an auxiliary file.
pub const TEMPLATE_SUFFIX: &str = ".mesa";

pub const TRANSPORT_INPUT_FILE: &str = "b2.transport.inputfile";

/// Output written by SOLPS when a run finishes.
pub const RESULT_ARTIFACT: &str = "balance.nc";

/// Files `cleanup` keeps; everything else in a case directory is removed.
pub const CLEANUP_ALLOW_LIST: [&str; 8] = [
    RESULT_ARTIFACT,
    "input.dat",
    "b2.neutrals.parameters",
    "b2.boundary.parameters",
    "b2.numerics.parameters",
    "b2.transport.parameters",
    TRANSPORT_INPUT_FILE,
    "b2mn.dat",
];

pub fn template_name(auxiliary: &str) -> String {
    format!("{auxiliary}{TEMPLATE_SUFFIX}")
}

pub fn case_directory_name(run_number: u32) -> String {
    format!("run_{run_number}")
}

pub fn is_allow_listed(file_name: &str) -> bool {
    CLEANUP_ALLOW_LIST.contains(&file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_names_append_suffix() {
        assert_eq!(template_name("b2mn.dat"), "b2mn.dat.mesa");
    }

    #[test]
    fn allow_list_keeps_outputs_but_not_restart() {
        assert!(is_allow_listed(RESULT_ARTIFACT));
        assert!(is_allow_listed(TRANSPORT_INPUT_FILE));
        assert!(!is_allow_listed(RESTART_FILE));
        assert!(!is_allow_listed("fort.13"));
    }
}
