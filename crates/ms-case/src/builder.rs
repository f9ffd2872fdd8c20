//! Case directory construction.

use crate::error::{CaseError, CaseResult, IoContext};
use crate::layout::{AUXILIARY_FILES, BASE_STATE_FILE, RESTART_FILE, template_name};
use crate::template::render_template;
use ms_core::ParameterSet;
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// What `build_case` put into the new directory.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltCase {
    pub directory: PathBuf,
    /// Files copied verbatim, restart file included.
    pub copied: Vec<String>,
    /// Auxiliary files produced from a `.mesa` template.
    pub rendered: Vec<String>,
}

/// Populate `case_directory` from `reference_directory`.
///
/// The case directory must not exist yet. On failure it is left in place
/// for inspection.
pub fn build_case(
    reference_directory: &Path,
    case_directory: &Path,
    parameters: &ParameterSet,
) -> CaseResult<BuiltCase> {
    create_case_directory(case_directory)?;

    let mut copied = Vec::new();
    let base_state = reference_directory.join(BASE_STATE_FILE);
    fs::copy(&base_state, case_directory.join(RESTART_FILE)).at(&base_state)?;
    copied.push(RESTART_FILE.to_string());

    for name in AUXILIARY_FILES {
        let source = reference_directory.join(name);
        if source.is_file() {
            fs::copy(&source, case_directory.join(name)).at(&source)?;
            copied.push(name.to_string());
        }
    }

    let templates: Vec<&str> = AUXILIARY_FILES
        .iter()
        .copied()
        .filter(|name| reference_directory.join(template_name(name)).is_file())
        .collect();

    let optional = parameters.optional_names();
    if !optional.is_empty() && templates.is_empty() {
        return Err(CaseError::UnmatchedParameters {
            names: optional.into_iter().collect(),
        });
    }

    let mut used = BTreeSet::new();
    let mut rendered = Vec::new();
    for name in templates {
        let source = reference_directory.join(template_name(name));
        let content = fs::read_to_string(&source).at(&source)?;
        let resolved = render_template(&content, parameters, &mut used);
        let target = case_directory.join(name);
        fs::write(&target, resolved).at(&target)?;
        tracing::debug!(template = %source.display(), "rendered template");
        rendered.push(name.to_string());
    }

    let unused: Vec<String> = optional.difference(&used).cloned().collect();
    if !unused.is_empty() {
        return Err(CaseError::UnusedParameters { names: unused });
    }

    tracing::info!(
        case = %case_directory.display(),
        copied = copied.len(),
        rendered = rendered.len(),
        "built case"
    );

    Ok(BuiltCase {
        directory: case_directory.to_path_buf(),
        copied,
        rendered,
    })
}

fn create_case_directory(case_directory: &Path) -> CaseResult<()> {
    if let Some(parent) = case_directory.parent() {
        fs::create_dir_all(parent).at(parent)?;
    }
    match fs::create_dir(case_directory) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(CaseError::AlreadyExists {
            path: case_directory.to_path_buf(),
        }),
        Err(e) => Err(CaseError::Io {
            path: case_directory.to_path_buf(),
            source: e,
        }),
    }
}
