//! Writer for SOLPS `b2.transport.inputfile`.
//!
//! The file is a Fortran namelist. Each coefficient kind gets an `ndata`
//! entry with its knot count followed by one `tdata` line per knot holding
//! the radius and the coefficient value.

use crate::error::{CaseResult, IoContext};
use ms_profile::Profile;
use std::fmt::Write as _;
use std::path::Path;

/// Decimal places used for every number in the file.
pub const TRANSPORT_PRECISION: usize = 5;

const SPECIES: usize = 1;
const KIND_DPERP: usize = 1;
const KIND_CHI_I: usize = 3;
const KIND_CHI_E: usize = 4;
const KIND_VISC: usize = 7;

/// Profiles and switches for one transport input file.
#[derive(Debug, Clone)]
pub struct TransportInput<'a> {
    pub dperp: &'a Profile,
    pub chieperp: &'a Profile,
    pub chiiperp: &'a Profile,
    /// Reuse the particle diffusivity as anomalous viscosity.
    pub set_ana_visc_dperp: bool,
    pub no_pflux: bool,
    pub no_div: bool,
}

impl TransportInput<'_> {
    pub fn render(&self) -> String {
        let mut out = String::from(" &TRANSPORT\n");

        write_block(&mut out, KIND_DPERP, self.dperp);
        if self.set_ana_visc_dperp {
            write_block(&mut out, KIND_VISC, self.dperp);
        }
        write_block(&mut out, KIND_CHI_I, self.chiiperp);
        write_block(&mut out, KIND_CHI_E, self.chieperp);

        if self.no_pflux {
            out.push_str(" no_pflux=.true.\n");
        }
        if self.no_div {
            out.push_str(" no_div=.true.\n");
        }
        out.push_str(" /\n");
        out
    }
}

fn write_block(out: &mut String, kind: usize, profile: &Profile) {
    let p = TRANSPORT_PRECISION;
    // Writing into a String cannot fail.
    let _ = writeln!(out, " ndata( 1,{kind:2},{SPECIES:2})={:4},", profile.len());
    for (j, (radius, value)) in profile.points().enumerate() {
        let j = j + 1;
        let _ = writeln!(
            out,
            " tdata(1,{j:2},{SPECIES:2},{kind:2})= {radius:10.p$}, tdata(2,{j:2},{SPECIES:2},{kind:2})= {value:10.p$},"
        );
    }
}

pub fn write_transport_inputfile(path: &Path, input: &TransportInput<'_>) -> CaseResult<()> {
    std::fs::write(path, input.render()).at(path)?;
    tracing::debug!(path = %path.display(), "wrote transport input file");
    Ok(())
}
