use crate::device::model::SipmModel;
use crate::error::{Result, SimspadError};

/// Physical plausibility checks. Construction never runs these; callers opt in.
pub fn validate_model(m: &SipmModel) -> Result<()> {
    let v = m.values();
    let names = m.field_names();
    let field = |name: &str| -> f64 {
        names
            .iter()
            .position(|n| *n == name)
            .map(|i| v[i])
            .unwrap_or(f64::NAN)
    };

    for name in ["dt", "tau_recovery", "c_cell", "tau_fwhm"] {
        let x = field(name);
        if !(x.is_finite() && x > 0.0) {
            return Err(SimspadError::Validation(format!("{name} must be > 0, got {x}")));
        }
    }

    let n = m.num_microcell();
    if !(n.is_finite() && n >= 1.0 && n.fract() == 0.0) {
        return Err(SimspadError::Validation(format!(
            "num_microcell must be a positive integer, got {n}"
        )));
    }

    for (i, pde) in m.pde_max().into_iter().enumerate() {
        if !(0.0..=1.0).contains(&pde) {
            return Err(SimspadError::Validation(format!(
                "pde_max channel {} must be within [0, 1], got {pde}",
                i + 1
            )));
        }
    }

    // Below breakdown the microcells never avalanche.
    if m.v_bias() <= m.v_br() {
        return Err(SimspadError::Validation(format!(
            "v_bias ({}) must exceed v_br ({})",
            m.v_bias(),
            m.v_br()
        )));
    }

    Ok(())
}
