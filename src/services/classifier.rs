//! Risk level suggestion from Z score and coronary status.
//!
//! Brackets are closed below and open above (`2.5` belongs to the small
//! aneurysm bracket), the top bracket is unbounded. Implausible values such as
//! negative or infinite Z scores are not rejected; they land in whichever
//! bracket matches.

use crate::domain::models::{ClassificationInput, CoronaryStatus, RegressionTarget, RiskKey};

const DILATION_MIN: f64 = 2.0;
const ANEURYSM_MIN: f64 = 2.5;
const MEDIUM_MIN: f64 = 5.0;
const GIANT_MIN: f64 = 10.0;

/// Status the classifier actually uses. "No aneurysm" together with an
/// aneurysm-range Z score is treated as a current aneurysm.
///
/// Returns `None` when there is no usable Z score.
pub fn effective_status(z: Option<f64>, status: CoronaryStatus) -> Option<CoronaryStatus> {
    let z = z.filter(|z| !z.is_nan())?;
    if status == CoronaryStatus::None && z >= ANEURYSM_MIN {
        Some(CoronaryStatus::Current)
    } else {
        Some(status)
    }
}

pub fn classify(
    z: Option<f64>,
    status: CoronaryStatus,
    regression_target: Option<RegressionTarget>,
) -> Option<RiskKey> {
    let effective = effective_status(z, status)?;
    let z = z?;

    if z < DILATION_MIN {
        return Some(RiskKey::NoInvolvement);
    }
    if z < ANEURYSM_MIN {
        return Some(RiskKey::DilationOnly);
    }

    match effective {
        CoronaryStatus::Current => Some(if z < MEDIUM_MIN {
            RiskKey::SmallCurrent
        } else if z < GIANT_MIN {
            RiskKey::MediumCurrent
        } else {
            RiskKey::GiantCurrent
        }),
        CoronaryStatus::Regressed => Some(if z < MEDIUM_MIN {
            RiskKey::SmallRegressed
        } else if z < GIANT_MIN {
            match regression_target {
                Some(RegressionTarget::Small) => RiskKey::MediumToSmall,
                _ => RiskKey::MediumToNormal,
            }
        } else {
            match regression_target {
                Some(RegressionTarget::Medium) => RiskKey::GiantToMedium,
                Some(RegressionTarget::Small) => RiskKey::GiantToSmall,
                _ => RiskKey::GiantToNormal,
            }
        }),
        CoronaryStatus::None => None,
    }
}

pub fn classify_input(input: &ClassificationInput) -> Option<RiskKey> {
    classify(input.z, input.status, input.regression_target)
}
