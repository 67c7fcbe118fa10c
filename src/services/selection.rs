use crate::domain::models::{
    ClassificationInput, CoronaryStatus, RegressionTarget, RiskKey, SelectionState,
};
use crate::services::classifier::{classify_input, effective_status};
use crate::services::zscore::parse_z_score;

/// Active risk level for one interactive evaluation.
///
/// Every input change re-runs the classifier. A suggestion replaces the active
/// level at that moment; no suggestion leaves it alone. A manual override
/// stays until the next input change that produces a suggestion.
#[derive(Debug, Clone)]
pub struct Selection {
    input: ClassificationInput,
    suggested: Option<RiskKey>,
    active: RiskKey,
    overridden: bool,
}

impl Selection {
    pub fn new(initial: RiskKey) -> Self {
        Self {
            input: ClassificationInput::default(),
            suggested: None,
            active: initial,
            overridden: false,
        }
    }

    pub fn input(&self) -> &ClassificationInput {
        &self.input
    }

    pub fn suggested(&self) -> Option<RiskKey> {
        self.suggested
    }

    pub fn active(&self) -> RiskKey {
        self.active
    }

    pub fn overridden(&self) -> bool {
        self.overridden
    }

    pub fn effective_status(&self) -> Option<CoronaryStatus> {
        effective_status(self.input.z, self.input.status)
    }

    pub fn state(&self) -> SelectionState {
        SelectionState {
            input: self.input,
            effective_status: self.effective_status(),
            suggested: self.suggested,
            active: self.active,
            overridden: self.overridden,
        }
    }

    pub fn set_z(&mut self, z: Option<f64>) -> Option<RiskKey> {
        self.input.z = z;
        self.reevaluate()
    }

    pub fn set_z_text(&mut self, raw: &str) -> Option<RiskKey> {
        self.set_z(parse_z_score(raw))
    }

    /// Leaving `regressed` clears the regression target.
    pub fn set_status(&mut self, status: CoronaryStatus) -> Option<RiskKey> {
        self.input = ClassificationInput::new(self.input.z, status, self.input.regression_target);
        self.reevaluate()
    }

    /// Ignored unless the status is `regressed`.
    pub fn set_regression_target(&mut self, target: Option<RegressionTarget>) -> Option<RiskKey> {
        self.input = ClassificationInput::new(self.input.z, self.input.status, target);
        self.reevaluate()
    }

    pub fn override_with(&mut self, key: RiskKey) {
        tracing::debug!(from = %self.active, to = %key, "manual risk override");
        self.active = key;
        self.overridden = true;
    }

    fn reevaluate(&mut self) -> Option<RiskKey> {
        self.suggested = classify_input(&self.input);
        if let Some(key) = self.suggested {
            self.active = key;
            self.overridden = false;
        }
        tracing::debug!(
            z = ?self.input.z,
            status = %self.input.status,
            suggested = ?self.suggested,
            active = %self.active,
            "re-evaluated risk level"
        );
        self.suggested
    }
}
