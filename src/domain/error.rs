#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("unknown risk level: {0} (expected one of 1, 2, 3.1, 3.2, 4.1, 4.2, 4.3, 5.1, 5.2, 5.3, 5.4)")]
    UnknownRiskKey(String),

    #[error("unknown coronary status: {0} (expected none, current or regressed)")]
    UnknownStatus(String),

    #[error("unknown regression target: {0} (expected normal, dilation, small or medium)")]
    UnknownRegressionTarget(String),
}
