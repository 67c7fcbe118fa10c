use crate::domain::constants::NOT_INDICATED;
use crate::domain::error::DomainError;
use clap::ValueEnum;
use owo_colors::{Style, XtermColors};
use crate::services::zscore::format_z_score;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// AHA coronary risk level for Kawasaki disease follow-up.
///
/// Serialized as the level's dotted identifier (`"3.1"`). Declaration order is
/// matrix order and is relied on by [`RiskKey::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskKey {
    #[serde(rename = "1")]
    NoInvolvement,
    #[serde(rename = "2")]
    DilationOnly,
    #[serde(rename = "3.1")]
    SmallCurrent,
    #[serde(rename = "3.2")]
    SmallRegressed,
    #[serde(rename = "4.1")]
    MediumCurrent,
    #[serde(rename = "4.2")]
    MediumToSmall,
    #[serde(rename = "4.3")]
    MediumToNormal,
    #[serde(rename = "5.1")]
    GiantCurrent,
    #[serde(rename = "5.2")]
    GiantToMedium,
    #[serde(rename = "5.3")]
    GiantToSmall,
    #[serde(rename = "5.4")]
    GiantToNormal,
}

impl RiskKey {
    pub const ALL: [RiskKey; 11] = [
        RiskKey::NoInvolvement,
        RiskKey::DilationOnly,
        RiskKey::SmallCurrent,
        RiskKey::SmallRegressed,
        RiskKey::MediumCurrent,
        RiskKey::MediumToSmall,
        RiskKey::MediumToNormal,
        RiskKey::GiantCurrent,
        RiskKey::GiantToMedium,
        RiskKey::GiantToSmall,
        RiskKey::GiantToNormal,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            RiskKey::NoInvolvement => "1",
            RiskKey::DilationOnly => "2",
            RiskKey::SmallCurrent => "3.1",
            RiskKey::SmallRegressed => "3.2",
            RiskKey::MediumCurrent => "4.1",
            RiskKey::MediumToSmall => "4.2",
            RiskKey::MediumToNormal => "4.3",
            RiskKey::GiantCurrent => "5.1",
            RiskKey::GiantToMedium => "5.2",
            RiskKey::GiantToSmall => "5.3",
            RiskKey::GiantToNormal => "5.4",
        }
    }

    /// Position in [`RiskKey::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short title shown in level pickers.
    pub const fn title(self) -> &'static str {
        match self {
            RiskKey::NoInvolvement => "1 – No involvement",
            RiskKey::DilationOnly => "2 – Dilation only",
            RiskKey::SmallCurrent => "3.1 – Small aneurysm (current)",
            RiskKey::SmallRegressed => "3.2 – Small → regressed",
            RiskKey::MediumCurrent => "4.1 – Medium (current)",
            RiskKey::MediumToSmall => "4.2 – Medium → small",
            RiskKey::MediumToNormal => "4.3 – Medium → normal/dilation",
            RiskKey::GiantCurrent => "5.1 – Giant (current)",
            RiskKey::GiantToMedium => "5.2 – Giant → medium",
            RiskKey::GiantToSmall => "5.3 – Giant → small",
            RiskKey::GiantToNormal => "5.4 – Giant → normal/dilation",
        }
    }
}

impl fmt::Display for RiskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskKey {
    type Err = DomainError;

    /// Accepts `3.1` as well as `Risk 3.1` / `risk-3.1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = match trimmed.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("risk") => trimmed[4..]
                .trim_start_matches(|c: char| c.is_whitespace() || c == '-' || c == '_'),
            _ => trimmed,
        };
        RiskKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == bare)
            .ok_or_else(|| DomainError::UnknownRiskKey(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CoronaryStatus {
    /// No aneurysm (none or dilation only)
    #[default]
    None,
    /// Aneurysm, current or persistent
    Current,
    /// Aneurysm that has since regressed
    Regressed,
}

impl CoronaryStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            CoronaryStatus::None => "none",
            CoronaryStatus::Current => "current",
            CoronaryStatus::Regressed => "regressed",
        }
    }
}

impl fmt::Display for CoronaryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoronaryStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        [
            CoronaryStatus::None,
            CoronaryStatus::Current,
            CoronaryStatus::Regressed,
        ]
        .into_iter()
        .find(|st| st.as_str().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| DomainError::UnknownStatus(s.to_string()))
    }
}

/// Size band a previously enlarged artery has regressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RegressionTarget {
    /// Normal dimensions
    Normal,
    /// Dilation only
    Dilation,
    /// Small aneurysm
    Small,
    /// Medium aneurysm
    Medium,
}

impl RegressionTarget {
    pub const fn as_str(self) -> &'static str {
        match self {
            RegressionTarget::Normal => "normal",
            RegressionTarget::Dilation => "dilation",
            RegressionTarget::Small => "small",
            RegressionTarget::Medium => "medium",
        }
    }
}

impl fmt::Display for RegressionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegressionTarget {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        [
            RegressionTarget::Normal,
            RegressionTarget::Dilation,
            RegressionTarget::Small,
            RegressionTarget::Medium,
        ]
        .into_iter()
        .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| DomainError::UnknownRegressionTarget(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayColor {
    Emerald,
    Green,
    Yellow,
    Orange,
    Red,
}

impl DisplayColor {
    pub const fn css_class(self) -> &'static str {
        match self {
            DisplayColor::Emerald => "bg-emerald-100",
            DisplayColor::Green => "bg-green-200",
            DisplayColor::Yellow => "bg-yellow-200",
            DisplayColor::Orange => "bg-orange-300",
            DisplayColor::Red => "bg-red-400",
        }
    }

    /// Terminal style for the level's tier.
    pub fn style(self) -> Style {
        match self {
            DisplayColor::Emerald => Style::new().bright_green(),
            DisplayColor::Green => Style::new().green(),
            DisplayColor::Yellow => Style::new().yellow(),
            DisplayColor::Orange => Style::new().color(XtermColors::from(208)),
            DisplayColor::Red => Style::new().red(),
        }
    }
}

/// Management plan for one risk level. All text is authored once in
/// `services::plans` and never mutated.
#[derive(Debug)]
pub struct Plan {
    pub key: RiskKey,
    pub label: &'static str,
    pub color: DisplayColor,
    pub z_score: &'static str,
    pub description: &'static str,
    pub follow_up: &'static str,
    pub stress_test: &'static str,
    pub advanced_imaging: &'static str,
    pub antiplatelet: &'static str,
    pub anticoag: Option<&'static str>,
    pub activity: &'static str,
    pub notes: &'static [&'static str],
}

impl Plan {
    pub fn anticoagulation(&self) -> &'static str {
        self.anticoag.unwrap_or(NOT_INDICATED)
    }
}

/// One evaluation's worth of observations.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ClassificationInput {
    /// Infinite scores are written as `"Infinity"` / `"-Infinity"`.
    #[serde(serialize_with = "serialize_z")]
    pub z: Option<f64>,
    pub status: CoronaryStatus,
    pub regression_target: Option<RegressionTarget>,
}

fn serialize_z<S: Serializer>(z: &Option<f64>, ser: S) -> Result<S::Ok, S::Error> {
    match z {
        Some(v) if v.is_infinite() => ser.serialize_str(&format_z_score(*v)),
        Some(v) => ser.serialize_f64(*v),
        None => ser.serialize_none(),
    }
}

impl ClassificationInput {
    /// The regression target only means something for regressed aneurysms and
    /// is dropped for any other status.
    pub fn new(
        z: Option<f64>,
        status: CoronaryStatus,
        regression_target: Option<RegressionTarget>,
    ) -> Self {
        let regression_target = match status {
            CoronaryStatus::Regressed => regression_target,
            _ => None,
        };
        Self {
            z,
            status,
            regression_target,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct PlanView {
    pub key: RiskKey,
    pub label: &'static str,
    pub title: &'static str,
    pub color: DisplayColor,
    pub color_class: &'static str,
    pub z_score: &'static str,
    pub description: &'static str,
    pub follow_up: &'static str,
    pub stress_test: &'static str,
    pub advanced_imaging: &'static str,
    pub antiplatelet: &'static str,
    pub anticoagulation: &'static str,
    pub activity: &'static str,
    pub notes: &'static [&'static str],
}

impl From<&'static Plan> for PlanView {
    fn from(p: &'static Plan) -> Self {
        Self {
            key: p.key,
            label: p.label,
            title: p.key.title(),
            color: p.color,
            color_class: p.color.css_class(),
            z_score: p.z_score,
            description: p.description,
            follow_up: p.follow_up,
            stress_test: p.stress_test,
            advanced_imaging: p.advanced_imaging,
            antiplatelet: p.antiplatelet,
            anticoagulation: p.anticoagulation(),
            activity: p.activity,
            notes: p.notes,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct ClassifyReport {
    pub z_input: Option<String>,
    pub input: ClassificationInput,
    pub effective_status: Option<CoronaryStatus>,
    pub suggested: Option<RiskKey>,
}

#[derive(Serialize, Clone, Debug)]
pub struct AssessReport {
    #[serde(flatten)]
    pub selection: SelectionState,
    pub plan: PlanView,
}

#[derive(Serialize, Clone, Debug)]
pub struct LevelItem {
    pub key: RiskKey,
    pub title: &'static str,
    pub color: DisplayColor,
}

#[derive(Serialize, Clone, Debug)]
pub struct ExportReport {
    pub key: RiskKey,
    pub format: &'static str,
    pub bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Serialize, Clone, Debug)]
pub struct SelectionState {
    pub input: ClassificationInput,
    pub effective_status: Option<CoronaryStatus>,
    pub suggested: Option<RiskKey>,
    pub active: RiskKey,
    pub overridden: bool,
}
