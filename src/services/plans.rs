use crate::domain::models::{DisplayColor, Plan, RiskKey};

const BETA_BLOCKERS_STATINS: &[&str] = &["β-blockers and statins may be considered"];
const PROMOTION: &str = "Promotion counseling at every visit";
const RESTRICT_CONTACT: &str = "Promotion counseling; restrict contact; self-limit";

/// Indexed by [`RiskKey::index`].
static PLANS: [Plan; 11] = [
    Plan {
        key: RiskKey::NoInvolvement,
        label: "Risk 1",
        color: DisplayColor::Emerald,
        z_score: "< 2",
        description: "No coronary involvement at any point",
        follow_up: "1–2 wk (consider 4–6 wk if suboptimal imaging or labs abnormal) → may discharge between 4 wk and 1 yr",
        stress_test: "None",
        advanced_imaging: "None",
        antiplatelet: "Low-dose aspirin for 6 wk, then discontinue",
        anticoag: None,
        activity: PROMOTION,
        notes: &[],
    },
    Plan {
        key: RiskKey::DilationOnly,
        label: "Risk 2",
        color: DisplayColor::Green,
        z_score: "2 – 2.5",
        description: "Dilation only; resolves within 6 wk to 1 yr",
        follow_up: "1–2 wk (consider 6 wk if abnormal at 1–2 wk) → 1 yr → may discharge if normal; if persisting, assess q2–5 yr",
        stress_test: "None",
        advanced_imaging: "None",
        antiplatelet: "Low-dose aspirin for 6 wk; discontinue if coronaries normal at 6 wk",
        anticoag: None,
        activity: PROMOTION,
        notes: &[],
    },
    Plan {
        key: RiskKey::SmallCurrent,
        label: "Risk 3.1",
        color: DisplayColor::Yellow,
        z_score: "2.5 – <5",
        description: "Small aneurysm – current/persistent",
        follow_up: "Within 1 wk (closer if enlarging) → 6 wk → 6 mo → 12 mo → yearly",
        stress_test: "Assess every 3–5 yr",
        advanced_imaging: "Coronary CTA at 1 yr as baseline; consider q3–5 yr",
        antiplatelet: "Low-dose aspirin",
        anticoag: None,
        activity: PROMOTION,
        notes: &[],
    },
    Plan {
        key: RiskKey::SmallRegressed,
        label: "Risk 3.2",
        color: DisplayColor::Yellow,
        z_score: "Regressed",
        description: "Small aneurysm – regressed to dilation only or normal",
        follow_up: "Within 1 wk → 6 wk → 1 yr → 5 yr (may discharge if CTA + stress test normal)",
        stress_test: "Assess every 5 yr",
        advanced_imaging: "Coronary CTA at 1 yr baseline; consider if inducible ischemia",
        antiplatelet: "Continue low-dose aspirin until dimensions normal",
        anticoag: None,
        activity: PROMOTION,
        notes: &[],
    },
    Plan {
        key: RiskKey::MediumCurrent,
        label: "Risk 4.1",
        color: DisplayColor::Orange,
        z_score: "5 – <10 and <8 mm",
        description: "Medium aneurysm – current/persistent",
        follow_up: "Within 1 wk (closer if enlarging) → 6 wk → 3 mo → 6 mo → 12 mo → yearly",
        stress_test: "Assess every 2–5 yr",
        advanced_imaging: "Coronary CTA at 1 yr baseline; consider q2–5 yr",
        antiplatelet: "Low-dose aspirin + clopidogrel",
        anticoag: None,
        activity: "Promotion counseling; consider restricting contact; self-limit",
        notes: BETA_BLOCKERS_STATINS,
    },
    Plan {
        key: RiskKey::MediumToSmall,
        label: "Risk 4.2",
        color: DisplayColor::Orange,
        z_score: "Regressed",
        description: "Medium aneurysm – regressed to small aneurysm",
        follow_up: "Within 1 wk → 6 wk → 6 mo → 12 mo → yearly",
        stress_test: "Assess every 3–5 yr",
        advanced_imaging: "Coronary CTA at 1 yr baseline; consider q3–5 yr",
        antiplatelet: "Low-dose aspirin",
        anticoag: None,
        activity: PROMOTION,
        notes: BETA_BLOCKERS_STATINS,
    },
    Plan {
        key: RiskKey::MediumToNormal,
        label: "Risk 4.3",
        color: DisplayColor::Orange,
        z_score: "Regressed",
        description: "Medium aneurysm – regressed to normal or dilation only",
        follow_up: "Within 1 wk → 6 wk → 6 mo → 12 mo → every 2 yr",
        stress_test: "Assess every 4–5 yr",
        advanced_imaging: "Coronary CTA at 1 yr baseline; consider if inducible ischemia",
        antiplatelet: "Low-dose aspirin",
        anticoag: None,
        activity: PROMOTION,
        notes: BETA_BLOCKERS_STATINS,
    },
    Plan {
        key: RiskKey::GiantCurrent,
        label: "Risk 5.1",
        color: DisplayColor::Red,
        z_score: "≥10 or ≥8 mm",
        description: "Large/giant aneurysm – current/persistent",
        follow_up: "Within 1 wk (closer if enlarging) → 6 wk → 3 mo → 6 mo → 9 mo → 12 mo → q6–12 mo",
        stress_test: "Assess every 6–12 mo",
        advanced_imaging: "Baseline coronary CTA within 2–6 mo; consider q1–5 yr or invasive angiography",
        antiplatelet: "Low-dose aspirin; dual antiplatelet with clopidogrel may be considered",
        anticoag: Some("Warfarin, LMWH, or DOAC"),
        activity: RESTRICT_CONTACT,
        notes: BETA_BLOCKERS_STATINS,
    },
    Plan {
        key: RiskKey::GiantToMedium,
        label: "Risk 5.2",
        color: DisplayColor::Red,
        z_score: "Regressed",
        description: "Large/giant aneurysm – regressed to medium aneurysm",
        follow_up: "Within 1 wk (closer if enlarging) → 6 wk → 3 mo → 6 mo → 9 mo → 12 mo → q6–12 mo",
        stress_test: "Assess every 2–5 yr",
        advanced_imaging: "Coronary CTA at 1 yr baseline; consider q2–5 yr",
        antiplatelet: "Low-dose aspirin; dual antiplatelet may be considered",
        anticoag: Some("Warfarin, LMWH, or DOAC may be considered (thrombosis risk dependent)"),
        activity: RESTRICT_CONTACT,
        notes: BETA_BLOCKERS_STATINS,
    },
    Plan {
        key: RiskKey::GiantToSmall,
        label: "Risk 5.3",
        color: DisplayColor::Red,
        z_score: "Regressed",
        description: "Large/giant aneurysm – regressed to small aneurysm",
        follow_up: "Within 1 wk (closer if enlarging) → 6 wk → 3 mo → 6 mo → 9 mo → 12 mo → yearly",
        stress_test: "Assess every 3–5 yr",
        advanced_imaging: "Coronary CTA at 1 yr baseline; consider q3–5 yr",
        antiplatelet: "Low-dose aspirin; dual antiplatelet may be considered",
        anticoag: None,
        activity: RESTRICT_CONTACT,
        notes: BETA_BLOCKERS_STATINS,
    },
    Plan {
        key: RiskKey::GiantToNormal,
        label: "Risk 5.4",
        color: DisplayColor::Red,
        z_score: "Regressed",
        description: "Large/giant aneurysm – regressed to normal or dilation only",
        follow_up: "Within 1 wk (closer if enlarging) → 6 wk → 3 mo → 6 mo → 9 mo → 12 mo → q1–2 yr",
        stress_test: "Assess every 3–5 yr",
        advanced_imaging: "Coronary CTA at 1 yr baseline; consider q3–5 yr",
        antiplatelet: "Low-dose aspirin",
        anticoag: None,
        activity: RESTRICT_CONTACT,
        notes: BETA_BLOCKERS_STATINS,
    },
];

pub fn lookup_plan(key: RiskKey) -> &'static Plan {
    &PLANS[key.index()]
}

/// Plans in matrix order.
pub fn all_plans() -> impl Iterator<Item = &'static Plan> {
    PLANS.iter()
}

#[cfg(test)]
mod tests {
    use super::{all_plans, lookup_plan};
    use crate::domain::constants::NOT_INDICATED;
    use crate::domain::models::RiskKey;

    #[test]
    fn every_key_resolves_to_its_own_plan() {
        for key in RiskKey::ALL {
            let plan = lookup_plan(key);
            assert_eq!(plan.key, key);
            assert_eq!(plan.label, format!("Risk {}", key));
        }
    }

    #[test]
    fn table_key_set_matches_enumeration() {
        let keys: Vec<RiskKey> = all_plans().map(|p| p.key).collect();
        assert_eq!(keys, RiskKey::ALL.to_vec());
    }

    #[test]
    fn absent_anticoagulation_reads_not_indicated() {
        assert_eq!(
            lookup_plan(RiskKey::SmallCurrent).anticoagulation(),
            NOT_INDICATED
        );
        assert_eq!(
            lookup_plan(RiskKey::GiantCurrent).anticoagulation(),
            "Warfarin, LMWH, or DOAC"
        );
    }

    #[test]
    fn notes_only_from_medium_aneurysm_upward() {
        for key in [
            RiskKey::NoInvolvement,
            RiskKey::DilationOnly,
            RiskKey::SmallCurrent,
            RiskKey::SmallRegressed,
        ] {
            assert!(lookup_plan(key).notes.is_empty(), "{key} has notes");
        }
        assert_eq!(lookup_plan(RiskKey::GiantToNormal).notes.len(), 1);
    }
}
