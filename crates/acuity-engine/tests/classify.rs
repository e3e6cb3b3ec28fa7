use std::collections::BTreeSet;

use acuity_core::models::{
    AirwayStatus, BreathingStatus, Category, CirculationStatus, ConsciousnessLevel, Level,
    PainScore, RedFlag, Signal, TriageAssessment,
};
use acuity_engine::{category_of, classify, config_for, explain, findings};

fn assessment(
    consciousness: ConsciousnessLevel,
    airway: AirwayStatus,
    breathing: BreathingStatus,
    circulation: CirculationStatus,
    pain: u8,
    red_flags: &[RedFlag],
) -> TriageAssessment {
    TriageAssessment {
        consciousness,
        airway,
        breathing,
        circulation,
        pain_level: PainScore::new(pain).unwrap(),
        red_flags: red_flags.iter().copied().collect(),
    }
}

fn stable(pain: u8) -> TriageAssessment {
    assessment(
        ConsciousnessLevel::Alert,
        AirwayStatus::Patent,
        BreathingStatus::Normal,
        CirculationStatus::Normal,
        pain,
        &[],
    )
}

/// Every well-formed assessment, red flags limited to empty / one / two.
fn all_assessments() -> Vec<TriageAssessment> {
    let flag_sets: [&[RedFlag]; 3] = [
        &[],
        &[RedFlag::Seizure],
        &[RedFlag::ChestPain, RedFlag::SevereTrauma],
    ];
    let mut out = Vec::new();
    for consciousness in ConsciousnessLevel::ALL {
        for airway in AirwayStatus::ALL {
            for breathing in BreathingStatus::ALL {
                for circulation in CirculationStatus::ALL {
                    for pain in 0..=10 {
                        for flags in flag_sets {
                            out.push(assessment(
                                consciousness,
                                airway,
                                breathing,
                                circulation,
                                pain,
                                flags,
                            ));
                        }
                    }
                }
            }
        }
    }
    out
}

#[test]
fn scenario_stable_mild_pain_is_non_urgent() {
    let a = stable(2);
    let level = classify(&a);
    assert_eq!(level, Level::Five);
    assert_eq!(category_of(level), Category::NonUrgent);
    assert_eq!(config_for(level).max_wait_minutes, 120);
}

#[test]
fn scenario_moderate_pain_is_less_urgent() {
    assert_eq!(classify(&stable(5)), Level::Four);
}

#[test]
fn scenario_airway_at_risk_alone_is_urgent() {
    let a = assessment(
        ConsciousnessLevel::Alert,
        AirwayStatus::AtRisk,
        BreathingStatus::Normal,
        CirculationStatus::Normal,
        0,
        &[],
    );
    assert_eq!(classify(&a), Level::Three);
}

#[test]
fn scenario_chest_pain_flag_is_emergent() {
    let a = assessment(
        ConsciousnessLevel::Alert,
        AirwayStatus::Patent,
        BreathingStatus::Normal,
        CirculationStatus::Normal,
        0,
        &[RedFlag::ChestPain],
    );
    assert_eq!(classify(&a), Level::Two);
}

#[test]
fn scenario_unresponsive_alone_is_resuscitation() {
    let a = assessment(
        ConsciousnessLevel::Unresponsive,
        AirwayStatus::Patent,
        BreathingStatus::Normal,
        CirculationStatus::Normal,
        0,
        &[],
    );
    assert_eq!(classify(&a), Level::One);
}

#[test]
fn scenario_severe_but_not_catastrophic_is_emergent() {
    let a = assessment(
        ConsciousnessLevel::Pain,
        AirwayStatus::Compromised,
        BreathingStatus::Distressed,
        CirculationStatus::Decompensated,
        10,
        &[RedFlag::SevereTrauma],
    );
    assert_eq!(classify(&a), Level::Two);
}

#[test]
fn classification_is_total_and_deterministic() {
    for a in all_assessments() {
        let first = classify(&a);
        assert!((1..=5).contains(&first.as_u8()));
        assert_eq!(classify(&a.clone()), first);
    }
}

#[test]
fn catastrophic_signal_overrides_everything() {
    for a in all_assessments() {
        let catastrophic = a.airway == AirwayStatus::Obstructed
            || a.breathing == BreathingStatus::Apneic
            || a.circulation == CirculationStatus::Arrest
            || a.consciousness == ConsciousnessLevel::Unresponsive;
        assert_eq!(classify(&a) == Level::One, catastrophic, "{a:?}");
    }
}

#[test]
fn any_single_red_flag_on_stable_patient_is_exactly_emergent() {
    for flag in RedFlag::ALL {
        let mut a = stable(0);
        a.red_flags = BTreeSet::from([flag]);
        assert_eq!(classify(&a), Level::Two, "{flag:?}");
    }
}

#[test]
fn pain_boundaries_partition_the_scale() {
    let expected = [
        (0, Level::Five),
        (3, Level::Five),
        (4, Level::Four),
        (6, Level::Four),
        (7, Level::Three),
        (8, Level::Three),
        (9, Level::Two),
        (10, Level::Two),
    ];
    for (pain, level) in expected {
        assert_eq!(classify(&stable(pain)), level, "pain {pain}");
    }
}

#[test]
fn assisted_breathing_is_at_least_emergent() {
    let mut a = stable(0);
    a.breathing = BreathingStatus::Assisted;
    assert_eq!(classify(&a), Level::Two);
}

#[test]
fn worsening_one_axis_never_lowers_urgency() {
    for a in all_assessments() {
        let before = classify(&a);

        for airway in AirwayStatus::ALL {
            if airway.severity() > a.airway.severity() {
                let worse = TriageAssessment { airway, ..a.clone() };
                assert!(classify(&worse) <= before, "{a:?} -> {airway:?}");
            }
        }
        for breathing in BreathingStatus::ALL {
            if breathing.severity() > a.breathing.severity() {
                let worse = TriageAssessment { breathing, ..a.clone() };
                assert!(classify(&worse) <= before, "{a:?} -> {breathing:?}");
            }
        }
        for circulation in CirculationStatus::ALL {
            if circulation.severity() > a.circulation.severity() {
                let worse = TriageAssessment { circulation, ..a.clone() };
                assert!(classify(&worse) <= before, "{a:?} -> {circulation:?}");
            }
        }
        for consciousness in ConsciousnessLevel::ALL {
            if consciousness.severity() > a.consciousness.severity() {
                let worse = TriageAssessment { consciousness, ..a.clone() };
                assert!(classify(&worse) <= before, "{a:?} -> {consciousness:?}");
            }
        }
        for pain in (a.pain_level.value() + 1)..=10 {
            let worse = TriageAssessment {
                pain_level: PainScore::new(pain).unwrap(),
                ..a.clone()
            };
            assert!(classify(&worse) <= before, "{a:?} -> pain {pain}");
        }
        if !a.has_red_flags() {
            let mut worse = a.clone();
            worse.red_flags.insert(RedFlag::ToxicExposure);
            assert!(classify(&worse) <= before, "{a:?} -> red flag");
        }
    }
}

#[test]
fn explain_lists_every_signal_at_the_winning_tier() {
    let a = assessment(
        ConsciousnessLevel::Verbal,
        AirwayStatus::AtRisk,
        BreathingStatus::Normal,
        CirculationStatus::Decompensated,
        9,
        &[RedFlag::Seizure],
    );
    let classification = explain(&a);
    assert_eq!(classification.level, Level::Two);
    assert_eq!(classification.category, Category::Emergent);
    assert_eq!(
        classification.triggers,
        vec![
            Signal::Circulation,
            Signal::Consciousness,
            Signal::Pain,
            Signal::RedFlags
        ]
    );
}

#[test]
fn explain_has_no_triggers_for_non_urgent() {
    let classification = explain(&stable(1));
    assert_eq!(classification.level, Level::Five);
    assert!(classification.triggers.is_empty());
}

#[test]
fn findings_include_lower_tier_signals() {
    let a = assessment(
        ConsciousnessLevel::Alert,
        AirwayStatus::Obstructed,
        BreathingStatus::Labored,
        CirculationStatus::Normal,
        5,
        &[],
    );
    let found: Vec<_> = findings(&a)
        .into_iter()
        .map(|f| (f.signal, f.level))
        .collect();
    assert_eq!(
        found,
        vec![
            (Signal::Airway, Level::One),
            (Signal::Breathing, Level::Three),
            (Signal::Pain, Level::Four),
        ]
    );
}
