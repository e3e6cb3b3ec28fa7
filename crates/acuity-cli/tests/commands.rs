use acuity_cli::commands::{classify, levels_json, read_draft, run, summary};
use acuity_cli::config::{AcuityConfig, config_path, load_config};
use acuity_cli::{Commands, ConfigCommand};
use acuity_core::models::{CareArea, Level};

const DRAFT: &str = r#"{
    "consciousness": { "observed": "alert" },
    "airway": { "observed": "at_risk" },
    "breathing": { "observed": "normal" },
    "circulation": { "observed": "normal" },
    "pain_level": { "observed": 2 },
    "mobility": { "observed": "ambulatory" }
}"#;

fn now() -> jiff::Timestamp {
    "2026-03-14T09:30:00Z".parse().unwrap()
}

#[test]
fn classifies_draft_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("draft.json");
    std::fs::write(&path, DRAFT).unwrap();

    let draft = read_draft(&path).unwrap();
    let record = classify(&draft, Some("nurse-17"), None, now()).unwrap();

    assert_eq!(record.level, Level::Three);
    assert_eq!(record.care_area, CareArea::Minors);
    assert_eq!(record.operator_id, "nurse-17");
    assert_eq!(record.triaged_at, now());
}

#[test]
fn operator_falls_back_to_config() {
    let draft = serde_json::from_str(DRAFT).unwrap();
    let config = AcuityConfig::new("nurse-3", None);

    let record = classify(&draft, None, Some(&config), now()).unwrap();
    assert_eq!(record.operator_id, "nurse-3");

    let record = classify(&draft, Some("nurse-9"), Some(&config), now()).unwrap();
    assert_eq!(record.operator_id, "nurse-9");
}

#[test]
fn missing_operator_is_an_error() {
    let draft = serde_json::from_str(DRAFT).unwrap();
    let err = classify(&draft, None, None, now()).unwrap_err();
    assert!(err.to_string().contains("no operator id"));
}

#[test]
fn incomplete_draft_is_not_classified() {
    let draft = serde_json::from_str(r#"{ "consciousness": { "observed": "alert" } }"#).unwrap();
    let err = classify(&draft, Some("nurse-17"), None, now()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot classify: assessment incomplete, not yet assessed: airway, breathing, circulation, pain score"
    );
}

#[test]
fn unreadable_draft_names_the_path() {
    let err = read_draft(std::path::Path::new("/nonexistent/draft.json")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/draft.json"));
}

#[test]
fn levels_json_lists_all_five() {
    let json: serde_json::Value = serde_json::from_str(&levels_json().unwrap()).unwrap();
    let levels = json.as_array().unwrap();
    assert_eq!(levels.len(), 5);
    assert_eq!(levels[0]["level"], 1);
    assert_eq!(levels[0]["max_wait_minutes"], 0);
    assert_eq!(levels[4]["category"], "non_urgent");
}

#[test]
fn summary_reads_like_a_banner() {
    let draft = serde_json::from_str(
        r#"{
            "consciousness": { "observed": "alert" },
            "airway": { "observed": "patent" },
            "breathing": { "observed": "normal" },
            "circulation": { "observed": "normal" },
            "pain_level": { "observed": 9 },
            "red_flags": ["chest_pain"]
        }"#,
    )
    .unwrap();
    let record = classify(&draft, Some("nurse-17"), None, now()).unwrap();
    assert_eq!(
        summary(&record),
        "Level 2 Emergent (orange): max wait 15 min, area Majors, pain 9/10; \
         AVPU Alert, airway Patent, breathing Normal, circulation Normal; \
         triggered by pain score, red flags; red flags: Chest pain"
    );
}

#[test]
fn summary_spells_out_vitals_and_mobility() {
    let draft = serde_json::from_str(
        r#"{
            "consciousness": { "observed": "verbal" },
            "airway": { "observed": "at_risk" },
            "breathing": { "observed": "assisted" },
            "circulation": { "observed": "compensated" },
            "pain_level": { "observed": 4 },
            "mobility": { "observed": "assisted" }
        }"#,
    )
    .unwrap();
    let record = classify(&draft, Some("nurse-17"), None, now()).unwrap();
    let line = summary(&record);
    assert!(
        line.contains(
            "AVPU Responds to voice, airway At risk, breathing Assisted ventilation, \
             circulation Compensated, mobility Walks with assistance"
        ),
        "{line}"
    );
}

fn broken_config_dir(contents: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(config_path(dir.path()), contents).unwrap();
    dir
}

const BROKEN_CONFIGS: [&str; 3] = [
    r#"{ "config_version": 9, "operator_id": "n", "created_at": "2025-11-02T08:00:00Z" }"#,
    r#"{"operator":"n"}"#,
    "not json",
];

#[test]
fn levels_ignores_a_broken_config() {
    for contents in BROKEN_CONFIGS {
        let dir = broken_config_dir(contents);
        let output = run(Commands::Levels, dir.path()).unwrap();
        assert!(output.stdout.contains("\"max_wait_minutes\""));
        assert!(output.banner.is_none());
    }
}

#[test]
fn init_overwrites_a_broken_config() {
    for contents in BROKEN_CONFIGS {
        let dir = broken_config_dir(contents);
        let init = Commands::Config(ConfigCommand::Init {
            operator: "nurse-17".to_string(),
            station: None,
            log_json: false,
        });
        run(init, dir.path()).unwrap();
        assert_eq!(load_config(dir.path()).unwrap().operator_id, "nurse-17");
    }
}

#[test]
fn show_points_at_init_when_config_is_broken() {
    let dir = broken_config_dir(BROKEN_CONFIGS[0]);
    let err = run(Commands::Config(ConfigCommand::Show), dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("acuity config init"), "{err:#}");
}

#[test]
fn show_without_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(run(Commands::Config(ConfigCommand::Show), dir.path()).is_err());
}

#[test]
fn run_classify_prints_record_and_banner() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("draft.json");
    std::fs::write(&path, DRAFT).unwrap();

    let output = run(
        Commands::Classify {
            draft: path,
            operator: Some("nurse-17".to_string()),
        },
        dir.path(),
    )
    .unwrap();
    let record: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(record["level"], 3);
    assert!(output.banner.unwrap().starts_with("Level 3"));
}
