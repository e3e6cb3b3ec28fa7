use std::io::Read;
use std::path::Path;

use acuity_core::models::TriageRecord;
use acuity_engine::error::EngineError;
use acuity_engine::intake::AssessmentDraft;
use acuity_engine::record;
use acuity_engine::registry;
use eyre::WrapErr;
use tracing::info;

use crate::config::{self, AcuityConfig, LogFormat};
use crate::{Commands, ConfigCommand};

/// What a command prints: `stdout` is machine-readable, `banner` goes to
/// stderr for the operator.
#[derive(Debug, Default)]
pub struct Output {
    pub stdout: String,
    pub banner: Option<String>,
}

/// Dispatch a parsed command. The config is only read by the commands that
/// need it, so `levels` and `config init` work even when the file on disk is
/// unreadable.
pub fn run(command: Commands, dir: &Path) -> eyre::Result<Output> {
    match command {
        Commands::Classify { draft, operator } => {
            let loaded = if config::has_config(dir) {
                Some(load(dir)?)
            } else {
                None
            };
            let draft = read_draft(&draft)?;
            let record = classify(
                &draft,
                operator.as_deref(),
                loaded.as_ref(),
                jiff::Timestamp::now(),
            )?;
            Ok(Output {
                stdout: serde_json::to_string_pretty(&record)?,
                banner: Some(summary(&record)),
            })
        }
        Commands::Levels => Ok(Output {
            stdout: levels_json()?,
            banner: None,
        }),
        Commands::Config(ConfigCommand::Show) => {
            if !config::has_config(dir) {
                return Err(eyre::eyre!(
                    "no config at {}; run `acuity config init`",
                    config::config_path(dir).display()
                ));
            }
            Ok(Output {
                stdout: serde_json::to_string_pretty(&load(dir)?)?,
                banner: None,
            })
        }
        Commands::Config(ConfigCommand::Init {
            operator,
            station,
            log_json,
        }) => {
            let config = init_config(dir, &operator, station, log_json)?;
            Ok(Output {
                stdout: serde_json::to_string_pretty(&config)?,
                banner: None,
            })
        }
    }
}

fn load(dir: &Path) -> eyre::Result<AcuityConfig> {
    config::load_config(dir).wrap_err_with(|| {
        format!(
            "config at {} is unusable; rewrite it with `acuity config init`",
            config::config_path(dir).display()
        )
    })
}

pub fn read_draft(path: &Path) -> eyre::Result<AssessmentDraft> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read draft at {}: {e}", path.display()))?
    };
    Ok(serde_json::from_str(&contents)?)
}

/// Validate and finalize a draft. An explicit operator wins over the config.
pub fn classify(
    draft: &AssessmentDraft,
    operator: Option<&str>,
    config: Option<&AcuityConfig>,
    now: jiff::Timestamp,
) -> eyre::Result<TriageRecord> {
    let operator_id = operator
        .or(config.map(|c| c.operator_id.as_str()))
        .ok_or_else(|| {
            eyre::eyre!("no operator id: pass --operator or run `acuity config init`")
        })?;

    let record = match record::finalize_draft(draft, operator_id, now) {
        Ok(record) => record,
        Err(EngineError::Intake(e)) => return Err(eyre::eyre!("cannot classify: {e}")),
        Err(e) => return Err(e.into()),
    };

    info!(
        record_id = %record.id,
        level = record.level.as_u8(),
        station = config.and_then(|c| c.station.as_deref()).unwrap_or("-"),
        "triage record finalized"
    );
    Ok(record)
}

pub fn levels_json() -> eyre::Result<String> {
    Ok(serde_json::to_string_pretty(registry::all_levels())?)
}

pub fn init_config(
    dir: &Path,
    operator: &str,
    station: Option<String>,
    log_json: bool,
) -> eyre::Result<AcuityConfig> {
    if operator.trim().is_empty() {
        return Err(eyre::eyre!("operator id must not be empty"));
    }
    let mut config = AcuityConfig::new(operator, station);
    if log_json {
        config.log_format = LogFormat::Json;
    }
    config::save_config(dir, &config)?;
    Ok(config)
}

/// One-line human summary of a record, for the operator's terminal.
pub fn summary(record: &TriageRecord) -> String {
    let config = acuity_engine::config_for(record.level);
    let a = &record.assessment;
    let mut line = format!(
        "{} {} ({}): max wait {} min, area {}, pain {}",
        record.level,
        config.name,
        config.color,
        record.max_wait_minutes,
        record.care_area.label(),
        a.pain_level,
    );
    line.push_str(&format!(
        "; AVPU {}, airway {}, breathing {}, circulation {}",
        a.consciousness.label(),
        a.airway.label(),
        a.breathing.label(),
        a.circulation.label(),
    ));
    if let Some(mobility) = record.mobility {
        line.push_str(&format!(", mobility {}", mobility.label()));
    }
    if !record.triggers.is_empty() {
        let triggers: Vec<_> = record.triggers.iter().map(|s| s.label()).collect();
        line.push_str(&format!("; triggered by {}", triggers.join(", ")));
    }
    if record.assessment.has_red_flags() {
        let flags: Vec<_> = record.assessment.red_flags.iter().map(|f| f.label()).collect();
        line.push_str(&format!("; red flags: {}", flags.join(", ")));
    }
    line
}
