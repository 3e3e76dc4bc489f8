//! Command-line front end shared by the `relazioni` binary.
//! Argument parsing and command execution live here so they can be tested
//! without spawning a process.

pub mod outputformatter;

use std::path::PathBuf;

use crate::error::{DatasetError, DatasetResult};
use crate::mode::DatasetMode;
use crate::registry::DatasetRegistry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub mode: DatasetMode,
    pub entity: Option<String>,
    pub summary: bool,
    pub json: bool,
    pub data_dir: Option<PathBuf>,
    pub help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self { mode: DatasetMode::All, entity: None, summary: false, json: false, data_dir: None, help: false }
    }
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage:\n  {program} [--mode <all|personaggi|luoghi>] [--entity <name>] [--json] [--data-dir <dir>]\n  {program} --summary [--json] [--data-dir <dir>]\n\nOptions:\n  --mode <m>        dataset mode to print (default: all)\n  --entity <name>   print only the names related to one entity\n  --summary         print entity and link counts for every mode\n  --json            print JSON instead of an ASCII table\n  --data-dir <dir>  load JSON documents from <dir> (env: RELAZIONI_DATA_DIR)\n  --help            show this help"
    )
}

// A value may not be blank and may not look like another flag.
fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> DatasetResult<&'a str> {
    match args.get(i + 1).map(|v| v.trim()) {
        Some(v) if !v.is_empty() && !v.starts_with('-') => Ok(v),
        _ => Err(DatasetError::user("missing_value".to_string(), format!("{} requires a value", flag))),
    }
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> DatasetResult<CliOptions> {
    let mut opts = CliOptions::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--mode" | "-m" => {
                opts.mode = flag_value(args, i, "--mode")?.parse()?;
                i += 1;
            }
            "--entity" | "-e" => {
                opts.entity = Some(flag_value(args, i, "--entity")?.to_string());
                i += 1;
            }
            "--data-dir" => {
                opts.data_dir = Some(PathBuf::from(flag_value(args, i, "--data-dir")?));
                i += 1;
            }
            "--summary" => opts.summary = true,
            "--json" => opts.json = true,
            "--help" | "-h" => opts.help = true,
            other => {
                return Err(DatasetError::user("unknown_argument".to_string(), format!("unknown argument '{}'", other)));
            }
        }
        i += 1;
    }
    if opts.summary && opts.entity.is_some() {
        return Err(DatasetError::user("conflicting_arguments", "--summary cannot be combined with --entity"));
    }
    Ok(opts)
}

/// Execute the parsed command against `registry` and return the text to print.
pub fn execute(opts: &CliOptions, registry: &DatasetRegistry) -> DatasetResult<String> {
    if opts.summary {
        let summary = registry.summary();
        return if opts.json { to_json(&summary) } else { Ok(outputformatter::render_summary(&summary)) };
    }
    let table = registry.get(opts.mode);
    match &opts.entity {
        Some(name) => {
            let related = table.get(name).ok_or_else(|| {
                DatasetError::not_found("unknown_entity".to_string(), format!("no entity '{}' in mode '{}'", name, opts.mode))
            })?;
            if opts.json { to_json(&related) } else { Ok(outputformatter::render_entity(name, related)) }
        }
        None => {
            if opts.json { to_json(table) } else { Ok(outputformatter::render_table(table)) }
        }
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> DatasetResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> { v.iter().map(|s| s.to_string()).collect() }

    #[test]
    fn defaults_to_all() {
        let opts = parse_args(&[]).unwrap();
        assert_eq!(opts, CliOptions::default());
    }

    #[test]
    fn parses_all_flags() {
        let opts = parse_args(&args(&["--mode", "luoghi", "--entity", "Agnese", "--json", "--data-dir", "/tmp/d"])).unwrap();
        assert_eq!(opts.mode, DatasetMode::Luoghi);
        assert_eq!(opts.entity.as_deref(), Some("Agnese"));
        assert!(opts.json);
        assert_eq!(opts.data_dir, Some(PathBuf::from("/tmp/d")));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(parse_args(&args(&["--mode", "tutti"])).unwrap_err().code_str(), "unknown_mode");
        assert_eq!(parse_args(&args(&["--mode"])).unwrap_err().code_str(), "missing_value");
        assert_eq!(parse_args(&args(&["--mode", "--json"])).unwrap_err().code_str(), "missing_value");
        assert_eq!(parse_args(&args(&["--verbose"])).unwrap_err().code_str(), "unknown_argument");
        assert_eq!(parse_args(&args(&["--entity", "-h"])).unwrap_err().code_str(), "missing_value");
        assert_eq!(parse_args(&args(&["--summary", "-e", "x"])).unwrap_err().code_str(), "conflicting_arguments");
    }

    #[test]
    fn blank_data_dir_is_rejected_like_the_env_var() {
        for blank in ["", "   "] {
            let err = parse_args(&args(&["--data-dir", blank])).unwrap_err();
            assert_eq!(err.code_str(), "missing_value");
        }
        let opts = parse_args(&args(&["--data-dir", " data "])).unwrap();
        assert_eq!(opts.data_dir, Some(PathBuf::from("data")));
    }

    #[test]
    fn short_flag_is_not_swallowed_as_a_mode() {
        let err = parse_args(&args(&["--mode", "-h"])).unwrap_err();
        assert_eq!(err.code_str(), "missing_value");
        assert!(err.message().contains("--mode"));
    }

    #[test]
    fn entity_json_is_the_ordered_list() {
        let reg = DatasetRegistry::embedded().unwrap();
        let opts = CliOptions { mode: DatasetMode::Personaggi, entity: Some("Perpetua".into()), json: true, ..CliOptions::default() };
        let out = execute(&opts, &reg).unwrap();
        let v: Vec<String> = serde_json::from_str(&out).unwrap();
        assert_eq!(v, vec!["Don Abbondio", "Agnese"]);
    }

    #[test]
    fn missing_entity_is_not_found() {
        let reg = DatasetRegistry::embedded().unwrap();
        let opts = CliOptions { mode: DatasetMode::Luoghi, entity: Some("Tonio".into()), ..CliOptions::default() };
        let err = execute(&opts, &reg).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn summary_json_has_three_modes() {
        let reg = DatasetRegistry::embedded().unwrap();
        let opts = CliOptions { summary: true, json: true, ..CliOptions::default() };
        let v: serde_json::Value = serde_json::from_str(&execute(&opts, &reg).unwrap()).unwrap();
        let modes: Vec<&str> = v.as_array().unwrap().iter().map(|s| s["mode"].as_str().unwrap()).collect();
        assert_eq!(modes, vec!["all", "personaggi", "luoghi"]);
    }
}
