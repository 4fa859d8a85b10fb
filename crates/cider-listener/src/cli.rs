//! Hand-rolled argument parsing for the `cider` binary.

use std::path::PathBuf;

use cider_core::config::CliOverrides;
use cider_core::timefmt;

pub const USAGE: &str = "\
cider - SkyPortal spectrum listener and transient classifier

USAGE:
    cider [OPTIONS]

OPTIONS:
    --instance <url>        SkyPortal instance URL (default: https://fritz.science)
    --token <token>         API token (falls back to SKYPORTAL_TOKEN)
    --interval <secs>       Polling interval in seconds (default: 120)
    --start-time <iso8601>  UTC start of the first window, e.g. 2025-05-15T00:00:00Z
                            (default: lookback days before now)
    --lookback <days>       Days to look back for new spectra (default: 1)
    --instruments <ids>     Comma-separated instrument IDs to monitor
    --model <path>          Path to the ONNX model (default: SpectraCNN1D_4650.onnx)
    --cache-dir <dir>       Processed-spectrum cache directory (default: cache)
    --no-cache              Keep the processed set in memory only
    --clear-cache           Clear the processed cache before starting
    --results-log <path>    Append results to this log file
    --publish               Post the best classification back as a source comment
    --config <path>         TOML config file
    -h, --help              Print this help
";

/// What the command line asked for.
#[derive(Debug)]
pub enum CliAction {
    /// Print usage and exit.
    Help,
    /// Run the listener with these settings.
    Run(Invocation),
}

/// Parsed command line: optional config file plus overrides.
#[derive(Debug, Default)]
pub struct Invocation {
    pub config_file: Option<PathBuf>,
    pub overrides: CliOverrides,
}

/// Parse command-line arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliAction, String> {
    let mut invocation = Invocation::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(CliAction::Help),
            "--instance" => invocation.overrides.instance = Some(take(&mut iter, arg)?),
            "--token" => invocation.overrides.token = Some(take(&mut iter, arg)?),
            "--interval" => {
                invocation.overrides.interval_secs =
                    Some(parse_number(&take(&mut iter, arg)?, arg)?)
            }
            "--start-time" => {
                let value = take(&mut iter, arg)?;
                invocation.overrides.start_time = Some(
                    timefmt::parse_api_time(&value)
                        .ok_or_else(|| format!("{arg}: unrecognized time: {value}"))?,
                );
            }
            "--lookback" => {
                invocation.overrides.lookback_days =
                    Some(parse_number(&take(&mut iter, arg)?, arg)?)
            }
            "--instruments" => {
                invocation.overrides.instrument_ids =
                    Some(parse_instruments(&take(&mut iter, arg)?)?)
            }
            "--model" => invocation.overrides.model_path = Some(take(&mut iter, arg)?),
            "--cache-dir" => invocation.overrides.cache_dir = Some(take(&mut iter, arg)?),
            "--no-cache" => invocation.overrides.no_cache = true,
            "--clear-cache" => invocation.overrides.clear_cache = true,
            "--results-log" => invocation.overrides.results_log = Some(take(&mut iter, arg)?),
            "--publish" => invocation.overrides.publish = true,
            "--config" => invocation.config_file = Some(PathBuf::from(take(&mut iter, arg)?)),
            other => return Err(format!("unknown argument: {other} (try --help)")),
        }
    }

    Ok(CliAction::Run(invocation))
}

fn take(iter: &mut std::slice::Iter<'_, String>, flag: &str) -> Result<String, String> {
    iter.next()
        .cloned()
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_number<T: std::str::FromStr>(value: &str, flag: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("{flag}: invalid number: {value}"))
}

fn parse_instruments(value: &str) -> Result<Vec<i64>, String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .map_err(|_| format!("--instruments: invalid id: {s}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run_of(action: CliAction) -> Invocation {
        match action {
            CliAction::Run(invocation) => invocation,
            CliAction::Help => panic!("expected Run, got Help"),
        }
    }

    #[test]
    fn no_args_means_run_with_no_overrides() {
        let invocation = run_of(parse_args(&[]).unwrap());
        assert!(invocation.config_file.is_none());
        assert!(invocation.overrides.instance.is_none());
        assert!(invocation.overrides.token.is_none());
        assert!(!invocation.overrides.publish);
        assert!(!invocation.overrides.no_cache);
    }

    #[test]
    fn help_wins_wherever_it_appears() {
        assert!(matches!(
            parse_args(&args(&["--interval", "60", "--help"])).unwrap(),
            CliAction::Help
        ));
        assert!(matches!(parse_args(&args(&["-h"])).unwrap(), CliAction::Help));
    }

    #[test]
    fn value_flags_are_collected() {
        let invocation = run_of(
            parse_args(&args(&[
                "--instance",
                "https://skyportal.example",
                "--token",
                "abc123",
                "--interval",
                "60",
                "--lookback",
                "3",
                "--model",
                "model.onnx",
                "--cache-dir",
                "/tmp/cider",
                "--results-log",
                "out.log",
                "--publish",
                "--no-cache",
                "--clear-cache",
            ]))
            .unwrap(),
        );
        let o = invocation.overrides;
        assert_eq!(o.instance.as_deref(), Some("https://skyportal.example"));
        assert_eq!(o.token.as_deref(), Some("abc123"));
        assert_eq!(o.interval_secs, Some(60));
        assert_eq!(o.lookback_days, Some(3));
        assert_eq!(o.model_path.as_deref(), Some("model.onnx"));
        assert_eq!(o.cache_dir.as_deref(), Some("/tmp/cider"));
        assert_eq!(o.results_log.as_deref(), Some("out.log"));
        assert!(o.publish);
        assert!(o.no_cache);
        assert!(o.clear_cache);
    }

    #[test]
    fn start_time_accepts_zulu_and_naive_forms() {
        let zulu = run_of(parse_args(&args(&["--start-time", "2025-05-15T00:00:00Z"])).unwrap());
        assert!(zulu.overrides.start_time.is_some());

        let naive = run_of(
            parse_args(&args(&["--start-time", "2025-05-15T06:30:15.250000"])).unwrap(),
        );
        assert!(naive.overrides.start_time.is_some());
    }

    #[test]
    fn instruments_parse_as_csv() {
        let invocation =
            run_of(parse_args(&args(&["--instruments", "7, 9,35,1117"])).unwrap());
        assert_eq!(
            invocation.overrides.instrument_ids,
            Some(vec![7, 9, 35, 1117])
        );
    }

    #[test]
    fn missing_value_names_the_flag() {
        let err = parse_args(&args(&["--token"])).unwrap_err();
        assert!(err.contains("--token"));
    }

    #[test]
    fn bad_number_is_rejected() {
        let err = parse_args(&args(&["--interval", "soon"])).unwrap_err();
        assert!(err.contains("--interval"));
    }

    #[test]
    fn bad_start_time_is_rejected() {
        let err = parse_args(&args(&["--start-time", "yesterday"])).unwrap_err();
        assert!(err.contains("--start-time"));
    }

    #[test]
    fn unknown_flags_are_rejected() {
        let err = parse_args(&args(&["--frobnicate"])).unwrap_err();
        assert!(err.contains("--frobnicate"));
    }

    #[test]
    fn config_flag_sets_the_file_path() {
        let invocation = run_of(parse_args(&args(&["--config", "cider.toml"])).unwrap());
        assert_eq!(
            invocation.config_file,
            Some(PathBuf::from("cider.toml"))
        );
    }
}
