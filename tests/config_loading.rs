//! End-to-end checks for configuration files driving the command-line tool.

use std::fs;

use camino::Utf8PathBuf;
use result_messages::cli::{Cli, CliError, run};
use result_messages::{ConfigError, MessagesConfig};
use rstest::{fixture, rstest};
use tempfile::TempDir;

struct ConfigFile {
    _dir: TempDir,
    path: Utf8PathBuf,
}

#[fixture]
fn config_file() -> ConfigFile {
    let dir = tempfile::tempdir()
        .unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"));
    let path = Utf8PathBuf::from_path_buf(dir.path().join("messages.toml"))
        .unwrap_or_else(|raw| panic!("temporary path {} should be UTF-8", raw.display()));
    fs::write(
        &path,
        concat!(
            "locale = \"cy\"\n",
            "\n",
            "[messages.cy]\n",
            "i-greeting = \"Shwmae {0}!\"\n",
            "\n",
            "[messages.en-GB]\n",
            "i-greeting = \"Hello {0}!\"\n",
            "i-farewell = \"Goodbye.\"\n",
        ),
    )
    .unwrap_or_else(|error| panic!("failed to write configuration: {error}"));

    ConfigFile { _dir: dir, path }
}

fn run_cli(cli: &Cli) -> Result<String, CliError> {
    let mut stdout = Vec::new();
    run(cli, &mut stdout)?;
    Ok(String::from_utf8(stdout).unwrap_or_else(|error| panic!("stdout was not UTF-8: {error}")))
}

fn cli_for(config: &ConfigFile, code: &str, args: &[&str]) -> Cli {
    Cli {
        code: Some(code.to_owned()),
        args: args.iter().map(|value| (*value).to_owned()).collect(),
        config: Some(config.path.clone()),
        ..Cli::default()
    }
}

#[rstest]
fn loads_configuration_from_disk(config_file: ConfigFile) {
    let config = MessagesConfig::load(&config_file.path).expect("configuration should load");

    assert_eq!(config.locale(), Some("cy"));
    assert_eq!(config.messages.len(), 2);
}

#[rstest]
fn missing_files_report_the_path() {
    let dir = tempfile::tempdir().expect("failed to create temporary directory");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.toml"))
        .expect("temporary path should be UTF-8");

    let outcome = MessagesConfig::load(&path);

    assert!(matches!(
        outcome,
        Err(ConfigError::Read { path: reported, .. }) if reported == path
    ));
}

#[rstest]
fn configured_locale_selects_templates(config_file: ConfigFile) {
    let output = run_cli(&cli_for(&config_file, "i-greeting", &["Siân"]))
        .expect("configured message should resolve");

    assert_eq!(output, "Shwmae Siân!\n");
}

#[rstest]
fn explicit_locale_overrides_configuration(config_file: ConfigFile) {
    let cli = Cli {
        locale: Some(String::from("en-GB")),
        ..cli_for(&config_file, "i-greeting", &["Sam"])
    };

    let output = run_cli(&cli).expect("configured message should resolve");

    assert_eq!(output, "Hello Sam!\n");
}

#[rstest]
fn configured_fallback_locale_fills_gaps(config_file: ConfigFile) {
    let output =
        run_cli(&cli_for(&config_file, "i-farewell", &[])).expect("fallback template should resolve");

    assert_eq!(output, "Goodbye.\n");
}

#[rstest]
fn bundled_messages_back_configured_templates(config_file: ConfigFile) {
    let output = run_cli(&cli_for(&config_file, "e-required", &["E-bost"]))
        .expect("bundled message should resolve");

    assert_eq!(output, "Mae angen E-bost.\n");
}

#[rstest]
fn malformed_configuration_is_rejected() {
    let dir = tempfile::tempdir().expect("failed to create temporary directory");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("broken.toml"))
        .expect("temporary path should be UTF-8");
    fs::write(&path, "locale = [\n").expect("failed to write configuration");

    let outcome = run_cli(&Cli {
        code: Some(String::from("i-no-results")),
        config: Some(path),
        ..Cli::default()
    });

    assert!(matches!(
        outcome,
        Err(CliError::Config(ConfigError::Parse(_)))
    ));
}
