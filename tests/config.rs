//! Config file loading against real files.

use std::fs;

use astkit::ast::PythonVersion;
use astkit::{AstkitError, Config, OutputErrorCode, CONFIG_FILE_NAME};

#[test]
fn missing_config_falls_back_to_defaults() {
    let temp = tempfile::tempdir().unwrap();
    let config = Config::load_from_dir(temp.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn config_in_dir_is_loaded() {
    let temp = tempfile::tempdir().unwrap();
    fs::write(
        temp.path().join(CONFIG_FILE_NAME),
        "[render]\npython_version = \"3.11\"\nindent_width = 8\n",
    )
    .unwrap();

    let config = Config::load_from_dir(temp.path()).unwrap();
    assert_eq!(config.render.python_version, Some(PythonVersion::V3_11));
    assert_eq!(config.render.indent_width, 8);

    let options = config.render_options_with(None, None).unwrap();
    assert_eq!(options.version, PythonVersion::V3_11);
    assert_eq!(options.indent_width, 8);
}

#[test]
fn explicit_path_must_exist() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("nowhere.toml");
    let err = Config::discover(Some(&path)).unwrap_err();
    assert!(matches!(err, AstkitError::FileNotFound { .. }));
    assert_eq!(OutputErrorCode::from(&err), OutputErrorCode::NotFound);
}

#[test]
fn malformed_config_names_the_file() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "[render]\nindent_width = \"wide\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, AstkitError::Config { .. }));
    assert!(err.to_string().contains(CONFIG_FILE_NAME));
    assert_eq!(OutputErrorCode::from(&err), OutputErrorCode::InvalidArguments);
}

#[test]
fn zero_indent_width_is_rejected() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "[render]\nindent_width = 0\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, AstkitError::InvalidArguments { .. }));
}

#[test]
fn unknown_sections_are_ignored() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "[other]\nkey = 1\n\n[render]\nindent_width = 2\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.render.indent_width, 2);
}
