use super::*;

fn base_config() -> AppConfig {
    AppConfig {
        catalog_base_url: "https://psapi.nrk.no/radio/catalog/podcast".to_string(),
        manifest_base_url: "https://psapi.nrk.no/playback/manifest/podcast".to_string(),
        shows_path: PathBuf::from("PodcastsToUpdate.txt"),
        output_dir: PathBuf::from("."),
        log_level: "info".to_string(),
        requests_per_second: 2,
        inter_show_delay_ms: 2000,
        request_timeout_secs: 30,
        user_agent: "nrkpod-test/0.1".to_string(),
    }
}

#[test]
fn no_flags_is_valid() {
    let cli = Cli::try_parse_from(["nrkpod-cli"]).expect("expected valid cli args");
    assert!(cli.shows.is_none());
    assert!(cli.output_dir.is_none());
    assert!(cli.show_ids.is_empty());
}

#[test]
fn parses_path_flags() {
    let cli = Cli::try_parse_from([
        "nrkpod-cli",
        "--shows",
        "my-shows.txt",
        "--output-dir",
        "/srv/feeds",
    ])
    .expect("expected valid cli args");

    assert_eq!(cli.shows, Some(PathBuf::from("my-shows.txt")));
    assert_eq!(cli.output_dir, Some(PathBuf::from("/srv/feeds")));
}

#[test]
fn show_flag_is_repeatable() {
    let cli = Cli::try_parse_from([
        "nrkpod-cli",
        "--show",
        "monsens_univers",
        "--show",
        "hele_historien",
    ])
    .expect("expected valid cli args");

    assert_eq!(cli.show_ids, vec!["monsens_univers", "hele_historien"]);
}

#[test]
fn unknown_flag_is_rejected() {
    assert!(Cli::try_parse_from(["nrkpod-cli", "--parallel"]).is_err());
}

#[test]
fn flags_override_config_paths() {
    let cli = Cli::try_parse_from(["nrkpod-cli", "--shows", "a.txt", "--output-dir", "out"])
        .expect("expected valid cli args");
    let mut config = base_config();
    cli.apply_to(&mut config);

    assert_eq!(config.shows_path, PathBuf::from("a.txt"));
    assert_eq!(config.output_dir, PathBuf::from("out"));
    assert_eq!(config.inter_show_delay_ms, 2000);
}

#[test]
fn absent_flags_leave_config_alone() {
    let cli = Cli::try_parse_from(["nrkpod-cli"]).expect("expected valid cli args");
    let mut config = base_config();
    cli.apply_to(&mut config);
    assert_eq!(config, base_config());
}

#[test]
fn show_flags_replace_show_list_file() {
    let cli = Cli::try_parse_from(["nrkpod-cli", "--show", "debatten"])
        .expect("expected valid cli args");
    assert_eq!(cli.show_list(&base_config()), vec!["debatten"]);
}

#[test]
fn missing_show_list_file_uses_default_shows() {
    let cli = Cli::try_parse_from(["nrkpod-cli"]).expect("expected valid cli args");
    let mut config = base_config();
    config.shows_path = std::env::temp_dir().join("nrkpod-cli-no-such-shows.txt");

    assert_eq!(cli.show_list(&config), nrkpod_core::default_show_list());
}

#[test]
fn invalid_endpoint_falls_back_to_stock_endpoints() {
    let mut config = base_config();
    config.catalog_base_url = "psapi.nrk.no/catalog".to_string();

    let client = build_client(&mut config);
    assert!(client.is_ok(), "expected a client, got an error");
    assert_eq!(config.catalog_base_url, DEFAULT_CATALOG_BASE_URL);
    assert_eq!(config.manifest_base_url, DEFAULT_MANIFEST_BASE_URL);
}

#[test]
fn valid_endpoints_are_kept() {
    let mut config = base_config();
    config.catalog_base_url = "http://localhost:9000/catalog".to_string();

    assert!(build_client(&mut config).is_ok());
    assert_eq!(config.catalog_base_url, "http://localhost:9000/catalog");
}

#[test]
fn unusable_log_level_falls_back_to_default() {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    let (_, error) = build_env_filter("nrkpod=verbose");
    assert!(error.is_some());

    let (_, error) = build_env_filter("debug");
    assert!(error.is_none());
}
