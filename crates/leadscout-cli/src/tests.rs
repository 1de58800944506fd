use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["leadscout-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_search_with_all_flags() {
    let cli = Cli::try_parse_from([
        "leadscout-cli",
        "search",
        "--query",
        "coffee",
        "--location",
        "Austin",
        "--max-results",
        "3",
        "--api-key",
        "k",
        "--json",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Search {
            query,
            location,
            max_results,
            api_key,
            json,
        }) => {
            assert_eq!(query, "coffee");
            assert_eq!(location.as_deref(), Some("Austin"));
            assert_eq!(max_results.as_deref(), Some("3"));
            assert_eq!(api_key.as_deref(), Some("k"));
            assert!(json);
        }
        other => panic!("expected search command, got {other:?}"),
    }
}

#[test]
fn search_requires_query() {
    let result = Cli::try_parse_from(["leadscout-cli", "search", "--api-key", "k"]);
    assert!(result.is_err());
}

#[test]
fn format_record_line_uses_dash_for_missing_phone() {
    let record = leadscout_places::NormalizedRecord {
        name: "Bean There".to_owned(),
        address: "1 Main St".to_owned(),
        phone: None,
        map_url: None,
        website: None,
        coordinates: None,
        status: None,
        categories: None,
    };
    let line = search::format_record_line(&record);
    assert!(line.contains("Bean There"));
    assert!(line.contains('\u{2014}'));
    assert!(line.ends_with("1 Main St"));
}
