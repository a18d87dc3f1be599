use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["lendfinder-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_loan_with_default_term() {
    let cli = Cli::try_parse_from([
        "lendfinder-cli",
        "loan",
        "--principal",
        "25000",
        "--rate",
        "7.5",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Loan {
            principal,
            rate,
            term_months,
            full_schedule,
        }) => {
            assert!((principal - 25_000.0).abs() < f64::EPSILON);
            assert!((rate - 7.5).abs() < f64::EPSILON);
            assert_eq!(term_months, 60);
            assert!(!full_schedule);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn loan_requires_principal() {
    let result = Cli::try_parse_from(["lendfinder-cli", "loan", "--rate", "7.5"]);
    assert!(result.is_err());
}

#[test]
fn parses_mortgage_defaults() {
    let cli = Cli::try_parse_from([
        "lendfinder-cli",
        "mortgage",
        "--home-price",
        "400000",
        "--rate",
        "6.5",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Mortgage {
            down_payment,
            down_percent,
            term_years,
            hoa,
            ..
        }) => {
            assert!(down_payment.is_none());
            assert!((down_percent - 20.0).abs() < f64::EPSILON);
            assert_eq!(term_years, 30);
            assert!(hoa.abs() < f64::EPSILON);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parses_search_by_location() {
    let cli = Cli::try_parse_from([
        "lendfinder-cli",
        "search",
        "--location",
        "Philadelphia, PA",
        "--service",
        "title-loans",
        "--json",
    ])
    .expect("expected valid cli args");

    match cli.command {
        Some(Commands::Search {
            location,
            zip,
            service,
            distance,
            json,
        }) => {
            assert_eq!(location.as_deref(), Some("Philadelphia, PA"));
            assert!(zip.is_none());
            assert_eq!(service, "title-loans");
            assert!(distance.is_none());
            assert!(json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn search_by_zip_defaults_service() {
    let cli = Cli::try_parse_from(["lendfinder-cli", "search", "--zip", "19104"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Search { ref service, ref zip, .. })
            if service == "payday-loans" && zip.as_deref() == Some("19104")
    ));
}

#[test]
fn search_rejects_location_and_zip_together() {
    let result = Cli::try_parse_from([
        "lendfinder-cli",
        "search",
        "--location",
        "Austin, TX",
        "--zip",
        "78701",
    ]);
    assert!(result.is_err());
}

#[test]
fn search_requires_location_or_zip() {
    let result = Cli::try_parse_from(["lendfinder-cli", "search"]);
    assert!(result.is_err());
}

#[test]
fn parses_states_with_optional_filter() {
    let cli = Cli::try_parse_from(["lendfinder-cli", "states"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::States { state: None })));

    let cli =
        Cli::try_parse_from(["lendfinder-cli", "states", "TX"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::States { state: Some(ref s) }) if s == "TX"
    ));
}
