use outlet_core::Outlet;

use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["outlet-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn events_defaults_to_all_outlets_without_brands() {
    let cli = Cli::try_parse_from(["outlet-cli", "events"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Events {
            outlet: OutletFilter::All,
            ref brands,
            json: false,
        }) if brands.is_empty()
    ));
}

#[test]
fn events_accepts_korean_outlet_and_repeated_brands() {
    let cli = Cli::try_parse_from([
        "outlet-cli",
        "events",
        "--outlet",
        "김포",
        "--brand",
        "나이키",
        "--brand",
        "K2",
        "--json",
    ])
    .unwrap();
    match cli.command {
        Some(Commands::Events {
            outlet,
            brands,
            json,
        }) => {
            assert_eq!(outlet, OutletFilter::Only(Outlet::Gimpo));
            assert_eq!(brands, vec!["나이키", "K2"]);
            assert!(json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn brands_accepts_english_slug() {
    let cli = Cli::try_parse_from(["outlet-cli", "brands", "--outlet", "spaceone"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Brands {
            outlet: OutletFilter::Only(Outlet::SpaceOne)
        })
    ));
}

#[test]
fn unknown_outlet_is_rejected() {
    assert!(Cli::try_parse_from(["outlet-cli", "brands", "--outlet", "busan"]).is_err());
}

#[test]
fn highlights_parses_today_override() {
    let cli = Cli::try_parse_from(["outlet-cli", "highlights", "--today", "2026-12-24"]).unwrap();
    match cli.command {
        Some(Commands::Highlights { today, json }) => {
            assert_eq!(today, NaiveDate::from_ymd_opt(2026, 12, 24));
            assert!(!json);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn highlights_rejects_bad_date() {
    assert!(Cli::try_parse_from(["outlet-cli", "highlights", "--today", "12/24"]).is_err());
}

#[test]
fn resolve_takes_positional_id_and_lenient_flag() {
    let cli = Cli::try_parse_from(["outlet-cli", "resolve", "abc-123_02", "--lenient"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Resolve { ref event_id, lenient: true }) if event_id == "abc-123_02"
    ));
}

#[test]
fn links_parses() {
    let cli = Cli::try_parse_from(["outlet-cli", "links"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Links)));
}
