use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_compare_args_parse() {
    let cli = Cli::try_parse_from([
        "sg",
        "compare",
        "views",
        "deployed",
        "--on-missing",
        "report",
        "-o",
        "json",
    ])
    .unwrap();

    match cli.command {
        Commands::Compare(args) => {
            assert_eq!(args.canonical.as_deref(), Some("views"));
            assert_eq!(args.candidate.as_deref(), Some("deployed"));
            assert_eq!(args.on_missing, Some(OnMissing::Report));
            assert_eq!(args.output, OutputFormat::Json);
        }
        other => panic!("Expected compare, got {:?}", other),
    }
}

#[test]
fn test_compare_paths_optional() {
    let cli = Cli::try_parse_from(["sg", "compare"]).unwrap();
    match cli.command {
        Commands::Compare(args) => {
            assert!(args.canonical.is_none());
            assert!(args.candidate.is_none());
            assert!(args.on_missing.is_none());
            assert_eq!(args.output, OutputFormat::Text);
        }
        other => panic!("Expected compare, got {:?}", other),
    }
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["sg", "tables", "q.sql", "--verbose", "-d", "duckdb"]).unwrap();
    assert!(cli.global.verbose);
    assert_eq!(cli.global.dialect.as_deref(), Some("duckdb"));
}

#[test]
fn test_tables_flags() {
    let cli = Cli::try_parse_from(["sg", "tables", "tree.json", "--tree-json", "-u"]).unwrap();
    match cli.command {
        Commands::Tables(args) => {
            assert_eq!(args.file, "tree.json");
            assert!(args.tree_json);
            assert!(args.unique);
        }
        other => panic!("Expected tables, got {:?}", other),
    }
}

#[test]
fn test_invalid_on_missing_rejected() {
    assert!(Cli::try_parse_from(["sg", "compare", "a", "b", "--on-missing", "skip"]).is_err());
}

#[test]
fn test_on_missing_into_policy() {
    assert_eq!(MissingPolicy::from(OnMissing::Fail), MissingPolicy::Fail);
    assert_eq!(MissingPolicy::from(OnMissing::Report), MissingPolicy::Report);
}
