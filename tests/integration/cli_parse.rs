use clap::{CommandFactory, Parser};
use pathclass::tooling::cli::{Cli, Commands};
use pathclass::types::{CollisionPolicy, EmitStrategy};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["pathclass", "config"],
        vec!["pathclass", "generate"],
        vec!["pathclass", "generate", "--root", "./assets", "--base-url", "https://x"],
        vec!["pathclass", "generate", "--root", ".", "-o", "Assets.cs", "--format", "json"],
        vec!["pathclass", "generate", "--strategy", "flat", "--collisions", "error"],
        vec!["pathclass", "generate", "--namespace", ""],
        vec!["pathclass", "sanitize", "class", "My File.txt"],
        vec!["pathclass", "--verbose", "--log-output", "file", "config"],
        vec!["pathclass", "--config", "custom.toml", "generate"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_generate_flags_into_typed_values() {
    let cli = Cli::try_parse_from([
        "pathclass",
        "generate",
        "--strategy",
        "flat",
        "--collisions",
        "allow",
        "--base-url",
        "https://cdn.x",
    ])
    .unwrap();

    match cli.command {
        Commands::Generate {
            strategy,
            collisions,
            base_url,
            format,
            ..
        } => {
            assert_eq!(strategy, Some(EmitStrategy::Flat));
            assert_eq!(collisions, Some(CollisionPolicy::Allow));
            assert_eq!(base_url.as_deref(), Some("https://cdn.x"));
            assert_eq!(format, "text");
        }
        _ => panic!("expected generate command"),
    }
}

#[test]
fn parse_rejects_unknown_strategy_and_policy() {
    assert!(Cli::try_parse_from(["pathclass", "generate", "--strategy", "tree"]).is_err());
    assert!(Cli::try_parse_from(["pathclass", "generate", "--collisions", "rename"]).is_err());
}

#[test]
fn parse_rejects_sanitize_without_names() {
    assert!(Cli::try_parse_from(["pathclass", "sanitize"]).is_err());
}

#[test]
fn parse_requires_a_subcommand() {
    assert!(Cli::try_parse_from(["pathclass"]).is_err());
}

#[test]
fn help_lists_every_subcommand() {
    let mut command = Cli::command();
    let mut output = Vec::new();
    command.write_long_help(&mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    for token in ["generate", "sanitize", "config", "--log-level"] {
        assert!(output.contains(token), "help should mention {token}");
    }
}
