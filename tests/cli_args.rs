use clap::Parser;
use lungai_predict::cli::{Cli, Commands, KindArg};
use lungai_predict::intake::biomarker::BiomarkerField;
use lungai_predict::transport::DEFAULT_API_URL;

#[test]
fn upload_kind_defaults_to_mri_scan() {
    let cli = Cli::parse_from(["lungai-predict", "upload", "--file", "scan.png"]);
    match cli.command {
        Commands::Upload(args) => {
            assert_eq!(args.kind, KindArg::MriScan);
            assert_eq!(args.file.len(), 1);
        }
        _ => panic!("expected upload command"),
    }
}

#[test]
fn global_options_after_subcommand() {
    let cli = Cli::parse_from([
        "lungai-predict",
        "whoami",
        "--api-url",
        "http://example.test/api",
        "--token-file",
        "tok",
    ]);
    assert_eq!(cli.api_url, "http://example.test/api");
    assert_eq!(cli.token_file.unwrap().to_str(), Some("tok"));
}

#[test]
fn biomarker_flags_map_to_fields() {
    let cli = Cli::parse_from([
        "lungai-predict",
        "biomarkers",
        "--l-kynurenine",
        "2.5",
        "--o-tyr",
        "0.1",
    ]);
    match cli.command {
        Commands::Biomarkers(args) => {
            let values = args.values();
            assert_eq!(
                values,
                vec![(BiomarkerField::LKynurenine, "2.5"), (BiomarkerField::OTyr, "0.1")]
            );
        }
        _ => panic!("expected biomarkers command"),
    }
}

#[test]
fn api_url_has_local_default() {
    let cli = Cli::try_parse_from(["lungai-predict", "logout"]).unwrap();
    if std::env::var_os("LUNGAI_API_URL").is_none() {
        assert_eq!(cli.api_url, DEFAULT_API_URL);
    }
}
