use std::cell::Cell;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lungai_predict::cli::{BiomarkerArgs, Cli, Commands, LoginArgs, PredictionArgs, UploadArgs};
use lungai_predict::config::Settings;
use lungai_predict::ctx::{Ctx, Submission};
use lungai_predict::error::ClientError;
use lungai_predict::intake::biomarker::BiomarkerDraft;
use lungai_predict::io::summary;
use lungai_predict::pipeline::Pipeline;
use lungai_predict::schema::v1::LoginRequest;
use lungai_predict::session::{FileTokenStore, Session};
use lungai_predict::terminal::{Outcome, Terminal};
use lungai_predict::transport::{self, ApiClient};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli);
    tracing::debug!(
        api = %settings.api.base_url,
        token_file = %settings.token_file.display(),
        "settings resolved"
    );

    let outcome = match cli.command {
        Commands::Login(args) => handle_login(&settings, args),
        Commands::Logout => open_session(&settings).end(),
        Commands::Whoami => handle_whoami(&settings),
        Commands::Biomarkers(args) => handle_biomarkers(&settings, args),
        Commands::Upload(args) => handle_upload(&settings, args),
        Commands::Prediction(args) => handle_prediction(&settings, args),
        Commands::Terminal => run_terminal(),
    };

    outcome.map_err(|err| {
        if matches!(
            err.downcast_ref::<ClientError>(),
            Some(ClientError::AuthInvalid(_))
        ) {
            err.context("session missing or expired; run `lungai-predict login`")
        } else {
            err
        }
    })
}

fn open_session(settings: &Settings) -> Session {
    Session::new(Box::new(FileTokenStore::new(settings.token_file.clone())))
}

fn handle_login(settings: &Settings, args: LoginArgs) -> Result<()> {
    let client = ApiClient::new(&settings.api, None)?;
    let response = client.login(&LoginRequest {
        email: args.email,
        password: args.password,
    })?;
    let mut session = open_session(settings);
    session.begin(&response.token)?;
    println!("Welcome, {}", response.user.name);
    Ok(())
}

fn handle_whoami(settings: &Settings) -> Result<()> {
    let mut session = open_session(settings);
    match session.current() {
        Ok(token) => print!("{}", summary::format_user(&token.claims.user_info())),
        Err(_) => println!("not logged in"),
    }
    Ok(())
}

fn handle_biomarkers(settings: &Settings, args: BiomarkerArgs) -> Result<()> {
    let mut draft = match &args.input {
        Some(path) => BiomarkerDraft::load(path)?,
        None => BiomarkerDraft::new(),
    };
    let mut overrides = BiomarkerDraft::new();
    for (field, raw) in args.values() {
        overrides.set_field(field.wire_name(), raw)?;
    }
    draft.merge(&overrides);
    let mut ctx = Ctx::new(
        settings.api.clone(),
        open_session(settings),
        Submission::Biomarkers(draft),
        args.out,
        env!("CARGO_PKG_VERSION"),
    );
    Pipeline::submission().run(&mut ctx)?;
    print_result(&ctx)
}

fn handle_upload(settings: &Settings, args: UploadArgs) -> Result<()> {
    let mut ctx = Ctx::new(
        settings.api.clone(),
        open_session(settings),
        Submission::Upload {
            files: args.file,
            kind: args.kind.into(),
        },
        args.out,
        env!("CARGO_PKG_VERSION"),
    );
    Pipeline::submission().run(&mut ctx)?;
    print_result(&ctx)
}

fn handle_prediction(settings: &Settings, args: PredictionArgs) -> Result<()> {
    let token = open_session(settings).current()?;
    let client = ApiClient::new(&settings.api, Some(token))?;
    let record = transport::get_prediction(&client, &args.id)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

fn print_result(ctx: &Ctx) -> Result<()> {
    if let Some(result) = &ctx.result {
        print!("{}", summary::format_result(result));
    }
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
    Ok(())
}

fn run_terminal() -> Result<()> {
    let open = Cell::new(true);
    let mut terminal = Terminal::new(|| open.set(false));
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    write_lines(&mut stdout, terminal.lines())?;
    prompt(&mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line.context("failed to read terminal input")?;
        match terminal.submit(&line) {
            Outcome::Appended(start) => write_lines(&mut stdout, &terminal.lines()[start..])?,
            Outcome::Cleared => write_lines(&mut stdout, terminal.lines())?,
            Outcome::Closed => {}
        }
        if !open.get() {
            break;
        }
        prompt(&mut stdout)?;
    }
    Ok(())
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn prompt(out: &mut impl Write) -> Result<()> {
    write!(out, "$ ")?;
    out.flush()?;
    Ok(())
}
