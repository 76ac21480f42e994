use anyhow::{Context, Result, bail};
use markdown_notes_config::Config;
use markdown_notes_engine::{
    NotesSession, RenderOptions, Renderer, Snippet, insert_snippet, io,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::{env, fs, process};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Render,
    Save,
    Show,
    Insert(Snippet),
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    command: Command,
    file: Option<PathBuf>,
    fragment: bool,
    at: Option<usize>,
    settings_dir: Option<PathBuf>,
    escape_text: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Run(Args),
    Help,
    Version,
}

fn main() {
    // Logs go to stderr; stdout carries only the rendered output.
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let argv: Vec<String> = env::args().collect();
    let invocation = match parse_args(&argv) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Run with --help for usage");
            process::exit(2);
        }
    };

    let args = match invocation {
        Invocation::Help => {
            print_help();
            return;
        }
        Invocation::Version => {
            println!("markdown-notes {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Invocation::Run(args) => args,
    };

    let output = Config::load()
        .with_context(|| format!("loading {}", Config::config_path().display()))
        .and_then(|config| {
            match &config {
                Some(config) => {
                    log::info!("Loaded config, notes path {}", config.notes_path.display())
                }
                None => log::info!("No config file at {}", Config::config_path().display()),
            }
            run(&args, config.as_ref())
        });

    match output {
        Ok(output) => print!("{output}"),
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

/// Runs one command and returns what goes to stdout.
fn run(args: &Args, config: Option<&Config>) -> Result<String> {
    let options = RenderOptions {
        escape_text: args.escape_text || config.is_some_and(|c| c.escape_text),
    };
    let renderer = Renderer::new(options);

    let output = match args.command {
        Command::Render => {
            let text = read_input(args.file.as_deref())?;
            rendered(&renderer, &text, args.fragment)
        }
        Command::Save => {
            let session = open_session(args, config, renderer.clone())?;
            let text = read_input(args.file.as_deref())?;
            let saving = || format!("saving notes to {}", session.settings_dir().display());
            if args.fragment {
                session.save(&text).with_context(saving)?;
                rendered(&renderer, &text, true)
            } else {
                session.text_changed(&text).with_context(saving)?
            }
        }
        Command::Show => {
            let session = open_session(args, config, renderer.clone())?;
            if let Err(e) = io::validate_settings_dir(session.settings_dir()) {
                log::warn!("Nothing to show: {e}");
                return Ok(String::new());
            }
            if args.fragment {
                session
                    .saved_text()
                    .map(|text| rendered(&renderer, &text, true))
                    .unwrap_or_default()
            } else {
                session.restore().map(|r| r.page).unwrap_or_default()
            }
        }
        Command::Insert(snippet) => {
            let text = read_input(args.file.as_deref())?;
            let caret = args.at.unwrap_or_else(|| text.chars().count());
            let (text, caret) = insert_snippet(&text, caret, snippet);
            log::debug!("Inserted {:?}, caret now at {caret}", snippet.label());
            text
        }
    };

    Ok(output)
}

/// The page ends in a newline already; a bare fragment gets one added.
fn rendered(renderer: &Renderer, text: &str, fragment: bool) -> String {
    if fragment {
        format!("{}\n", renderer.render(text))
    } else {
        renderer.render_page(text)
    }
}

fn open_session(args: &Args, config: Option<&Config>, renderer: Renderer) -> Result<NotesSession> {
    let settings_dir = match (&args.settings_dir, config) {
        (Some(dir), _) => dir.clone(),
        (None, Some(config)) => config.notes_path.clone(),
        (None, None) => bail!(
            "no settings directory: pass --settings-dir or set notes_path in {}",
            Config::config_path().display()
        ),
    };
    let setting_name = config
        .map(|c| c.setting_name.clone())
        .unwrap_or_else(|| io::DEFAULT_SETTING_NAME.to_string());
    io::validate_setting_name(&setting_name)?;

    log::info!(
        "Using setting {setting_name:?} in {}",
        settings_dir.display()
    );
    Ok(NotesSession::new(settings_dir, setting_name, renderer))
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn parse_args(argv: &[String]) -> Result<Invocation> {
    let mut command = None;
    let mut file = None;
    let mut fragment = false;
    let mut at = None;
    let mut settings_dir = None;
    let mut escape_text = false;

    let mut rest = argv.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Invocation::Help),
            "-V" | "--version" => return Ok(Invocation::Version),
            "-f" | "--fragment" => fragment = true,
            "--escape-text" => escape_text = true,
            "--at" => {
                let value = rest.next().context("--at needs a caret position")?;
                let caret = value
                    .parse()
                    .with_context(|| format!("invalid caret position: {value}"))?;
                at = Some(caret);
            }
            "--settings-dir" => {
                let value = rest.next().context("--settings-dir needs a directory")?;
                settings_dir = Some(PathBuf::from(value));
            }
            _ if arg.starts_with('-') && arg != "-" => bail!("unknown option: {arg}"),
            _ if command.is_none() => {
                command = Some(match arg.as_str() {
                    "render" => Command::Render,
                    "save" => Command::Save,
                    "show" => Command::Show,
                    "insert" => {
                        let label = rest.next().context("insert needs a snippet name")?;
                        let snippet = Snippet::from_label(label).with_context(|| {
                            format!("unknown snippet: {label} (expected one of {})", snippet_labels())
                        })?;
                        Command::Insert(snippet)
                    }
                    other => bail!("unknown command: {other}"),
                });
            }
            _ if file.is_none() => {
                // `-` reads stdin, same as no file
                if arg != "-" {
                    file = Some(PathBuf::from(arg));
                }
            }
            _ => bail!("unexpected argument: {arg}"),
        }
    }

    let command = command.context("no command given")?;
    if command == Command::Show && file.is_some() {
        bail!("show does not take a file");
    }

    Ok(Invocation::Run(Args {
        command,
        file,
        fragment,
        at,
        settings_dir,
        escape_text,
    }))
}

fn snippet_labels() -> String {
    Snippet::ALL
        .iter()
        .map(|s| s.label().to_lowercase())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_help() {
    println!(
        r#"markdown-notes - live markdown preview for a plain-text notes file

USAGE:
    markdown-notes [OPTIONS] <COMMAND> [FILE]

COMMANDS:
    render [FILE]            Render FILE (or stdin) to an HTML page
    save [FILE]              Save FILE (or stdin) as the notes text and print its page
    show                     Print the page for the saved notes (nothing if none)
    insert <SNIPPET> [FILE]  Insert a toolbar snippet and print the new text
                             Snippets: {}

OPTIONS:
    -f, --fragment           Print the HTML fragment without the page shell
        --at <N>             Caret position (in characters) for insert; default end
        --settings-dir <D>   Directory for saved notes (overrides notes_path)
        --escape-text        Escape markup in plain text, not only in code
    -h, --help               Print help information
    -V, --version            Print version information

CONFIG:
    {}
"#,
        snippet_labels(),
        Config::config_path().display()
    );
}
