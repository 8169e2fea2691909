use std::io::Write;

use hunter_core::{Credentials, SignupForm};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::GlobalFlags;
use crate::commands::{analyze, auth, history};
use crate::context::AppContext;
use crate::output::{notice, output};
use crate::ui;

const SHELL_LOGIN_HINT: &str = "use `login <email>` with HUNTER_PASSWORD set";

const HELP: &str = "\
commands:
  login <email> [password]      password defaults to HUNTER_PASSWORD;
                                typed inline it is echoed and kept in scrollback
  register <name> <email> <password> <confirm-password>
  logout
  status
  analyze <text...>
  history [id]
  help
  quit";

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    /// `None` reads the password from `HUNTER_PASSWORD`.
    Login {
        email: String,
        password: Option<String>,
    },
    Register(Box<SignupForm>),
    Logout,
    Status,
    Analyze(String),
    History(Option<String>),
    Help,
    Quit,
}

/// Parse one line. Blank lines and `#` comments yield `None`.
fn parse_line(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim()));
    let args = rest.split_whitespace().collect::<Vec<_>>();

    let command = match (word.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("login", [email]) => ShellCommand::Login {
            email: (*email).to_string(),
            password: None,
        },
        ("login", [email, password]) => ShellCommand::Login {
            email: (*email).to_string(),
            password: Some((*password).to_string()),
        },
        ("login", _) => return Err("usage: login <email> [password]".into()),
        ("register", [name, email, password, confirm]) => {
            ShellCommand::Register(Box::new(SignupForm {
                name: (*name).to_string(),
                email: (*email).to_string(),
                password: (*password).to_string(),
                confirm_password: (*confirm).to_string(),
            }))
        }
        ("register", _) => {
            return Err("usage: register <name> <email> <password> <confirm-password>".into());
        }
        ("logout", []) => ShellCommand::Logout,
        ("status", []) => ShellCommand::Status,
        ("analyze", _) if !rest.is_empty() => ShellCommand::Analyze(rest.to_string()),
        ("analyze", _) => return Err("usage: analyze <text...>".into()),
        ("history", []) => ShellCommand::History(None),
        ("history", [id]) => ShellCommand::History(Some((*id).to_string())),
        ("help" | "?", []) => ShellCommand::Help,
        ("quit" | "exit", []) => ShellCommand::Quit,
        ("logout" | "status" | "history" | "help" | "?" | "quit" | "exit", _) => {
            return Err(format!("`{word}` takes no arguments here; try `help`"));
        }
        _ => return Err(format!("unknown command `{word}`; try `help`")),
    };
    Ok(Some(command))
}

/// Handle `claimhunt shell`: one session kept alive across many commands.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let initial = ctx.store.init().await;
    if let Some(user) = initial.user() {
        notice(&format!("signed in as {}", user.email), flags.quiet);
    }

    let interactive = ui::prefs().interactive;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        if interactive {
            prompt(ctx);
        }
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(usage) => {
                eprintln!("{usage}");
                continue;
            }
        };
        if command == ShellCommand::Quit {
            break;
        }
        if let Err(error) = execute(command, ctx, flags).await {
            eprintln!("error: {error:#}");
        }
    }

    tracing::debug!("shell closed");
    Ok(())
}

async fn execute(command: ShellCommand, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        ShellCommand::Login { email, password } => {
            let password = login_password(password, std::env::var("HUNTER_PASSWORD").ok())?;
            auth::login(&Credentials::new(email, password), ctx, flags).await
        }
        ShellCommand::Register(form) => auth::register(*form, ctx, flags).await,
        ShellCommand::Logout => auth::logout(ctx, flags).await,
        ShellCommand::Status => auth::status(ctx, flags).await,
        ShellCommand::Analyze(text) => {
            let view = analyze::run(ctx, &text, SHELL_LOGIN_HINT).await?;
            output(&view, flags.format)
        }
        ShellCommand::History(None) => history::list(ctx, flags, None, SHELL_LOGIN_HINT).await,
        ShellCommand::History(Some(id)) => history::get(ctx, flags, &id, SHELL_LOGIN_HINT).await,
        ShellCommand::Help => {
            println!("{HELP}");
            Ok(())
        }
        ShellCommand::Quit => Ok(()),
    }
}

/// The inline password when given, else the environment's.
fn login_password(inline: Option<String>, env: Option<String>) -> anyhow::Result<String> {
    inline
        .or(env.filter(|password| !password.is_empty()))
        .ok_or_else(|| {
            anyhow::anyhow!("no password given; set HUNTER_PASSWORD or use `login <email> <password>`")
        })
}

fn prompt(ctx: &AppContext) {
    match ctx.store.current() {
        Some(user) => eprint!("{}> ", user.email),
        None => eprint!("claimhunt> "),
    }
    let _ = std::io::stderr().flush();
}
