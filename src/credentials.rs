use std::fmt;
use std::io::{self, BufRead, Write};

pub const USERNAME_ENV: &str = "HN_USERNAME";
pub const PASSWORD_ENV: &str = "HN_PASSWORD";

pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Source of last resort for credentials.
pub trait Prompt {
    fn username(&mut self) -> io::Result<String>;
    fn password(&mut self) -> io::Result<String>;
}

/// Reads the username from stdin and the password without echo.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn username(&mut self) -> io::Result<String> {
        print!("Enter your HN username: ");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }

    fn password(&mut self) -> io::Result<String> {
        rpassword::prompt_password("Enter your HN password: ")
    }
}

/// Picks each credential from the flag, then the environment, then the prompt.
/// Empty values fall through to the next source. Nothing is validated here,
/// a bad pair only shows up when logging in.
pub fn resolve<E, P>(
    username: Option<String>,
    password: Option<String>,
    env: E,
    prompt: &mut P,
) -> io::Result<Credentials>
where
    E: Fn(&str) -> Option<String>,
    P: Prompt + ?Sized,
{
    let pick = |flag: Option<String>, var: &str| {
        flag.filter(|s| !s.is_empty())
            .or_else(|| env(var).filter(|s| !s.is_empty()))
    };

    let username = match pick(username, USERNAME_ENV) {
        Some(u) => u,
        None => prompt.username()?,
    };
    let password = match pick(password, PASSWORD_ENV) {
        Some(p) => p,
        None => prompt.password()?,
    };

    Ok(Credentials { username, password })
}

/// Environment lookup backed by the process environment.
pub fn process_env(var: &str) -> Option<String> {
    std::env::var(var).ok()
}
