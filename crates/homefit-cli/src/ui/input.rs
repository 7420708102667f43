//! Reading user input from the terminal.
//!
//! All prompts go through the `Input` trait so the shell can be driven by a
//! script in tests. End of input is reported as `None` and ends the session.

#[cfg(test)]
use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::Result;

/// Maximum length for login input.
const MAX_LOGIN_LENGTH: usize = 50;

/// Maximum length for password input.
/// 128 chars accommodates password managers and passphrases.
const MAX_PASSWORD_LENGTH: usize = 128;

pub trait Input {
    /// Read one line (without the trailing newline), `None` at end of input.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Option<String>>;

    /// Like `read_line`, but without echoing what is typed.
    fn read_password(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Option<String>>;
}

/// Reads from stdin; passwords go through `rpassword` so they are not echoed.
pub struct StdinInput;

impl Input for StdinInput {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Option<String>> {
        write!(out, "{}", prompt)?;
        out.flush()?;
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn read_password(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Option<String>> {
        out.flush()?;
        match rpassword::prompt_password(prompt) {
            Ok(password) => Ok(Some(password)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Replays canned lines; used to drive the shell in tests.
#[cfg(test)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
impl Input for ScriptedInput {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Option<String>> {
        write!(out, "{}", prompt)?;
        let line = self.lines.pop_front();
        if let Some(ref l) = line {
            writeln!(out, "{}", l)?;
        }
        Ok(line)
    }

    fn read_password(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Option<String>> {
        write!(out, "{}", prompt)?;
        let line = self.lines.pop_front();
        writeln!(out)?;
        Ok(line)
    }
}

/// Prompt for a login, offering `default` when the answer is blank.
pub fn prompt_login(
    input: &mut dyn Input,
    out: &mut dyn Write,
    label: &str,
    default: Option<&str>,
) -> Result<Option<String>> {
    let prompt = match default {
        Some(d) => format!("{} [{}]: ", label, d),
        None => format!("{}: ", label),
    };
    loop {
        let Some(line) = input.read_line(&prompt, out)? else {
            return Ok(None);
        };
        let line = line.trim();
        let value = match (line.is_empty(), default) {
            (true, Some(d)) => d.to_string(),
            _ => line.to_string(),
        };
        if value.chars().count() > MAX_LOGIN_LENGTH {
            writeln!(out, "Login is too long (max {} characters).", MAX_LOGIN_LENGTH)?;
            continue;
        }
        return Ok(Some(value));
    }
}

pub fn prompt_password(
    input: &mut dyn Input,
    out: &mut dyn Write,
    label: &str,
) -> Result<Option<String>> {
    loop {
        let Some(password) = input.read_password(&format!("{}: ", label), out)? else {
            return Ok(None);
        };
        if password.chars().count() > MAX_PASSWORD_LENGTH {
            writeln!(out, "Password is too long (max {} characters).", MAX_PASSWORD_LENGTH)?;
            continue;
        }
        return Ok(Some(password));
    }
}

/// Prompt until the answer parses and lies within `[min, max]`.
/// A blank answer takes `default`.
pub fn prompt_number<T>(
    input: &mut dyn Input,
    out: &mut dyn Write,
    label: &str,
    min: Option<T>,
    max: Option<T>,
    default: T,
) -> Result<Option<T>>
where
    T: FromStr + PartialOrd + Copy + Display,
{
    let range = match (min, max) {
        (Some(lo), Some(hi)) => format!(" ({}-{})", lo, hi),
        (Some(lo), None) => format!(" (min {})", lo),
        (None, Some(hi)) => format!(" (max {})", hi),
        (None, None) => String::new(),
    };
    let prompt = format!("{}{} [{}]: ", label, range, default);

    loop {
        let Some(line) = input.read_line(&prompt, out)? else {
            return Ok(None);
        };
        let line = line.trim();
        if line.is_empty() {
            return Ok(Some(default));
        }
        let Ok(value) = line.parse::<T>() else {
            writeln!(out, "Please enter a number.")?;
            continue;
        };
        if min.is_some_and(|lo| value < lo) || max.is_some_and(|hi| value > hi) {
            writeln!(out, "Value must be within{}.", range)?;
            continue;
        }
        return Ok(Some(value));
    }
}
