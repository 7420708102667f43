//! Interactive session loop.
//!
//! `Shell` owns the core `App`, the `Session`, and the persisted config. It
//! shows the logged-out menu until a login succeeds, then the preference and
//! results menu until the user logs out or quits.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use homefit_core::models::preferences::{
    AREA_MIN, FLOOR_DEFAULT, FLOOR_MAX, FLOOR_MIN, MAX_AREA_DEFAULT, MIN_AREA_DEFAULT, ROOMS_MAX,
    ROOMS_MIN,
};
use homefit_core::{App, Config, DatasetKind, HomefitError, PreferenceInput, Session};
use tracing::{debug, warn};

use crate::ui::input::{prompt_login, prompt_number, prompt_password, Input};
use crate::ui::render::{
    render_logged_in_menu, render_logged_out_menu, render_outcome, render_preferences,
};

/// Whether the loop should keep going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a> {
    app: App,
    session: Session,
    /// Config as loaded from disk; only `last_login` is written back.
    config: Config,
    config_path: PathBuf,
    input: &'a mut dyn Input,
    out: &'a mut dyn Write,
}

impl<'a> Shell<'a> {
    pub fn new(
        app: App,
        config: Config,
        config_path: PathBuf,
        input: &'a mut dyn Input,
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            app,
            session: Session::new(),
            config,
            config_path,
            input,
            out,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            let flow = if self.session.is_logged_in() {
                self.logged_in_step()?
            } else {
                self.logged_out_step()?
            };
            if flow == Flow::Quit {
                writeln!(self.out, "Goodbye.")?;
                return Ok(());
            }
        }
    }

    // ===== Logged out =====

    fn logged_out_step(&mut self) -> Result<Flow> {
        render_logged_out_menu(self.out)?;
        let Some(choice) = self.input.read_line("> ", self.out)? else {
            return Ok(Flow::Quit);
        };
        match choice.trim() {
            "1" => self.login(),
            "2" => self.register(),
            "q" | "Q" => Ok(Flow::Quit),
            other => {
                writeln!(self.out, "Unknown option: {}", other)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn login(&mut self) -> Result<Flow> {
        let last = self.config.last_login.clone();
        let Some(login) = prompt_login(self.input, self.out, "Login", last.as_deref())? else {
            return Ok(Flow::Quit);
        };
        let Some(password) = prompt_password(self.input, self.out, "Password")? else {
            return Ok(Flow::Quit);
        };

        match self.app.login(&mut self.session, &login, &password) {
            Ok(_) => {
                writeln!(self.out, "Welcome, {}!", login)?;
                self.remember_login(&login);
            }
            Err(HomefitError::InvalidCredentials) => {
                writeln!(self.out, "Invalid login or password.")?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(Flow::Continue)
    }

    fn register(&mut self) -> Result<Flow> {
        let Some(login) = prompt_login(self.input, self.out, "New login", None)? else {
            return Ok(Flow::Quit);
        };
        let Some(password) = prompt_password(self.input, self.out, "New password")? else {
            return Ok(Flow::Quit);
        };

        match self.app.register(&login, &password) {
            Ok(_) => writeln!(self.out, "Registered. You can log in now.")?,
            Err(HomefitError::DuplicateLogin(_)) => {
                writeln!(self.out, "That login already exists.")?
            }
            Err(HomefitError::InvalidInput(msg)) => writeln!(self.out, "Invalid input: {}", msg)?,
            Err(e) => return Err(e.into()),
        }
        Ok(Flow::Continue)
    }

    fn remember_login(&mut self, login: &str) {
        if self.config.last_login.as_deref() == Some(login) {
            return;
        }
        self.config.last_login = Some(login.to_string());
        if let Err(e) = self.config.save_to(&self.config_path) {
            warn!(error = %e, "Failed to save last login to config");
        }
    }

    // ===== Logged in =====

    fn logged_in_step(&mut self) -> Result<Flow> {
        render_logged_in_menu(self.out, &self.session)?;
        let Some(choice) = self.input.read_line("> ", self.out)? else {
            return Ok(Flow::Quit);
        };
        match choice.trim() {
            "1" => self.edit_preferences(),
            "2" => self.show(&[DatasetKind::Apartments]),
            "3" => self.show(&[DatasetKind::Commercial]),
            "4" => self.show(&[DatasetKind::Houses]),
            "5" => self.show(&DatasetKind::ALL),
            "6" => {
                self.app.logout(&mut self.session);
                writeln!(self.out, "Logged out.")?;
                Ok(Flow::Continue)
            }
            "q" | "Q" => Ok(Flow::Quit),
            other => {
                writeln!(self.out, "Unknown option: {}", other)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn edit_preferences(&mut self) -> Result<Flow> {
        let current = match self.app.preferences(&self.session) {
            Ok(prefs) => {
                render_preferences(self.out, &prefs)?;
                Some(prefs)
            }
            Err(HomefitError::NoPreferencesYet) => None,
            Err(e) => return Err(e.into()),
        };
        let defaults = current
            .as_ref()
            .map(|p| PreferenceInput {
                income: p.income,
                preferred_floor: p.preferred_floor,
                rooms: p.rooms,
                min_area: p.min_area,
                max_area: p.max_area,
                // The form has no district field; keep whatever was stored.
                district: Some(p.district.clone()),
            })
            .unwrap_or_else(|| PreferenceInput {
                preferred_floor: FLOOR_DEFAULT,
                min_area: MIN_AREA_DEFAULT,
                max_area: MAX_AREA_DEFAULT,
                ..Default::default()
            });

        let input = &mut *self.input;
        let out = &mut *self.out;
        let Some(income) =
            prompt_number(input, out, "Monthly income (₸)", Some(0.0), None, defaults.income)?
        else {
            return Ok(Flow::Quit);
        };
        let Some(preferred_floor) = prompt_number(
            input,
            out,
            "Preferred floor",
            Some(FLOOR_MIN),
            Some(FLOOR_MAX),
            defaults.preferred_floor,
        )?
        else {
            return Ok(Flow::Quit);
        };
        let Some(rooms) = prompt_number(
            input,
            out,
            "Rooms",
            Some(ROOMS_MIN),
            Some(ROOMS_MAX),
            defaults.rooms,
        )?
        else {
            return Ok(Flow::Quit);
        };
        let Some(min_area) =
            prompt_number(input, out, "Min area (m²)", Some(AREA_MIN), None, defaults.min_area)?
        else {
            return Ok(Flow::Quit);
        };
        let Some(max_area) =
            prompt_number(input, out, "Max area (m²)", Some(AREA_MIN), None, defaults.max_area)?
        else {
            return Ok(Flow::Quit);
        };

        let submitted = PreferenceInput {
            income,
            preferred_floor,
            rooms,
            min_area,
            max_area,
            district: defaults.district,
        };
        match self.app.save_preferences(&self.session, submitted) {
            Ok(_) => writeln!(self.out, "Preferences saved.")?,
            Err(HomefitError::InvalidInput(msg)) => {
                writeln!(self.out, "Invalid input: {}", msg)?;
                return Ok(Flow::Continue);
            }
            Err(e) => return Err(e.into()),
        }

        self.show(&DatasetKind::ALL)
    }

    fn show(&mut self, kinds: &[DatasetKind]) -> Result<Flow> {
        for kind in kinds {
            match self.app.matches(&self.session, *kind) {
                Ok(outcome) => {
                    debug!(dataset = %kind, matched = outcome.len(), "Showing results");
                    render_outcome(self.out, *kind, &outcome)?;
                }
                Err(HomefitError::NoPreferencesYet) => {
                    writeln!(self.out, "Save your preferences first.")?;
                    break;
                }
                Err(HomefitError::DatasetNotFound(path)) => {
                    warn!(dataset = %kind, path = %path.display(), "Dataset file missing");
                    writeln!(self.out)?;
                    writeln!(self.out, "--- {} ---", kind)?;
                    writeln!(self.out, "Dataset not available: {}", path.display())?;
                }
                Err(HomefitError::Csv(e)) => {
                    warn!(dataset = %kind, error = %e, "Dataset file unreadable");
                    writeln!(self.out)?;
                    writeln!(self.out, "--- {} ---", kind)?;
                    writeln!(self.out, "Dataset could not be read: {}", e)?;
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(Flow::Continue)
    }
}
