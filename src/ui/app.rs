use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::config::API_KEY_ENV_VARS;
use crate::data_url::DataUrl;
use crate::gemini::TransformError;
use crate::studio::{GenerateTicket, Settlement, Studio, TicketId};
use crate::style::PRESETS;

/// Which input receives typed characters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    /// File path field; Enter loads the file.
    Path,
    /// Preset list; arrows move, Enter picks.
    Presets,
    /// Free-text style field.
    Custom,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Path => Focus::Presets,
            Focus::Presets => Focus::Custom,
            Focus::Custom => Focus::Path,
        }
    }
}

/// Transient one-line notice (download location, missing key).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

pub struct App {
    studio: Studio,
    focus: Focus,
    path_input: String,
    preset_cursor: usize,
    notice: Option<Notice>,
    download_dir: PathBuf,
    api_configured: bool,
    model: String,
    animation_tick: u8,
    should_quit: bool,
}

impl App {
    pub fn new(download_dir: PathBuf, api_configured: bool, model: impl Into<String>) -> Self {
        let notice = (!api_configured).then(|| Notice {
            text: format!(
                "No Gemini API key: set {} and restart",
                API_KEY_ENV_VARS.join(" or ")
            ),
            is_error: true,
        });
        Self {
            studio: Studio::new(),
            focus: Focus::Path,
            path_input: String::new(),
            preset_cursor: 0,
            notice,
            download_dir,
            api_configured,
            model: model.into(),
            animation_tick: 0,
            should_quit: false,
        }
    }

    pub fn studio(&self) -> &Studio {
        &self.studio
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn path_input(&self) -> &str {
        &self.path_input
    }

    pub fn preset_cursor(&self) -> usize {
        self.preset_cursor
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn api_configured(&self) -> bool {
        self.api_configured
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn on_tick(&mut self) {
        if self.studio.state().is_pending() {
            self.animation_tick = self.animation_tick.wrapping_add(1);
        }
    }

    /// Typed or pasted text for the focused field.
    pub fn insert_text(&mut self, text: &str) {
        match self.focus {
            Focus::Path => self.path_input.push_str(text),
            Focus::Custom => {
                let mut custom = self.studio.state().style.custom().to_string();
                custom.push_str(text);
                self.studio.set_custom_style(custom);
            }
            Focus::Presets => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            Focus::Path => {
                self.path_input.pop();
            }
            Focus::Custom => {
                let mut custom = self.studio.state().style.custom().to_string();
                if custom.pop().is_some() {
                    self.studio.set_custom_style(custom);
                }
            }
            Focus::Presets => {}
        }
    }

    pub fn move_preset_cursor(&mut self, delta: isize) {
        let len = PRESETS.len() as isize;
        let next = (self.preset_cursor as isize + delta).rem_euclid(len);
        self.preset_cursor = next as usize;
    }

    /// Pick a preset by index; also moves the cursor there.
    pub fn choose_preset(&mut self, index: usize) {
        if index < PRESETS.len() {
            self.preset_cursor = index;
            self.studio.select_preset(index);
        }
    }

    pub fn choose_preset_at_cursor(&mut self) {
        self.choose_preset(self.preset_cursor);
    }

    /// Load the file named in the path field.
    pub fn submit_path(&mut self) {
        let raw = self.path_input.trim().trim_matches(|c| c == '\'' || c == '"');
        if raw.is_empty() {
            return;
        }
        let path = expand_home(raw);
        if self.studio.select_file(&path).is_ok() {
            self.notice = None;
            self.path_input.clear();
        }
    }

    pub fn clear_source(&mut self) {
        self.studio.clear();
        self.notice = None;
    }

    pub fn dismiss(&mut self) {
        if self.notice.take().is_none() {
            self.studio.dismiss_error();
        }
    }

    /// Start a transformation if one may start now.
    pub fn begin_generate(&mut self) -> Option<GenerateTicket> {
        let ticket = self.studio.begin_generate()?;
        self.notice = None;
        self.animation_tick = 0;
        Some(ticket)
    }

    pub fn on_transform_settled(
        &mut self,
        ticket: TicketId,
        outcome: Result<DataUrl, TransformError>,
    ) -> Settlement {
        self.studio.settle(ticket, outcome)
    }

    /// Save the result into the download directory.
    pub fn download(&mut self, now: SystemTime) {
        if self.studio.state().result.is_none() {
            return;
        }
        self.notice = Some(match self.studio.download(&self.download_dir, now) {
            Ok(path) => Notice {
                text: format!("Saved {}", path.display()),
                is_error: false,
            },
            Err(err) => Notice {
                text: err.to_string(),
                is_error: true,
            },
        });
    }
}

/// Expand a leading `~/` the way a shell would.
fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    Path::new(raw).to_path_buf()
}
