//! Visual theme: canvas marker and text styles.
//!
//! Loading follows a primary/fallback policy. The primary source (usually
//! a user file) is tried first; if it cannot be read or parsed the named
//! built-in is used instead. Only when both fail is startup aborted.

use crate::error::{AppError, Result};
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_THEME: &str = "classic";

const BUILTIN_THEMES: &[(&str, &str)] = &[
    (
        "classic",
        r#"{
            "name": "classic",
            "marker": "braille",
            "title": { "bold": true },
            "score": { "bold": true },
            "banner": { "bold": true },
            "instruction": {}
        }"#,
    ),
    (
        "blocky",
        r#"{
            "name": "blocky",
            "marker": "half_block",
            "title": { "bold": true, "italic": true },
            "score": { "bold": true },
            "banner": { "bold": true },
            "instruction": { "italic": true }
        }"#,
    ),
];

/// Canvas marker used to rasterise shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    Braille,
    HalfBlock,
    Dot,
    Block,
}

impl MarkerKind {
    pub fn marker(self) -> Marker {
        match self {
            Self::Braille => Marker::Braille,
            Self::HalfBlock => Marker::HalfBlock,
            Self::Dot => Marker::Dot,
            Self::Block => Marker::Block,
        }
    }

    /// Sub-cell resolution as (columns, rows) of dots per terminal cell.
    pub fn resolution(self) -> (u16, u16) {
        match self {
            Self::Braille => (2, 4),
            Self::HalfBlock => (1, 2),
            Self::Dot | Self::Block => (1, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl TextStyle {
    pub fn to_style(self) -> Style {
        let mut style = Style::default();
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }
}

/// Role of a piece of text in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    Title,
    Score,
    Banner,
    Instruction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub marker: MarkerKind,
    #[serde(default)]
    pub title: TextStyle,
    #[serde(default)]
    pub score: TextStyle,
    #[serde(default)]
    pub banner: TextStyle,
    #[serde(default)]
    pub instruction: TextStyle,
}

impl Theme {
    pub fn text_style(&self, role: TextRole) -> TextStyle {
        match role {
            TextRole::Title => self.title,
            TextRole::Score => self.score,
            TextRole::Banner => self.banner,
            TextRole::Instruction => self.instruction,
        }
    }

    /// The theme for this session: the user's file if given, otherwise
    /// the default built-in.
    pub fn resolve(user_path: Option<&Path>) -> Result<Theme> {
        let fallback = ThemeSource::Builtin(DEFAULT_THEME.to_string());
        match user_path {
            Some(path) => load_with_fallback(&ThemeSource::File(path.to_path_buf()), &fallback),
            None => load(&fallback),
        }
    }
}

/// Where a theme comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    File(PathBuf),
    Builtin(String),
}

impl fmt::Display for ThemeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file {}", path.display()),
            Self::Builtin(name) => write!(f, "built-in '{}'", name),
        }
    }
}

pub fn load(source: &ThemeSource) -> Result<Theme> {
    match source {
        ThemeSource::File(path) => {
            let text = fs::read_to_string(path).map_err(|source| AppError::ThemeRead {
                path: path.clone(),
                source,
            })?;
            parse(&path.display().to_string(), &text)
        }
        ThemeSource::Builtin(name) => {
            let (_, text) = BUILTIN_THEMES
                .iter()
                .find(|(n, _)| *n == name.as_str())
                .ok_or_else(|| AppError::UnknownTheme(name.clone()))?;
            parse(name, text)
        }
    }
}

fn parse(name: &str, text: &str) -> Result<Theme> {
    serde_json::from_str(text).map_err(|source| AppError::ThemeParse {
        name: name.to_string(),
        source,
    })
}

/// Try `primary`, then `fallback`. Fails only if both do.
pub fn load_with_fallback(primary: &ThemeSource, fallback: &ThemeSource) -> Result<Theme> {
    let primary_error = match load(primary) {
        Ok(theme) => return Ok(theme),
        Err(e) => e,
    };
    log::warn!("theme {} unusable ({}), trying {}", primary, primary_error, fallback);

    load(fallback).map_err(|fallback_error| AppError::ThemeUnavailable {
        primary: primary.to_string(),
        primary_error: Box::new(primary_error),
        fallback: fallback.to_string(),
        fallback_error: Box::new(fallback_error),
    })
}
