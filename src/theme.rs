//! Category colors
//!
//! A theme is a YAML file giving each token category a color and optional
//! bold/italic flags. Two themes ship inside the binary; files in the user
//! themes directory are picked up by id and win over a builtin of the same
//! id.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::syntax::Category;

pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/default-dark.yaml");
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/default-light.yaml");

/// A theme compiled into the binary
pub struct BuiltinTheme {
    /// Id used by the `theme` config key
    pub id: &'static str,
    pub yaml: &'static str,
}

pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// A file in the user themes directory
    User,
    Builtin,
}

/// One entry of `jinja-highlight themes`
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    pub id: String,
    /// The theme's `name:` field, or its id when the file does not parse
    pub name: String,
    pub source: ThemeSource,
}

/// Parse the theme stored at `path`
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Resolve a theme id. A user file named `{id}.yaml` shadows the builtin.
pub fn load_theme(id: &str) -> Result<Theme, String> {
    let user_path = crate::config_paths::themes_dir()
        .map(|dir| dir.join(format!("{}.yaml", id)))
        .filter(|path| path.is_file());

    match user_path {
        Some(path) => {
            tracing::info!("Using user theme {}", path.display());
            from_file(&path)
        }
        None => {
            tracing::debug!("Using builtin theme '{}'", id);
            Theme::from_builtin(id)
        }
    }
}

/// `(id, path)` of every `.yaml`/`.yml` file in the user themes directory
fn user_theme_files() -> Vec<(String, PathBuf)> {
    let Some(dir) = crate::config_paths::themes_dir() else {
        return Vec::new();
    };
    let Ok(entries) = std::fs::read_dir(&dir) else {
        return Vec::new();
    };
    let mut files: Vec<(String, PathBuf)> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "yaml" || ext == "yml"))
        .filter_map(|path| {
            let id = path.file_stem()?.to_str()?.to_string();
            Some((id, path))
        })
        .collect();
    files.sort();
    files
}

/// Every selectable theme: user themes first, then builtins not shadowed by
/// a user theme of the same id. Unparsable themes are listed under their id.
pub fn list_available_themes() -> Vec<ThemeInfo> {
    let mut themes: Vec<ThemeInfo> = Vec::new();

    for (id, path) in user_theme_files() {
        if themes.iter().any(|t| t.id == id) {
            continue;
        }
        let name = from_file(&path).map(|t| t.name).unwrap_or_else(|_| id.clone());
        themes.push(ThemeInfo {
            id,
            name,
            source: ThemeSource::User,
        });
    }

    for builtin in BUILTIN_THEMES {
        if themes.iter().any(|t| t.id == builtin.id) {
            continue;
        }
        themes.push(ThemeInfo {
            id: builtin.id.to_string(),
            name: Theme::from_yaml(builtin.yaml)
                .map(|t| t.name)
                .unwrap_or_else(|_| builtin.id.to_string()),
            source: ThemeSource::Builtin,
        });
    }

    themes
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        if !s.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(|e| e.to_string())
        };
        match s.len() {
            6 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: 255,
            }),
            8 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// 24-bit ANSI foreground escape sequence
    pub fn ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// How one category is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub color: Color,
    pub bold: bool,
    pub italic: bool,
}

impl CategoryStyle {
    pub const fn plain(color: Color) -> Self {
        Self {
            color,
            bold: false,
            italic: false,
        }
    }

    /// Full ANSI escape sequence that switches to this style
    pub fn ansi_prefix(&self) -> String {
        let mut prefix = self.color.ansi_fg();
        if self.bold {
            prefix.push_str("\x1b[1m");
        }
        if self.italic {
            prefix.push_str("\x1b[3m");
        }
        prefix
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub foreground: Option<String>,
    #[serde(default)]
    pub categories: HashMap<String, CategoryStyleData>,
}

/// Category style (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryStyleData {
    pub color: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

/// Resolved theme: one style per category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub foreground: Color,
    styles: [CategoryStyle; 12],
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme.
    ///
    /// Categories the data leaves out keep their default-dark style.
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let mut styles = fallback_styles();
        for (name, style) in &data.categories {
            let Some(category) = Category::from_name(name) else {
                tracing::warn!("Theme '{}' styles unknown category '{}'", data.name, name);
                continue;
            };
            styles[category as usize] = CategoryStyle {
                color: Color::from_hex(&style.color)?,
                bold: style.bold,
                italic: style.italic,
            };
        }

        Ok(Theme {
            name: data.name,
            foreground: data
                .foreground
                .as_ref()
                .map(|s| Color::from_hex(s))
                .transpose()?
                .unwrap_or(Color::rgb(0xD4, 0xD4, 0xD4)),
            styles,
        })
    }

    /// Style for `category`
    pub fn style(&self, category: Category) -> &CategoryStyle {
        &self.styles[category as usize]
    }

    /// Default dark theme (YAML-backed with Rust fallback)
    pub fn default_dark() -> Self {
        match Theme::from_yaml(DEFAULT_DARK_YAML) {
            Ok(theme) => theme,
            Err(_) => Theme {
                name: "Default Dark".to_string(),
                foreground: Color::rgb(0xD4, 0xD4, 0xD4),
                styles: fallback_styles(),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

/// Hardcoded default-dark styles, indexed by `Category as usize`
fn fallback_styles() -> [CategoryStyle; 12] {
    let bold = |color| CategoryStyle {
        color,
        bold: true,
        italic: false,
    };
    [
        bold(Color::rgb(0x80, 0x80, 0x80)),                 // delimiter
        bold(Color::rgb(0xC5, 0x86, 0xC0)),                 // keyword
        CategoryStyle::plain(Color::rgb(0x9C, 0xDC, 0xFE)), // variable
        CategoryStyle::plain(Color::rgb(0xCE, 0x91, 0x78)), // string
        CategoryStyle::plain(Color::rgb(0xB5, 0xCE, 0xA8)), // number
        CategoryStyle::plain(Color::rgb(0xD4, 0xD4, 0xD4)), // operator
        CategoryStyle::plain(Color::rgb(0xDC, 0xDC, 0xAA)), // function
        CategoryStyle::plain(Color::rgb(0x4E, 0xC9, 0xB0)), // method
        bold(Color::rgb(0xFF, 0xD7, 0x00)),                 // filter
        CategoryStyle {
            color: Color::rgb(0x6A, 0x99, 0x55),
            bold: false,
            italic: true,
        }, // comment
        CategoryStyle::plain(Color::rgb(0x56, 0x9C, 0xD6)), // boolean
        CategoryStyle::plain(Color::rgb(0x4F, 0xC1, 0xFF)), // builtin
    ]
}
