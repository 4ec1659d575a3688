use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

pub const DEFAULT_THEME: &str = "catppuccin-mocha";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub muted: String,
    pub accent: String,
    pub border: String,
    pub border_focused: String,
    pub header_bg: String,
    pub header_fg: String,
    pub selection_bg: String,
    pub bar_filled: String,
    pub bar_empty: String,
    pub error: String,
    pub warning: String,
    pub success: String,
}

fn user_themes_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("dictit").join("themes"))
}

fn parse_theme(source: &str, content: &str) -> Option<Theme> {
    toml::from_str(content)
        .map_err(|e| log::warn!("ignoring theme {source}: {e}"))
        .ok()
}

impl Theme {
    /// Look up a theme by name, preferring a user file over the bundled one.
    pub fn load(name: &str) -> Option<Self> {
        let filename = format!("{name}.toml");

        let user_theme = user_themes_dir()
            .map(|dir| dir.join(&filename))
            .and_then(|path| {
                let content = fs::read_to_string(&path).ok()?;
                parse_theme(&path.display().to_string(), &content)
            });
        if user_theme.is_some() {
            return user_theme;
        }

        let bundled = ThemeAssets::get(&filename)?;
        let content = std::str::from_utf8(bundled.data.as_ref()).ok()?;
        parse_theme(&filename, content)
    }

    pub fn available_themes() -> Vec<String> {
        let user_files = user_themes_dir()
            .and_then(|dir| fs::read_dir(dir).ok())
            .into_iter()
            .flatten()
            .flatten()
            .map(|entry| entry.file_name().to_string_lossy().into_owned());

        let names: BTreeSet<String> = ThemeAssets::iter()
            .map(|f| f.into_owned())
            .chain(user_files)
            .filter_map(|f| f.strip_suffix(".toml").map(str::to_string))
            .collect();
        names.into_iter().collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load(DEFAULT_THEME).unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#1e1e2e".to_string(),
            fg: "#cdd6f4".to_string(),
            muted: "#6c7086".to_string(),
            accent: "#89b4fa".to_string(),
            border: "#45475a".to_string(),
            border_focused: "#89b4fa".to_string(),
            header_bg: "#313244".to_string(),
            header_fg: "#cdd6f4".to_string(),
            selection_bg: "#45475a".to_string(),
            bar_filled: "#a6e3a1".to_string(),
            bar_empty: "#313244".to_string(),
            error: "#f38ba8".to_string(),
            warning: "#f9e2af".to_string(),
            success: "#a6e3a1".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6
            && let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            )
        {
            return Color::Rgb(r, g, b);
        }
        Color::White
    }
}

macro_rules! color_accessors {
    ($($field:ident),* $(,)?) => {
        impl ThemeColors {
            $(
                pub fn $field(&self) -> Color {
                    Self::parse_color(&self.$field)
                }
            )*
        }
    };
}

color_accessors!(
    bg,
    fg,
    muted,
    accent,
    border,
    border_focused,
    header_bg,
    header_fg,
    selection_bg,
    bar_filled,
    bar_empty,
    error,
    warning,
    success,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_themes_parse() {
        let bundled: Vec<String> = ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect();
        assert!(bundled.contains(&DEFAULT_THEME.to_string()));
        for name in bundled {
            assert!(Theme::load(&name).is_some(), "theme {name} failed to parse");
        }
    }

    #[test]
    fn parse_color_falls_back_to_white() {
        assert_eq!(ThemeColors::parse_color("#89b4fa"), Color::Rgb(0x89, 0xb4, 0xfa));
        assert_eq!(ThemeColors::parse_color("not-a-color"), Color::White);
    }

    #[test]
    fn available_themes_are_sorted_and_unique() {
        let names = Theme::available_themes();
        assert!(names.iter().any(|n| n == DEFAULT_THEME));
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }
}
