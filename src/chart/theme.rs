//! Chart themes
//!
//! A [`Theme`] is a named Vega-Lite `config` block. Themes live in a
//! [`ThemeRegistry`] that is filled and enabled once at startup and then
//! shared read-only; the active theme is passed explicitly to the renderer.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::chart::error::{ThemeError, ThemeResult};

/// Name of the built-in empty theme
pub const DEFAULT_THEME: &str = "default";

/// Name of the dashboard's house style
pub const MDS_SPECIAL: &str = "mds_special";

const FONT: &str = "Arial";
const AXIS_COLOR: &str = "#000000";
const GRID_COLOR: &str = "#DEDDDD";

/// A named style configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Theme {
    pub name: String,
    pub config: ThemeConfig,
}

impl Theme {
    pub fn new(name: impl Into<String>, config: ThemeConfig) -> Self {
        Self {
            name: name.into(),
            config,
        }
    }

    /// Vega-Lite defaults, no overrides
    pub fn none() -> Self {
        Self::new(DEFAULT_THEME, ThemeConfig::default())
    }

    /// Arial typography, black ticks, horizontal grid lines only
    pub fn mds_special() -> Self {
        let config = ThemeConfig {
            title: Some(TitleConfig {
                font_size: Some(24),
                font: Some(FONT.to_string()),
                anchor: Some(TitleAnchor::Start),
                color: Some(AXIS_COLOR.to_string()),
            }),
            view: Some(ViewConfig {
                continuous_height: Some(300),
                continuous_width: Some(400),
            }),
            axis_x: Some(AxisConfig {
                domain: Some(true),
                domain_width: Some(1),
                grid: Some(false),
                grid_color: Some(GRID_COLOR.to_string()),
                label_font: Some(FONT.to_string()),
                label_font_size: Some(12),
                label_angle: Some(0),
                tick_color: Some(AXIS_COLOR.to_string()),
                tick_size: Some(5),
                title_font: Some(FONT.to_string()),
                title_font_size: Some(16),
                title_padding: Some(10),
                title: Some("X Axis Title (units)".to_string()),
                ..Default::default()
            }),
            axis_y: Some(AxisConfig {
                domain: Some(false),
                grid: Some(true),
                grid_color: Some(GRID_COLOR.to_string()),
                grid_width: Some(1),
                label_font: Some(FONT.to_string()),
                label_font_size: Some(14),
                label_angle: Some(0),
                title_font: Some(FONT.to_string()),
                title_font_size: Some(16),
                title_padding: Some(10),
                title: Some("Y Axis Title (units)".to_string()),
                ..Default::default()
            }),
        };

        Self::new(MDS_SPECIAL, config)
    }
}

/// Vega-Lite top-level `config`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_x: Option<AxisConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_y: Option<AxisConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TitleAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<TitleAnchor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Default size of views with continuous scales
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuous_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continuous_width: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_angle: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_padding: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Named themes plus the one currently enabled
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, Theme>,
    enabled: String,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeRegistry {
    /// Registry holding only the empty default theme, enabled
    pub fn new() -> Self {
        let mut themes = BTreeMap::new();
        themes.insert(DEFAULT_THEME.to_string(), Theme::none());
        Self {
            themes,
            enabled: DEFAULT_THEME.to_string(),
        }
    }

    /// Registry with the house style registered and enabled
    pub fn dashboard() -> Self {
        let mut registry = Self::new();
        registry.register(Theme::mds_special());
        // Registered just above.
        registry.enabled = MDS_SPECIAL.to_string();
        registry
    }

    /// Register a theme, replacing any theme of the same name
    pub fn register(&mut self, theme: Theme) {
        tracing::debug!(theme = %theme.name, "Registering theme");
        self.themes.insert(theme.name.clone(), theme);
    }

    /// Make a registered theme the active one
    pub fn enable(&mut self, name: &str) -> ThemeResult<()> {
        if !self.themes.contains_key(name) {
            return Err(ThemeError::NotRegistered(name.to_string()));
        }
        self.enabled = name.to_string();
        Ok(())
    }

    /// The enabled theme
    pub fn active(&self) -> &Theme {
        // `enabled` only ever holds a registered name and themes are never removed.
        &self.themes[&self.enabled]
    }

    /// Registered theme names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.themes.keys().map(|s| s.as_str()).collect()
    }
}
