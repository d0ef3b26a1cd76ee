//! Themes: named colors plus a typography rhythm.
//!
//! A [`Theme`] is immutable once built. Switching themes means handing a
//! different `Arc<Theme>` to the render context, never editing one in place.
//! [`ThemeRegistry`] holds the themes an application ships and picks the
//! active one by name.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::style::value::{format_number, StyleValue};

/// Errors from building themes and theme registries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThemeError {
    #[error("theme has no rhythm function")]
    MissingRhythm,
    #[error("theme registry has no default theme named {0:?}")]
    MissingDefault(String),
}

// ---------------------------------------------------------------------------
// Rhythm
// ---------------------------------------------------------------------------

/// Maps a dimensionless rhythm unit to a concrete length.
///
/// Must be pure: the same unit always yields the same length for a given
/// rhythm. Callers only pass finite units.
#[derive(Clone)]
pub struct Rhythm(Arc<dyn Fn(f32) -> StyleValue + Send + Sync>);

impl Rhythm {
    /// Wrap an arbitrary rhythm function.
    pub fn new(f: impl Fn(f32) -> StyleValue + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// `unit * step` as a bare number, for targets measuring in points.
    pub fn linear(step: f32) -> Self {
        Self::new(move |unit| StyleValue::Number(unit * step))
    }

    /// `unit * line_height` in `rem`, for stylesheet targets.
    pub fn rem(line_height: f32) -> Self {
        Self::new(move |unit| StyleValue::Text(format!("{}rem", format_number(unit * line_height))))
    }

    /// Resolve a rhythm unit.
    pub fn apply(&self, unit: f32) -> StyleValue {
        (self.0)(unit)
    }
}

impl fmt::Debug for Rhythm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Rhythm(..)")
    }
}

/// Typography settings of a theme.
#[derive(Debug, Clone)]
pub struct Typography {
    pub rhythm: Rhythm,
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// An immutable visual theme.
#[derive(Debug, Clone)]
pub struct Theme {
    colors: BTreeMap<String, String>,
    typography: Typography,
}

impl Theme {
    /// Start building a theme.
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::default()
    }

    /// Look up a color by symbolic name.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    pub fn colors(&self) -> &BTreeMap<String, String> {
        &self.colors
    }

    pub fn typography(&self) -> &Typography {
        &self.typography
    }

    /// Shortcut for `typography().rhythm.apply(unit)`.
    pub fn rhythm(&self, unit: f32) -> StyleValue {
        self.typography.rhythm.apply(unit)
    }
}

/// Builder for [`Theme`]. A rhythm is required; colors default to none.
#[derive(Debug, Clone, Default)]
pub struct ThemeBuilder {
    colors: BTreeMap<String, String>,
    rhythm: Option<Rhythm>,
}

impl ThemeBuilder {
    /// Add a named color.
    pub fn color(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.colors.insert(name.into(), value.into());
        self
    }

    /// Add several named colors.
    pub fn colors<N, V>(mut self, colors: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        for (name, value) in colors {
            self.colors.insert(name.into(), value.into());
        }
        self
    }

    /// Set the rhythm function.
    pub fn rhythm(mut self, rhythm: Rhythm) -> Self {
        self.rhythm = Some(rhythm);
        self
    }

    pub fn build(self) -> Result<Theme, ThemeError> {
        let rhythm = self.rhythm.ok_or(ThemeError::MissingRhythm)?;
        Ok(Theme {
            colors: self.colors,
            typography: Typography { rhythm },
        })
    }
}

// ---------------------------------------------------------------------------
// ThemeRegistry
// ---------------------------------------------------------------------------

/// The set of themes an application can switch between.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, Arc<Theme>>,
    default_name: String,
    default: Arc<Theme>,
}

impl ThemeRegistry {
    /// Create a registry whose default theme is `theme`, registered as `name`.
    pub fn new(name: impl Into<String>, theme: Theme) -> Self {
        let name = name.into();
        let default = Arc::new(theme);
        let mut themes = BTreeMap::new();
        themes.insert(name.clone(), default.clone());
        Self {
            themes,
            default_name: name,
            default,
        }
    }

    /// Build a registry from named themes, checking that `default_name` is among them.
    pub fn from_themes(
        default_name: impl Into<String>,
        themes: impl IntoIterator<Item = (String, Theme)>,
    ) -> Result<Self, ThemeError> {
        let default_name = default_name.into();
        let themes: BTreeMap<String, Arc<Theme>> = themes
            .into_iter()
            .map(|(name, theme)| (name, Arc::new(theme)))
            .collect();
        let default = match themes.get(&default_name) {
            Some(theme) => theme.clone(),
            None => return Err(ThemeError::MissingDefault(default_name)),
        };
        Ok(Self {
            themes,
            default_name,
            default,
        })
    }

    /// Register another theme (builder). Replaces any theme with the same name.
    pub fn with_theme(mut self, name: impl Into<String>, theme: Theme) -> Self {
        let name = name.into();
        let theme = Arc::new(theme);
        if name == self.default_name {
            self.default = theme.clone();
        }
        self.themes.insert(name, theme);
        self
    }

    pub fn get(&self, name: &str) -> Option<Arc<Theme>> {
        self.themes.get(name).cloned()
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// The default theme.
    pub fn default_theme(&self) -> Arc<Theme> {
        self.default.clone()
    }

    /// Pick the active theme: `current` when it names a registered theme,
    /// otherwise the default.
    pub fn select(&self, current: Option<&str>) -> Arc<Theme> {
        let name = current.unwrap_or(self.default_name.as_str());
        match self.themes.get(name) {
            Some(theme) => theme.clone(),
            None => {
                tracing::debug!(theme = name, "unknown theme, using default");
                self.default_theme()
            }
        }
    }
}
