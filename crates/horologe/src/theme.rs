//! Dial color themes.
//!
//! A theme is the fixed set of six named colors the watch draws with. Any
//! value providing all six is usable; [`ThemeConfig`] is the partial form
//! used while colors are still being collected from presets and overrides.

use std::fmt;

use horologe_canvas::coords::Rgba;

/// Fixed set of named dial colors. Immutable once built.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Theme {
    pub background: Rgba,
    pub face: Rgba,
    pub digit: Rgba,
    pub hour_hand: Rgba,
    pub minute_hand: Rgba,
    pub second_hand: Rgba,
}

impl Theme {
    /// Black-on-white dial with a red second hand.
    pub fn classic() -> Self {
        Self {
            background: Rgba::rgb(0xf5, 0xf5, 0xf0),
            face: Rgba::rgb(0x20, 0x20, 0x20),
            digit: Rgba::rgb(0x20, 0x20, 0x20),
            hour_hand: Rgba::rgb(0x20, 0x20, 0x20),
            minute_hand: Rgba::rgb(0x40, 0x40, 0x40),
            second_hand: Rgba::rgb(0xc0, 0x30, 0x30),
        }
    }

    /// Light-on-dark dial.
    pub fn midnight() -> Self {
        Self {
            background: Rgba::rgb(0x10, 0x12, 0x18),
            face: Rgba::rgb(0xd0, 0xd4, 0xdc),
            digit: Rgba::rgb(0xa8, 0xb0, 0xc0),
            hour_hand: Rgba::rgb(0xe8, 0xe8, 0xf0),
            minute_hand: Rgba::rgb(0xc0, 0xc8, 0xd8),
            second_hand: Rgba::rgb(0xe0, 0xa0, 0x30),
        }
    }

    /// Looks up a preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "classic" => Some(Self::classic()),
            "midnight" => Some(Self::midnight()),
            _ => None,
        }
    }

    pub fn preset_names() -> &'static [&'static str] {
        &["classic", "midnight"]
    }
}

/// Error returned by [`ThemeConfig::build`]: a required color was never set.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MissingColor(pub &'static str);

impl fmt::Display for MissingColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "theme is missing the {:?} color", self.0)
    }
}

impl std::error::Error for MissingColor {}

/// Partially specified theme.
///
/// All six colors must be present when `build` is called; anything missing is
/// a construction-time failure, never a silent default.
#[derive(Debug, Clone, Default)]
pub struct ThemeConfig {
    pub background: Option<Rgba>,
    pub face: Option<Rgba>,
    pub digit: Option<Rgba>,
    pub hour_hand: Option<Rgba>,
    pub minute_hand: Option<Rgba>,
    pub second_hand: Option<Rgba>,
}

impl ThemeConfig {
    /// Starts from a complete theme so single colors can be overridden.
    pub fn from_theme(theme: Theme) -> Self {
        Self {
            background: Some(theme.background),
            face: Some(theme.face),
            digit: Some(theme.digit),
            hour_hand: Some(theme.hour_hand),
            minute_hand: Some(theme.minute_hand),
            second_hand: Some(theme.second_hand),
        }
    }

    pub fn build(self) -> Result<Theme, MissingColor> {
        Ok(Theme {
            background: self.background.ok_or(MissingColor("background"))?,
            face: self.face.ok_or(MissingColor("face"))?,
            digit: self.digit.ok_or(MissingColor("digit"))?,
            hour_hand: self.hour_hand.ok_or(MissingColor("hour-hand"))?,
            minute_hand: self.minute_hand.ok_or(MissingColor("minute-hand"))?,
            second_hand: self.second_hand.ok_or(MissingColor("second-hand"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_builds() {
        for name in Theme::preset_names() {
            let theme = Theme::preset(name).expect("listed preset must exist");
            assert!(ThemeConfig::from_theme(theme).build().is_ok());
        }
    }

    #[test]
    fn unknown_preset_is_none() {
        assert!(Theme::preset("sepia").is_none());
    }

    #[test]
    fn empty_config_names_the_first_missing_color() {
        let err = ThemeConfig::default().build().unwrap_err();
        assert_eq!(err, MissingColor("background"));
    }

    #[test]
    fn one_missing_color_fails_construction() {
        let mut config = ThemeConfig::from_theme(Theme::classic());
        config.second_hand = None;
        assert_eq!(config.build().unwrap_err(), MissingColor("second-hand"));
    }

    #[test]
    fn overrides_survive_build() {
        let mut config = ThemeConfig::from_theme(Theme::classic());
        config.second_hand = Some(Rgba::rgb(0, 0xff, 0));
        let theme = config.build().unwrap();
        assert_eq!(theme.second_hand, Rgba::rgb(0, 0xff, 0));
        assert_eq!(theme.face, Theme::classic().face);
    }
}
