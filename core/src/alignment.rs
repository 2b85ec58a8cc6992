use std::fmt;

/// Horizontal alignment of a themed region's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Left,
    Right,
    #[default]
    Center,
}

impl Alignment {
    /// Resolve an alignment token from a theme file.
    ///
    /// Matching is case-sensitive; anything other than `left`, `right` or
    /// `center` resolves to [`Alignment::Center`].
    pub fn resolve(token: &str) -> Self {
        match token {
            "left" => Alignment::Left,
            "right" => Alignment::Right,
            "center" => Alignment::Center,
            _ => Alignment::Center,
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Alignment::Left => "left",
            Alignment::Right => "right",
            Alignment::Center => "center",
        };
        f.write_str(token)
    }
}
