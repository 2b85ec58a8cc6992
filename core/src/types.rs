use crate::alignment::Alignment;
use crate::color::Rgba;

/// Style values for one region of the window chrome.
///
/// Every field except `alignment` stays `None` unless a theme file sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleElement {
    pub color: Option<Rgba>,
    pub color_focused: Option<Rgba>,
    pub path: Option<String>,
    pub path_focused: Option<String>,
    pub path_selected: Option<String>,
    pub alignment: Alignment,
}

/// Theme-wide text defaults
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultText {
    pub color: Option<Rgba>,
    /// Font asset reference
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub default_text: DefaultText,
    /// Line drawn between list items
    pub spacer_color: Option<Rgba>,
    pub arrow_path: Option<String>,

    pub background: StyleElement,
    pub title: StyleElement,
    pub footer: StyleElement,
    pub button: StyleElement,
    pub option_list: StyleElement,
    pub switch_control: StyleElement,
}

impl Theme {
    /// Name of the built-in theme that is always registered.
    pub const DEFAULT_NAME: &'static str = "default";

    /// The hardcoded fallback theme used when no theme file is available.
    pub fn builtin_default() -> Self {
        let default_text = DefaultText {
            color: Some(Rgba(0x777777FF)),
            path: None,
        };

        Self {
            name: Self::DEFAULT_NAME.to_string(),
            spacer_color: Some(Rgba(0xC6C7C6FF)),
            arrow_path: None,
            background: StyleElement {
                color: Some(Rgba(0x444444FF)),
                ..StyleElement::default()
            },
            title: StyleElement {
                color: Some(Rgba(0x999999FF)),
                alignment: Alignment::Center,
                ..StyleElement::default()
            },
            footer: StyleElement {
                color: Some(Rgba(0xAAAAAAFF)),
                alignment: Alignment::Center,
                ..StyleElement::default()
            },
            button: StyleElement::default(),
            option_list: StyleElement {
                color: default_text.color,
                ..StyleElement::default()
            },
            switch_control: StyleElement::default(),
            default_text,
        }
    }

    /// Named regions in file order, for callers that walk all of them.
    pub fn regions(&self) -> [(&'static str, &StyleElement); 6] {
        [
            ("background", &self.background),
            ("title", &self.title),
            ("footer", &self.footer),
            ("button", &self.button),
            ("option_list", &self.option_list),
            ("switch", &self.switch_control),
        ]
    }
}
