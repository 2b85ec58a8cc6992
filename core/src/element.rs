use crate::alignment::Alignment;
use crate::color::Rgba;
use crate::error::ThemeResult;
use crate::types::StyleElement;
use crate::xml::XmlElement;

/// Fill `element` from a region node such as `<title>` or `<option_list>`.
///
/// Colors and paths are only written when the node has the matching child,
/// so values seeded before the call survive. Alignment is always written:
/// a node without `<alignment>` resets it to [`Alignment::Center`].
///
/// A malformed color aborts extraction with the decode error. Fields handled
/// before the bad color keep their new values.
pub fn extract(node: &XmlElement, element: &mut StyleElement) -> ThemeResult<()> {
    if let Some(hex) = node.child_text("color") {
        element.color = Some(Rgba::decode(hex)?);
    }
    if let Some(hex) = node.child_text("color_focused") {
        element.color_focused = Some(Rgba::decode(hex)?);
    }
    if let Some(path) = node.child_text("path") {
        element.path = Some(path.to_string());
    }
    if let Some(path) = node.child_text("path_focused") {
        element.path_focused = Some(path.to_string());
    }
    if let Some(path) = node.child_text("path_selected") {
        element.path_selected = Some(path.to_string());
    }

    element.alignment = node
        .child_text("alignment")
        .map(Alignment::resolve)
        .unwrap_or(Alignment::Center);

    Ok(())
}
