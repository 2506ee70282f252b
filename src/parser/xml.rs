//! Small helpers shared by the WordprocessingML part readers.

use quick_xml::events::BytesStart;

use crate::model::{FontProps, Length, RgbColor};

/// Extract an attribute value by qualified key (e.g., `b"w:val"`).
pub(crate) fn get_attr(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.as_ref() == key)
        .map(|a| String::from_utf8_lossy(&a.value).into_owned())
}

/// Check if an on/off property is switched off (`w:val="0"`, `"false"` or `"off"`).
///
/// A bare `<w:b/>` is on.
pub(crate) fn is_val_off(e: &BytesStart<'_>) -> bool {
    matches!(
        get_attr(e, b"w:val").as_deref(),
        Some("0") | Some("false") | Some("off")
    )
}

/// Tracked formatting changes. Their content is the formatting before the
/// revision and never applies to the current document.
pub(crate) fn is_property_change(name: &[u8]) -> bool {
    matches!(
        name,
        b"w:rPrChange" | b"w:pPrChange" | b"w:sectPrChange" | b"w:tblPrChange"
    )
}

/// Tracked removals whose runs are not part of the visible text.
pub(crate) fn is_removed_content(name: &[u8]) -> bool {
    matches!(name, b"w:del" | b"w:moveFrom")
}

/// Apply one child of `w:rPr` to a set of font attributes.
///
/// Unknown elements are ignored. A color of `auto` leaves the color unset.
pub(crate) fn apply_run_property(e: &BytesStart<'_>, font: &mut FontProps) {
    match e.name().as_ref() {
        b"w:rFonts" => {
            if let Some(family) = get_attr(e, b"w:ascii").or_else(|| get_attr(e, b"w:hAnsi")) {
                font.family = Some(family);
            }
        }
        b"w:sz" => {
            if let Some(half_points) = get_attr(e, b"w:val").and_then(|v| v.parse::<u32>().ok()) {
                font.size = Some(Length::from_half_points(half_points));
            }
        }
        b"w:color" => {
            if let Some(color) = get_attr(e, b"w:val").and_then(|v| RgbColor::parse(&v)) {
                font.color = Some(color);
            }
        }
        b"w:b" => {
            font.bold = Some(!is_val_off(e));
        }
        _ => {}
    }
}
