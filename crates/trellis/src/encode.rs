//! Text encoding for the PlantUML server.

use std::fmt::Write as _;

/// Encode a diagram text for the PlantUML server's `~h` hex form.
///
/// The server accepts `https://www.plantuml.com/plantuml/uml/~h<hex>`
/// where `<hex>` is the lowercase hex encoding of the UTF-8 document
/// bytes. See <https://plantuml.com/text-encoding>.
pub(crate) fn encode_hex(text: &str) -> String {
    let mut encoded = String::with_capacity(2 + text.len() * 2);
    encoded.push_str("~h");
    for byte in text.as_bytes() {
        write!(encoded, "{byte:02x}").expect("writing to a String cannot fail");
    }
    encoded
}
