//! `application/x-www-form-urlencoded` decoding for POST bodies.

use url::form_urlencoded;

/// Decoded form fields in order of first appearance, each with every value
/// it was given.
pub type FormFields = Vec<(String, Vec<String>)>;

/// Decodes `key=value&key=value`, unescaping `+` and `%XX`.
///
/// Repeated keys keep their first position and collect all their values.
pub fn parse_form(body: &[u8]) -> FormFields {
    let mut fields: FormFields = Vec::new();

    for (key, value) in form_urlencoded::parse(body) {
        match fields.iter().position(|(k, _)| *k == key) {
            Some(i) => fields[i].1.push(value.into_owned()),
            None => fields.push((key.into_owned(), vec![value.into_owned()])),
        }
    }

    fields
}

/// Text written after the 200 header of a POST response.
pub fn render_fields(fields: &FormFields) -> String {
    let mut out = String::from("Post parameters:\n");
    for (key, values) in fields {
        let first = values.first().map(String::as_str).unwrap_or("");
        out.push_str(&format!("{}: {}<br>\n", key, first));
    }
    out
}
