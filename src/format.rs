use crate::Fields;

/// Year token, rendered as the raw signed integer without padding
const YEAR_TOKEN: &str = "YYYY";

/// Two-digit tokens, zero-padded. `MM`/`mm` are case-sensitive.
const MONTH_TOKEN: &str = "MM";
const DAY_TOKEN: &str = "DD";
const HOUR_TOKEN: &str = "HH";
const MINUTE_TOKEN: &str = "mm";
const SECOND_TOKEN: &str = "SS";

/// Substitutes the six field tokens (`YYYY`, `MM`, `DD`, `HH`, `mm`,
/// `SS`) in `template` with the corresponding field values.
///
/// The template is scanned left to right; after a replacement the scan
/// resumes past the inserted text, so inserted digits are never matched
/// against later tokens. Text that matches no token, including
/// unrecognized placeholders, is copied through verbatim.
pub fn render(fields: &Fields, template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while !rest.is_empty() {
        if rest.starts_with(YEAR_TOKEN) {
            out.push_str(&fields.year.to_string());
            rest = &rest[YEAR_TOKEN.len()..];
            continue;
        }

        let two_digit = [
            (MONTH_TOKEN, fields.month),
            (DAY_TOKEN, fields.day),
            (HOUR_TOKEN, fields.hour),
            (MINUTE_TOKEN, fields.minute),
            (SECOND_TOKEN, fields.second),
        ];
        for (token, value) in two_digit {
            if rest.starts_with(token) {
                out.push_str(&format!("{value:02}"));
                rest = &rest[token.len()..];
                continue 'scan;
            }
        }

        if let Some(ch) = rest.chars().next() {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    out
}
