//! Go identifier sanitization.

/// Identifier used when a name has no letter or digit at all.
pub const FALLBACK_IDENT: &str = "_v";

/// Makes a valid Go identifier out of any string.
///
/// Every character that is not a letter or an ASCII digit is dropped (see
/// [`is_ident_char`]). An underscore also marks a word boundary: the next kept character is
/// upper-cased, producing a camel case body. The first kept character is upper-cased when `exported` is set and lower-cased otherwise.
///
/// `"ok"` and `"id"` keep their acronym spelling (`OK`, `ID`) when exported. Identifiers that
/// would start with a digit are prefixed with `V`/`v`, keywords and predeclared type names get
/// a trailing underscore and a name with nothing usable in it becomes [`FALLBACK_IDENT`].
#[must_use]
pub fn goify(name: &str, exported: bool) -> String {
    if exported {
        match name {
            "ok" => return "OK".to_string(),
            "id" => return "ID".to_string(),
            _ => {}
        }
    }

    let mut ident = String::with_capacity(name.len() + 1);
    let mut first_written = false;
    let mut next_upper = false;

    for c in name.chars() {
        if c == '_' {
            next_upper = true;
            continue;
        }
        if !is_ident_char(c) {
            continue;
        }
        if !first_written {
            if c.is_ascii_digit() {
                ident.push(if exported { 'V' } else { 'v' });
            }
            if exported {
                ident.extend(c.to_uppercase());
            } else {
                ident.extend(c.to_lowercase());
            }
            first_written = true;
            next_upper = false;
        } else if next_upper {
            ident.extend(c.to_uppercase());
            next_upper = false;
        } else {
            ident.push(c);
        }
    }

    if ident.is_empty() {
        return FALLBACK_IDENT.to_string();
    }
    if is_reserved(&ident) {
        ident.push('_');
    }
    ident
}

/// Returns true if `c` may appear in a Go identifier built by [`goify`].
///
/// Letters are the alphabetic characters minus the letter numbers (`Nl`, e.g. roman numerals).
/// Only ASCII digits are kept: other numerics such as `²` or `½` are not decimal digits.
#[must_use]
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_digit() || (c.is_alphabetic() && !is_letter_number(c))
}

// Unicode `Nl` ranges; alphabetic in Rust but not letters for Go.
const LETTER_NUMBERS: &[(char, char)] = &[
    ('\u{16EE}', '\u{16F0}'),
    ('\u{2160}', '\u{2182}'),
    ('\u{2185}', '\u{2188}'),
    ('\u{3007}', '\u{3007}'),
    ('\u{3021}', '\u{3029}'),
    ('\u{3038}', '\u{303A}'),
    ('\u{A6E6}', '\u{A6EF}'),
    ('\u{10140}', '\u{10174}'),
    ('\u{10341}', '\u{10341}'),
    ('\u{1034A}', '\u{1034A}'),
    ('\u{103D1}', '\u{103D5}'),
    ('\u{12400}', '\u{1246E}'),
];

fn is_letter_number(c: char) -> bool {
    LETTER_NUMBERS
        .iter()
        .any(|&(start, end)| (start..=end).contains(&c))
}

/// Returns true if `ident` is a Go keyword or a predeclared numeric/string type name.
#[must_use]
pub fn is_reserved(ident: &str) -> bool {
    matches!(
        ident,
        "byte"
            | "complex128"
            | "complex64"
            | "float32"
            | "float64"
            | "int"
            | "int16"
            | "int32"
            | "int64"
            | "int8"
            | "rune"
            | "string"
            | "uint16"
            | "uint32"
            | "uint64"
            | "uint8"
            | "break"
            | "case"
            | "chan"
            | "const"
            | "continue"
            | "default"
            | "defer"
            | "else"
            | "fallthrough"
            | "for"
            | "func"
            | "go"
            | "goto"
            | "if"
            | "import"
            | "interface"
            | "map"
            | "package"
            | "range"
            | "return"
            | "select"
            | "struct"
            | "switch"
            | "type"
            | "var"
    )
}
