//! Key normalization and Rust naming helpers.

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

fn is_separator(c: char) -> bool {
    c == '-' || c == '_'
}

/// Collapse hyphen/underscore-delimited segments into one camel-case name.
///
/// A run of separators followed by a letter or digit is dropped and that
/// character upper-cased; any other run is kept. Normalizing an already
/// normalized key returns it unchanged.
///
/// ```rust
/// use objmap_infer::normalize_key;
///
/// assert_eq!(normalize_key("user-id"), "userId");
/// assert_eq!(normalize_key("user_id"), "userId");
/// assert_eq!(normalize_key("userId"), "userId");
/// ```
pub fn normalize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        if !is_separator(c) {
            out.push(c);
            continue;
        }
        let mut run = String::from(c);
        while let Some(&next) = chars.peek() {
            if !is_separator(next) {
                break;
            }
            run.push(next);
            chars.next();
        }
        match chars.peek() {
            Some(&next) if next.is_alphanumeric() => {
                out.extend(next.to_uppercase());
                chars.next();
            }
            _ => out.push_str(&run),
        }
    }
    out
}

/// `userId` -> `user_id`, `HTTPCode` -> `http_code`. Characters that cannot
/// appear in an identifier become `_`.
pub(crate) fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(char::is_lowercase),
                _ => false,
            };
            if boundary && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else if c.is_alphanumeric() || c == '_' {
            out.push(c);
        } else {
            out.push('_');
        }
    }
    out
}

/// `items` -> `Items`, `line items` -> `LineItems`.
pub(crate) fn pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for segment in name.split(|c: char| !c.is_alphanumeric()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    if out.is_empty() {
        return "Nested".to_string();
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, 'T');
    }
    out
}

/// Identifier for a struct member or module segment.
pub(crate) fn field_ident(name: &str) -> String {
    let mut ident = snake_case(name);
    if ident.is_empty() || ident.chars().all(|c| c == '_') {
        ident = format!("field{ident}");
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    if KEYWORDS.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}

/// `api\v1`, `api.v1` and `api::v1` all become `api::v1`.
pub(crate) fn module_path(namespace: &str) -> String {
    namespace
        .split(['\\', '.', '/', ':'])
        .filter(|segment| !segment.is_empty())
        .map(field_ident)
        .collect::<Vec<_>>()
        .join("::")
}
