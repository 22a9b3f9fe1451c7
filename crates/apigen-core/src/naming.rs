use heck::{ToLowerCamelCase, ToPascalCase};

/// Accented-Latin characters with a conventional two-letter transliteration.
/// Applied before the generic transliteration pass, which would otherwise
/// collapse them to a single letter.
const ACCENT_REPLACEMENTS: [(&str, &str); 6] = [
    ("ä", "ae"),
    ("ö", "oe"),
    ("ü", "ue"),
    ("Ä", "Ae"),
    ("Ö", "Oe"),
    ("Ü", "Ue"),
];

/// Camel-cases a human-readable spaced string.
///
/// The input is lowercased, everything that is not an ASCII letter or a space
/// is stripped, and each letter following a whitespace run is uppercased with
/// the whitespace removed. The result never contains whitespace.
///
/// Example: `"Some Sample REST Application"` becomes
/// `"someSampleRestApplication"`.
pub fn camelize_spaced_string(string: &str) -> String {
    let lowered = string.to_lowercase();
    let mut result = String::with_capacity(lowered.len());
    let mut upper_next = false;

    for ch in lowered.chars() {
        if ch == ' ' {
            upper_next = true;
        } else if ch.is_ascii_alphabetic() {
            if upper_next {
                result.push(ch.to_ascii_uppercase());
            } else {
                result.push(ch);
            }
            upper_next = false;
        }
        // Dropped characters do not reset the pending uppercase.
    }

    result
}

/// Returns the given string in uppercase, with an underscore inserted before
/// every uppercase letter of the original.
///
/// Example: `"partnerId"` becomes `"PARTNER_ID"`. Consecutive underscores are
/// not collapsed and a leading uppercase letter produces a leading
/// underscore. One-shot transform: re-applying it to its own output inserts
/// further underscores.
pub fn constant_name(string: &str) -> String {
    let mut result = String::with_capacity(string.len() + 4);
    for ch in string.chars() {
        if ch.is_ascii_uppercase() {
            result.push('_');
        }
        result.extend(ch.to_uppercase());
    }
    result
}

/// Uppercases the first character.
pub fn capitalize(string: &str) -> String {
    let mut chars = string.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Sanitizes an arbitrary document name into an identifier: the accent table
/// is applied first, remaining non-ASCII characters are transliterated, and
/// anything left that is not alphanumeric collapses to an underscore.
pub fn sanitize_name(name: &str) -> String {
    let mut replaced = name.to_string();
    for (accented, ascii) in ACCENT_REPLACEMENTS {
        replaced = replaced.replace(accented, ascii);
    }

    sanitize_identifier(&any_ascii::any_ascii(&replaced))
}

fn sanitize_identifier(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut pending_separator = false;

    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_alphanumeric() {
            if i == 0 && ch.is_ascii_digit() {
                result.push('_');
            }
            if pending_separator && !result.is_empty() {
                result.push('_');
            }
            result.push(ch);
            pending_separator = false;
        } else {
            pending_separator = true;
        }
    }

    if result.is_empty() {
        return "unnamed".to_string();
    }

    result
}

/// Derives a camelCase operation id from HTTP method + path, used when the
/// `PATH` naming strategy is active or the document carries no operation id.
///
/// Examples: `GET /employees` → `listEmployees`,
/// `GET /employees/{id}` → `getEmployee`,
/// `POST /employees/{id}/contracts` → `createEmployeeContracts`.
pub fn route_to_name(method: &str, path: &str) -> String {
    let mut resource_parts: Vec<&str> = Vec::new();
    let mut ends_with_param = false;

    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if segment.starts_with('{') && segment.ends_with('}') {
            ends_with_param = true;
        } else {
            resource_parts.push(segment);
            ends_with_param = false;
        }
    }

    let prefix = match method.to_uppercase().as_str() {
        "GET" if ends_with_param => "get",
        "GET" => "list",
        "POST" => "create",
        "PUT" => "update",
        "DELETE" => "delete",
        "PATCH" => "patch",
        "HEAD" => "head",
        "OPTIONS" => "options",
        other => return format!("{}{}", other.to_lowercase(), pascal_parts(&resource_parts, false)),
    };

    if resource_parts.is_empty() {
        return prefix.to_string();
    }

    format!("{}{}", prefix, pascal_parts(&resource_parts, ends_with_param))
}

fn pascal_parts(parts: &[&str], singularize_last: bool) -> String {
    let mut joined = String::new();
    for (i, part) in parts.iter().enumerate() {
        let word = if singularize_last && i == parts.len() - 1 {
            singularize(part)
        } else {
            (*part).to_string()
        };
        joined.push_str(&sanitize_name(&word).to_pascal_case());
    }
    joined
}

/// Naive singularization for route-derived names.
fn singularize(word: &str) -> String {
    if word.ends_with("ies") && word.len() > 3 {
        format!("{}y", &word[..word.len() - 3])
    } else if word.ends_with('s') && !word.ends_with("ss") && word.len() > 1 {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}

/// Generated API class name for an operation group: Pascal-cased with a
/// redundant trailing `Api` stripped (the template appends its own suffix).
pub fn api_name(group: &str) -> String {
    let pascal = sanitize_name(group).to_pascal_case();
    match pascal.strip_suffix("Api") {
        Some(stripped) if !stripped.is_empty() => stripped.to_string(),
        _ => pascal,
    }
}

/// Generated client proxy class name, built from the short app name.
pub fn client_api_name(short_app_name: &str) -> String {
    format!("{short_app_name}Client")
}

/// Variable name for a document property.
pub fn var_name(name: &str) -> String {
    sanitize_name(name).to_lower_camel_case()
}

/// Class name for a document schema.
pub fn class_name(name: &str) -> String {
    sanitize_name(name).to_pascal_case()
}
