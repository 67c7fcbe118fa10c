/// Parses a free-text Z score field.
///
/// Leading whitespace is skipped and the longest leading decimal literal is
/// used, so `"3.2 mm"` reads as `3.2`. Empty input, or input without a numeric
/// prefix, has no Z score.
pub fn parse_z_score(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let prefix = numeric_prefix(s);
    if prefix.is_empty() {
        return None;
    }
    prefix.parse::<f64>().ok()
}

/// Echoes a parsed score, spelling infinities the way they are typed.
pub fn format_z_score(z: f64) -> String {
    if z == f64::INFINITY {
        "Infinity".to_string()
    } else if z == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        z.to_string()
    }
}

fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return &s[..i + "Infinity".len()];
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }
    if digits == 0 {
        return "";
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    &s[..i]
}
