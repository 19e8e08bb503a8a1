//! URL query handling and search-box suggestions.

/// Read the `q` parameter from a URL query string.
///
/// Accepts the string with or without a leading `?`. Returns `None` when the
/// parameter is missing or blank.
pub fn query_param(query_string: &str) -> Option<String> {
    param(query_string, "q")
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
}

/// Read a single parameter from a URL query string, percent-decoded.
pub fn param(query_string: &str, name: &str) -> Option<String> {
    let qs = query_string.split_once('?').map_or(query_string, |(_, q)| q);
    qs.split('&').find_map(|pair| {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next().unwrap_or("");
        let value = parts.next().unwrap_or("");
        (url_decode(key) == name).then(|| url_decode(value))
    })
}

/// Link to the search page for `query`, e.g. `search.html?q=T%C3%AAnis`.
pub fn search_link(search_page: &str, query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!("{}?q={}", search_page, url_encode(query)))
}

/// Decode `%XX` escapes and `+` as space. Invalid escapes are kept verbatim.
pub fn url_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                match (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8_lossy(&out).into_owned()
}

/// Percent-encode everything outside the unreserved URI characters.
pub fn url_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3);
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Built-in suggestions offered under the search box.
pub const DEFAULT_SUGGESTIONS: [&str; 5] = [
    "iPhone 15 Pro Max",
    "Notebook Dell",
    "Smart TV 65\"",
    "Tênis Nike",
    "AirPods Pro",
];

/// Suggestions for the text typed so far.
///
/// Nothing is suggested until the trimmed input reaches `min_chars`
/// characters; after that, every suggestion containing the input
/// (case-insensitively) is returned in list order.
pub fn suggestions<'a>(input: &str, candidates: &'a [String], min_chars: usize) -> Vec<&'a str> {
    let input = input.trim();
    if input.chars().count() < min_chars {
        return Vec::new();
    }

    let needle = input.to_lowercase();
    candidates
        .iter()
        .filter(|s| s.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Vec<String> {
        DEFAULT_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_query_param() {
        assert_eq!(query_param("?q=nike").as_deref(), Some("nike"));
        assert_eq!(query_param("page=2&q=smart+tv").as_deref(), Some("smart tv"));
        assert_eq!(query_param("q=T%C3%AAnis").as_deref(), Some("Tênis"));
        assert_eq!(query_param("q=%20%20"), None);
        assert_eq!(query_param("page=2"), None);
        assert_eq!(query_param(""), None);
    }

    #[test]
    fn test_param_from_full_url() {
        assert_eq!(
            param("search.html?sort=newest&q=x", "sort").as_deref(),
            Some("newest")
        );
    }

    #[test]
    fn test_url_decode_invalid_escape() {
        assert_eq!(url_decode("100%"), "100%");
        assert_eq!(url_decode("%zz"), "%zz");
        assert_eq!(url_decode("a%2"), "a%2");
    }

    #[test]
    fn test_url_encode() {
        assert_eq!(url_encode("Smart TV 65\""), "Smart%20TV%2065%22");
        assert_eq!(url_encode("Tênis"), "T%C3%AAnis");
        assert_eq!(url_decode(&url_encode("Tênis Nike & cia")), "Tênis Nike & cia");
    }

    #[test]
    fn test_search_link() {
        assert_eq!(
            search_link("search.html", " AirPods Pro ").as_deref(),
            Some("search.html?q=AirPods%20Pro")
        );
        assert_eq!(search_link("search.html", "   "), None);
    }

    #[test]
    fn test_suggestions_need_min_chars() {
        let candidates = defaults();
        assert!(suggestions("ip", &candidates, 3).is_empty());
        assert_eq!(suggestions("iph", &candidates, 3), vec!["iPhone 15 Pro Max"]);
    }

    #[test]
    fn test_suggestions_case_insensitive() {
        let candidates = defaults();
        assert_eq!(
            suggestions("PRO", &candidates, 3),
            vec!["iPhone 15 Pro Max", "AirPods Pro"]
        );
        assert!(suggestions("xbox", &candidates, 3).is_empty());
    }
}
