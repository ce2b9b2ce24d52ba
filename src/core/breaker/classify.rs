//! Response-code classification against a range spec.
//!
//! A spec is a comma-separated list of tokens; each token is either an
//! integer literal (exact match) or an inclusive `lo-hi` range, with
//! optional surrounding brackets and whitespace: `"500"`,
//! `"[300-500], 999"`, `"[300-999]"`. The first matching token wins; a code
//! matching no token is not an error.
//!
//! Classification results are memoized per breaker in its
//! `classification_cache`, so for a given identifier the range spec is parsed
//! against each distinct code at most once.

use crate::logging;

/// One parsed spec token. Comparison is strictly numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeSpec {
    Exact(i64),
    Range(i64, i64),
}

impl CodeSpec {
    pub fn matches(&self, code: i64) -> bool {
        match *self {
            CodeSpec::Exact(expected) => code == expected,
            CodeSpec::Range(lo, hi) => lo <= code && code <= hi,
        }
    }
}

/// Parses one trimmed token. Returns `None` on a malformed token
/// (non-numeric bound); the caller decides how to surface that.
fn parse_token(token: &str) -> Option<CodeSpec> {
    let token = token.trim().trim_start_matches('[').trim_end_matches(']');
    if let Some((lo, hi)) = token.split_once('-') {
        let lo = lo.trim().parse::<i64>().ok()?;
        let hi = hi.trim().parse::<i64>().ok()?;
        Some(CodeSpec::Range(lo, hi))
    } else {
        token.trim().parse::<i64>().ok().map(CodeSpec::Exact)
    }
}

/// Parses a full spec. Malformed tokens are dropped with a warning and
/// classify nothing; well-formed tokens around them keep working.
pub fn parse_spec(spec: &str) -> Vec<CodeSpec> {
    let mut parsed = Vec::new();
    for token in spec.split(',') {
        match parse_token(token) {
            Some(code_spec) => parsed.push(code_spec),
            None => logging::warn!(
                "[Classify] Ignoring malformed return-codes token {:?} in spec {:?}",
                token.trim(),
                spec
            ),
        }
    }
    parsed
}

/// True when `code` matches any token of `spec`. First match wins.
pub fn spec_matches(spec: &str, code: i64) -> bool {
    parse_spec(spec).iter().any(|token| token.matches(code))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exact_token() {
        assert_eq!(parse_token("500"), Some(CodeSpec::Exact(500)));
        assert_eq!(parse_token(" 999 "), Some(CodeSpec::Exact(999)));
    }

    #[test]
    fn range_token_brackets_optional() {
        assert_eq!(parse_token("[300-500]"), Some(CodeSpec::Range(300, 500)));
        assert_eq!(parse_token("300-500"), Some(CodeSpec::Range(300, 500)));
        assert_eq!(parse_token("[ 300 - 500 ]"), Some(CodeSpec::Range(300, 500)));
    }

    #[test]
    fn malformed_tokens_dropped() {
        assert_eq!(parse_token("abc"), None);
        assert_eq!(parse_token("[300-x]"), None);
        // well-formed neighbors still apply
        let parsed = parse_spec("[300-x], 500");
        assert_eq!(parsed, vec![CodeSpec::Exact(500)]);
        assert!(spec_matches("[300-x], 500", 500));
        assert!(!spec_matches("[300-x], 500", 400));
    }

    #[test]
    fn default_spec_matches() {
        assert!(spec_matches("[300-999]", 300));
        assert!(spec_matches("[300-999]", 999));
        assert!(!spec_matches("[300-999]", 299));
        assert!(!spec_matches("[300-999]", 1000));
    }

    #[test]
    fn scenario_mixed_spec() {
        let spec = "[300-500], 999";
        assert!(!spec_matches(spec, 600));
        assert!(spec_matches(spec, 307));
        assert!(spec_matches(spec, 999));
    }

    #[test]
    fn comparison_is_numeric_not_lexicographic() {
        // lexicographically "30" > "299" would be false; numerically 30 < 299
        assert!(!spec_matches("[299-999]", 30));
        assert!(spec_matches("[30-999]", 299));
    }
}
