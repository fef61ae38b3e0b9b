use http::HeaderValue;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum RuleParseError {
    #[error("invalid rules: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("rule {index}: `{field}` is empty")]
    EmptyField { index: usize, field: &'static str },
    #[error("rule for {path:?}: {url:?} is not a valid Location")]
    InvalidUrl { path: String, url: String },
}

/// One entry of a rules document.
#[derive(Deserialize, Debug)]
struct Rule {
    path: String,
    url: String,
}

/// Immutable table of exact request paths to redirect targets.
///
/// Targets are checked as `Location` header values up front, so looking one up
/// can't fail.
#[derive(Default, Debug, Clone)]
pub struct Rules {
    targets: HashMap<String, HeaderValue>,
}

impl Rules {
    /// Parse a YAML (or JSON) sequence of `{ path, url }` records.
    ///
    /// ```yaml
    /// - path: /some-path
    ///   url: https://www.some-url.com/demo
    /// ```
    ///
    /// Later records win over earlier ones with the same path.
    pub fn from_yaml(yaml: &[u8]) -> Result<Self, RuleParseError> {
        let records: Vec<Rule> = serde_yaml::from_slice(yaml)?;
        let rules = Self::from_pairs(records.into_iter().map(|r| (r.path, r.url)))?;
        log::debug!("Loaded {} redirect rules", rules.len());
        for (path, target) in &rules.targets {
            log::trace!("{} -> {:?}", path, target);
        }
        Ok(rules)
    }

    /// Build a table from `(path, url)` pairs, e.g. a `HashMap<String, String>`.
    ///
    /// Empty paths or urls are rejected; `index` in the error counts pairs in iteration order.
    pub fn from_pairs<I, P, U>(pairs: I) -> Result<Self, RuleParseError>
    where
        I: IntoIterator<Item = (P, U)>,
        P: Into<String>,
        U: AsRef<str>,
    {
        let mut targets = HashMap::new();
        for (index, (path, url)) in pairs.into_iter().enumerate() {
            let path = path.into();
            let url = url.as_ref();
            if path.is_empty() {
                return Err(RuleParseError::EmptyField {
                    index,
                    field: "path",
                });
            }
            if url.is_empty() {
                return Err(RuleParseError::EmptyField { index, field: "url" });
            }
            let target = match HeaderValue::from_str(url) {
                Ok(t) => t,
                Err(_) => {
                    return Err(RuleParseError::InvalidUrl {
                        path,
                        url: url.to_owned(),
                    })
                }
            };
            targets.insert(path, target);
        }
        Ok(Self { targets })
    }

    pub fn get(&self, path: &str) -> Option<&HeaderValue> {
        self.targets.get(path)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_document_order() {
        let rules = Rules::from_yaml(
            b"- path: /urlshort
  url: https://github.com/gophercises/urlshort
- path: /urlshort-final
  url: https://github.com/gophercises/urlshort/tree/solution
",
        )
        .unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(
            rules.get("/urlshort").unwrap(),
            "https://github.com/gophercises/urlshort"
        );
        assert_eq!(
            rules.get("/urlshort-final").unwrap(),
            "https://github.com/gophercises/urlshort/tree/solution"
        );
    }

    #[test]
    fn last_write_wins() {
        let rules = Rules::from_yaml(b"[{path: /a, url: u1}, {path: /a, url: u2}]").unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules.get("/a").unwrap(), "u2");

        let rules = Rules::from_pairs([("/a", "u1"), ("/b", "x"), ("/a", "u2")]).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules.get("/a").unwrap(), "u2");
    }

    #[test]
    fn accepts_json_and_ignores_unknown_fields() {
        let rules = Rules::from_yaml(
            br#"[{"path": "/j", "url": "https://x.test/j", "note": "from json"}]"#,
        )
        .unwrap();
        assert_eq!(rules.get("/j").unwrap(), "https://x.test/j");
    }

    #[test]
    fn empty_sequence_is_empty_table() {
        let rules = Rules::from_yaml(b"[]").unwrap();
        assert!(rules.is_empty());
        assert!(rules.get("/").is_none());
    }

    #[test]
    fn rejects_wrong_shape() {
        for yaml in [
            &b"just a scalar"[..],
            b"path: /a\nurl: https://x.test/a\n",
            b"- path: [/a]\n  url: https://x.test/a\n",
            b"- path: /a\n  url: {nested: true}\n",
            b"- {path: /a, url: [unclosed\n",
        ] {
            match Rules::from_yaml(yaml) {
                Err(RuleParseError::Yaml(_)) => {}
                other => panic!("{:?}: {:?}", String::from_utf8_lossy(yaml), other),
            }
        }
    }

    #[test]
    fn rejects_missing_fields() {
        assert!(matches!(
            Rules::from_yaml(b"- path: /a\n"),
            Err(RuleParseError::Yaml(_))
        ));
        assert!(matches!(
            Rules::from_yaml(b"- url: https://x.test/\n"),
            Err(RuleParseError::Yaml(_))
        ));
    }

    #[test]
    fn rejects_empty_fields() {
        match Rules::from_yaml(b"- {path: /a, url: u}\n- {path: '', url: u}\n") {
            Err(RuleParseError::EmptyField { index, field }) => {
                assert_eq!(index, 1);
                assert_eq!(field, "path");
            }
            other => panic!("{:?}", other),
        }
        assert!(matches!(
            Rules::from_yaml(b"- {path: /a, url: ''}\n"),
            Err(RuleParseError::EmptyField { index: 0, field: "url" })
        ));
    }

    #[test]
    fn literal_pairs_reject_empty_fields() {
        assert!(matches!(
            Rules::from_pairs([("/a", "https://x.test/a"), ("", "https://x.test/")]),
            Err(RuleParseError::EmptyField {
                index: 1,
                field: "path"
            })
        ));
        let mut map = HashMap::new();
        map.insert("/a".to_owned(), String::new());
        assert!(matches!(
            Rules::from_pairs(map),
            Err(RuleParseError::EmptyField {
                index: 0,
                field: "url"
            })
        ));
    }

    #[test]
    fn rejects_urls_that_cannot_be_headers() {
        match Rules::from_pairs([("/a", "https://x.test/\r\nset-cookie: x")]) {
            Err(RuleParseError::InvalidUrl { path, .. }) => assert_eq!(path, "/a"),
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn error_messages() {
        let e = RuleParseError::EmptyField {
            index: 3,
            field: "url",
        };
        assert_eq!(e.to_string(), "rule 3: `url` is empty");
    }
}
