//! Path expression compiler
//!
//! Splits an absolute path on `/` and classifies each raw token into a
//! typed [`PathSegment`]. Compilation is pure: the input is borrowed
//! and never mutated, and the same string always compiles to the same
//! expression.
//!
//! Splitting happens before predicate parsing, so a quoted predicate
//! value cannot itself contain `/`; such inputs fail with
//! `MalformedPredicate` on the fragment segments rather than being
//! resolved against the store.

use crate::config::EngineConfig;
use crate::error::{
    bad_index, empty_segment, malformed_predicate, not_absolute, path_too_long,
    terminal_not_last, QueryResult,
};
use crate::path::ast::{PathExpression, PathSegment};

/// Path expression parser and compiler
pub struct PathCompiler;

impl PathCompiler {
    /// Compile a path string into a typed expression
    ///
    /// # Arguments
    ///
    /// * `path` - absolute path expression (e.g. `/cluster/@name`,
    ///   `/cluster/clusternodes/child::*`)
    /// * `config` - engine limits; only `max_path_length` applies here
    ///
    /// # Errors
    ///
    /// Returns a parse-time [`QueryError`](crate::error::QueryError)
    /// variant: `NotAbsolute`, `PathTooLong`, `EmptySegment`,
    /// `BadIndex`, `MalformedPredicate` or
    /// `TerminalOnlySegmentNotLast`. No partial expression is usable.
    pub fn compile(path: &str, config: &EngineConfig) -> QueryResult<PathExpression> {
        if path.len() > config.max_path_length {
            return Err(path_too_long(path.len(), config.max_path_length));
        }

        let rest = match path.strip_prefix('/') {
            Some(rest) => rest,
            None => return Err(not_absolute(path)),
        };
        if rest.is_empty() {
            // bare "/" has no segments at all
            return Err(empty_segment(1));
        }

        let token_count = rest.split('/').count();
        let mut segments = Vec::with_capacity(token_count);
        let mut offset = 1usize;

        for (position, raw) in rest.split('/').enumerate() {
            if raw.is_empty() {
                return Err(empty_segment(offset));
            }
            let segment = classify(raw, offset)?;
            if segment.is_terminal_only() && position + 1 != token_count {
                return Err(terminal_not_last(raw));
            }
            segments.push(segment);
            offset += raw.len() + 1;
        }

        // token_count >= 1, so pop always succeeds
        let terminal = match segments.pop() {
            Some(terminal) => terminal,
            None => return Err(empty_segment(1)),
        };
        Ok(PathExpression::new(segments, terminal, path.to_string()))
    }

    /// Validate a path without keeping the compiled expression
    pub fn validate(path: &str, config: &EngineConfig) -> QueryResult<()> {
        Self::compile(path, config).map(|_| ())
    }
}

/// Classify one raw `/`-delimited token
fn classify(raw: &str, offset: usize) -> QueryResult<PathSegment> {
    // key references: "@*" enumerates, "@name" fetches one value
    if let Some(key) = raw.strip_prefix('@') {
        if key.is_empty() {
            return Err(empty_segment(offset));
        }
        if key == "*" {
            return Ok(PathSegment::AllKeys);
        }
        return Ok(PathSegment::Key {
            name: key.to_string(),
        });
    }

    // positional child forms: "child::*" and "child::*[n]"
    if raw == "child::*" {
        return Ok(PathSegment::AllChildren);
    }
    if let Some(suffix) = raw.strip_prefix("child::*") {
        let digits = match bracket_inner(suffix) {
            Some(digits) => digits,
            None => return Err(malformed_predicate(raw, "expected '[index]' after 'child::*'")),
        };
        let index = parse_index(raw, digits)?;
        return Ok(PathSegment::AllChildrenIndexed { index });
    }

    // plain name selector
    let open = match raw.find('[') {
        Some(open) => open,
        None => {
            return Ok(PathSegment::Child {
                name: raw.to_string(),
            })
        }
    };

    // "name[...]" selector forms
    let name = &raw[..open];
    if name.is_empty() {
        return Err(malformed_predicate(raw, "segment name missing before '['"));
    }
    let inner = match bracket_inner(&raw[open..]) {
        Some(inner) => inner,
        None => return Err(malformed_predicate(raw, "unterminated '[' selector")),
    };
    if inner.is_empty() {
        return Err(malformed_predicate(raw, "empty '[]' selector"));
    }

    if let Some(predicate) = inner.strip_prefix('@') {
        // "name[@attr=\"value\"]"
        let (attr, quoted) = match predicate.split_once('=') {
            Some(parts) => parts,
            None => return Err(malformed_predicate(raw, "predicate missing '='")),
        };
        if attr.is_empty() {
            return Err(malformed_predicate(raw, "predicate key missing after '@'"));
        }
        let value = match quoted
            .strip_prefix('"')
            .and_then(|value| value.strip_suffix('"'))
        {
            Some(value) => value,
            None => return Err(malformed_predicate(raw, "predicate value must be double-quoted")),
        };
        if value.contains('"') {
            return Err(malformed_predicate(raw, "unbalanced quotes in predicate value"));
        }
        return Ok(PathSegment::ChildFiltered {
            name: name.to_string(),
            attr: attr.to_string(),
            value: value.to_string(),
        });
    }

    // "name[n]"
    let index = parse_index(raw, inner)?;
    Ok(PathSegment::ChildIndexed {
        name: name.to_string(),
        index,
    })
}

/// Strip a full `[...]` wrapper, returning the inside
fn bracket_inner(token: &str) -> Option<&str> {
    token.strip_prefix('[').and_then(|s| s.strip_suffix(']'))
}

/// Parse a 1-based selector index; zero, negative and non-numeric
/// indices are rejected
fn parse_index(segment: &str, digits: &str) -> QueryResult<u32> {
    match digits.parse::<u32>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(bad_index(segment)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryError;

    fn compile(path: &str) -> QueryResult<PathExpression> {
        PathCompiler::compile(path, &EngineConfig::default())
    }

    #[test]
    fn classifies_every_segment_form() {
        let expr = compile("/cluster/clusternodes/clusternode[2]/@name").expect("valid path");
        assert_eq!(
            expr.interior(),
            &[
                PathSegment::Child {
                    name: "cluster".into()
                },
                PathSegment::Child {
                    name: "clusternodes".into()
                },
                PathSegment::ChildIndexed {
                    name: "clusternode".into(),
                    index: 2
                },
            ]
        );
        assert_eq!(
            expr.terminal(),
            &PathSegment::Key {
                name: "name".into()
            }
        );

        let expr = compile("/a/b[@id=\"x\"]/child::*").expect("valid path");
        assert_eq!(
            expr.interior()[1],
            PathSegment::ChildFiltered {
                name: "b".into(),
                attr: "id".into(),
                value: "x".into()
            }
        );
        assert_eq!(expr.terminal(), &PathSegment::AllChildren);

        let expr = compile("/a/child::*[3]").expect("valid path");
        assert_eq!(expr.terminal(), &PathSegment::AllChildrenIndexed { index: 3 });

        let expr = compile("/a/@*").expect("valid path");
        assert_eq!(expr.terminal(), &PathSegment::AllKeys);
    }

    #[test]
    fn empty_predicate_value_is_accepted() {
        let expr = compile("/a/b[@id=\"\"]/@x").expect("valid path");
        assert_eq!(
            expr.interior()[1],
            PathSegment::ChildFiltered {
                name: "b".into(),
                attr: "id".into(),
                value: String::new()
            }
        );
    }

    #[test]
    fn rejects_relative_paths() {
        assert!(matches!(
            compile("a/b"),
            Err(QueryError::NotAbsolute { .. })
        ));
        assert!(matches!(compile(""), Err(QueryError::NotAbsolute { .. })));
    }

    #[test]
    fn rejects_empty_segments() {
        assert!(matches!(compile("/"), Err(QueryError::EmptySegment { .. })));
        assert!(matches!(
            compile("/a//b"),
            Err(QueryError::EmptySegment { offset: 3 })
        ));
        assert!(matches!(
            compile("/a/"),
            Err(QueryError::EmptySegment { .. })
        ));
        assert!(matches!(
            compile("/a/@"),
            Err(QueryError::EmptySegment { .. })
        ));
    }

    #[test]
    fn rejects_bad_indices() {
        assert!(matches!(
            compile("/a/b[0]/@x"),
            Err(QueryError::BadIndex { .. })
        ));
        assert!(matches!(
            compile("/a/b[-1]/@x"),
            Err(QueryError::BadIndex { .. })
        ));
        assert!(matches!(
            compile("/a/b[two]/@x"),
            Err(QueryError::BadIndex { .. })
        ));
        assert!(matches!(
            compile("/a/child::*[0]"),
            Err(QueryError::BadIndex { .. })
        ));
        assert!(matches!(
            compile("/a/child::*[]"),
            Err(QueryError::BadIndex { .. })
        ));
    }

    #[test]
    fn rejects_malformed_predicates() {
        for path in [
            "/a/b[@x=bad]/@y",
            "/a/b[@x=\"unterminated]/@y",
            "/a/b[@x]/@y",
            "/a/b[@=\"v\"]/@y",
            "/a/b[@x=\"a\"b\"]/@y",
            "/a/b[]/@y",
            "/a/b[1/@y",
            "/a/[1]/@y",
            "/a/child::*extra",
        ] {
            assert!(
                matches!(compile(path), Err(QueryError::MalformedPredicate { .. })),
                "expected MalformedPredicate for {path}"
            );
        }
    }

    #[test]
    fn rejects_terminal_segments_before_the_end() {
        for path in ["/a/child::*/b", "/a/@x/b", "/a/@*/b", "/a/child::*[1]/b"] {
            assert!(
                matches!(
                    compile(path),
                    Err(QueryError::TerminalOnlySegmentNotLast { .. })
                ),
                "expected TerminalOnlySegmentNotLast for {path}"
            );
        }
    }

    #[test]
    fn rejects_overlong_paths_without_truncating() {
        let config = EngineConfig::default().with_max_path_length(16);
        let path = "/cluster/clusternodes/@name";
        assert_eq!(
            PathCompiler::compile(path, &config),
            Err(QueryError::PathTooLong {
                length: path.len(),
                limit: 16
            })
        );
    }

    #[test]
    fn compilation_is_deterministic_and_keeps_the_input() {
        let path = "/cluster/clusternode[@name=\"n3\"]/@votes";
        let first = compile(path).expect("valid path");
        let second = compile(path).expect("valid path");
        assert_eq!(first, second);
        assert_eq!(first.original(), path);
        assert_eq!(first.to_string(), path);
    }

    #[test]
    fn validate_matches_compile() {
        let config = EngineConfig::default();
        assert!(PathCompiler::validate("/a/@b", &config).is_ok());
        assert!(PathCompiler::validate("a/@b", &config).is_err());
    }
}
