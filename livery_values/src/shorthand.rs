// Copyright 2025 the Livery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shorthand parsers for box-model composites.
//!
//! Tokenisation is literal: every separator character ends a token and
//! empty tokens are kept, so `"10  20"` is three tokens. Only a plain space
//! separates numbers; other whitespace stays inside the token, where integer
//! parsing skips it when leading and stops at it when trailing. The
//! positional tables below are written against that token stream.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use log::warn;
use nom::character::complete::{digit1, multispace0, one_of};
use nom::combinator::{opt, recognize};
use nom::sequence::{pair, preceded};
use nom::{IResult, Parser};
use thiserror::Error;

use crate::edges::{BorderedImage, BoxEdges};

/// Errors reported by [`try_parse_bordered_image`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ShorthandError {
    /// The text is neither `none` nor a `url(...)` form.
    #[error("could not parse border image from \"{0}\"")]
    NotUrl(String),
    /// The `url(...)` form has no path inside it.
    #[error("border image \"{0}\" does not name an image path")]
    MissingPath(String),
}

/// Optional leading whitespace, optional sign, then at least one digit.
fn integer_prefix(input: &str) -> IResult<&str, &str> {
    preceded(multispace0, recognize(pair(opt(one_of("+-")), digit1))).parse(input)
}

/// Parses a token the way C `atoi` does.
///
/// Trailing garbage is ignored, a token without leading digits is 0, and
/// out-of-range values saturate.
fn token_to_int(token: &str) -> i32 {
    match integer_prefix(token) {
        Ok((_, digits)) => digits.parse().unwrap_or(if digits.starts_with('-') {
            i32::MIN
        } else {
            i32::MAX
        }),
        Err(_) => 0,
    }
}

/// Applies the 1/2/3/4-value positional rule.
fn edges_from_tokens(tokens: &[&str]) -> Option<BoxEdges> {
    let edges = match *tokens {
        [all] => BoxEdges::all(token_to_int(all)),
        [vertical, horizontal] => {
            BoxEdges::symmetric(token_to_int(vertical), token_to_int(horizontal))
        }
        [top, horizontal, bottom] => {
            let horizontal = token_to_int(horizontal);
            BoxEdges::new(
                token_to_int(top),
                horizontal,
                token_to_int(bottom),
                horizontal,
            )
        }
        [top, right, bottom, left] => BoxEdges::new(
            token_to_int(top),
            token_to_int(right),
            token_to_int(bottom),
            token_to_int(left),
        ),
        _ => return None,
    };
    Some(edges)
}

/// Parses box-edges shorthand.
///
/// | Tokens | Result |
/// |--------|--------|
/// | 1 | every edge |
/// | 2 | top/bottom, then left/right |
/// | 3 | top, left/right, bottom |
/// | 4 | top, right, bottom, left |
///
/// Any other token count gives all-zero edges, silently, as does empty text.
/// Tokens that are not numbers read as zero.
///
/// # Example
///
/// ```rust
/// use livery_values::{BoxEdges, parse_box_edges};
///
/// assert_eq!(parse_box_edges("1 2 3"), BoxEdges::new(1, 2, 3, 2));
/// assert_eq!(parse_box_edges("1 2 3 4 5"), BoxEdges::ZERO);
/// assert_eq!(parse_box_edges("abc"), BoxEdges::ZERO);
/// ```
#[must_use]
pub fn parse_box_edges(text: &str) -> BoxEdges {
    let tokens: Vec<&str> = text.split(' ').collect();
    edges_from_tokens(&tokens).unwrap_or_default()
}

fn is_url_separator(c: char) -> bool {
    matches!(c, ' ' | '(' | ')' | '"' | '\'')
}

/// Directory component of `path`, following the `g_path_get_dirname` rules.
fn dirname(path: &str) -> &str {
    let Some(last) = path.rfind('/') else {
        return ".";
    };
    let parent = path[..=last].trim_end_matches('/');
    if parent.is_empty() { "/" } else { parent }
}

fn resolve_uri(path: &str, base_path: &str) -> String {
    if path.starts_with('/') {
        String::from(path)
    } else {
        format!("{}/{}", dirname(base_path), path)
    }
}

/// Parses bordered-image shorthand, reporting malformed input.
///
/// The quoted form `url("<path>") <edges>` splits into `url`, an empty
/// token, the path, two empty tokens, then the edge tokens. The edges are
/// read by exact total token count:
///
/// | Total tokens | Edge form |
/// |--------------|-----------|
/// | 6 | one value |
/// | 7 | two values |
/// | 8 | three values |
/// | 9 | four values |
///
/// Any other count leaves the insets at zero. The bare form
/// `url(<path>) <edges>` is the same table shifted down by two tokens.
///
/// Relative paths resolve against the directory of `base_path`.
///
/// # Errors
///
/// Returns [`ShorthandError::NotUrl`] when the text does not start with a
/// `url` token, and [`ShorthandError::MissingPath`] when it has no path.
pub fn try_parse_bordered_image(
    text: &str,
    base_path: &str,
) -> Result<BorderedImage, ShorthandError> {
    if text == "none" {
        return Ok(BorderedImage::default());
    }

    let tokens: Vec<&str> = text.split(is_url_separator).collect();
    if tokens.len() < 2 || tokens[0] != "url" {
        return Err(ShorthandError::NotUrl(String::from(text)));
    }

    let (path, edge_tokens): (&str, &[&str]) = if tokens[1].is_empty() {
        let path = tokens.get(2).copied().unwrap_or_default();
        let edges: &[&str] = match tokens.len() {
            6..=9 => &tokens[5..],
            _ => &[],
        };
        (path, edges)
    } else {
        let edges: &[&str] = match tokens.len() {
            4..=7 => &tokens[3..],
            _ => &[],
        };
        (tokens[1], edges)
    };

    if path.is_empty() {
        return Err(ShorthandError::MissingPath(String::from(text)));
    }

    Ok(BorderedImage {
        uri: resolve_uri(path, base_path),
        edges: edges_from_tokens(edge_tokens).unwrap_or_default(),
    })
}

/// Parses bordered-image shorthand, degrading to the empty value.
///
/// This is [`try_parse_bordered_image`] with malformed input logged as a
/// warning and replaced by [`BorderedImage::default`].
///
/// # Example
///
/// ```rust
/// use livery_values::{BoxEdges, parse_bordered_image};
///
/// let image = parse_bordered_image("url(\"/abs/img.png\") 1 2 3 4", "/a/b/style.css");
/// assert_eq!(image.uri, "/abs/img.png");
/// assert_eq!(image.edges, BoxEdges::new(1, 2, 3, 4));
///
/// assert!(parse_bordered_image("none", "/any/path").is_none());
/// assert!(parse_bordered_image("gradient(red)", "/any/path").is_none());
/// ```
#[must_use]
pub fn parse_bordered_image(text: &str, base_path: &str) -> BorderedImage {
    try_parse_bordered_image(text, base_path).unwrap_or_else(|err| {
        warn!("{err}");
        BorderedImage::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_to_int_is_permissive() {
        assert_eq!(token_to_int("42"), 42);
        assert_eq!(token_to_int("-7"), -7);
        assert_eq!(token_to_int("+7"), 7);
        assert_eq!(token_to_int("12px"), 12);
        assert_eq!(token_to_int("px"), 0);
        assert_eq!(token_to_int(""), 0);
        assert_eq!(token_to_int("99999999999"), i32::MAX);
        assert_eq!(token_to_int("-99999999999"), i32::MIN);
    }

    #[test]
    fn box_edges_positional_forms() {
        assert_eq!(parse_box_edges("10"), BoxEdges::all(10));
        assert_eq!(parse_box_edges("10 20"), BoxEdges::new(10, 20, 10, 20));
        assert_eq!(parse_box_edges("1 2 3"), BoxEdges::new(1, 2, 3, 2));
        assert_eq!(parse_box_edges("1 2 3 4"), BoxEdges::new(1, 2, 3, 4));
    }

    #[test]
    fn box_edges_fallbacks() {
        assert_eq!(parse_box_edges(""), BoxEdges::ZERO);
        assert_eq!(parse_box_edges("1 2 3 4 5"), BoxEdges::ZERO);
        assert_eq!(parse_box_edges("a b"), BoxEdges::ZERO);
    }

    #[test]
    fn box_edges_keep_empty_tokens() {
        // The doubled space makes a zero-valued middle token.
        assert_eq!(parse_box_edges("10  20"), BoxEdges::new(10, 0, 20, 0));
    }

    #[test]
    fn box_edges_display_parse_round_trip() {
        for edges in [
            BoxEdges::ZERO,
            BoxEdges::all(3),
            BoxEdges::new(1, -2, 3, -4),
        ] {
            assert_eq!(parse_box_edges(&format!("{edges}")), edges);
        }
    }

    #[test]
    fn box_edges_ignore_trailing_line_breaks() {
        assert_eq!(parse_box_edges("10 20\n"), BoxEdges::new(10, 20, 10, 20));
        assert_eq!(parse_box_edges("1 2 3 4\n"), BoxEdges::new(1, 2, 3, 4));
        assert_eq!(parse_box_edges("1 2 3\t"), BoxEdges::new(1, 2, 3, 2));
        // A tab is not a separator, so this is one token.
        assert_eq!(parse_box_edges("7\t8"), BoxEdges::all(7));
    }

    #[test]
    fn dirname_follows_glib() {
        assert_eq!(dirname("/a/b/style.css"), "/a/b");
        assert_eq!(dirname("/style.css"), "/");
        assert_eq!(dirname("style.css"), ".");
        assert_eq!(dirname("a//b"), "a");
        assert_eq!(dirname(""), ".");
    }

    #[test]
    fn bordered_image_none() {
        assert_eq!(
            try_parse_bordered_image("none", "/any/path"),
            Ok(BorderedImage::default())
        );
    }

    #[test]
    fn bordered_image_relative_path() {
        let image = parse_bordered_image("url(\"img.png\") 3", "/a/b/style.css");
        assert_eq!(image.uri, "/a/b/img.png");
        assert_eq!(image.edges, BoxEdges::all(3));
    }

    #[test]
    fn bordered_image_absolute_path() {
        let image = parse_bordered_image("url(\"/abs/img.png\") 1 2 3 4", "/a/b/style.css");
        assert_eq!(image.uri, "/abs/img.png");
        assert_eq!(image.edges, BoxEdges::new(1, 2, 3, 4));
    }

    #[test]
    fn bordered_image_token_table() {
        let base = "/theme/style.css";
        assert_eq!(
            parse_bordered_image("url('a.png') 1 2", base).edges,
            BoxEdges::symmetric(1, 2)
        );
        assert_eq!(
            parse_bordered_image("url('a.png') 1 2 3", base).edges,
            BoxEdges::new(1, 2, 3, 2)
        );
        // No edges, and too many edges, both leave zero insets.
        let bare = parse_bordered_image("url(\"a.png\")", base);
        assert_eq!(bare.uri, "/theme/a.png");
        assert_eq!(bare.edges, BoxEdges::ZERO);
        assert_eq!(
            parse_bordered_image("url(\"a.png\") 1 2 3 4 5", base).edges,
            BoxEdges::ZERO
        );
    }

    #[test]
    fn bordered_image_unquoted_path() {
        let image = parse_bordered_image("url(img.png) 1 2 3 4", "/a/b/style.css");
        assert_eq!(image.uri, "/a/b/img.png");
        assert_eq!(image.edges, BoxEdges::new(1, 2, 3, 4));

        let image = parse_bordered_image("url(img.png) 5", "style.css");
        assert_eq!(image.uri, "./img.png");
        assert_eq!(image.edges, BoxEdges::all(5));
    }

    #[test]
    fn bordered_image_ignores_trailing_line_breaks() {
        let image = parse_bordered_image("url(\"/a.png\") 1 2 3 4\n", "/x/y.css");
        assert_eq!(image.uri, "/a.png");
        assert_eq!(image.edges, BoxEdges::new(1, 2, 3, 4));

        let image = parse_bordered_image("url(\"/a.png\") 5\t", "/x/y.css");
        assert_eq!(image.edges, BoxEdges::all(5));
    }

    #[test]
    fn bordered_image_display_parses_back() {
        for image in [
            BorderedImage::new("/a.png", BoxEdges::new(1, 2, 3, 4)),
            BorderedImage::default(),
            BorderedImage::new("", BoxEdges::all(2)),
        ] {
            let parsed = try_parse_bordered_image(&format!("{image}"), "/x/y.css");
            let expected = if image.uri.is_empty() {
                BorderedImage::default()
            } else {
                image
            };
            assert_eq!(parsed, Ok(expected));
        }
    }

    #[test]
    fn bordered_image_malformed() {
        assert_eq!(
            try_parse_bordered_image("image.png 1 2", "/a/style.css"),
            Err(ShorthandError::NotUrl(String::from("image.png 1 2")))
        );
        assert_eq!(
            try_parse_bordered_image("url", "/a/style.css"),
            Err(ShorthandError::NotUrl(String::from("url")))
        );
        assert_eq!(
            try_parse_bordered_image("url(\"\") 1", "/a/style.css"),
            Err(ShorthandError::MissingPath(String::from("url(\"\") 1")))
        );
        // Two tokens with nothing at the path position must not panic.
        assert_eq!(
            try_parse_bordered_image("url(", "/a/style.css"),
            Err(ShorthandError::MissingPath(String::from("url(")))
        );
        assert!(parse_bordered_image("", "/a/style.css").is_none());
    }

    #[test]
    fn bordered_image_is_idempotent() {
        let text = "url(\"img.png\") 1 2";
        assert_eq!(
            parse_bordered_image(text, "/x/y.css"),
            parse_bordered_image(text, "/x/y.css")
        );
    }
}
