//! Inline svg logo substitution.
//!
//! Replaces the `<img>` of a rendered fragment with the markup of the svg
//! it stands for, so the logo's paths can be styled from CSS.
//!
//! # Pipeline
//!
//! Each step gives up by returning the fragment untouched:
//!
//! 1. a logo path is configured
//! 2. the path ends in `.svg`
//! 3. the file reads as non-blank UTF-8
//! 4. the fragment contains an `<img>` tag
//! 5. `class`, `id`, `style`, `width`, `height` and `alt` are taken from it
//! 6. the file contains an `<svg>` root
//! 7. the root opening tag is rebuilt with those attributes, `alt` as
//!    `aria-label`, plus `role="img"`
//! 8. the `<img>` span is swapped for the prepared markup
//!
//! Nothing is cached: every call reads the file again.

mod attrs;

pub use attrs::Transplant;

use regex::Regex;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::config::LogoConfig;
use crate::debug;
use crate::utils::html::{escape_attr, parse_attributes, unescape};
use crate::utils::path::has_extension;

/// First `<img ...>` tag; group 1 is the attribute string. Quoted values
/// may contain `>`.
static IMG_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<img\b((?:[^>"']|"[^"]*"|'[^']*')*?)/?>"#).expect("valid img regex")
});

/// The `<svg ...>` root opening tag; group 1 is the attribute string, group 2
/// the self-closing slash.
static SVG_ROOT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<svg\b((?:[^>"']|"[^"]*"|'[^']*')*?)(/?)>"#).expect("valid svg regex")
});

/// Leading whitespace, BOM, `<?...?>`, comments and doctype of an svg file.
static PROLOG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\A(?:\s|\x{FEFF}|<\?.*?\?>|<!--.*?-->|<!doctype\b(?:[^>\[]|\[.*?\])*>)*")
        .expect("valid prolog regex")
});

/// Substitute the first `<img>` of `fragment` with the svg at `logo`.
pub fn inline_svg<'a>(fragment: &'a str, logo: Option<&Path>) -> Cow<'a, str> {
    match try_inline(fragment, logo) {
        Some(html) => Cow::Owned(html),
        None => Cow::Borrowed(fragment),
    }
}

/// Block render hook: substitute only inside configured blocks.
pub fn render_block<'a>(config: &LogoConfig, block_name: &str, html: &'a str) -> Cow<'a, str> {
    if !config.handles_block(block_name) {
        return Cow::Borrowed(html);
    }
    inline_svg(html, config.source())
}

fn try_inline(fragment: &str, logo: Option<&Path>) -> Option<String> {
    let Some(path) = logo else {
        debug!("inline"; "skip: no logo configured");
        return None;
    };

    if !has_extension(path, "svg") {
        debug!("inline"; "skip: {} is not an svg", path.display());
        return None;
    }

    let svg = match fs::read_to_string(path) {
        Ok(content) if !content.trim().is_empty() => content,
        Ok(_) => {
            debug!("inline"; "skip: {} is empty", path.display());
            return None;
        }
        Err(err) => {
            debug!("inline"; "skip: cannot read {}: {}", path.display(), err);
            return None;
        }
    };

    let Some(img) = IMG_TAG.captures(fragment) else {
        debug!("inline"; "skip: no <img> in fragment");
        return None;
    };
    let span = img.get(0)?.range();
    let transplants = attrs::extract(img.get(1).map_or("", |m| m.as_str()));

    let Some(markup) = prepare_svg(&svg, &transplants) else {
        debug!("inline"; "skip: no <svg> root in {}", path.display());
        return None;
    };

    let mut out = String::with_capacity(fragment.len() + markup.len());
    out.push_str(&fragment[..span.start]);
    out.push_str(&markup);
    out.push_str(&fragment[span.end..]);
    Some(out)
}

/// Rebuild the svg root tag with the transplanted attributes.
///
/// Anything before the root (xml prolog, doctype, comments) is dropped.
/// Root attributes that a transplant also sets are replaced.
fn prepare_svg(svg: &str, transplants: &[(Transplant, String)]) -> Option<String> {
    let prolog_end = PROLOG.find(svg).map_or(0, |m| m.end());
    let svg = &svg[prolog_end..];
    let root = SVG_ROOT.captures(svg)?;
    let open = root.get(0)?;
    let self_closing = root.get(2).is_some_and(|m| !m.as_str().is_empty());
    let overrides = attrs::svg_overrides(transplants);

    let mut tag = String::from("<svg");
    for (name, value) in parse_attributes(root.get(1).map_or("", |m| m.as_str())) {
        if overrides.iter().any(|(n, _)| n.eq_ignore_ascii_case(&name)) {
            continue;
        }
        tag.push_str(&format!(" {name}=\"{}\"", escape_attr(&unescape(&value))));
    }
    for (name, value) in &overrides {
        tag.push_str(&format!(" {name}=\"{value}\""));
    }
    tag.push_str(if self_closing { "/>" } else { ">" });

    let body = svg[open.end()..].trim_end();
    Some(format!("{tag}{body}"))
}
