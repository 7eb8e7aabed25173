//! `themekit inline`: swap a fragment's `<img>` for the logo svg.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use super::InlineArgs;
use crate::config::ThemeConfig;
use crate::inline::{inline_svg, render_block};
use crate::{debug, log};

pub fn run_inline(args: &InlineArgs, config: &ThemeConfig) -> Result<()> {
    let fragment = read_fragment(args.fragment.as_deref())?;
    let html = transform(&fragment, args.block.as_deref(), config);

    if matches!(html, Cow::Borrowed(_)) {
        debug!("inline"; "fragment left unchanged");
    }

    if let Some(ref output_path) = args.output {
        fs::write(output_path, html.as_bytes())
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        log!("inline"; "wrote output to {}", output_path.display());
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(html.as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}

fn transform<'a>(fragment: &'a str, block: Option<&str>, config: &ThemeConfig) -> Cow<'a, str> {
    match block {
        Some(name) => render_block(&config.logo, name, fragment),
        None => inline_svg(fragment, config.logo.source()),
    }
}

/// Read the fragment from a file, or stdin for `-` / no path.
fn read_fragment(path: Option<&Path>) -> Result<String> {
    match path.filter(|p| *p != Path::new("-")) {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read fragment {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read fragment from stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogoConfig;
    use tempfile::TempDir;

    fn config_with_logo(dir: &TempDir) -> ThemeConfig {
        let logo = dir.path().join("logo.svg");
        fs::write(&logo, "<svg viewBox=\"0 0 2 2\"><rect/></svg>").unwrap();
        ThemeConfig {
            logo: LogoConfig {
                path: Some(logo),
                ..LogoConfig::default()
            },
            ..ThemeConfig::default()
        }
    }

    #[test]
    fn test_run_inline_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let config = config_with_logo(&dir);
        let fragment = dir.path().join("block.html");
        let output = dir.path().join("out.html");
        fs::write(&fragment, r#"<a href="/"><img class="custom-logo" alt="Acme"></a>"#).unwrap();

        let args = InlineArgs {
            fragment: Some(fragment),
            logo: None,
            block: None,
            output: Some(output.clone()),
        };
        run_inline(&args, &config).unwrap();

        assert_eq!(
            fs::read_to_string(output).unwrap(),
            r#"<a href="/"><svg viewBox="0 0 2 2" class="custom-logo" aria-label="Acme" role="img"><rect/></svg></a>"#
        );
    }

    #[test]
    fn test_transform_respects_block_name() {
        let dir = TempDir::new().unwrap();
        let config = config_with_logo(&dir);
        let fragment = "<img alt=\"x\">";

        assert_eq!(transform(fragment, Some("core/paragraph"), &config), fragment);
        assert!(transform(fragment, Some("core/site-logo"), &config).starts_with("<svg"));
        assert!(transform(fragment, None, &config).starts_with("<svg"));
    }

    #[test]
    fn test_read_fragment_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = read_fragment(Some(&dir.path().join("nope.html"))).unwrap_err();
        assert!(err.to_string().contains("nope.html"));
    }
}
