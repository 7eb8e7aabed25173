//! `themekit scroll`: replay offsets through the scroll annotator.
//!
//! Prints one JSON line per frame with the target element's state, then a
//! final line after `stop()`.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};

use super::ScrollArgs;
use crate::config::ThemeConfig;
use crate::debug;
use crate::scroll::{Element, ScrollObserver, ScrollSample, ScrollState};

#[derive(Debug, Serialize)]
struct FrameReport<'a> {
    frame: usize,
    /// Last offset delivered in this frame.
    offset: Option<f64>,
    running: bool,
    /// State published by this frame, absent when nothing was recomputed.
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<ScrollState>,
    html: String,
    element: &'a Element,
}

pub fn run_scroll(args: &ScrollArgs, config: &ThemeConfig) -> Result<()> {
    let mut stdout = io::stdout().lock();
    replay(args, config, &mut stdout)
}

fn replay(args: &ScrollArgs, config: &ThemeConfig, out: &mut impl Write) -> Result<()> {
    let sample = |offset: f64| ScrollSample::new(offset, args.viewport, args.content);

    let (first, rest) = args.frames.split_first().context("no frames given")?;
    let (&initial, first_tail) = first.0.split_first().context("empty first frame")?;

    let target = Element::new(config.scroll.target_tag());
    let mut observer = ScrollObserver::start(config.scroll.clone(), target, sample(initial));
    emit(out, args.pretty, 0, Some(initial), None, &observer)?;

    let bursts = std::iter::once(first_tail)
        .chain(rest.iter().map(|burst| burst.0.as_slice()))
        .filter(|burst| !burst.is_empty());

    let mut frame = 0;
    for burst in bursts {
        frame += 1;
        let mut scheduled = false;
        for &offset in burst {
            scheduled |= observer.notify(sample(offset));
        }
        let state = if scheduled { observer.frame() } else { None };
        debug!("scroll"; "frame {}: {} notification(s), recomputed: {}",
            frame, burst.len(), state.is_some());
        emit(out, args.pretty, frame, burst.last().copied(), state, &observer)?;
    }

    observer.stop();
    emit(out, args.pretty, frame + 1, None, None, &observer)?;
    Ok(())
}

fn emit(
    out: &mut impl Write,
    pretty: bool,
    frame: usize,
    offset: Option<f64>,
    state: Option<ScrollState>,
    observer: &ScrollObserver<Element>,
) -> Result<()> {
    let element = observer.target();
    let report = FrameReport {
        frame,
        offset,
        running: observer.is_running(),
        state,
        html: element.open_tag(),
        element,
    };
    let line = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    writeln!(out, "{line}")?;
    Ok(())
}
