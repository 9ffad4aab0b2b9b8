//! Text and JSON rendering for CLI results.

use std::io::{self, Write};

use serde::Serialize;

use crate::core::breadcrumb::ResolvedCrumb;
use crate::core::nav::ResolvedLink;

const CRUMB_SEPARATOR: &str = " / ";

/// One line per link: `* Label  /path  style-token`, `*` marking the active one.
pub fn write_links(out: &mut impl Write, links: &[ResolvedLink]) -> io::Result<()> {
    let width = links
        .iter()
        .map(|l| l.label.chars().count())
        .max()
        .unwrap_or(0);

    for link in links {
        let marker = if link.active { '*' } else { ' ' };
        writeln!(
            out,
            "{marker} {:<width$}  {}  {}",
            link.label, link.path, link.style
        )?;
    }
    Ok(())
}

/// `Home / Projects / [New]`, with the active crumb in brackets.
pub fn breadcrumb_line(crumbs: &[ResolvedCrumb]) -> String {
    let mut line = String::new();
    for crumb in crumbs {
        if crumb.active {
            line.push('[');
            line.push_str(&crumb.label);
            line.push(']');
        } else {
            line.push_str(&crumb.label);
        }
        if !crumb.is_last {
            line.push_str(CRUMB_SEPARATOR);
        }
    }
    line
}

pub fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::from)?;
    writeln!(out)
}
