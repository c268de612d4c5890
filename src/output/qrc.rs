//! Qt resource-collection manifest generation
//!
//! Several subcommands emit a `.qrc` manifest enumerating the data files
//! they wrote, so the consuming application can embed them as resources.

use crate::error::Result;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Render a resource manifest listing the given files under a prefix.
///
/// File names are sorted and deduplicated; paths are relative to the
/// manifest location.
pub fn render_qrc(prefix: &str, files: &[String]) -> String {
    let mut names: Vec<&str> = files.iter().map(String::as_str).collect();
    names.sort_unstable();
    names.dedup();

    let mut out = String::from(
        "<!--\n    SPDX-FileCopyrightText: none\n    SPDX-License-Identifier: CC0-1.0\n-->\n<RCC>\n",
    );
    let _ = writeln!(out, "  <qresource prefix=\"{}\">", prefix);
    for name in names {
        let _ = writeln!(out, "    <file>{}</file>", name);
    }
    out.push_str("  </qresource>\n</RCC>\n");
    out
}

/// Write a resource manifest next to the emitted files.
pub fn write_qrc(path: &Path, prefix: &str, files: &[String]) -> Result<()> {
    fs::write(path, render_qrc(prefix, files))?;
    Ok(())
}
