//! Result lines: `"<name>: <colorName>."`, names in descending order.

use std::io::{self, Write};

use mapcolor_kernel::palette::display_name;
use mapcolor_kernel::region::RegionState;

/// Regions sorted by name, descending (byte-wise lexicographic).
#[must_use]
pub fn descending_by_name(regions: &[RegionState]) -> Vec<&RegionState> {
    let mut sorted: Vec<&RegionState> = regions.iter().collect();
    sorted.sort_by(|a, b| b.name().cmp(a.name()));
    sorted
}

/// One formatted line per region, in output order.
#[must_use]
pub fn format_lines(regions: &[RegionState]) -> Vec<String> {
    descending_by_name(regions)
        .into_iter()
        .map(|r| format!("{}: {}.", r.name(), display_name(r.color())))
        .collect()
}

/// Write every line followed by `\n`.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn write_output<W: Write>(out: &mut W, regions: &[RegionState]) -> io::Result<()> {
    for line in format_lines(regions) {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
