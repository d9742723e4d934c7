//! Grid track solver.
//!
//! Pure functions over one axis at a time. The measure step turns the desired
//! extents of a grid's children into per-track content sizes; the distribute
//! step turns content sizes and the space actually available into final track
//! sizes; [`positions`] lays the tracks end to end.
//!
//! An empty proportion list is treated as a single `Fill(1)` track, see
//! [`effective_proportions`].

use std::borrow::Cow;

use super::proportion::Proportion;

const IMPLICIT: &[Proportion] = &[Proportion::FILL];

/// One child's requirement along an axis: it covers `span` tracks starting at
/// `start` and wants `extent` pixels across them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackRequest {
    pub start: usize,
    pub span: usize,
    pub extent: i32,
}

impl TrackRequest {
    pub fn new(start: usize, span: usize, extent: i32) -> Self {
        Self { start, span: span.max(1), extent }
    }
}

/// Start coordinate and size of an arranged track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackExtent {
    pub offset: i32,
    pub size: i32,
}

impl TrackExtent {
    pub fn end(self) -> i32 {
        self.offset.saturating_add(self.size)
    }
}

/// The proportions a grid axis actually lays out.
pub fn effective_proportions(proportions: &[Proportion]) -> Cow<'_, [Proportion]> {
    if proportions.is_empty() {
        Cow::Borrowed(IMPLICIT)
    } else {
        Cow::Borrowed(proportions)
    }
}

/// Total pixels taken by `count` gaps of `spacing` between tracks.
fn gaps(count: usize, spacing: i32) -> i32 {
    spacing
        .max(0)
        .saturating_mul(i32::try_from(count.saturating_sub(1)).unwrap_or(i32::MAX))
}

/// Content size of every track.
///
/// Fixed tracks take their declared size. Auto and Fill tracks take the
/// largest extent of any single-span request they hold. A spanning request
/// subtracts the Fixed tracks and gaps it covers, then splits what is left
/// evenly across its Auto tracks (or its Fill tracks when it covers no Auto
/// track); remainder pixels go to the earliest tracks.
///
/// Requests must start inside `proportions`; spans running past the end are
/// clamped.
pub fn measure_tracks(proportions: &[Proportion], requests: &[TrackRequest], spacing: i32) -> Vec<i32> {
    let mut sizes: Vec<i32> = proportions
        .iter()
        .map(|p| match p {
            Proportion::Fixed(px) => (*px).max(0),
            _ => 0,
        })
        .collect();

    for req in requests.iter().filter(|r| r.span == 1) {
        if let Some(Proportion::Auto | Proportion::Fill(_)) = proportions.get(req.start) {
            sizes[req.start] = sizes[req.start].max(req.extent);
        }
    }

    for req in requests.iter().filter(|r| r.span > 1) {
        let end = req.start.saturating_add(req.span).min(proportions.len());
        if req.start >= end {
            continue;
        }
        let covered = &proportions[req.start..end];

        let fixed: i32 = covered
            .iter()
            .map(|p| match p {
                Proportion::Fixed(px) => (*px).max(0),
                _ => 0,
            })
            .fold(0i32, i32::saturating_add);
        let needed = req
            .extent
            .saturating_sub(fixed)
            .saturating_sub(gaps(covered.len(), spacing));
        if needed <= 0 {
            continue;
        }

        let auto: Vec<usize> = (req.start..end)
            .filter(|&i| proportions[i] == Proportion::Auto)
            .collect();
        let targets = if auto.is_empty() {
            (req.start..end).filter(|&i| proportions[i].is_fill()).collect()
        } else {
            auto
        };
        if targets.is_empty() {
            continue;
        }

        let count = targets.len() as i32;
        let share = needed / count;
        let remainder = needed % count;
        for (k, &track) in targets.iter().enumerate() {
            let extra = i32::from((k as i32) < remainder);
            sizes[track] = sizes[track].max(share + extra);
        }
    }

    sizes
}

/// Sum of track sizes plus the gaps between them.
pub fn total_extent(sizes: &[i32], spacing: i32) -> i32 {
    sizes
        .iter()
        .fold(0i32, |total, &size| total.saturating_add(size))
        .saturating_add(gaps(sizes.len(), spacing))
}

/// Final track sizes for `available` pixels.
///
/// Fixed and Auto tracks keep their content size. What remains after them and
/// the gaps, clamped at zero, is split across Fill tracks by weight. Splitting
/// rounds the running total rather than each share, so Fill sizes always add
/// up to exactly the remainder. When no Fill track has a positive weight they
/// all get zero. Overflow is not renegotiated: Fixed and Auto tracks keep their
/// size and the excess is clipped by the caller.
pub fn distribute(proportions: &[Proportion], content: &[i32], available: i32, spacing: i32) -> Vec<i32> {
    debug_assert_eq!(proportions.len(), content.len());

    let fixed_and_auto: i32 = proportions
        .iter()
        .zip(content)
        .filter(|(p, _)| !p.is_fill())
        .fold(0i32, |total, (_, &size)| total.saturating_add(size));
    let remaining = available
        .saturating_sub(fixed_and_auto)
        .saturating_sub(gaps(proportions.len(), spacing))
        .max(0);
    let total_weight: f64 = proportions.iter().map(|p| p.weight()).sum();
    let last_fill = proportions.iter().rposition(|p| p.weight() > 0.0);

    let mut running = 0.0;
    let mut assigned = 0;
    proportions
        .iter()
        .zip(content)
        .enumerate()
        .map(|(i, (p, &size))| {
            if !p.is_fill() {
                return size;
            }
            let weight = p.weight();
            if weight <= 0.0 {
                return 0;
            }
            running += weight;
            let target = if Some(i) == last_fill {
                remaining
            } else {
                (f64::from(remaining) * (running / total_weight)).round() as i32
            };
            let share = target - assigned;
            assigned = target;
            share
        })
        .collect()
}

/// Lay tracks end to end from `start`, separated by `spacing`.
pub fn positions(start: i32, sizes: &[i32], spacing: i32) -> Vec<TrackExtent> {
    let spacing = spacing.max(0);
    let mut offset = start;
    sizes
        .iter()
        .map(|&size| {
            let extent = TrackExtent { offset, size };
            offset = offset.saturating_add(size).saturating_add(spacing);
            extent
        })
        .collect()
}

/// Offset and length of the union of `span` tracks starting at `start`.
///
/// The span is clamped to the tracks that exist. Returns `None` when `start`
/// is out of range.
pub fn span_extent(extents: &[TrackExtent], start: usize, span: usize) -> Option<(i32, i32)> {
    let first = extents.get(start)?;
    let last_index = start.saturating_add(span.max(1) - 1).min(extents.len() - 1);
    let last = extents[last_index];
    Some((first.offset, last.end() - first.offset))
}

// ===========================================================================
// Tests
// ===========================================================================
