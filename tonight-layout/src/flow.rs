//! Flow layout: greedy left-to-right packing with row wrapping.

use serde::Deserialize;
use tracing::{debug, trace};

/// A width/height pair in device-independent units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Horizontal placement of a row inside the available width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Leading,
    Center,
    Trailing,
}

/// Which rows the alignment applies to. Rows it does not apply to are leading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignScope {
    #[default]
    AllRows,
    LastRow,
}

/// A sized unit to be placed. The id is opaque to the layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowItem {
    pub id: usize,
    pub width: f32,
    pub height: f32,
}

impl FlowItem {
    pub fn new(id: usize, width: f32, height: f32) -> Self {
        Self { id, width, height }
    }
}

/// Packing constraints. Height is unconstrained.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConstraints {
    pub available_width: f32,
    pub horizontal_spacing: f32,
    pub vertical_spacing: f32,
    pub alignment: Alignment,
    pub align_scope: AlignScope,
}

impl Default for LayoutConstraints {
    fn default() -> Self {
        Self {
            available_width: 0.0,
            horizontal_spacing: 8.0,
            vertical_spacing: 8.0,
            alignment: Alignment::Leading,
            align_scope: AlignScope::AllRows,
        }
    }
}

impl LayoutConstraints {
    pub fn new(available_width: f32) -> Self {
        Self {
            available_width,
            ..Self::default()
        }
    }

    pub fn spacing(mut self, horizontal: f32, vertical: f32) -> Self {
        self.horizontal_spacing = horizontal;
        self.vertical_spacing = vertical;
        self
    }

    pub fn aligned(mut self, alignment: Alignment, scope: AlignScope) -> Self {
        self.alignment = alignment;
        self.align_scope = scope;
        self
    }

    /// Copy with every dimension clamped to a finite, non-negative value.
    fn sanitized(&self) -> Self {
        Self {
            available_width: clamp_width(self.available_width),
            horizontal_spacing: clamp_dim(self.horizontal_spacing),
            vertical_spacing: clamp_dim(self.vertical_spacing),
            ..*self
        }
    }
}

/// An item with its top-left offset inside the layout bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionedItem {
    pub id: usize,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// One line of the flow.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub items: Vec<PositionedItem>,
    /// Sum of item widths plus the spacing between them.
    pub width: f32,
    /// Tallest item in the row.
    pub height: f32,
    /// Offset of the row's top edge.
    pub top: f32,
}

impl Row {
    pub fn ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().map(|item| item.id)
    }
}

/// Result of one layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowResult {
    pub rows: Vec<Row>,
    pub size: Size,
}

impl FlowResult {
    /// All positioned items in input order.
    pub fn positioned(&self) -> impl Iterator<Item = &PositionedItem> + '_ {
        self.rows.iter().flat_map(|row| row.items.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reusable layout configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlowLayout {
    pub constraints: LayoutConstraints,
}

impl FlowLayout {
    pub fn new(constraints: LayoutConstraints) -> Self {
        Self { constraints }
    }

    pub fn layout(&self, items: &[FlowItem]) -> FlowResult {
        layout(items, &self.constraints)
    }
}

/// Like `clamp_dim`, but an unbounded width stays the widest finite one.
fn clamp_width(v: f32) -> f32 {
    if v == f32::INFINITY {
        f32::MAX
    } else {
        clamp_dim(v)
    }
}

fn clamp_dim(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

/// Lay out `items` inside `constraints`.
///
/// An item that is wider than the available width still gets a row of its
/// own and overflows it. A non-positive available width puts every item on
/// its own row. Negative or non-finite dimensions are treated as zero,
/// except an infinite available width, which becomes `f32::MAX`.
pub fn layout(items: &[FlowItem], constraints: &LayoutConstraints) -> FlowResult {
    let c = constraints.sanitized();
    if c != *constraints {
        debug!(?constraints, "clamped invalid layout constraints");
    }
    let avail = c.available_width;
    let gap = c.horizontal_spacing;

    // Pass 1: break into lines.
    let mut lines: Vec<(Vec<FlowItem>, f32)> = Vec::new();
    let mut current: Vec<FlowItem> = Vec::new();
    let mut cursor_x = 0.0f32;

    for raw in items {
        let item = FlowItem {
            id: raw.id,
            width: clamp_dim(raw.width),
            height: clamp_dim(raw.height),
        };
        if item.width != raw.width || item.height != raw.height {
            debug!(id = raw.id, width = raw.width, height = raw.height, "clamped invalid item size");
        }

        if current.is_empty() {
            cursor_x = item.width;
            current.push(item);
            continue;
        }

        let fits = avail > 0.0 && cursor_x + gap + item.width <= avail;
        if fits {
            cursor_x += gap + item.width;
            current.push(item);
        } else {
            lines.push((std::mem::take(&mut current), cursor_x));
            cursor_x = item.width;
            current.push(item);
        }
    }
    if !current.is_empty() {
        lines.push((current, cursor_x));
    }

    // Pass 2: place rows.
    let last = lines.len().saturating_sub(1);
    let mut rows = Vec::with_capacity(lines.len());
    let mut top = 0.0f32;

    for (index, (line, row_width)) in lines.into_iter().enumerate() {
        if index > 0 {
            top += c.vertical_spacing;
        }
        let height = line.iter().fold(0.0f32, |h, item| h.max(item.height));

        let aligned = match c.align_scope {
            AlignScope::AllRows => true,
            AlignScope::LastRow => index == last,
        };
        let slack = (avail - row_width).max(0.0);
        let offset = match (aligned, c.alignment) {
            (false, _) | (true, Alignment::Leading) => 0.0,
            (true, Alignment::Center) => slack / 2.0,
            (true, Alignment::Trailing) => slack,
        };

        let mut x = offset;
        let mut placed = Vec::with_capacity(line.len());
        for (i, item) in line.iter().enumerate() {
            if i > 0 {
                x += gap;
            }
            placed.push(PositionedItem {
                id: item.id,
                x,
                y: top,
                width: item.width,
                height: item.height,
            });
            x += item.width;
        }

        rows.push(Row {
            items: placed,
            width: row_width,
            height,
            top,
        });
        top += height;
    }

    let result = FlowResult {
        rows,
        size: Size::new(avail, top),
    };
    trace!(
        items = items.len(),
        rows = result.rows.len(),
        height = result.size.height,
        "flow layout pass"
    );
    result
}
