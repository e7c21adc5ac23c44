//! Tonight layout: greedy flow packing and the genre tag list built on it.
//!
//! Both halves are pure functions of their inputs. Nothing is cached between
//! passes; callers re-run the layout whenever the tags or the width change.

pub mod flow;
pub mod tags;

pub use flow::{
    layout, AlignScope, Alignment, FlowItem, FlowLayout, FlowResult, LayoutConstraints,
    PositionedItem, Row, Size,
};
pub use tags::{render_tag_flow, Chip, Measure, RenderableBlock, TagStyle};
