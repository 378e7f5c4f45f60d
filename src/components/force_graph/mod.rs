//! Interactive force-directed view of the portfolio.

mod component;
mod construct;
mod forces;
mod render;
pub mod scale;
mod state;
mod types;

pub use component::ForceGraphCanvas;
pub use construct::{CENTER_COLOR, HOBBY_COLOR, SKILL_COLOR, build_graph};
pub use forces::ForceConfig;
pub use state::ForceGraphState;
pub use types::{CENTER_ID, GraphData, GraphLink, GraphNode, Group, HoverInfo, LinkKind};
