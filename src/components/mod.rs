pub mod flip_card;
pub mod floating_shapes;
pub mod force_graph;
pub mod image_modal;
pub mod reveal;
pub mod typing;
