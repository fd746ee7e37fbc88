pub mod interface;
pub mod remote;
pub mod factory;
pub mod cell;

pub use factory::ModelFactory;
pub use cell::{ModelCell, ModelLoader};
