//! Built-in demonstrations

mod chain_of_responsibility;
mod state;

pub use chain_of_responsibility::ChainOfResponsibility;
pub use state::StateDemo;
