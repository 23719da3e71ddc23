pub mod neuron;
pub mod layer;
pub mod network;

pub use neuron::Neuron;
pub use layer::Layer;
pub use network::Network;
