pub mod activation;
pub mod errors;
pub mod network;
pub mod loss;
pub mod train;

// Convenience re-exports
pub use activation::activation::sigmoid;
pub use errors::network_error::NetworkError;
pub use network::neuron::Neuron;
pub use network::layer::Layer;
pub use network::network::Network;
pub use loss::mse::MseLoss;
pub use train::loop_fn::train_loop;
pub use train::train_config::TrainConfig;
pub use train::epoch_stats::EpochStats;
