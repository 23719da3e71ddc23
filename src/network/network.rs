use rand::Rng;

use crate::activation::activation::sigmoid_derivative;
use crate::errors::network_error::NetworkError;
use crate::network::layer::Layer;

/// A feed-forward network: an ordered sequence of layers, a fixed learning
/// rate, and a validity flag decided once at construction.
///
/// Both `run` and `train_step` mutate the network in place (neuron values
/// always; deltas, biases and weights only during a train step). There is no
/// internal synchronization; a network must not be driven from multiple
/// threads at once.
#[derive(Debug, Clone)]
pub struct Network {
    layers: Vec<Layer>,
    learning_rate: f64,
    valid: bool,
}

impl Network {
    /// Builds a network with one layer per entry of `layer_sizes` (first =
    /// input width, last = output width), drawing initial parameters from
    /// the thread-local generator.
    pub fn new(learning_rate: f64, layer_sizes: &[usize]) -> Network {
        Network::with_rng(learning_rate, layer_sizes, &mut rand::thread_rng())
    }

    /// Builds a network drawing every non-input bias and weight from `rng`
    /// as an independent uniform value in [0, 1). Seed the generator to get
    /// reproducible networks.
    ///
    /// Fewer than two layer sizes (no input/output pair) yields an invalid
    /// network: it is still returned, but every operation on it fails with
    /// [`NetworkError::InvalidNetwork`]. Zero-neuron layers are permitted
    /// and simply propagate no data.
    pub fn with_rng<R: Rng>(learning_rate: f64, layer_sizes: &[usize], rng: &mut R) -> Network {
        if layer_sizes.len() < 2 {
            return Network {
                layers: Vec::new(),
                learning_rate,
                valid: false,
            };
        }

        let mut layers = Vec::with_capacity(layer_sizes.len());
        layers.push(Layer::input(layer_sizes[0]));
        for i in 1..layer_sizes.len() {
            layers.push(Layer::dense(layer_sizes[i], layer_sizes[i - 1], rng));
        }

        Network {
            layers,
            learning_rate,
            valid: true,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Full layer/neuron structure, for external formatters.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Input-layer values as of the last run (empty for an invalid network).
    pub fn input_values(&self) -> Vec<f64> {
        self.layers.first().map(Layer::values).unwrap_or_default()
    }

    /// Output-layer values as of the last run (empty for an invalid network).
    pub fn output_values(&self) -> Vec<f64> {
        self.layers.last().map(Layer::values).unwrap_or_default()
    }

    /// Forward pass: copies `inputs` into the input layer, then for every
    /// later layer computes each neuron's weighted sum of previous-layer
    /// values plus bias and applies the sigmoid in place. The result is
    /// readable through `output_values`.
    ///
    /// All-or-nothing: validity and input width are checked before any
    /// neuron is touched.
    pub fn run(&mut self, inputs: &[f64]) -> Result<(), NetworkError> {
        self.ensure_valid()?;

        let input_width = self.layers[0].len();
        if inputs.len() != input_width {
            return Err(NetworkError::InputShapeMismatch {
                expected: input_width,
                got: inputs.len(),
            });
        }

        for (neuron, &input) in self.layers[0].neurons.iter_mut().zip(inputs) {
            neuron.value = input;
        }

        for i in 1..self.layers.len() {
            let (prev, rest) = self.layers.split_at_mut(i);
            let prev = &prev[i - 1];
            for neuron in &mut rest[0].neurons {
                let mut sum = neuron.bias;
                for (k, weight) in neuron.weights.iter().enumerate() {
                    sum += prev.neurons[k].value * weight;
                }
                neuron.value = sum;
                neuron.activate();
            }
        }

        Ok(())
    }

    /// One online gradient-descent step: a forward pass on `inputs`, then
    /// the logistic delta rule against `targets`, then the parameter update
    /// `bias += lr * delta`, `weights[k] += lr * prev_value[k] * delta`.
    ///
    /// All deltas are computed from the forward-pass snapshot before any
    /// parameter changes; shape mismatches fail before anything is mutated.
    pub fn train_step(&mut self, inputs: &[f64], targets: &[f64]) -> Result<(), NetworkError> {
        self.ensure_valid()?;

        let output_width = self.layers[self.layers.len() - 1].len();
        if targets.len() != output_width {
            return Err(NetworkError::TargetShapeMismatch {
                expected: output_width,
                got: targets.len(),
            });
        }

        // Checks the input width itself, so a bad input still mutates nothing.
        self.run(inputs)?;

        let last = self.layers.len() - 1;

        // Output layer: delta = value * (1 - value) * (target - value).
        for (neuron, &target) in self.layers[last].neurons.iter_mut().zip(targets) {
            neuron.delta = sigmoid_derivative(neuron.value) * (target - neuron.value);
        }

        // Hidden layers, strictly decreasing order. `weights[j]` on a
        // next-layer neuron is the connection from neuron `j` of this layer.
        for i in (1..last).rev() {
            let (head, tail) = self.layers.split_at_mut(i + 1);
            let next = &tail[0];
            for (j, neuron) in head[i].neurons.iter_mut().enumerate() {
                let downstream: f64 = next
                    .neurons
                    .iter()
                    .map(|n| n.delta * n.weights[j])
                    .sum();
                neuron.delta = sigmoid_derivative(neuron.value) * downstream;
            }
        }

        // Every delta is in place; now apply all updates.
        let learning_rate = self.learning_rate;
        for i in 1..self.layers.len() {
            let (prev, rest) = self.layers.split_at_mut(i);
            let prev = &prev[i - 1];
            for neuron in &mut rest[0].neurons {
                neuron.bias += learning_rate * neuron.delta;
                for (k, weight) in neuron.weights.iter_mut().enumerate() {
                    *weight += learning_rate * prev.neurons[k].value * neuron.delta;
                }
            }
        }

        Ok(())
    }

    fn ensure_valid(&self) -> Result<(), NetworkError> {
        if self.valid {
            Ok(())
        } else {
            Err(NetworkError::InvalidNetwork)
        }
    }
}
