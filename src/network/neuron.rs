use rand::Rng;

use crate::activation::activation::sigmoid;

/// One computational unit of the network.
///
/// `weights[k]` is the connection from neuron `k` of the *previous* layer;
/// for non-input neurons the weight count always equals the previous layer's
/// neuron count. Input-layer neurons carry no weights, and their `bias` and
/// `delta` are never read.
#[derive(Debug, Clone, Default)]
pub struct Neuron {
    /// Additive term of the weighted input sum.
    pub bias: f64,
    /// Raw input (input layer) or post-activation output (all other layers)
    /// after a run; overwritten in place on every run.
    pub value: f64,
    /// Backpropagated error signal; meaningful only right after a train step.
    pub delta: f64,
    /// One weight per neuron of the previous layer.
    pub weights: Vec<f64>,
}

impl Neuron {
    /// A weightless input-layer neuron.
    pub fn input() -> Neuron {
        Neuron::default()
    }

    /// A neuron with `fan_in` weights; bias and weights are independent
    /// uniform draws from [0, 1).
    pub fn random<R: Rng>(fan_in: usize, rng: &mut R) -> Neuron {
        Neuron {
            bias: rng.gen(),
            value: 0.0,
            delta: 0.0,
            weights: (0..fan_in).map(|_| rng.gen()).collect(),
        }
    }

    /// Applies the sigmoid in place. Before the call `value` holds the
    /// weighted input sum plus bias; after it, the activation.
    pub fn activate(&mut self) {
        self.value = sigmoid(self.value);
    }
}
