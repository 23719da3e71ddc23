use rand::Rng;

use crate::network::neuron::Neuron;

/// An ordered sequence of neurons. Order is load-bearing: neuron `k` here is
/// what `weights[k]` on any next-layer neuron refers to.
#[derive(Debug, Clone, Default)]
pub struct Layer {
    pub neurons: Vec<Neuron>,
}

impl Layer {
    /// Input layer: `size` weightless neurons.
    pub fn input(size: usize) -> Layer {
        Layer {
            neurons: vec![Neuron::input(); size],
        }
    }

    /// Fully-connected layer of `size` neurons, each with `fan_in`
    /// randomly initialized weights.
    pub fn dense<R: Rng>(size: usize, fan_in: usize, rng: &mut R) -> Layer {
        Layer {
            neurons: (0..size).map(|_| Neuron::random(fan_in, rng)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// Current neuron values, in layer order.
    pub fn values(&self) -> Vec<f64> {
        self.neurons.iter().map(|n| n.value).collect()
    }
}
