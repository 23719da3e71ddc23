//! Unit and property tests for network construction, the forward pass, and
//! the shape/validity checks.

use ember_nn::{Network, NetworkError};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_network(learning_rate: f64, layer_sizes: &[usize], seed: u64) -> Network {
    let mut rng = StdRng::seed_from_u64(seed);
    Network::with_rng(learning_rate, layer_sizes, &mut rng)
}

/// Full per-neuron state (bias, value, delta, weights) for no-op checks.
fn snapshot(network: &Network) -> Vec<Vec<(f64, f64, f64, Vec<f64>)>> {
    network
        .layers()
        .iter()
        .map(|layer| {
            layer
                .neurons
                .iter()
                .map(|n| (n.bias, n.value, n.delta, n.weights.clone()))
                .collect()
        })
        .collect()
}

#[test]
fn too_few_layers_marks_the_network_invalid() {
    for sizes in [&[][..], &[3][..]] {
        let mut network = seeded_network(0.2, sizes, 1);
        assert!(!network.is_valid());
        assert_eq!(network.run(&[1.0]), Err(NetworkError::InvalidNetwork));
        assert_eq!(
            network.train_step(&[1.0], &[1.0]),
            Err(NetworkError::InvalidNetwork)
        );
        assert!(network.layers().is_empty());
        assert!(network.input_values().is_empty());
        assert!(network.output_values().is_empty());
    }
}

#[test]
fn weight_vectors_match_the_previous_layer_width() {
    let network = seeded_network(0.2, &[3, 4, 2], 2);
    assert!(network.is_valid());

    let layers = network.layers();
    assert_eq!(layers.len(), 3);
    assert_eq!(layers[0].len(), 3);
    assert_eq!(layers[1].len(), 4);
    assert_eq!(layers[2].len(), 2);

    for neuron in &layers[0].neurons {
        assert!(neuron.weights.is_empty());
    }
    for neuron in &layers[1].neurons {
        assert_eq!(neuron.weights.len(), 3);
    }
    for neuron in &layers[2].neurons {
        assert_eq!(neuron.weights.len(), 4);
    }
}

#[test]
fn initial_parameters_are_uniform_in_the_unit_interval() {
    let network = seeded_network(0.2, &[4, 8, 3], 3);
    for layer in network.layers().iter().skip(1) {
        for neuron in &layer.neurons {
            assert!((0.0..1.0).contains(&neuron.bias));
            for weight in &neuron.weights {
                assert!((0.0..1.0).contains(weight));
            }
        }
    }
}

#[test]
fn construction_is_deterministic_under_a_seeded_rng() {
    let a = seeded_network(0.2, &[2, 3, 1], 42);
    let b = seeded_network(0.2, &[2, 3, 1], 42);
    assert_eq!(snapshot(&a), snapshot(&b));
}

#[test]
fn run_with_mismatched_input_length_leaves_state_untouched() {
    let mut network = seeded_network(0.2, &[2, 2, 1], 4);
    network.run(&[0.3, 0.7]).unwrap();
    let before = snapshot(&network);

    assert_eq!(
        network.run(&[0.1, 0.2, 0.3]),
        Err(NetworkError::InputShapeMismatch {
            expected: 2,
            got: 3
        })
    );
    assert_eq!(snapshot(&network), before);
}

#[test]
fn train_step_with_mismatched_shapes_leaves_state_untouched() {
    let mut network = seeded_network(0.2, &[2, 2, 1], 5);
    network.run(&[0.5, 0.5]).unwrap();
    let before = snapshot(&network);

    assert_eq!(
        network.train_step(&[0.5, 0.5], &[1.0, 0.0]),
        Err(NetworkError::TargetShapeMismatch {
            expected: 1,
            got: 2
        })
    );
    assert_eq!(snapshot(&network), before);

    assert_eq!(
        network.train_step(&[0.5], &[1.0]),
        Err(NetworkError::InputShapeMismatch {
            expected: 2,
            got: 1
        })
    );
    assert_eq!(snapshot(&network), before);
}

#[test]
fn run_is_deterministic_and_idempotent() {
    let mut network = seeded_network(0.2, &[2, 3, 2], 6);
    network.run(&[0.25, -1.5]).unwrap();
    let first = network.output_values();
    network.run(&[0.25, -1.5]).unwrap();
    let second = network.output_values();
    // Bit-identical, not just close: no randomness is involved in a run.
    assert_eq!(first, second);
}

#[test]
fn activated_values_lie_in_the_open_unit_interval() {
    let mut network = seeded_network(0.2, &[3, 5, 4, 2], 7);
    network.run(&[-100.0, 0.0, 250.0]).unwrap();

    for layer in network.layers().iter().skip(1) {
        for neuron in &layer.neurons {
            assert!(neuron.value > 0.0 && neuron.value < 1.0);
        }
    }
}

#[test]
fn observers_reflect_the_last_run() {
    let mut network = seeded_network(0.2, &[2, 2, 1], 8);
    network.run(&[0.9, 0.1]).unwrap();

    assert_eq!(network.input_values(), vec![0.9, 0.1]);
    assert_eq!(network.output_values().len(), 1);
    assert_eq!(network.learning_rate(), 0.2);
}

#[test]
fn zero_neuron_hidden_layers_are_permitted() {
    let mut network = seeded_network(0.2, &[2, 0, 1], 9);
    assert!(network.is_valid());
    network.run(&[1.0, 0.0]).unwrap();

    // The output neuron sees no upstream values; it produces sigmoid(bias).
    let outputs = network.output_values();
    assert_eq!(outputs.len(), 1);
    assert!(outputs[0] > 0.0 && outputs[0] < 1.0);
}
