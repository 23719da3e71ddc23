use ember_nn::{train_loop, Network, TrainConfig};

fn main() {
    // Input layer (2 neurons), one hidden layer (2), output layer (1),
    // learning rate 0.2.
    let mut network = Network::new(0.2, &[2, 2, 1]);

    let inputs = vec![
        vec![0.0, 0.0],
        vec![1.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 1.0],
    ];
    let targets = vec![
        vec![0.0],
        vec![1.0],
        vec![1.0],
        vec![0.0],
    ];

    let config = TrainConfig::new(100_000);
    let loss = train_loop(&mut network, &inputs, &targets, &config)
        .expect("training should succeed on a freshly built network");
    println!("Final epoch loss: {loss:.6}\n");

    for input in &inputs {
        network.run(input).expect("run should succeed");
        println!("Inputs:  {:?}", network.input_values());
        println!("Outputs: {:?}\n", network.output_values());
    }

    // Full parameter dump, the long-form observer.
    for (i, layer) in network.layers().iter().enumerate() {
        println!("Layer #{i}");
        for (j, neuron) in layer.neurons.iter().enumerate() {
            println!(
                "\tNeuron #{j}: bias {:.4}, value {:.4}, weights {:?}",
                neuron.bias, neuron.value, neuron.weights
            );
        }
    }
}
