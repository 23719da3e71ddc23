use std::f64::consts::E;

/// Logistic sigmoid: 1 / (1 + e^(-x)).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the sigmoid, expressed in terms of its *output*:
/// for a = sigmoid(x), sigmoid'(x) = a * (1 - a).
///
/// The network stores post-activation values only, so the derivative is
/// always evaluated on the activated value.
pub fn sigmoid_derivative(activated: f64) -> f64 {
    activated * (1.0 - activated)
}
