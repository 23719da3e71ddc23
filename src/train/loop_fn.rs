use std::sync::atomic::Ordering;
use std::time::Instant;

use crate::errors::network_error::NetworkError;
use crate::loss::mse::MseLoss;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Trains `network` for `config.epochs` epochs of per-sample gradient
/// descent and returns the mean training loss of the last completed epoch.
///
/// Each epoch walks the dataset in order and calls `Network::train_step`
/// once per (input, target) pair; there is no batching. The loss credited
/// to a sample is the squared error of its pre-update prediction, which is
/// what the forward pass inside `train_step` leaves in the output layer.
///
/// # Early termination
/// The loop breaks early if:
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.stop_flag` is set to `true`.
///
/// # Errors
/// Propagates the first `NetworkError` from `train_step` (invalid network
/// or a sample whose shape disagrees with the layer widths).
///
/// # Panics
/// Panics if `inputs` is empty or `inputs` and `targets` differ in length.
pub fn train_loop(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<f64, NetworkError> {
    assert!(!inputs.is_empty(), "inputs must not be empty");
    assert_eq!(
        inputs.len(),
        targets.len(),
        "inputs and targets must have equal length"
    );

    let mut last_train_loss = 0.0;

    for epoch in 1..=config.epochs {
        // Check stop flag at the top of each epoch.
        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                break;
            }
        }

        let t_start = Instant::now();

        // ── One full pass over the training data ───────────────────────────
        let mut total_loss = 0.0;
        for (input, target) in inputs.iter().zip(targets.iter()) {
            network.train_step(input, target)?;
            total_loss += MseLoss::loss(&network.output_values(), target);
        }
        let train_loss = total_loss / inputs.len() as f64;
        last_train_loss = train_loss;

        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        // ── Emit progress ─────────────────────────────────────────────────
        if let Some(ref tx) = config.progress_tx {
            let stats = EpochStats {
                epoch,
                total_epochs: config.epochs,
                train_loss,
                elapsed_ms,
            };
            // If the receiver has been dropped, stop training.
            if tx.send(stats).is_err() {
                break;
            }
        }
    }

    Ok(last_train_loss)
}
