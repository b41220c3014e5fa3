use crate::features::{FeatureVector, FEATURE_COUNT};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Binary verdict from the classifier: 1 = phishing, 0 = benign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Label {
    Benign,
    Phishing,
}

impl Label {
    pub fn as_u8(&self) -> u8 {
        match self {
            Label::Benign => 0,
            Label::Phishing => 1,
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Benign => write!(f, "benign"),
            Label::Phishing => write!(f, "phishing"),
        }
    }
}

/// The boundary the scanner consumes a model through. Loading and shape of
/// the artifact are the implementation's concern; extraction knows nothing
/// about either.
pub trait Classifier {
    fn predict(&self, features: &FeatureVector) -> Result<Label>;
}

#[derive(Debug, Deserialize)]
struct DenseLayer {
    /// Row-major: one row of input weights per output unit.
    weights: Vec<Vec<f64>>,
    biases: Vec<f64>,
}

impl DenseLayer {
    fn forward(&self, input: &[f64], activation: Activation) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.biases)
            .map(|(row, bias)| {
                let sum: f64 = row.iter().zip(input).map(|(w, x)| w * x).sum::<f64>() + bias;
                match activation {
                    Activation::Relu => sum.max(0.0),
                    Activation::Sigmoid => 1.0 / (1.0 + (-sum).exp()),
                }
            })
            .collect()
    }
}

#[derive(Clone, Copy)]
enum Activation {
    Relu,
    Sigmoid,
}

/// Feed-forward network deserialized from a JSON artifact: ReLU hidden
/// layers, single sigmoid output thresholded at 0.5. Load once at startup
/// and inject into the scan engine.
#[derive(Debug, Deserialize)]
pub struct MlpClassifier {
    layers: Vec<DenseLayer>,
}

impl MlpClassifier {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read model artifact {path}"))?;
        Self::from_json(&content).with_context(|| format!("invalid model artifact {path}"))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let model: MlpClassifier = serde_json::from_str(content)?;
        model.validate()?;
        Ok(model)
    }

    /// Reject malformed artifacts up front so prediction can stay
    /// infallible on the arithmetic path.
    fn validate(&self) -> Result<()> {
        if self.layers.is_empty() {
            bail!("model has no layers");
        }

        let mut expected_inputs = FEATURE_COUNT;
        for (index, layer) in self.layers.iter().enumerate() {
            if layer.weights.is_empty() {
                bail!("layer {index} has no units");
            }
            if layer.weights.len() != layer.biases.len() {
                bail!(
                    "layer {index}: {} weight rows but {} biases",
                    layer.weights.len(),
                    layer.biases.len()
                );
            }
            for (unit, row) in layer.weights.iter().enumerate() {
                if row.len() != expected_inputs {
                    bail!(
                        "layer {index} unit {unit}: expected {expected_inputs} inputs, got {}",
                        row.len()
                    );
                }
            }
            expected_inputs = layer.weights.len();
        }

        if expected_inputs != 1 {
            bail!("output layer must have exactly one unit, got {expected_inputs}");
        }
        Ok(())
    }
}

impl Classifier for MlpClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<Label> {
        let mut activations: Vec<f64> = features.to_vec();
        let last = self.layers.len() - 1;

        for (index, layer) in self.layers.iter().enumerate() {
            let activation = if index == last {
                Activation::Sigmoid
            } else {
                Activation::Relu
            };
            activations = layer.forward(&activations, activation);
        }

        let score = activations[0];
        log::debug!("classifier score: {score:.4}");
        Ok(if score >= 0.5 {
            Label::Phishing
        } else {
            Label::Benign
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single unit summing the first three slots; sigmoid(sum - 1.5) flips
    // positive once at least two of them are set.
    fn sum_gate_model() -> String {
        let mut weights = vec![0.0; FEATURE_COUNT];
        weights[0] = 1.0;
        weights[1] = 1.0;
        weights[2] = 1.0;
        serde_json::json!({
            "layers": [{ "weights": [weights], "biases": [-1.5] }]
        })
        .to_string()
    }

    #[test]
    fn test_predict_thresholds() {
        let model = MlpClassifier::from_json(&sum_gate_model()).unwrap();

        let mut benign = [0.0; FEATURE_COUNT];
        benign[0] = 1.0;
        assert_eq!(model.predict(&benign).unwrap(), Label::Benign);

        let mut phishing = [0.0; FEATURE_COUNT];
        phishing[0] = 1.0;
        phishing[1] = 1.0;
        assert_eq!(model.predict(&phishing).unwrap(), Label::Phishing);
    }

    #[test]
    fn test_two_layer_forward() {
        // Hidden ReLU unit passes slot 0 through; output repeats it.
        let artifact = serde_json::json!({
            "layers": [
                { "weights": [std::iter::once(1.0).chain(std::iter::repeat(0.0)).take(FEATURE_COUNT).collect::<Vec<f64>>()], "biases": [0.0] },
                { "weights": [[4.0]], "biases": [-2.0] }
            ]
        })
        .to_string();
        let model = MlpClassifier::from_json(&artifact).unwrap();

        let mut hit = [0.0; FEATURE_COUNT];
        hit[0] = 1.0;
        assert_eq!(model.predict(&hit).unwrap(), Label::Phishing);
        assert_eq!(model.predict(&[0.0; FEATURE_COUNT]).unwrap(), Label::Benign);
    }

    #[test]
    fn test_rejects_bad_shapes() {
        assert!(MlpClassifier::from_json(r#"{"layers": []}"#).is_err());

        // Wrong input width.
        let artifact = r#"{"layers": [{"weights": [[1.0, 2.0]], "biases": [0.0]}]}"#;
        assert!(MlpClassifier::from_json(artifact).is_err());

        // Two output units.
        let wide = serde_json::json!({
            "layers": [{
                "weights": [vec![0.0; FEATURE_COUNT], vec![0.0; FEATURE_COUNT]],
                "biases": [0.0, 0.0]
            }]
        })
        .to_string();
        assert!(MlpClassifier::from_json(&wide).is_err());
    }

    #[test]
    fn test_missing_artifact_is_an_error() {
        assert!(MlpClassifier::from_file("/nonexistent/model.json").is_err());
    }

    #[test]
    fn test_label_display() {
        assert_eq!(Label::Phishing.to_string(), "phishing");
        assert_eq!(Label::Benign.as_u8(), 0);
        assert_eq!(Label::Phishing.as_u8(), 1);
    }
}
