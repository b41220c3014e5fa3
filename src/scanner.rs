use crate::classifier::{Classifier, Label};
use crate::config::Config;
use crate::features::{FeatureExtractor, FeatureVector};
use anyhow::{Context, Result};
use serde::Serialize;

/// Outcome of one URL check.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub url: String,
    pub features: FeatureVector,
    pub label: Label,
}

/// Composes the extractor with an injected classifier handle. The
/// classifier is constructed by the caller (loaded once at startup) rather
/// than reached through shared process state.
pub struct ScanEngine<C: Classifier> {
    extractor: FeatureExtractor,
    classifier: C,
}

impl<C: Classifier> ScanEngine<C> {
    pub fn new(config: &Config, classifier: C) -> Result<Self> {
        Ok(Self {
            extractor: FeatureExtractor::new(config)?,
            classifier,
        })
    }

    /// Check one URL. Extraction cannot fail; only a classifier fault
    /// surfaces as an error, kept distinct so it is never mistaken for a
    /// network problem.
    pub async fn scan(&self, url: &str) -> Result<ScanReport> {
        log::info!("scanning {url}");
        let features = self.extractor.extract(url).await;
        log::debug!("feature vector for {url}: {features:?}");

        let label = self
            .classifier
            .predict(&features)
            .context("classifier prediction failed")?;

        Ok(ScanReport {
            url: url.to_string(),
            features,
            label,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{assemble_vector, FEATURE_COUNT};
    use anyhow::bail;

    struct FixedClassifier(Label);

    impl Classifier for FixedClassifier {
        fn predict(&self, _features: &FeatureVector) -> Result<Label> {
            Ok(self.0)
        }
    }

    struct BrokenClassifier;

    impl Classifier for BrokenClassifier {
        fn predict(&self, _features: &FeatureVector) -> Result<Label> {
            bail!("model artifact corrupt")
        }
    }

    #[test]
    fn test_classifier_failure_is_distinct() {
        // Extraction degraded to defaults still produces a full vector;
        // the only error path is the classifier itself.
        let features = assemble_vector("http://example.com", false, None);
        assert_eq!(features.len(), FEATURE_COUNT);

        let err = BrokenClassifier.predict(&features).unwrap_err();
        assert!(err.to_string().contains("corrupt"));

        assert_eq!(
            FixedClassifier(Label::Phishing).predict(&features).unwrap(),
            Label::Phishing
        );
    }

    #[test]
    fn test_report_serializes() {
        let report = ScanReport {
            url: "http://example.com".to_string(),
            features: assemble_vector("http://example.com", true, None),
            label: Label::Benign,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"label\":\"Benign\""));
        assert!(json.contains("\"features\""));
    }
}
