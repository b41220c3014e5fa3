pub mod classifier;
pub mod config;
pub mod features;
pub mod fetcher;
pub mod scanner;
pub mod url_parts;

pub use classifier::{Classifier, Label, MlpClassifier};
pub use config::Config;
pub use features::{assemble_vector, FeatureExtractor, FeatureVector, FEATURE_COUNT};
pub use fetcher::{PageFetcher, PageResponse};
pub use scanner::{ScanEngine, ScanReport};
pub use url_parts::{parse_lenient, UrlParts};
