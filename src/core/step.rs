//! Step catalog - the fixed preprocessing step order

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Name of the virtual zeroth checkpoint, reached right after the train/test
/// split and before any catalog step. It is tracked as the last checkpoint
/// but never written to disk.
pub const TRAIN_TEST_SPLIT: &str = "train_test_split";

/// A named preprocessing step.
///
/// Declaration order is execution order; the derived `Ord` therefore sorts
/// steps the way the pipeline runs them. The serialized form is the
/// snake_case string returned by [`StepName::as_str`], which is also the
/// suffix of the step's checkpoint file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StepName {
    AutomaticTypeDetectionCasting,
    RemoveDuplicateColumnNames,
    ResetDataframeIndex,
    FillInfiniteValues,
    EarlyNumericOnlyFeatureSelection,
    DeleteHighNullCols,
    DataBinning,
    RegexCleanTextData,
    HandleTargetSkewness,
    DatetimeConverter,
    PosTaggingPca,
    AppendTextSentimentScore,
    TfidfVectorizerToPca,
    TfidfVectorizer,
    RareFeatureProcessing,
    CardinalityRemover,
    HolisticNullFilling,
    NumericBinarizerPca,
    OnehotPca,
    CategoryEncoding,
    FillNullsStatic,
    OutlierCare,
    RemoveCollinearity,
    SkewnessRemoval,
    ClusteringAsAFeatureDbscan,
    ClusteringAsAFeatureKmeansLoop,
    ClusteringAsAFeatureGaussianMixtureLoop,
    PcaClusteringResults,
    AutotunedClustering,
    ReduceMemoryFootprint,
    ScaleData,
    Smote,
    AutomatedFeatureSelection,
    BruteforceRandomFeatureSelection,
    DeleteUnpredictableTrainingRows,
    AutoencoderBasedOversampling,
    SyntheticDataAugmentation,
    FinalPcaDimensionalityReduction,
    SortColumnsAlphabetically,
}

/// The fixed execution order of all preprocessing steps.
pub const STEP_ORDER: &[StepName] = &[
    StepName::AutomaticTypeDetectionCasting,
    StepName::RemoveDuplicateColumnNames,
    StepName::ResetDataframeIndex,
    StepName::FillInfiniteValues,
    StepName::EarlyNumericOnlyFeatureSelection,
    StepName::DeleteHighNullCols,
    StepName::DataBinning,
    StepName::RegexCleanTextData,
    StepName::HandleTargetSkewness,
    StepName::DatetimeConverter,
    StepName::PosTaggingPca,
    StepName::AppendTextSentimentScore,
    StepName::TfidfVectorizerToPca,
    StepName::TfidfVectorizer,
    StepName::RareFeatureProcessing,
    StepName::CardinalityRemover,
    StepName::HolisticNullFilling,
    StepName::NumericBinarizerPca,
    StepName::OnehotPca,
    StepName::CategoryEncoding,
    StepName::FillNullsStatic,
    StepName::OutlierCare,
    StepName::RemoveCollinearity,
    StepName::SkewnessRemoval,
    StepName::ClusteringAsAFeatureDbscan,
    StepName::ClusteringAsAFeatureKmeansLoop,
    StepName::ClusteringAsAFeatureGaussianMixtureLoop,
    StepName::PcaClusteringResults,
    StepName::AutotunedClustering,
    StepName::ReduceMemoryFootprint,
    StepName::ScaleData,
    StepName::Smote,
    StepName::AutomatedFeatureSelection,
    StepName::BruteforceRandomFeatureSelection,
    StepName::DeleteUnpredictableTrainingRows,
    StepName::AutoencoderBasedOversampling,
    StepName::SyntheticDataAugmentation,
    StepName::FinalPcaDimensionalityReduction,
    StepName::SortColumnsAlphabetically,
];

impl StepName {
    /// The canonical snake_case identifier for this step.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepName::AutomaticTypeDetectionCasting => "automatic_type_detection_casting",
            StepName::RemoveDuplicateColumnNames => "remove_duplicate_column_names",
            StepName::ResetDataframeIndex => "reset_dataframe_index",
            StepName::FillInfiniteValues => "fill_infinite_values",
            StepName::EarlyNumericOnlyFeatureSelection => "early_numeric_only_feature_selection",
            StepName::DeleteHighNullCols => "delete_high_null_cols",
            StepName::DataBinning => "data_binning",
            StepName::RegexCleanTextData => "regex_clean_text_data",
            StepName::HandleTargetSkewness => "handle_target_skewness",
            StepName::DatetimeConverter => "datetime_converter",
            StepName::PosTaggingPca => "pos_tagging_pca",
            StepName::AppendTextSentimentScore => "append_text_sentiment_score",
            StepName::TfidfVectorizerToPca => "tfidf_vectorizer_to_pca",
            StepName::TfidfVectorizer => "tfidf_vectorizer",
            StepName::RareFeatureProcessing => "rare_feature_processing",
            StepName::CardinalityRemover => "cardinality_remover",
            StepName::HolisticNullFilling => "holistic_null_filling",
            StepName::NumericBinarizerPca => "numeric_binarizer_pca",
            StepName::OnehotPca => "onehot_pca",
            StepName::CategoryEncoding => "category_encoding",
            StepName::FillNullsStatic => "fill_nulls_static",
            StepName::OutlierCare => "outlier_care",
            StepName::RemoveCollinearity => "remove_collinearity",
            StepName::SkewnessRemoval => "skewness_removal",
            StepName::ClusteringAsAFeatureDbscan => "clustering_as_a_feature_dbscan",
            StepName::ClusteringAsAFeatureKmeansLoop => "clustering_as_a_feature_kmeans_loop",
            StepName::ClusteringAsAFeatureGaussianMixtureLoop => {
                "clustering_as_a_feature_gaussian_mixture_loop"
            }
            StepName::PcaClusteringResults => "pca_clustering_results",
            StepName::AutotunedClustering => "autotuned_clustering",
            StepName::ReduceMemoryFootprint => "reduce_memory_footprint",
            StepName::ScaleData => "scale_data",
            StepName::Smote => "smote",
            StepName::AutomatedFeatureSelection => "automated_feature_selection",
            StepName::BruteforceRandomFeatureSelection => "bruteforce_random_feature_selection",
            StepName::DeleteUnpredictableTrainingRows => "delete_unpredictable_training_rows",
            StepName::AutoencoderBasedOversampling => "autoencoder_based_oversampling",
            StepName::SyntheticDataAugmentation => "synthetic_data_augmentation",
            StepName::FinalPcaDimensionalityReduction => "final_pca_dimensionality_reduction",
            StepName::SortColumnsAlphabetically => "sort_columns_alphabetically",
        }
    }

    /// Whether this step only applies to datasets with designated text columns.
    ///
    /// Exactly three steps are gated on text columns being present. Note that
    /// the PCA-reducing tf-idf variant is not among them; it runs for any
    /// dataset.
    pub fn is_nlp_gated(&self) -> bool {
        matches!(
            self,
            StepName::RegexCleanTextData
                | StepName::TfidfVectorizer
                | StepName::AppendTextSentimentScore
        )
    }

    /// Zero-based position of this step in the execution order.
    pub fn position(&self) -> usize {
        STEP_ORDER
            .iter()
            .position(|s| s == self)
            .unwrap_or(usize::MAX)
    }
}

impl fmt::Display for StepName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized step identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown preprocessing step '{0}'")]
pub struct UnknownStep(pub String);

impl FromStr for StepName {
    type Err = UnknownStep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STEP_ORDER
            .iter()
            .find(|step| step.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownStep(s.to_string()))
    }
}

// Serialized as the snake_case string so step names are usable as JSON/YAML
// map keys and match checkpoint file names.
impl Serialize for StepName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StepName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
