//! Blueprint trait - the contract preprocessing state objects implement
//!
//! The pipeline never supplies numeric semantics. Casting, encoding, scaling,
//! clustering and the rest are operations of the state object itself; the
//! orchestrator only decides which of them run, in what order, and with which
//! declared arguments. This trait is that seam: a finite set of named
//! operations with fixed signatures, plus the accessors the step selector
//! needs.

use crate::core::state::{CompletionFlags, StepSelection};
use thiserror::Error;

/// Error raised by a preprocessing operation.
#[derive(Debug, Error)]
pub enum StepError {
    #[error("invalid data: {0}")]
    Data(String),

    #[error("column '{0}' not found")]
    MissingColumn(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Contract for pipeline-state objects driven by the orchestrator.
///
/// Implementations own the dataset and every fitted artifact (encoders,
/// scalers, column lists). Operations mutate `self` in place; the
/// orchestrator never inspects what they produce beyond success or failure.
/// Each step in the catalog maps onto exactly one of the operations below;
/// two steps reuse `automated_feature_selection` and two reuse
/// `tfidf_vectorizer_to_pca` with different flags.
pub trait Blueprint {
    /// Dataset handed in for inference-mode runs.
    type Frame;

    /// Which steps the user has enabled.
    fn selection(&self) -> &StepSelection;

    /// Which steps have already run for this state.
    fn completion(&self) -> &CompletionFlags;

    fn completion_mut(&mut self) -> &mut CompletionFlags;

    /// Columns designated for NLP treatment. When empty, the NLP-gated
    /// steps are skipped no matter what the selection says.
    fn nlp_columns(&self) -> &[String];

    /// Switch into prediction mode when a frame is supplied.
    fn check_prediction_mode(&mut self, frame: Option<Self::Frame>) -> Result<(), StepError>;

    /// Split the dataset into train and test partitions. Runs before any
    /// catalog step and marks the virtual zeroth checkpoint.
    fn train_test_split(&mut self) -> Result<(), StepError>;

    fn automatic_type_detection_casting(&mut self) -> Result<(), StepError>;

    fn remove_duplicate_column_names(&mut self) -> Result<(), StepError>;

    fn reset_dataframe_index(&mut self) -> Result<(), StepError>;

    fn fill_infinite_values(&mut self) -> Result<(), StepError>;

    /// Feature selection over the current columns. `numeric_only` restricts
    /// (and destructively prunes) to numeric features for the early pass.
    fn automated_feature_selection(
        &mut self,
        metric: Option<&str>,
        threshold: Option<f64>,
        numeric_only: bool,
    ) -> Result<(), StepError>;

    fn delete_high_null_cols(&mut self, threshold: f64) -> Result<(), StepError>;

    fn data_binning(&mut self) -> Result<(), StepError>;

    fn regex_clean_text_data(&mut self) -> Result<(), StepError>;

    fn target_skewness_handling(&mut self, mode: &str) -> Result<(), StepError>;

    fn datetime_converter(&mut self, scope: &str) -> Result<(), StepError>;

    fn pos_tagging_pca(&mut self, reduce: bool) -> Result<(), StepError>;

    fn append_text_sentiment_score(&mut self) -> Result<(), StepError>;

    /// Tf-idf vectorization; `reduce` folds the vector space through PCA.
    fn tfidf_vectorizer_to_pca(&mut self, reduce: bool) -> Result<(), StepError>;

    /// Collapse rare categories (below `min_frequency`) of the state's
    /// designated rarity columns into `replacement`.
    fn rare_feature_processor(
        &mut self,
        min_frequency: f64,
        replacement: &str,
    ) -> Result<(), StepError>;

    fn cardinality_remover(&mut self, max_cardinality: usize) -> Result<(), StepError>;

    fn holistic_null_filling(&mut self, iterative: bool) -> Result<(), StepError>;

    fn numeric_binarizer_pca(&mut self) -> Result<(), StepError>;

    fn onehot_pca(&mut self) -> Result<(), StepError>;

    fn category_encoding(&mut self, algorithm: &str) -> Result<(), StepError>;

    fn fill_nulls(&mut self, how: &str) -> Result<(), StepError>;

    fn outlier_care(&mut self, method: &str, how: &str) -> Result<(), StepError>;

    fn remove_collinearity(&mut self, threshold: f64) -> Result<(), StepError>;

    fn skewness_removal(&mut self, overwrite_orig: bool) -> Result<(), StepError>;

    fn dbscan_clustering(&mut self) -> Result<(), StepError>;

    fn kmeans_clustering_loop(&mut self) -> Result<(), StepError>;

    fn gaussian_mixture_clustering_loop(&mut self) -> Result<(), StepError>;

    fn pca_clustering_results(&mut self) -> Result<(), StepError>;

    fn auto_tuned_clustering(&mut self) -> Result<(), StepError>;

    fn reduce_memory_footprint(&mut self) -> Result<(), StepError>;

    fn data_scaling(&mut self) -> Result<(), StepError>;

    fn smote_binary_multiclass(&mut self) -> Result<(), StepError>;

    fn bruteforce_random_feature_selection(&mut self) -> Result<(), StepError>;

    fn delete_unpredictable_training_rows(&mut self) -> Result<(), StepError>;

    fn autoencoder_based_oversampling(&mut self) -> Result<(), StepError>;

    fn synthetic_data_augmentation(&mut self) -> Result<(), StepError>;

    fn final_pca_dimensionality_reduction(&mut self) -> Result<(), StepError>;

    fn sort_columns_alphabetically(&mut self) -> Result<(), StepError>;
}
