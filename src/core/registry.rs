//! Operation registry - binds step names to blueprint operations
//!
//! Built once at the start of a run and immutable afterward. Each entry pairs
//! a step name with its declared arguments and a call shape resolved at
//! registration time, so no arity probing happens when a step is invoked.
//! Two operations are registered twice under different names: the feature
//! selection (early, numeric-only, destructive vs. standard) and the tf-idf
//! vectorizer (with vs. without PCA reduction).

use crate::core::args::{expect_arity, ArgError, ArgSpec, ArgValue};
use crate::core::blueprint::{Blueprint, StepError};
use crate::core::step::{StepName, STEP_ORDER};
use thiserror::Error;

/// Failure while invoking a bound operation: either the declared arguments
/// did not decode, or the operation itself failed.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error(transparent)]
    Arguments(#[from] ArgError),

    #[error(transparent)]
    Step(#[from] StepError),
}

/// Call shape of a registered operation, fixed at registration time.
pub enum Binding<B> {
    /// Invoked with no arguments
    Nullary(fn(&mut B) -> Result<(), InvokeError>),
    /// Invoked with the single declared scalar
    Unary(fn(&mut B, &ArgValue) -> Result<(), InvokeError>),
    /// Invoked with the declared tuple, positionally
    Variadic(fn(&mut B, &[ArgValue]) -> Result<(), InvokeError>),
}

impl<B> Binding<B> {
    /// Name of this binding's shape, for mismatch errors.
    pub fn shape_name(&self) -> &'static str {
        match self {
            Binding::Nullary(_) => "nullary",
            Binding::Unary(_) => "unary",
            Binding::Variadic(_) => "variadic",
        }
    }
}

/// One registered step: name, declared arguments, bound operation.
pub struct OperationEntry<B> {
    pub name: StepName,
    pub args: ArgSpec,
    pub(crate) call: Binding<B>,
}

impl<B> OperationEntry<B> {
    pub fn call_shape(&self) -> &'static str {
        self.call.shape_name()
    }
}

/// Ordered mapping of every catalog step to its bound operation.
pub struct OperationRegistry<B> {
    entries: Vec<OperationEntry<B>>,
}

impl<B: Blueprint> OperationRegistry<B> {
    /// Build the standard registry over the full step catalog.
    pub fn standard() -> Self {
        let entries = STEP_ORDER
            .iter()
            .map(|step| OperationEntry {
                name: *step,
                args: declared_args(*step),
                call: bind(*step),
            })
            .collect();
        Self { entries }
    }

    /// Entries in execution order.
    pub fn entries(&self) -> &[OperationEntry<B>] {
        &self.entries
    }

    pub fn get(&self, name: StepName) -> Option<&OperationEntry<B>> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Declared argument values for each step.
///
/// This is the single authority for argument values, independent of any
/// concrete state type, so the CLI can render the catalog without one.
pub fn declared_args(step: StepName) -> ArgSpec {
    use StepName::*;
    match step {
        EarlyNumericOnlyFeatureSelection => ArgSpec::Tuple(vec![
            ArgValue::Null,
            ArgValue::Null,
            ArgValue::Bool(true),
        ]),
        DeleteHighNullCols => ArgSpec::Scalar(ArgValue::Float(0.05)),
        HandleTargetSkewness => ArgSpec::Scalar(ArgValue::Str("fit".into())),
        DatetimeConverter => ArgSpec::Scalar(ArgValue::Str("all".into())),
        PosTaggingPca => ArgSpec::Scalar(ArgValue::Bool(true)),
        TfidfVectorizerToPca => ArgSpec::Scalar(ArgValue::Bool(true)),
        TfidfVectorizer => ArgSpec::Scalar(ArgValue::Bool(false)),
        RareFeatureProcessing => ArgSpec::Tuple(vec![
            ArgValue::Float(0.005),
            ArgValue::Str("miscellaneous".into()),
        ]),
        CardinalityRemover => ArgSpec::Scalar(ArgValue::Int(100)),
        HolisticNullFilling => ArgSpec::Scalar(ArgValue::Bool(false)),
        CategoryEncoding => ArgSpec::Scalar(ArgValue::Str("target".into())),
        FillNullsStatic => ArgSpec::Scalar(ArgValue::Str("static".into())),
        OutlierCare => ArgSpec::Tuple(vec![
            ArgValue::Str("isolation".into()),
            ArgValue::Str("append".into()),
        ]),
        RemoveCollinearity => ArgSpec::Scalar(ArgValue::Float(0.8)),
        SkewnessRemoval => ArgSpec::Scalar(ArgValue::Bool(false)),
        AutomatedFeatureSelection => ArgSpec::Tuple(vec![
            ArgValue::Null,
            ArgValue::Null,
            ArgValue::Bool(false),
        ]),
        _ => ArgSpec::None,
    }
}

/// Bind a step name to its blueprint operation with the matching call shape.
fn bind<B: Blueprint>(step: StepName) -> Binding<B> {
    use StepName::*;
    match step {
        AutomaticTypeDetectionCasting => {
            Binding::Nullary(|b| Ok(b.automatic_type_detection_casting()?))
        }
        RemoveDuplicateColumnNames => Binding::Nullary(|b| Ok(b.remove_duplicate_column_names()?)),
        ResetDataframeIndex => Binding::Nullary(|b| Ok(b.reset_dataframe_index()?)),
        FillInfiniteValues => Binding::Nullary(|b| Ok(b.fill_infinite_values()?)),
        EarlyNumericOnlyFeatureSelection | AutomatedFeatureSelection => {
            Binding::Variadic(|b, args| {
                expect_arity(args, 3)?;
                Ok(b.automated_feature_selection(
                    args[0].as_opt_str()?,
                    args[1].as_opt_float()?,
                    args[2].as_bool()?,
                )?)
            })
        }
        DeleteHighNullCols => Binding::Unary(|b, v| Ok(b.delete_high_null_cols(v.as_float()?)?)),
        DataBinning => Binding::Nullary(|b| Ok(b.data_binning()?)),
        RegexCleanTextData => Binding::Nullary(|b| Ok(b.regex_clean_text_data()?)),
        HandleTargetSkewness => Binding::Unary(|b, v| Ok(b.target_skewness_handling(v.as_str()?)?)),
        DatetimeConverter => Binding::Unary(|b, v| Ok(b.datetime_converter(v.as_str()?)?)),
        PosTaggingPca => Binding::Unary(|b, v| Ok(b.pos_tagging_pca(v.as_bool()?)?)),
        AppendTextSentimentScore => Binding::Nullary(|b| Ok(b.append_text_sentiment_score()?)),
        TfidfVectorizerToPca | TfidfVectorizer => {
            Binding::Unary(|b, v| Ok(b.tfidf_vectorizer_to_pca(v.as_bool()?)?))
        }
        RareFeatureProcessing => Binding::Variadic(|b, args| {
            expect_arity(args, 2)?;
            Ok(b.rare_feature_processor(args[0].as_float()?, args[1].as_str()?)?)
        }),
        CardinalityRemover => Binding::Unary(|b, v| Ok(b.cardinality_remover(v.as_usize()?)?)),
        HolisticNullFilling => Binding::Unary(|b, v| Ok(b.holistic_null_filling(v.as_bool()?)?)),
        NumericBinarizerPca => Binding::Nullary(|b| Ok(b.numeric_binarizer_pca()?)),
        OnehotPca => Binding::Nullary(|b| Ok(b.onehot_pca()?)),
        CategoryEncoding => Binding::Unary(|b, v| Ok(b.category_encoding(v.as_str()?)?)),
        FillNullsStatic => Binding::Unary(|b, v| Ok(b.fill_nulls(v.as_str()?)?)),
        OutlierCare => Binding::Variadic(|b, args| {
            expect_arity(args, 2)?;
            Ok(b.outlier_care(args[0].as_str()?, args[1].as_str()?)?)
        }),
        RemoveCollinearity => Binding::Unary(|b, v| Ok(b.remove_collinearity(v.as_float()?)?)),
        SkewnessRemoval => Binding::Unary(|b, v| Ok(b.skewness_removal(v.as_bool()?)?)),
        ClusteringAsAFeatureDbscan => Binding::Nullary(|b| Ok(b.dbscan_clustering()?)),
        ClusteringAsAFeatureKmeansLoop => Binding::Nullary(|b| Ok(b.kmeans_clustering_loop()?)),
        ClusteringAsAFeatureGaussianMixtureLoop => {
            Binding::Nullary(|b| Ok(b.gaussian_mixture_clustering_loop()?))
        }
        PcaClusteringResults => Binding::Nullary(|b| Ok(b.pca_clustering_results()?)),
        AutotunedClustering => Binding::Nullary(|b| Ok(b.auto_tuned_clustering()?)),
        ReduceMemoryFootprint => Binding::Nullary(|b| Ok(b.reduce_memory_footprint()?)),
        ScaleData => Binding::Nullary(|b| Ok(b.data_scaling()?)),
        Smote => Binding::Nullary(|b| Ok(b.smote_binary_multiclass()?)),
        BruteforceRandomFeatureSelection => {
            Binding::Nullary(|b| Ok(b.bruteforce_random_feature_selection()?))
        }
        DeleteUnpredictableTrainingRows => {
            Binding::Nullary(|b| Ok(b.delete_unpredictable_training_rows()?))
        }
        AutoencoderBasedOversampling => {
            Binding::Nullary(|b| Ok(b.autoencoder_based_oversampling()?))
        }
        SyntheticDataAugmentation => Binding::Nullary(|b| Ok(b.synthetic_data_augmentation()?)),
        FinalPcaDimensionalityReduction => {
            Binding::Nullary(|b| Ok(b.final_pca_dimensionality_reduction()?))
        }
        SortColumnsAlphabetically => Binding::Nullary(|b| Ok(b.sort_columns_alphabetically()?)),
    }
}
