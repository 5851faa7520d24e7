//! Public types for the Texta API.

mod output;
mod report;
mod sentiment;
mod tone;

pub use output::{ClassifierOutput, LabelScore, SchemaKind};
pub use report::SentimentReport;
pub use sentiment::{SentimentLabel, SentimentScores};
pub use tone::{ToneDimension, ToneScores};
