pub mod config;
pub mod error;
pub mod extractor;
pub mod folders;
pub mod matcher;
pub mod models;
pub mod normalize;
pub mod placement;
pub mod progress;
pub mod router;
pub mod scanner;

pub use config::AppConfig;
pub use error::Error;
pub use extractor::{DocumentExtractor, TextExtractor};
pub use models::{CandidateFile, ClientIdentity, DocumentKind, MatchOutcome, RunTally};
pub use placement::PlacementMode;
pub use progress::{FileReport, Placement, RouteReporter, SilentReporter};
pub use router::Router;
