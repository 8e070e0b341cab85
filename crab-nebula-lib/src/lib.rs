pub mod types;
pub mod error;
pub mod config;
pub mod vocabulary;
pub mod protostem;
pub mod continuation;
pub mod cluster;
pub mod promotion;
pub mod induction;
pub mod output;
pub mod corpus;

pub use config::{CrabConfig, InductionConfig, ReportConfig};
pub use error::{CrabError, Result};
pub use induction::{induce_signatures, Induction};
pub use types::{InductionStats, SignatureRecord, SignatureReport, Signatures};
pub use vocabulary::Vocabulary;
