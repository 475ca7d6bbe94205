pub mod domain;
pub mod ports;

pub use domain::{GeneratedAdvice, GeneratedQuote, SavedQuote, ViewState};
pub use ports::{
    GenerationService, PortError, PortResult, QuoteVaultService, SaveOutcome, ShareOutcome,
    ShareService,
};
