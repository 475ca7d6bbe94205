pub mod gemini;
pub mod share;
pub mod vault;

pub use gemini::GeminiGenerationAdapter;
pub use share::ClipboardShareAdapter;
pub use vault::JsonFileVault;
