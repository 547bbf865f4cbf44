//! Runs both models over one text.

use sentilens_core::RawScores;

use crate::models::{polarity, valence};
use crate::types::PlainText;

/// Score `text` with the polarity model and the valence model.
///
/// The two models share nothing, so they run on separate threads. The
/// result is deterministic for a given text.
#[must_use]
pub fn score(text: &PlainText) -> RawScores {
    let text = text.as_str();
    let (assessment, compound) = std::thread::scope(|s| {
        let valence_handle = s.spawn(|| valence::compound(text));
        let assessment = polarity::assess(text);
        let compound = match valence_handle.join() {
            Ok(compound) => compound,
            Err(panic) => std::panic::resume_unwind(panic),
        };
        (assessment, compound)
    });

    RawScores {
        polarity: assessment.polarity,
        subjectivity: assessment.subjectivity,
        compound,
    }
}
