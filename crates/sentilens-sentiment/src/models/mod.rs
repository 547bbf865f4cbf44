//! The two independent, stateless scoring models.
//!
//! - [`polarity`]: adjective lexicon averaging polarity and subjectivity,
//!   with intensifiers and negation.
//! - [`valence`]: valence-aware rule-based model tuned for informal text,
//!   producing a single normalized compound score.
//!
//! Both are pure functions of their input text.

pub mod polarity;
pub mod valence;

mod polarity_lexicon;
mod valence_lexicon;
