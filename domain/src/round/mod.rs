//! Round answers and scoring rules
//!
//! A round is the processing of one question, from the first submitted
//! answer until the game advances. [`answer::RoundAnswer`] records what each
//! participant submitted; [`rule::ScoringRule`] decides how submissions
//! turn into points.
//!
//! # Variants
//!
//! ```text
//! ┌──────────────────────────────┬──────────────────────────────────────┐
//! │ SelfJudged                   │ Matching                             │
//! ├──────────────────────────────┼──────────────────────────────────────┤
//! │ payload: Judged(bool)        │ payload: Choice(name)                │
//! │ +1 to the submitter when     │ +1 to both when the two choices      │
//! │ they judge themselves right  │ agree, scored on round completion    │
//! └──────────────────────────────┴──────────────────────────────────────┘
//! ```

pub mod answer;
pub mod rule;

pub use answer::{AnswerPayload, RoundAnswer, RoundStatus};
pub use rule::{GameVariant, MatchingRule, ScoringRule, SelfJudgedRule};
