//! Business-rule violations.
//!
//! Every mutating domain operation returns [`Outcome`], and operations that
//! can break several independent rules collect all of them before failing,
//! so a caller sees every problem at once.

use thiserror::Error;
use uuid::Uuid;

/// Result type for domain operations guarded by business rules.
pub type Outcome<T> = Result<T, ValidationErrors>;

/// A single business-rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Game name exceeds the length limit.
    #[error("game name cannot be longer than 100 characters")]
    GameNameTooLong,

    /// The user is already on the roster.
    #[error("cannot add duplicate player")]
    DuplicatePlayer,

    /// The operation is only valid before the game starts.
    #[error("game has already started")]
    GameAlreadyStarted,

    /// The operation is only valid while the game is running.
    #[error("game has not been started")]
    GameNotStarted,

    /// The game is over.
    #[error("game has already ended")]
    GameAlreadyEnded,

    /// Starting requires at least two players.
    #[error("cannot start game with only one player")]
    NotEnoughPlayers,

    /// Starting requires at least two questions.
    #[error("at least two questions are required to start the game")]
    NotEnoughQuestions,

    /// The user is not on the roster.
    #[error("user {0} is not a player in this game")]
    NotAPlayer(Uuid),

    /// Question text exceeds the length limit.
    #[error("question text cannot be longer than 100 characters")]
    QuestionTextTooLong,

    /// A question needs at least two answer variants.
    #[error("more than one answer variant must be added")]
    NotEnoughVariants,

    /// A question can carry at most twenty answer variants.
    #[error("no more than twenty answer variants can be added")]
    TooManyVariants,

    /// Variant labels are single characters.
    #[error("variant label {0:?} must be a single character")]
    InvalidVariantLabel(String),

    /// A variant must carry answer text.
    #[error("variant '{0}' must have answer text")]
    EmptyVariantText(char),

    /// Variant text exceeds the length limit.
    #[error("variant '{0}' text cannot be longer than 100 characters")]
    VariantTextTooLong(char),

    /// A choice or guess must select at least one variant.
    #[error("at least one variant must be selected")]
    EmptySelection,

    /// The selection references a variant from another question.
    #[error("variant {0} does not exist on this question")]
    UnknownVariant(Uuid),

    /// One choice per user per question.
    #[error("user already made a choice")]
    ChoiceAlreadyRecorded,

    /// One guess per ordered pair of users per question.
    #[error("user already made a guess for this player")]
    GuessAlreadyRecorded,

    /// A player cannot guess their own choice.
    #[error("players cannot guess their own choice")]
    SelfGuess,

    /// Results are only available once the question is fully answered.
    #[error("cannot produce results until the question is fully answered")]
    QuestionNotAnswered,

    /// The question id does not belong to this game.
    #[error("question {0} does not belong to this game")]
    UnknownQuestion(Uuid),
}

/// An ordered, non-empty collection of rule violations from one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Returns the violations in the order they were detected.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Returns the human-readable message for each violation.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        debug_assert!(!errors.is_empty(), "a failure must carry at least one error");
        Self(errors)
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
