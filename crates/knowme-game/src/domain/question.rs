//! Questions, answer variants, and guess scoring.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::validation::{Outcome, ValidationError, ValidationErrors};

const MAX_TEXT_LEN: usize = 100;
const MIN_VARIANTS: usize = 2;
const MAX_VARIANTS: usize = 20;
/// A perfect guess on a multi-answer question is worth this many points;
/// every incorrect variant subtracts one.
const MULTI_ANSWER_MAX_SCORE: usize = 3;

/// One selectable answer option. Immutable once created.
#[derive(Debug, Clone)]
pub struct QuestionVariant {
    id: Uuid,
    label: char,
    text: String,
}

impl QuestionVariant {
    /// Returns the variant identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the single-character label shown next to the variant.
    #[must_use]
    pub fn label(&self) -> char {
        self.label
    }

    /// Returns the variant's answer text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    fn create(label: &str, text: &str) -> Outcome<Self> {
        let mut errors = Vec::new();

        let mut chars = label.chars();
        let label_char = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => {
                errors.push(ValidationError::InvalidVariantLabel(label.to_owned()));
                None
            }
        };

        if let Some(c) = label_char {
            if text.trim().is_empty() {
                errors.push(ValidationError::EmptyVariantText(c));
            } else if text.chars().count() > MAX_TEXT_LEN {
                errors.push(ValidationError::VariantTextTooLong(c));
            }
        }

        if !errors.is_empty() {
            return Err(errors.into());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            label: label_char.expect("label errors were checked above"),
            text: text.to_owned(),
        })
    }
}

/// A player's own answer to a question. One per (question, user).
#[derive(Debug, Clone)]
pub struct QuestionUserChoice {
    user_id: Uuid,
    selected_variant_ids: BTreeSet<Uuid>,
}

impl QuestionUserChoice {
    /// Returns the answering user.
    #[must_use]
    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    /// Returns the variant ids the user selected.
    #[must_use]
    pub fn selected_variant_ids(&self) -> &BTreeSet<Uuid> {
        &self.selected_variant_ids
    }
}

/// One player's prediction of another player's choice.
/// One per (question, guessing user, choice user) ordered pair.
#[derive(Debug, Clone)]
pub struct QuestionUserGuess {
    guessing_user_id: Uuid,
    choice_user_id: Uuid,
    selected_variant_ids: BTreeSet<Uuid>,
}

impl QuestionUserGuess {
    /// Returns the guessing user.
    #[must_use]
    pub fn guessing_user_id(&self) -> Uuid {
        self.guessing_user_id
    }

    /// Returns the user whose choice is being guessed.
    #[must_use]
    pub fn choice_user_id(&self) -> Uuid {
        self.choice_user_id
    }
}

/// Score and feedback for a single guess.
#[derive(Debug, Clone, Serialize)]
pub struct UserGuessResult {
    /// The guessing user.
    pub guessing_user_id: Uuid,
    /// The user whose choice was guessed.
    pub choice_user_id: Uuid,
    /// Points awarded for this guess.
    pub score: u32,
    /// Variant ids in the choice but missing from the guess.
    pub should_have_selected: Vec<Uuid>,
    /// Variant ids in the guess but absent from the choice.
    pub should_not_have_selected: Vec<Uuid>,
}

/// A player's total score for a question with the per-guess breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct UserResult {
    /// The scored player.
    pub user_id: Uuid,
    /// Sum of this player's per-guess scores.
    pub total_score: u32,
    /// One entry per guess the player made.
    pub guess_results: Vec<UserGuessResult>,
}

/// A question within a game session.
///
/// Owns its variants and the append-only choice and guess logs. The session
/// root passes the player roster into the operations that depend on it;
/// questions hold no reference back to their session.
#[derive(Debug, Clone)]
pub struct Question {
    id: Uuid,
    text: String,
    multiple_answers: bool,
    created_by: Uuid,
    created_at: DateTime<Utc>,
    sequence: usize,
    variants: Vec<QuestionVariant>,
    choices: Vec<QuestionUserChoice>,
    guesses: Vec<QuestionUserGuess>,
}

impl Question {
    /// Validates and creates a question with its variants, accumulating
    /// every violation before failing.
    pub(crate) fn create(
        text: String,
        multiple_answers: bool,
        variants: &BTreeMap<String, String>,
        created_by: Uuid,
        sequence: usize,
        created_at: DateTime<Utc>,
    ) -> Outcome<Self> {
        let mut errors = Vec::new();

        if text.chars().count() > MAX_TEXT_LEN {
            errors.push(ValidationError::QuestionTextTooLong);
        }
        if variants.len() < MIN_VARIANTS {
            errors.push(ValidationError::NotEnoughVariants);
        }
        if variants.len() > MAX_VARIANTS {
            errors.push(ValidationError::TooManyVariants);
        }

        let mut created_variants = Vec::with_capacity(variants.len());
        for (label, variant_text) in variants {
            match QuestionVariant::create(label, variant_text) {
                Ok(variant) => created_variants.push(variant),
                Err(variant_errors) => errors.extend(variant_errors),
            }
        }

        if !errors.is_empty() {
            return Err(errors.into());
        }

        Ok(Self {
            id: Uuid::new_v4(),
            text,
            multiple_answers,
            created_by,
            created_at,
            sequence,
            variants: created_variants,
            choices: Vec::new(),
            guesses: Vec::new(),
        })
    }

    /// Returns the question identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the question text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns whether more than one variant counts as the right answer.
    #[must_use]
    pub fn multiple_answers(&self) -> bool {
        self.multiple_answers
    }

    /// Returns the authoring user.
    #[must_use]
    pub fn created_by(&self) -> Uuid {
        self.created_by
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the question's position in the session (insertion order).
    #[must_use]
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    /// Returns the answer variants.
    #[must_use]
    pub fn variants(&self) -> &[QuestionVariant] {
        &self.variants
    }

    /// Returns the recorded choices in submission order.
    #[must_use]
    pub fn choices(&self) -> &[QuestionUserChoice] {
        &self.choices
    }

    /// Returns the recorded guesses in submission order.
    #[must_use]
    pub fn guesses(&self) -> &[QuestionUserGuess] {
        &self.guesses
    }

    /// Returns the number of choices recorded so far.
    #[must_use]
    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    /// Returns the number of guesses recorded so far.
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    /// True once every player has submitted a choice and every ordered pair
    /// of distinct players has submitted a guess.
    #[must_use]
    pub fn answered(&self, player_count: usize) -> bool {
        self.guesses.len() == player_count * player_count.saturating_sub(1)
            && self.choices.len() == player_count
    }

    /// Records a player's own choice.
    ///
    /// # Errors
    ///
    /// Accumulates `ChoiceAlreadyRecorded` (one choice per user),
    /// `EmptySelection`, and `UnknownVariant` per offending id. Nothing is
    /// recorded on failure.
    pub(crate) fn record_choice(&mut self, user_id: Uuid, selected: &[Uuid]) -> Outcome<()> {
        let mut errors = Vec::new();

        if self.choices.iter().any(|c| c.user_id == user_id) {
            errors.push(ValidationError::ChoiceAlreadyRecorded);
        }
        errors.extend(self.check_selection(selected));

        if !errors.is_empty() {
            return Err(errors.into());
        }

        self.choices.push(QuestionUserChoice {
            user_id,
            selected_variant_ids: selected.iter().copied().collect(),
        });
        Ok(())
    }

    /// Records one player's guess about another player's choice.
    ///
    /// # Errors
    ///
    /// Accumulates `SelfGuess`, `GuessAlreadyRecorded` (one guess per
    /// ordered pair), `EmptySelection`, and `UnknownVariant` per offending
    /// id. Nothing is recorded on failure.
    pub(crate) fn record_guess(
        &mut self,
        guessing_user_id: Uuid,
        choice_user_id: Uuid,
        selected: &[Uuid],
    ) -> Outcome<()> {
        let mut errors = Vec::new();

        if guessing_user_id == choice_user_id {
            errors.push(ValidationError::SelfGuess);
        }
        if self.guesses.iter().any(|g| {
            g.guessing_user_id == guessing_user_id && g.choice_user_id == choice_user_id
        }) {
            errors.push(ValidationError::GuessAlreadyRecorded);
        }
        errors.extend(self.check_selection(selected));

        if !errors.is_empty() {
            return Err(errors.into());
        }

        self.guesses.push(QuestionUserGuess {
            guessing_user_id,
            choice_user_id,
            selected_variant_ids: selected.iter().copied().collect(),
        });
        Ok(())
    }

    fn check_selection(&self, selected: &[Uuid]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if selected.is_empty() {
            errors.push(ValidationError::EmptySelection);
        }
        for variant_id in selected {
            if !self.variants.iter().any(|v| v.id == *variant_id) {
                errors.push(ValidationError::UnknownVariant(*variant_id));
            }
        }
        errors
    }

    /// Scores every guess and returns one result per player, in roster
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `QuestionNotAnswered` until the answered predicate holds.
    pub fn user_results(&self, players: &[Uuid]) -> Outcome<Vec<UserResult>> {
        if !self.answered(players.len()) {
            return Err(ValidationErrors::from(ValidationError::QuestionNotAnswered));
        }

        let results = players
            .iter()
            .map(|&user_id| {
                let guess_results: Vec<UserGuessResult> = self
                    .guesses
                    .iter()
                    .filter(|g| g.guessing_user_id == user_id)
                    .map(|g| self.guess_result(g))
                    .collect();
                let total_score = guess_results.iter().map(|r| r.score).sum();
                UserResult {
                    user_id,
                    total_score,
                    guess_results,
                }
            })
            .collect();

        Ok(results)
    }

    fn guess_result(&self, guess: &QuestionUserGuess) -> UserGuessResult {
        let choice = self
            .choices
            .iter()
            .find(|c| c.user_id == guess.choice_user_id)
            .expect("an answered question has a choice for every player");

        let should_not_have_selected: Vec<Uuid> = guess
            .selected_variant_ids
            .difference(&choice.selected_variant_ids)
            .copied()
            .collect();
        let should_have_selected: Vec<Uuid> = choice
            .selected_variant_ids
            .difference(&guess.selected_variant_ids)
            .copied()
            .collect();

        UserGuessResult {
            guessing_user_id: guess.guessing_user_id,
            choice_user_id: guess.choice_user_id,
            score: self.score(should_have_selected.len() + should_not_have_selected.len()),
            should_have_selected,
            should_not_have_selected,
        }
    }

    // Multi-answer questions lose one point per incorrect variant from a
    // base of three; single-answer questions are all-or-nothing.
    fn score(&self, incorrect_count: usize) -> u32 {
        if self.multiple_answers {
            u32::try_from(MULTI_ANSWER_MAX_SCORE.saturating_sub(incorrect_count))
                .expect("score is at most 3")
        } else {
            u32::from(incorrect_count == 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 18, 0, 0).unwrap()
    }

    fn variants(labels: &[(&str, &str)]) -> BTreeMap<String, String> {
        labels
            .iter()
            .map(|(label, text)| ((*label).to_owned(), (*text).to_owned()))
            .collect()
    }

    fn question(multiple_answers: bool, labels: &[(&str, &str)]) -> Question {
        Question::create(
            "What would you bring to a desert island?".to_owned(),
            multiple_answers,
            &variants(labels),
            Uuid::new_v4(),
            0,
            fixed_now(),
        )
        .unwrap()
    }

    fn variant_id(question: &Question, label: char) -> Uuid {
        question
            .variants()
            .iter()
            .find(|v| v.label() == label)
            .unwrap()
            .id()
    }

    // --- creation tests ---

    #[test]
    fn test_create_with_valid_input_assigns_variants() {
        let question = question(false, &[("A", "Tea"), ("B", "Coffee")]);

        assert_eq!(question.variants().len(), 2);
        assert_eq!(question.variants()[0].label(), 'A');
        assert_eq!(question.variants()[0].text(), "Tea");
        assert_eq!(question.choice_count(), 0);
        assert_eq!(question.guess_count(), 0);
    }

    #[test]
    fn test_create_with_long_text_fails() {
        let result = Question::create(
            "x".repeat(101),
            false,
            &variants(&[("A", "Tea"), ("B", "Coffee")]),
            Uuid::new_v4(),
            0,
            fixed_now(),
        );

        assert_eq!(
            result.unwrap_err().errors(),
            &[ValidationError::QuestionTextTooLong]
        );
    }

    #[test]
    fn test_create_with_one_variant_fails() {
        let result = Question::create(
            "Tea or coffee?".to_owned(),
            false,
            &variants(&[("A", "Tea")]),
            Uuid::new_v4(),
            0,
            fixed_now(),
        );

        assert_eq!(
            result.unwrap_err().errors(),
            &[ValidationError::NotEnoughVariants]
        );
    }

    #[test]
    fn test_create_with_twenty_one_variants_fails() {
        let labels: Vec<(String, String)> = (0..21)
            .map(|i| {
                let label = char::from(b'a' + u8::try_from(i).unwrap());
                (label.to_string(), format!("Option {i}"))
            })
            .collect();
        let variant_map: BTreeMap<String, String> = labels.into_iter().collect();

        let result = Question::create(
            "Pick one".to_owned(),
            false,
            &variant_map,
            Uuid::new_v4(),
            0,
            fixed_now(),
        );

        assert_eq!(
            result.unwrap_err().errors(),
            &[ValidationError::TooManyVariants]
        );
    }

    #[test]
    fn test_create_accumulates_all_violations() {
        let result = Question::create(
            "x".repeat(101),
            false,
            &variants(&[("AB", "Tea")]),
            Uuid::new_v4(),
            0,
            fixed_now(),
        );

        let errors = result.unwrap_err();
        assert_eq!(
            errors.errors(),
            &[
                ValidationError::QuestionTextTooLong,
                ValidationError::NotEnoughVariants,
                ValidationError::InvalidVariantLabel("AB".to_owned()),
            ]
        );
    }

    #[test]
    fn test_create_with_empty_variant_text_fails() {
        let result = Question::create(
            "Tea or coffee?".to_owned(),
            false,
            &variants(&[("A", "  "), ("B", "Coffee")]),
            Uuid::new_v4(),
            0,
            fixed_now(),
        );

        assert_eq!(
            result.unwrap_err().errors(),
            &[ValidationError::EmptyVariantText('A')]
        );
    }

    // --- recording tests ---

    #[test]
    fn test_record_choice_twice_for_same_user_fails_without_mutation() {
        let mut question = question(false, &[("A", "Tea"), ("B", "Coffee")]);
        let user = Uuid::new_v4();
        let a = variant_id(&question, 'A');

        question.record_choice(user, &[a]).unwrap();
        let result = question.record_choice(user, &[a]);

        assert_eq!(
            result.unwrap_err().errors(),
            &[ValidationError::ChoiceAlreadyRecorded]
        );
        assert_eq!(question.choice_count(), 1);
    }

    #[test]
    fn test_record_choice_stores_the_selection_as_a_set() {
        let mut question = question(true, &[("A", "Tea"), ("B", "Coffee")]);
        let user = Uuid::new_v4();
        let a = variant_id(&question, 'A');
        let b = variant_id(&question, 'B');

        question.record_choice(user, &[b, a, b]).unwrap();

        let choice = &question.choices()[0];
        assert_eq!(choice.user_id(), user);
        assert_eq!(
            choice.selected_variant_ids(),
            &[a, b].into_iter().collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn test_record_choice_with_unknown_variant_fails() {
        let mut question = question(false, &[("A", "Tea"), ("B", "Coffee")]);
        let stranger = Uuid::new_v4();

        let result = question.record_choice(Uuid::new_v4(), &[stranger]);

        assert_eq!(
            result.unwrap_err().errors(),
            &[ValidationError::UnknownVariant(stranger)]
        );
        assert_eq!(question.choice_count(), 0);
    }

    #[test]
    fn test_record_choice_with_empty_selection_fails() {
        let mut question = question(false, &[("A", "Tea"), ("B", "Coffee")]);

        let result = question.record_choice(Uuid::new_v4(), &[]);

        assert_eq!(
            result.unwrap_err().errors(),
            &[ValidationError::EmptySelection]
        );
    }

    #[test]
    fn test_record_guess_twice_for_same_pair_fails() {
        let mut question = question(false, &[("A", "Tea"), ("B", "Coffee")]);
        let guesser = Uuid::new_v4();
        let target = Uuid::new_v4();
        let a = variant_id(&question, 'A');

        question.record_guess(guesser, target, &[a]).unwrap();
        let result = question.record_guess(guesser, target, &[a]);

        assert_eq!(
            result.unwrap_err().errors(),
            &[ValidationError::GuessAlreadyRecorded]
        );
        assert_eq!(question.guess_count(), 1);
    }

    #[test]
    fn test_record_guess_reverse_pair_is_allowed() {
        let mut question = question(false, &[("A", "Tea"), ("B", "Coffee")]);
        let guesser = Uuid::new_v4();
        let target = Uuid::new_v4();
        let a = variant_id(&question, 'A');

        question.record_guess(guesser, target, &[a]).unwrap();
        question.record_guess(target, guesser, &[a]).unwrap();

        assert_eq!(question.guess_count(), 2);
        assert_eq!(question.guesses()[1].guessing_user_id(), target);
        assert_eq!(question.guesses()[1].choice_user_id(), guesser);
    }

    #[test]
    fn test_record_guess_about_self_fails() {
        let mut question = question(false, &[("A", "Tea"), ("B", "Coffee")]);
        let user = Uuid::new_v4();
        let a = variant_id(&question, 'A');

        let result = question.record_guess(user, user, &[a]);

        assert_eq!(result.unwrap_err().errors(), &[ValidationError::SelfGuess]);
    }

    // --- answered predicate ---

    #[test]
    fn test_answered_requires_all_choices_and_all_pairs() {
        let mut question = question(false, &[("A", "Tea"), ("B", "Coffee")]);
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();
        let a = variant_id(&question, 'A');

        assert!(!question.answered(2));

        question.record_choice(p1, &[a]).unwrap();
        question.record_choice(p2, &[a]).unwrap();
        assert!(!question.answered(2));

        question.record_guess(p1, p2, &[a]).unwrap();
        assert!(!question.answered(2));

        question.record_guess(p2, p1, &[a]).unwrap();
        assert!(question.answered(2));
    }

    #[test]
    fn test_user_results_before_answered_fails() {
        let question = question(false, &[("A", "Tea"), ("B", "Coffee")]);

        let result = question.user_results(&[Uuid::new_v4(), Uuid::new_v4()]);

        assert_eq!(
            result.unwrap_err().errors(),
            &[ValidationError::QuestionNotAnswered]
        );
    }

    // --- scoring ---

    /// Answers a two-player question where `p2` chooses `p2_choice` and `p1`
    /// guesses `p1_guess` about it, then returns `p1`'s guess result.
    fn scored_guess(
        mut question: Question,
        p2_choice: &[Uuid],
        p1_guess: &[Uuid],
    ) -> UserGuessResult {
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();
        let first = question.variants()[0].id();

        question.record_choice(p1, &[first]).unwrap();
        question.record_choice(p2, p2_choice).unwrap();
        question.record_guess(p1, p2, p1_guess).unwrap();
        question.record_guess(p2, p1, &[first]).unwrap();

        let results = question.user_results(&[p1, p2]).unwrap();
        results[0].guess_results[0].clone()
    }

    #[test]
    fn test_single_answer_exact_guess_scores_one() {
        let q = question(false, &[("A", "Tea"), ("B", "Coffee")]);
        let a = variant_id(&q, 'A');

        let result = scored_guess(q, &[a], &[a]);

        assert_eq!(result.score, 1);
        assert!(result.should_have_selected.is_empty());
        assert!(result.should_not_have_selected.is_empty());
    }

    #[test]
    fn test_single_answer_wrong_guess_scores_zero() {
        let q = question(false, &[("A", "Tea"), ("B", "Coffee")]);
        let a = variant_id(&q, 'A');
        let b = variant_id(&q, 'B');

        let result = scored_guess(q, &[a], &[b]);

        assert_eq!(result.score, 0);
        assert_eq!(result.should_have_selected, vec![a]);
        assert_eq!(result.should_not_have_selected, vec![b]);
    }

    #[test]
    fn test_single_answer_overselected_guess_scores_zero() {
        let q = question(false, &[("A", "Tea"), ("B", "Coffee")]);
        let a = variant_id(&q, 'A');
        let b = variant_id(&q, 'B');

        let result = scored_guess(q, &[a], &[a, b]);

        assert_eq!(result.score, 0);
        assert!(result.should_have_selected.is_empty());
        assert_eq!(result.should_not_have_selected, vec![b]);
    }

    #[test]
    fn test_multiple_answer_exact_guess_scores_three() {
        let q = question(true, &[("A", "Hiking"), ("B", "Reading"), ("C", "Gaming")]);
        let a = variant_id(&q, 'A');
        let b = variant_id(&q, 'B');

        let result = scored_guess(q, &[a, b], &[a, b]);

        assert_eq!(result.score, 3);
    }

    #[test]
    fn test_multiple_answer_one_missing_scores_two() {
        let q = question(true, &[("A", "Hiking"), ("B", "Reading"), ("C", "Gaming")]);
        let a = variant_id(&q, 'A');
        let b = variant_id(&q, 'B');

        let result = scored_guess(q, &[a, b], &[a]);

        assert_eq!(result.score, 2);
        assert_eq!(result.should_have_selected, vec![b]);
    }

    #[test]
    fn test_multiple_answer_one_extra_scores_two() {
        let q = question(true, &[("A", "Hiking"), ("B", "Reading"), ("C", "Gaming")]);
        let a = variant_id(&q, 'A');
        let b = variant_id(&q, 'B');
        let c = variant_id(&q, 'C');

        let result = scored_guess(q, &[a, b], &[a, b, c]);

        assert_eq!(result.score, 2);
        assert_eq!(result.should_not_have_selected, vec![c]);
    }

    #[test]
    fn test_multiple_answer_fully_wrong_guess_floors_at_zero() {
        let q = question(true, &[("A", "Hiking"), ("B", "Reading"), ("C", "Gaming")]);
        let a = variant_id(&q, 'A');
        let b = variant_id(&q, 'B');
        let c = variant_id(&q, 'C');

        // extra = {C}, missing = {A, B}: three incorrect, 3 - 3 = 0.
        let result = scored_guess(q, &[a, b], &[c]);

        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_user_results_sums_scores_in_roster_order() {
        let mut question = question(false, &[("A", "Tea"), ("B", "Coffee")]);
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();
        let p3 = Uuid::new_v4();
        let a = variant_id(&question, 'A');
        let b = variant_id(&question, 'B');

        question.record_choice(p1, &[a]).unwrap();
        question.record_choice(p2, &[b]).unwrap();
        question.record_choice(p3, &[a]).unwrap();

        // p1 guesses everyone right, p2 gets one right, p3 none.
        question.record_guess(p1, p2, &[b]).unwrap();
        question.record_guess(p1, p3, &[a]).unwrap();
        question.record_guess(p2, p1, &[a]).unwrap();
        question.record_guess(p2, p3, &[b]).unwrap();
        question.record_guess(p3, p1, &[b]).unwrap();
        question.record_guess(p3, p2, &[a]).unwrap();

        let results = question.user_results(&[p1, p2, p3]).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].user_id, p1);
        assert_eq!(results[0].total_score, 2);
        assert_eq!(results[1].user_id, p2);
        assert_eq!(results[1].total_score, 1);
        assert_eq!(results[2].user_id, p3);
        assert_eq!(results[2].total_score, 0);
        assert_eq!(results[0].guess_results.len(), 2);
    }
}
