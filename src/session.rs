//! Explicit game session state: which screen is up, the question being asked,
//! and the result of the last answer. The host owns one session per player and
//! drives it with `start` / `submit` / `advance`.

use log::{debug, trace};
use rand::Rng;
use serde::Serialize;

use crate::GameError;
use crate::difficulty::resolve_difficulty;
use crate::feedback::encouragement;
use crate::history::AnswerRecord;
use crate::pet::PetType;
use crate::progress::{apply_result, stars_for};
use crate::question::{ProblemKind, Question, generate};
use crate::stats::GameStats;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Home,
    Game,
}

/// What the player sees after answering.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    pub question_id: u64,
    pub correct: bool,
    pub correct_answer: i32,
    /// Stars awarded for this answer (0 when wrong).
    pub stars_earned: u32,
    pub message: &'static str,
    pub level_up: bool,
    pub record: AnswerRecord,
}

#[derive(Clone, Debug)]
pub struct GameSession {
    stats: GameStats,
    screen: Screen,
    mode: ProblemKind,
    current: Option<Question>,
    outcome: Option<AnswerOutcome>,
    sound_enabled: bool,
    next_id: u64,
}

impl GameSession {
    pub fn new(stats: GameStats) -> Self {
        Self {
            stats,
            screen: Screen::Home,
            mode: ProblemKind::Addition,
            current: None,
            outcome: None,
            sound_enabled: true,
            next_id: 1,
        }
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn mode(&self) -> ProblemKind {
        self.mode
    }

    pub fn current(&self) -> Option<&Question> {
        self.current.as_ref()
    }

    pub fn outcome(&self) -> Option<&AnswerOutcome> {
        self.outcome.as_ref()
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    /// Enter the game screen in `mode` with a fresh question.
    pub fn start<R: Rng + ?Sized>(&mut self, mode: ProblemKind, rng: &mut R) -> &Question {
        debug!(target: "session", "starting {} round", mode);
        self.mode = mode;
        self.screen = Screen::Game;
        self.next_question(rng)
    }

    /// Score `answer` against the current question and update the statistics.
    pub fn submit<R: Rng + ?Sized>(
        &mut self,
        answer: i32,
        timestamp: u64,
        rng: &mut R,
    ) -> Result<&AnswerOutcome, GameError> {
        let question = self.current.as_ref().ok_or(GameError::NoActiveQuestion)?;
        if self.outcome.is_some() {
            return Err(GameError::AlreadyAnswered(question.id));
        }

        let correct = question.is_correct(answer);
        let next = apply_result(&self.stats, question.kind, correct);
        let outcome = AnswerOutcome {
            question_id: question.id,
            correct,
            correct_answer: question.answer,
            stars_earned: if correct { stars_for(question.kind) } else { 0 },
            message: encouragement(correct, rng),
            level_up: next.level > self.stats.level,
            record: AnswerRecord::new(question, answer, timestamp),
        };
        trace!(target: "session", "question #{} answered {} (correct={})", question.id, answer, correct);

        self.stats = next;
        Ok(&*self.outcome.insert(outcome))
    }

    /// Move on to the next question in the same mode, using the current tier.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Question {
        self.next_question(rng)
    }

    pub fn go_home(&mut self) {
        self.screen = Screen::Home;
        self.current = None;
        self.outcome = None;
    }

    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    pub fn change_pet(&mut self) -> PetType {
        self.stats.pet_type = self.stats.pet_type.next();
        self.stats.pet_type
    }

    fn next_question<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Question {
        let id = self.next_id;
        self.next_id += 1;
        let range = resolve_difficulty(&self.stats);
        self.outcome = None;
        self.current.insert(generate(self.mode, range, id, rng))
    }
}
