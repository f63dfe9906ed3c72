use crate::clock::{Clock, SystemClock};
use crate::domain::{
    Answer, AnswerDraft, Question, QuestionDraft, QuestionId, next_question_id,
};
use crate::error::BoardError;
use crate::render::{BoardView, CardState, Expansion, build_view};
use crate::storage::QuestionStore;
use tracing::{info, instrument};

/// Orchestrates board mutations. Every operation re-reads the store before
/// writing, so the stored collection stays the single source of truth. Two
/// tabs writing the same key are not coordinated: the last save wins.
pub struct BoardController<S, C = SystemClock> {
    store: S,
    clock: C,
    expansion: Expansion,
    focus: Option<QuestionId>,
    generation: u64,
}

impl<S: QuestionStore> BoardController<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S, C> BoardController<S, C>
where
    S: QuestionStore,
    C: Clock,
{
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            expansion: Expansion::default(),
            focus: None,
            generation: 0,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn questions(&self) -> Vec<Question> {
        self.store.load()
    }

    /// Current render instructions, read fresh from the store.
    pub fn view(&self) -> BoardView {
        build_view(&self.store.load(), &self.expansion, self.focus)
    }

    /// Bumped on every successful mutation; cards keyed by it are rebuilt.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn card_state(&self, id: QuestionId) -> CardState {
        self.expansion.state(id)
    }

    #[instrument(skip(self, content))]
    pub fn create_question(
        &mut self,
        author: &str,
        title: &str,
        content: &str,
    ) -> Result<Question, BoardError> {
        let draft = QuestionDraft::new(author, title, content)?;

        let mut questions = self.store.load();
        let now = self.clock.now();
        let question = draft.into_question(next_question_id(&questions, now), now);
        questions.push(question.clone());
        self.store.save(&questions)?;

        info!(question_id = %question.id, total = questions.len(), "question created");
        self.rebuilt(question.id);
        Ok(question)
    }

    #[instrument(skip(self, content))]
    pub fn submit_answer(
        &mut self,
        question_id: QuestionId,
        author: &str,
        content: &str,
    ) -> Result<Answer, BoardError> {
        let draft = AnswerDraft::new(author, content)?;

        let mut questions = self.store.load();
        let now = self.clock.now();
        let question = questions
            .iter_mut()
            .find(|q| q.id == question_id)
            .ok_or(BoardError::QuestionNotFound(question_id))?;
        let answer = draft.into_answer(question.next_answer_id(now), now);
        question.answers.push(answer.clone());
        let answers = question.answers.len();
        self.store.save(&questions)?;

        info!(%question_id, answer_id = %answer.id, answers, "answer added");
        self.rebuilt(question_id);
        Ok(answer)
    }

    /// Flips one card's answer panel. Nothing is saved or rebuilt.
    pub fn toggle(&mut self, question_id: QuestionId) -> CardState {
        self.expansion.toggle(question_id)
    }

    fn rebuilt(&mut self, touched: QuestionId) {
        self.generation += 1;
        self.expansion.reset(Some(touched));
        self.focus = Some(touched);
    }
}
