//! Pure rendering: turns the persisted collection plus the presentational
//! expand/collapse state into escaped card descriptors. The browser app and
//! the CLI both draw from [`BoardView`]; neither touches question text
//! directly.

use crate::domain::{Answer, AnswerId, Question, QuestionId};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::fmt::Write;

pub const EMPTY_STATE_TEXT: &str = "No questions yet. Be the first to ask!";

/// Escapes text for use inside element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escapes free text, then turns its line breaks into `<br>`.
pub fn multiline_html(text: &str) -> String {
    escape_html(text)
        .replace("\r\n", "\n")
        .replace('\n', "<br>")
}

pub fn date_label(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M").to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Collapsed,
    Expanded,
}

/// Which cards currently show their answer panel. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    open: BTreeSet<QuestionId>,
}

impl Expansion {
    pub fn state(&self, id: QuestionId) -> CardState {
        if self.open.contains(&id) {
            CardState::Expanded
        } else {
            CardState::Collapsed
        }
    }

    pub fn toggle(&mut self, id: QuestionId) -> CardState {
        if !self.open.remove(&id) {
            self.open.insert(id);
        }
        self.state(id)
    }

    /// A full rebuild collapses everything except the card being reopened.
    pub fn reset(&mut self, reopen: Option<QuestionId>) {
        self.open.clear();
        self.open.extend(reopen);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerView {
    pub id: AnswerId,
    pub author_html: String,
    pub content_html: String,
    pub date_label: String,
}

impl From<&Answer> for AnswerView {
    fn from(answer: &Answer) -> Self {
        Self {
            id: answer.id,
            author_html: escape_html(&answer.author),
            content_html: multiline_html(&answer.content),
            date_label: date_label(&answer.date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: QuestionId,
    pub title_html: String,
    pub author_html: String,
    pub content_html: String,
    pub date_label: String,
    pub answers: Vec<AnswerView>,
    pub expanded: bool,
    /// Set on the card a mutation just touched; the UI scrolls it into view.
    pub focused: bool,
}

impl CardView {
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    pub fn answer_count_label(&self) -> String {
        match self.answers.len() {
            1 => "1 answer".to_string(),
            n => format!("{n} answers"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub cards: Vec<CardView>,
    pub show_empty_state: bool,
}

/// Questions newest first. Equal dates keep their stored order.
pub fn newest_first(questions: &[Question]) -> Vec<&Question> {
    let mut ordered: Vec<&Question> = questions.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));
    ordered
}

pub fn build_view(
    questions: &[Question],
    expansion: &Expansion,
    focus: Option<QuestionId>,
) -> BoardView {
    let cards = newest_first(questions)
        .into_iter()
        .map(|q| CardView {
            id: q.id,
            title_html: escape_html(&q.title),
            author_html: escape_html(&q.author),
            content_html: multiline_html(&q.content),
            date_label: date_label(&q.date),
            answers: q.answers.iter().map(AnswerView::from).collect(),
            expanded: expansion.state(q.id) == CardState::Expanded,
            focused: focus == Some(q.id),
        })
        .collect::<Vec<_>>();

    BoardView {
        show_empty_state: cards.is_empty(),
        cards,
    }
}

impl BoardView {
    /// Markup for the whole board: the empty-state placeholder followed by
    /// one `<article>` per card.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        let hidden = if self.show_empty_state { "" } else { " hidden" };
        let _ = writeln!(
            html,
            r#"<p class="qna-empty"{hidden}>{EMPTY_STATE_TEXT}</p>"#
        );
        for card in &self.cards {
            write_card(&mut html, card);
        }
        html
    }
}

fn write_card(html: &mut String, card: &CardView) {
    let open = if card.expanded { " open" } else { "" };
    let _ = writeln!(
        html,
        r#"<article class="qna-card{open}" data-id="{id}">"#,
        id = card.id
    );
    let _ = writeln!(
        html,
        r#"  <button class="qna-toggle" type="button" aria-expanded="{}">"#,
        card.expanded
    );
    let _ = writeln!(html, r#"    <h3 class="qna-title">{}</h3>"#, card.title_html);
    let _ = writeln!(
        html,
        r#"    <span class="qna-meta">{} &middot; {}</span>"#,
        card.author_html, card.date_label
    );
    let _ = writeln!(
        html,
        r#"    <span class="qna-count">{}</span>"#,
        card.answer_count_label()
    );
    html.push_str("  </button>\n");
    html.push_str("  <div class=\"qna-panel\">\n");
    let _ = writeln!(html, r#"    <p class="qna-content">{}</p>"#, card.content_html);
    html.push_str("    <ul class=\"qna-answers\">\n");
    for answer in &card.answers {
        let _ = writeln!(
            html,
            r#"      <li class="qna-answer" data-id="{}"><span class="qna-meta">{} &middot; {}</span><p>{}</p></li>"#,
            answer.id, answer.author_html, answer.date_label, answer.content_html
        );
    }
    html.push_str("    </ul>\n");
    let _ = writeln!(
        html,
        r#"    <form class="qna-answer-form" data-question-id="{}">"#,
        card.id
    );
    html.push_str("      <input name=\"author\" type=\"text\" placeholder=\"Your name\">\n");
    html.push_str("      <textarea name=\"content\" placeholder=\"Write an answer\"></textarea>\n");
    html.push_str("      <button type=\"submit\">Post answer</button>\n");
    html.push_str("    </form>\n");
    html.push_str("  </div>\n");
    html.push_str("</article>\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64, title: &str, date: &str) -> Question {
        Question {
            id: QuestionId(id),
            author: "author".into(),
            title: title.into(),
            content: "content".into(),
            date: date.parse().unwrap(),
            answers: Vec::new(),
        }
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn line_breaks_are_added_after_escaping() {
        assert_eq!(multiline_html("a<\nb"), "a&lt;<br>b");
        assert_eq!(multiline_html("x\r\ny"), "x<br>y");
        assert_eq!(multiline_html("<br>"), "&lt;br&gt;");
    }

    #[test]
    fn orders_newest_first() {
        let questions = vec![
            question(1, "jan", "2024-01-01T00:00:00Z"),
            question(2, "mar", "2024-03-01T00:00:00Z"),
            question(3, "feb", "2024-02-01T00:00:00Z"),
        ];
        let view = build_view(&questions, &Expansion::default(), None);
        let titles: Vec<_> = view.cards.iter().map(|c| c.title_html.as_str()).collect();
        assert_eq!(titles, ["mar", "feb", "jan"]);
    }

    #[test]
    fn newest_first_leaves_input_untouched() {
        let questions = vec![
            question(1, "old", "2024-01-01T00:00:00Z"),
            question(2, "new", "2024-02-01T00:00:00Z"),
        ];
        let ids: Vec<_> = newest_first(&questions).iter().map(|q| q.id).collect();
        assert_eq!(ids, [QuestionId(2), QuestionId(1)]);
        assert_eq!(questions[0].id, QuestionId(1));
    }

    #[test]
    fn equal_dates_keep_stored_order() {
        let questions = vec![
            question(1, "first", "2024-01-01T00:00:00Z"),
            question(2, "second", "2024-01-01T00:00:00Z"),
        ];
        let view = build_view(&questions, &Expansion::default(), None);
        assert_eq!(view.cards[0].id, QuestionId(1));
        assert_eq!(view.cards[1].id, QuestionId(2));
    }

    #[test]
    fn script_title_renders_as_text() {
        let questions = vec![question(1, "<script>alert(1)</script>", "2024-01-01T00:00:00Z")];
        let html = build_view(&questions, &Expansion::default(), None).to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn empty_board_shows_placeholder_only() {
        let view = build_view(&[], &Expansion::default(), None);
        assert!(view.show_empty_state);
        let html = view.to_html();
        assert!(html.contains(EMPTY_STATE_TEXT));
        assert!(!html.contains("hidden"));
        assert!(!html.contains("<article"));
    }

    #[test]
    fn placeholder_is_hidden_once_questions_exist() {
        let questions = vec![question(1, "t", "2024-01-01T00:00:00Z")];
        let html = build_view(&questions, &Expansion::default(), None).to_html();
        assert!(html.contains(r#"<p class="qna-empty" hidden>"#));
        assert_eq!(html.matches("<article").count(), 1);
    }

    #[test]
    fn rendering_twice_gives_same_cards() {
        let questions = vec![
            question(1, "a", "2024-01-01T00:00:00Z"),
            question(2, "b", "2024-01-02T00:00:00Z"),
        ];
        let expansion = Expansion::default();
        assert_eq!(
            build_view(&questions, &expansion, None),
            build_view(&questions, &expansion, None)
        );
    }

    #[test]
    fn toggle_flips_single_card() {
        let mut expansion = Expansion::default();
        assert_eq!(expansion.toggle(QuestionId(1)), CardState::Expanded);
        assert_eq!(expansion.state(QuestionId(2)), CardState::Collapsed);
        assert_eq!(expansion.toggle(QuestionId(1)), CardState::Collapsed);
    }

    #[test]
    fn reset_keeps_only_reopened_card() {
        let mut expansion = Expansion::default();
        expansion.toggle(QuestionId(1));
        expansion.toggle(QuestionId(2));
        expansion.reset(Some(QuestionId(3)));
        assert_eq!(expansion.state(QuestionId(1)), CardState::Collapsed);
        assert_eq!(expansion.state(QuestionId(2)), CardState::Collapsed);
        assert_eq!(expansion.state(QuestionId(3)), CardState::Expanded);
    }

    #[test]
    fn answer_count_label_is_pluralized() {
        let mut questions = vec![question(1, "t", "2024-01-01T00:00:00Z")];
        let view = build_view(&questions, &Expansion::default(), None);
        assert_eq!(view.cards[0].answer_count_label(), "0 answers");

        questions[0].answers.push(Answer {
            id: AnswerId(9),
            author: "b".into(),
            content: "c".into(),
            date: "2024-01-01T01:00:00Z".parse().unwrap(),
        });
        let view = build_view(&questions, &Expansion::default(), None);
        assert_eq!(view.cards[0].answer_count_label(), "1 answer");
    }
}
