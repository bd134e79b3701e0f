//! Each flashcard is written as a record of three lines followed by a blank
//! line:
//!
//! ```text
//! Q: <question>
//! A: <answer>
//! Learned: <true|false>
//!
//! ```
//!
//! Reading is lenient. The `Learned:` line is optional and defaults to
//! `false`, stray lines are ignored, and a record without both a question and
//! an answer is dropped rather than partially recovered.

use std::{
    io::{self, BufRead, Write},
    mem,
};

use crate::domain::{Deck, Flashcard, FlashcardId};

const QUESTION_PREFIX: &str = "Q:";
const ANSWER_PREFIX: &str = "A:";
const LEARNED_PREFIX: &str = "Learned:";

/// Write every complete card of a deck as a record.
///
/// Cards with an empty question or answer are skipped. Returns the number of
/// records written.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_deck<W: Write>(deck: &Deck, writer: &mut W) -> io::Result<usize> {
    let mut written = 0;
    for card in deck.flashcards() {
        if !card.is_complete() {
            tracing::debug!(
                "Skipping incomplete flashcard {} in deck '{}'",
                card.id(),
                deck.name()
            );
            continue;
        }
        write_record(card, writer)?;
        written += 1;
    }
    Ok(written)
}

/// Write a single card as a record, including the trailing blank line.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_record<W: Write>(card: &Flashcard, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{QUESTION_PREFIX} {}", card.question())?;
    writeln!(writer, "{ANSWER_PREFIX} {}", card.answer())?;
    writeln!(writer, "{LEARNED_PREFIX} {}", card.is_learned())?;
    writeln!(writer)
}

/// Read all records from a reader.
///
/// Cards are numbered from 1 in the order they appear.
///
/// # Errors
///
/// Returns an error if the reader fails or the content is not valid UTF-8.
/// Malformed records are not errors; they are skipped.
pub fn read_flashcards<R: BufRead>(reader: R) -> io::Result<Vec<Flashcard>> {
    let mut parser = RecordParser::default();
    for line in reader.lines() {
        parser.feed(&line?);
    }
    Ok(parser.finish())
}

/// Parse all records from a string.
///
/// See [`read_flashcards`].
#[must_use]
pub fn parse_flashcards(content: &str) -> Vec<Flashcard> {
    let mut parser = RecordParser::default();
    for line in content.lines() {
        parser.feed(line);
    }
    parser.finish()
}

/// The kind of a single line, judged by its prefix.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Question(&'a str),
    Answer(&'a str),
    Learned(bool),
    Blank,
    Other,
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            Self::Blank
        } else if let Some(question) = line.strip_prefix(QUESTION_PREFIX) {
            Self::Question(question.trim())
        } else if let Some(answer) = line.strip_prefix(ANSWER_PREFIX) {
            Self::Answer(answer.trim())
        } else if let Some(learned) = line.strip_prefix(LEARNED_PREFIX) {
            // anything other than "true" counts as not learned
            Self::Learned(learned.trim().eq_ignore_ascii_case("true"))
        } else {
            Self::Other
        }
    }
}

#[derive(Debug, Default)]
enum State {
    #[default]
    AwaitingQuestion,
    AwaitingAnswer {
        question: String,
        is_learned: bool,
    },
    AwaitingLearnedOrBlank {
        question: String,
        answer: String,
        is_learned: bool,
    },
}

/// A three-state parser over the lines of a deck file.
#[derive(Debug, Default)]
struct RecordParser {
    state: State,
    cards: Vec<Flashcard>,
}

impl RecordParser {
    fn feed(&mut self, line: &str) {
        let line = Line::classify(line);
        self.state = match (mem::take(&mut self.state), line) {
            (State::AwaitingQuestion, Line::Question(question)) => State::AwaitingAnswer {
                question: question.to_string(),
                is_learned: false,
            },
            (State::AwaitingQuestion, Line::Answer(_) | Line::Learned(_)) => {
                tracing::debug!("Ignoring record line without a question");
                State::AwaitingQuestion
            }
            (State::AwaitingQuestion, Line::Blank | Line::Other) => State::AwaitingQuestion,

            (State::AwaitingAnswer { question, .. }, Line::Question(next)) => {
                tracing::debug!("Dropping record without an answer: {question:?}");
                State::AwaitingAnswer {
                    question: next.to_string(),
                    is_learned: false,
                }
            }
            (
                State::AwaitingAnswer {
                    question,
                    is_learned,
                },
                Line::Answer(answer),
            ) => State::AwaitingLearnedOrBlank {
                question,
                answer: answer.to_string(),
                is_learned,
            },
            // a learned flag ahead of the answer still belongs to this record
            (State::AwaitingAnswer { question, .. }, Line::Learned(is_learned)) => {
                State::AwaitingAnswer {
                    question,
                    is_learned,
                }
            }
            (State::AwaitingAnswer { question, .. }, Line::Blank) => {
                tracing::debug!("Dropping record without an answer: {question:?}");
                State::AwaitingQuestion
            }
            (state @ State::AwaitingAnswer { .. }, Line::Other) => state,

            (state @ State::AwaitingLearnedOrBlank { .. }, Line::Question(next)) => {
                self.finalize(state);
                State::AwaitingAnswer {
                    question: next.to_string(),
                    is_learned: false,
                }
            }
            (
                State::AwaitingLearnedOrBlank {
                    question,
                    is_learned,
                    ..
                },
                Line::Answer(answer),
            ) => State::AwaitingLearnedOrBlank {
                question,
                answer: answer.to_string(),
                is_learned,
            },
            (
                State::AwaitingLearnedOrBlank {
                    question, answer, ..
                },
                Line::Learned(is_learned),
            ) => State::AwaitingLearnedOrBlank {
                question,
                answer,
                is_learned,
            },
            (state @ State::AwaitingLearnedOrBlank { .. }, Line::Blank) => {
                self.finalize(state);
                State::AwaitingQuestion
            }
            (state @ State::AwaitingLearnedOrBlank { .. }, Line::Other) => state,
        };
    }

    fn finish(mut self) -> Vec<Flashcard> {
        let state = mem::take(&mut self.state);
        self.finalize(state);
        self.cards
    }

    fn finalize(&mut self, state: State) {
        match state {
            State::AwaitingLearnedOrBlank {
                question,
                answer,
                is_learned,
            } if !question.is_empty() && !answer.is_empty() => {
                let id = self
                    .cards
                    .last()
                    .map_or(FlashcardId::FIRST, |card| card.id().next());
                self.cards
                    .push(Flashcard::new(id, question, answer, is_learned));
            }
            State::AwaitingLearnedOrBlank { question, .. } => {
                tracing::debug!("Dropping record with an empty side: {question:?}");
            }
            State::AwaitingAnswer { question, .. } => {
                tracing::debug!("Dropping record without an answer: {question:?}");
            }
            State::AwaitingQuestion => {}
        }
    }
}
