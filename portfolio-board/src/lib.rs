pub mod clock;
pub mod config;
pub mod contact;
pub mod controller;
pub mod domain;
pub mod error;
pub mod feed;
pub mod layout;
pub mod render;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::SiteConfig;
pub use controller::BoardController;
pub use domain::{Answer, AnswerId, Question, QuestionId};
pub use error::{BoardError, FeedError, Field, StorageError, ValidationError};
pub use render::{AnswerView, BoardView, CardState, CardView, Expansion};
pub use storage::{MemoryStore, QuestionStore};
