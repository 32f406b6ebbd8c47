//! Text formatting primitives shared by every sheet-forge converter.
//!
//! Nothing in this crate touches the filesystem. Converters feed it plain
//! strings pulled out of table rows and get back engine-ready text:
//! colour markup, set-bonus sections, length-budgeted description blocks
//! and multi-level upgrade descriptions.

pub mod budget;
pub mod error;
pub mod levels;
pub mod markup;
pub mod section;

pub use budget::{Budget, DescriptionBlock, DescriptionBudgetFormatter, FormattedText};
pub use error::FormatError;
pub use levels::{LevelPair, LevelStyle};
pub use markup::{LINE_BREAK_TOKEN, text_len};
pub use section::{EffectSection, SetStyle, Tier};
