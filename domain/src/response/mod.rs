//! Canned reply selection.
//!
//! A sibling consumer of the scorer's label: the reply bucket is chosen from
//! the label and a few keywords, the template within the bucket by an
//! injected [`ResponseChooser`](selector::ResponseChooser).

pub mod category;
pub mod selector;

pub use category::ResponseCategory;
pub use selector::{FirstChoice, ResponseChooser, ResponseSelector};
