//! Command core - rule-based interpretation of spoken to-do commands
//!
//! Maps a transcribed sentence plus the app's current lists, items and
//! contacts to a structured command: an action, an optional medium, and the
//! entities the sentence refers to or wants to create.

pub mod types;
pub mod error;
pub mod normalize;
pub mod keywords;
pub mod matcher;
pub mod entities;
pub mod context;
pub mod interpreter;

pub use types::*;
pub use error::*;
pub use keywords::{default_tables, KeywordConfig, KeywordTables};
pub use matcher::*;
pub use entities::*;
pub use context::*;
pub use interpreter::*;

// Python bindings
#[cfg(feature = "extension-module")]
pub mod py;

#[cfg(feature = "extension-module")]
use pyo3::prelude::*;

#[cfg(feature = "extension-module")]
#[pymodule]
fn command_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use py::*;
    m.add_class::<PyCommandInterpreter>()?;
    m.add_function(wrap_pyfunction!(py_normalize, m)?)?;
    Ok(())
}
