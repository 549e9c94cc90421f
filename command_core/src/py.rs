//! Python bindings for the command interpreter using PyO3

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::path::Path;
use std::sync::Arc;
use crate::context::Context;
use crate::entities::EntityExtractor;
use crate::interpreter::interpret;
use crate::keywords::{default_tables, KeywordTables};
use crate::normalize::normalize;
use serde::Serialize;

/// Strip diacritics and case-fold (Python function)
#[pyfunction]
pub fn py_normalize(text: &str) -> String {
    normalize(text)
}

/// Python wrapper for the command interpreter.
///
/// The host passes its current context as JSON on each call.
#[pyclass]
pub struct PyCommandInterpreter {
    extractor: EntityExtractor,
}

#[pymethods]
impl PyCommandInterpreter {
    /// Use the built-in tables, or load them from a JSON file
    #[new]
    #[pyo3(signature = (keywords_path=None))]
    fn new(keywords_path: Option<&str>) -> PyResult<Self> {
        let tables = match keywords_path {
            Some(path) => Arc::new(
                KeywordTables::from_path(Path::new(path))
                    .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?,
            ),
            None => default_tables(),
        };

        Ok(Self {
            extractor: EntityExtractor::new(tables),
        })
    }

    /// Interpret a sentence against a JSON-encoded context
    #[pyo3(signature = (sentence, context_json=None))]
    fn parse<'py>(
        &self,
        sentence: &str,
        context_json: Option<&str>,
        py: Python<'py>,
    ) -> PyResult<Bound<'py, PyDict>> {
        let context: Context = match context_json {
            Some(json) => serde_json::from_str(json)
                .map_err(|e| PyErr::new::<PyValueError, _>(format!("Invalid context: {}", e)))?,
            None => Context::default(),
        };

        let command = interpret(&self.extractor, &context, sentence);

        let dict = PyDict::new_bound(py);
        dict.set_item("type", if command.is_recognized() { "command" } else { "none" })?;
        dict.set_item("sentence", &command.sentence)?;
        dict.set_item("tokens", &command.tokens)?;
        dict.set_item("action", command.action().map(|a| a.as_str()))?;
        dict.set_item("medium", command.medium().map(|m| m.as_str()))?;
        dict.set_item("new_list_name", &command.new_list_name)?;
        dict.set_item("new_item_name", &command.new_item_name)?;
        dict.set_item("list_found", to_json(&command.list_found)?)?;
        dict.set_item("item_found", to_json(&command.item_found)?)?;
        dict.set_item("contact", to_json(&command.contact)?)?;
        Ok(dict)
    }

    /// True when the word is in any keyword table
    fn is_keyword(&self, word: &str) -> bool {
        self.extractor.tables().is_keyword(word)
    }
}

fn to_json<T: Serialize>(value: &Option<T>) -> PyResult<Option<String>> {
    value
        .as_ref()
        .map(|v| {
            serde_json::to_string(v).map_err(|e| {
                PyErr::new::<PyValueError, _>(format!("Failed to serialize entity: {}", e))
            })
        })
        .transpose()
}
