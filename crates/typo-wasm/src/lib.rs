// WASM bindings for the Typo spell checker.
//
// Provides a `WasmTypo` class exported via wasm-bindgen that wraps the
// `Typo` handle from typo-speller. Dictionary texts are passed in by the
// caller (browsers have no filesystem); structured values cross the
// boundary through serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const typo = new WasmTypo(affText, dicText, { KEEPCASE: "K" });
//   typo.check("cats");            // => true
//   typo.suggest("teh");           // => ["tea", "ten", "the", ...]
//   typo.suggest("teh", 2);        // => ["tea", "ten"]
//   typo.stats();                  // => { wordCount: 58, ruleCount: 6, ... }

use std::collections::HashMap as StdHashMap;

use hashbrown::HashMap;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use typo_speller::{DistanceMetric, Typo, TypoError};

/// Serializable dictionary statistics.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsStats {
    word_count: usize,
    rule_count: usize,
    compound_rule_count: usize,
}

fn typo_error_to_js(e: TypoError) -> JsError {
    JsError::new(&e.to_string())
}

/// Read an optional `{ name: value }` object into a flag map.
fn flags_from_js(value: JsValue) -> Result<HashMap<String, String>, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(HashMap::new());
    }
    let flags: StdHashMap<String, String> = serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsError::new(&format!("invalid flags: {e}")))?;
    Ok(flags.into_iter().collect())
}

/// Affix spell checker for WebAssembly.
#[wasm_bindgen]
pub struct WasmTypo {
    handle: Typo,
}

#[wasm_bindgen]
impl WasmTypo {
    /// Build a checker from the contents of an `.aff` and a `.dic` file.
    ///
    /// `flags` optionally pre-seeds affix flags (`{ KEEPCASE: "K" }`).
    #[wasm_bindgen(constructor)]
    pub fn new(aff_data: &str, dic_data: &str, flags: JsValue) -> Result<WasmTypo, JsError> {
        let flags = flags_from_js(flags)?;
        let handle = Typo::from_data(aff_data, dic_data, &flags).map_err(typo_error_to_js)?;
        Ok(WasmTypo { handle })
    }

    /// Check whether a word is correctly spelled. A missing word is not.
    pub fn check(&self, word: Option<String>) -> Result<bool, JsError> {
        match word {
            Some(word) => self.handle.check(&word).map_err(typo_error_to_js),
            None => Ok(false),
        }
    }

    /// Check a word exactly as written, without case variants.
    #[wasm_bindgen(js_name = checkExact)]
    pub fn check_exact(&self, word: &str) -> Result<bool, JsError> {
        self.handle.check_exact(word).map_err(typo_error_to_js)
    }

    /// Whether `word` carries the code assigned to the affix flag `flag`.
    #[wasm_bindgen(js_name = hasFlag)]
    pub fn has_flag(&self, word: &str, flag: &str) -> Result<bool, JsError> {
        self.handle.has_flag(word, flag, None).map_err(typo_error_to_js)
    }

    /// Suggest corrections, best first. A missing word has none.
    pub fn suggest(&self, word: Option<String>, limit: Option<usize>) -> Result<Vec<String>, JsError> {
        let Some(word) = word else {
            return Ok(Vec::new());
        };
        let result = match limit {
            Some(limit) => self.handle.suggest_with_limit(&word, limit),
            None => self.handle.suggest(&word),
        };
        result.map_err(typo_error_to_js)
    }

    #[wasm_bindgen(js_name = setMaxSuggestions)]
    pub fn set_max_suggestions(&mut self, value: usize) {
        self.handle.set_max_suggestions(value);
    }

    #[wasm_bindgen(js_name = setMaxEditDistance)]
    pub fn set_max_edit_distance(&mut self, value: usize) {
        self.handle.set_max_edit_distance(value);
    }

    /// Score swaps as two edits (`true`) or one (`false`, the default).
    #[wasm_bindgen(js_name = setLevenshtein)]
    pub fn set_levenshtein(&mut self, enabled: bool) {
        let metric = if enabled {
            DistanceMetric::Levenshtein
        } else {
            DistanceMetric::Transposition
        };
        self.handle.set_distance_metric(metric);
    }

    /// Replace the suggestion alphabet; `undefined` restores the default.
    #[wasm_bindgen(js_name = setAlphabet)]
    pub fn set_alphabet(&mut self, alphabet: Option<String>) {
        self.handle.set_alphabet(alphabet);
    }

    /// Word form, rule and compound rule counts.
    pub fn stats(&self) -> Result<JsValue, JsError> {
        let dictionary = self.handle.dictionary().map_err(typo_error_to_js)?;
        let stats = JsStats {
            word_count: dictionary.table().len(),
            rule_count: dictionary.affixes().rules.len(),
            compound_rule_count: dictionary.compound_rules().len(),
        };
        serde_wasm_bindgen::to_value(&stats).map_err(|e| JsError::new(&e.to_string()))
    }
}
