//! Stylesheet resolution from the page's CSSOM
//!
//! Stylesheets the chart is rendered with are already loaded by the page, so
//! their rules are read back from `document.styleSheets` instead of being
//! fetched again. Cross-origin sheets refuse `cssRules` access; those come
//! back as errors and the vector exporter skips them.

use wasm_bindgen::JsCast;
use web_sys::CssStyleSheet;

use crate::api::helpers::describe_js;
use crate::error::{ExportError, Result};
use crate::export::resolver::{href_matches, StyleResolver};
use crate::models::{StyleSheetReference, StyleSource};

#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentStyleResolver;

impl StyleResolver for DocumentStyleResolver {
    fn resolve(&self, sheet: &StyleSheetReference) -> Result<String> {
        let href = match &sheet.source {
            StyleSource::Inline(css) => return Ok(css.clone()),
            StyleSource::Url(href) => href,
        };

        let failure = |reason: String| ExportError::StyleSheet {
            name: sheet.name.clone(),
            reason,
        };

        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| failure("no document".to_string()))?;

        let loaded = document.style_sheets();
        for index in 0..loaded.length() {
            let Some(item) = loaded.item(index) else {
                continue;
            };
            let Ok(Some(loaded_href)) = item.href() else {
                continue;
            };
            if !href_matches(&loaded_href, href) {
                continue;
            }

            let css_sheet = item
                .dyn_into::<CssStyleSheet>()
                .map_err(|_| failure(format!("'{}' is not a CSS stylesheet", loaded_href)))?;
            let rules = css_sheet.css_rules().map_err(|err| {
                failure(format!("rules of '{}' are not readable: {}", loaded_href, describe_js(&err)))
            })?;

            let mut css = String::new();
            for rule_index in 0..rules.length() {
                if let Some(rule) = rules.item(rule_index) {
                    css.push_str(&rule.css_text());
                    css.push('\n');
                }
            }
            return Ok(css);
        }

        Err(failure(format!("'{}' is not loaded in this document", href)))
    }
}
