use std::fmt;

use anyhow::{Context, Result};
use dc_encode::{DotEncoder, EncodeError};
use rayon::prelude::*;

use crate::document::{
    BRAILLE_FIELD, EnrichedDocument, EnrichedEntry, MappingDocument, MappingEntry, UNICODE_FIELD,
};

/// Counters for one conversion run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Entries in the document.
    pub total: usize,
    /// Entries that carried `dots` and received a cell.
    pub encoded: usize,
    /// Entries written unchanged.
    pub passthrough: usize,
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entrées ({} encodées, {} inchangées)",
            self.total, self.encoded, self.passthrough
        )
    }
}

/// Compute the cell of one entry.
///
/// Entries without `dots` pass through. For the others, stale `braille` /
/// `unicode` fields are dropped from the source fields and replaced by the
/// computed ones; the remaining fields keep their order.
///
/// # Errors
/// Propagates [`EncodeError`] from the encoder (only under `DotPolicy::Reject`).
///
/// # Example
/// ```
/// use dc_encode::DotEncoder;
/// use dc_mapping::document::MappingEntry;
/// use dc_mapping::enrich::enrich_entry;
///
/// let entry: MappingEntry = serde_json::from_str(r#"{"print": "number sign", "dots": [3, 4, 5, 6]}"#).unwrap();
/// let enriched = enrich_entry(entry, &DotEncoder::default()).unwrap();
/// assert_eq!(enriched.braille, Some('⠼'));
/// assert_eq!(enriched.unicode.as_deref(), Some("U+283C"));
/// ```
pub fn enrich_entry(entry: MappingEntry, encoder: &DotEncoder) -> Result<EnrichedEntry, EncodeError> {
    let Some(tokens) = entry.dot_tokens() else {
        return Ok(EnrichedEntry::passthrough(entry));
    };
    let cell = encoder.encode(tokens)?;

    let mut fields = entry.fields;
    fields.shift_remove(BRAILLE_FIELD);
    fields.shift_remove(UNICODE_FIELD);

    Ok(EnrichedEntry {
        fields,
        braille: Some(cell.ch()),
        unicode: Some(cell.unicode()),
    })
}

/// Enrich every entry of a document, in parallel, preserving entry order.
///
/// # Errors
/// Returns the failure of the lowest-indexed entry that could not be encoded,
/// annotated with that index. The result does not depend on thread scheduling.
pub fn enrich_document(
    doc: MappingDocument,
    encoder: &DotEncoder,
) -> Result<(EnrichedDocument, ConversionReport)> {
    // Collect every outcome (indexed, so order is kept) before scanning for errors.
    let outcomes: Vec<Result<EnrichedEntry, EncodeError>> = doc
        .entries
        .into_par_iter()
        .map(|entry| enrich_entry(entry, encoder))
        .collect();

    let entries = outcomes
        .into_iter()
        .enumerate()
        .map(|(i, outcome)| outcome.with_context(|| format!("Entrée #{i}")))
        .collect::<Result<Vec<_>>>()?;

    let encoded = entries.iter().filter(|e| e.is_encoded()).count();
    let report = ConversionReport {
        total: entries.len(),
        encoded,
        passthrough: entries.len() - encoded,
    };
    log::debug!("Enrichissement terminé : {report}");

    Ok((
        EnrichedDocument {
            entries,
            settings: doc.settings,
        },
        report,
    ))
}
