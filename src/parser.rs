use scraper::{Html, Selector};

use crate::error::Error;
use crate::models::StickerRecord;

const MARKER_SELECTOR: &str = "li.mdCMN09Li";
const PREVIEW_ATTR: &str = "data-preview";

/// Records found on a catalog page, in document order, plus the entries that failed to decode.
#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<StickerRecord>,
    pub malformed: Vec<Error>,
}

pub fn extract_records(html: &str) -> Extraction {
    let doc = Html::parse_document(html);
    let marker = Selector::parse(MARKER_SELECTOR).unwrap();

    let mut extraction = Extraction::default();
    for element in doc.select(&marker) {
        let Some(preview) = element.value().attr(PREVIEW_ATTR) else {
            continue;
        };
        match parse_preview(preview) {
            Ok(record) => extraction.records.push(record),
            Err(e) => extraction.malformed.push(e),
        }
    }
    extraction
}

fn parse_preview(preview: &str) -> Result<StickerRecord, Error> {
    // The HTML parser already decodes entities once; pages that double-escape still carry `&quot;`.
    let json = preview.replace("&quot;", "\"");
    Ok(serde_json::from_str(&json)?)
}
