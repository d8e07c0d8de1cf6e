//! Class extraction pipeline for C++ source text

use classgen_parser_api::{ClassDescriptor, Extraction, ExtractorConfig};
use log::debug;

use crate::fields::parse_fields;
use crate::header::parse_header;
use crate::normalizer::strip_comments;
use crate::segmenter::{segment, strip_friend_classes};

/// Extract every class and struct declared in `source`
///
/// Blocks whose header cannot be parsed are counted as rejected and
/// skipped; the scan itself never fails.
pub fn extract(source: &str, config: &ExtractorConfig) -> Extraction {
    let buffer = strip_friend_classes(&strip_comments(source));
    let blocks = segment(&buffer);

    let mut extraction = Extraction::new();
    extraction.metrics.blocks_found = blocks.len();

    for block in &blocks {
        let header = match parse_header(&buffer, block) {
            Ok(header) => header,
            Err(e) => {
                debug!("Rejecting block at byte {}: {e}", block.offset);
                extraction.metrics.classes_rejected += 1;
                continue;
            }
        };

        let scan = parse_fields(block.text);
        extraction.metrics.lines_skipped += scan.skipped;
        let fields = scan
            .fields
            .into_iter()
            .filter(|f| !(config.skip_static_fields && f.is_static))
            .collect();

        extraction.add_class(
            ClassDescriptor::new(header.name, header.start_line, header.end_line)
                .with_template(header.template_preamble)
                .with_bases(header.bases)
                .with_fields(fields),
        );
    }

    debug!(
        "Extracted {} of {} candidate blocks ({} fields)",
        extraction.metrics.classes_extracted,
        extraction.metrics.blocks_found,
        extraction.metrics.fields_extracted
    );
    extraction
}
