//! Many documents in, one result per document out.

use crate::config::RenderOptions;
use crate::diagnostics;
use crate::error::ValidationError;
use crate::render::render_sequence;
use crate::seqjson::parse_sequence;
use serde_json::Value;

/// Parse and render each document independently.
///
/// The output has one slot per input, in input order. A document that fails
/// validation fills its own slot with the error and does not affect the rest.
pub fn render_edsl_bulk(docs: &[Value], options: &RenderOptions) -> Vec<Result<String, ValidationError>> {
    let convert = |(index, doc): (usize, &Value)| {
        let result = parse_sequence(doc).map(|seq| render_sequence(&seq, options));
        if let Err(e) = &result {
            diagnostics::warn(format!("document {}: {}", index, e));
        }
        result
    };

    let jobs = options.jobs.max(1).min(docs.len().max(1));
    if jobs == 1 {
        return docs.iter().enumerate().map(convert).collect();
    }

    tracing::debug!(documents = docs.len(), jobs, "bulk render");
    let chunk = docs.len().div_ceil(jobs);
    std::thread::scope(|scope| {
        let workers: Vec<_> = docs
            .chunks(chunk)
            .enumerate()
            .map(|(n, part)| {
                scope.spawn(move || {
                    part.iter()
                        .enumerate()
                        .map(|(i, doc)| convert((n * chunk + i, doc)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        workers
            .into_iter()
            .flat_map(|worker| worker.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect()
    })
}
