//! Aggregate index generation
//!
//! The index re-exports every module generated during the current run. It
//! is rendered from the run's own list of written modules, never from a
//! directory listing — listing order is platform-dependent and would make
//! the output irreproducible.

/// Render the aggregate re-export document for one run's modules.
///
/// `modules` holds module basenames without their extension. They are
/// sorted lexicographically so repeated runs over the same set produce
/// byte-identical output. Returns `None` when nothing was generated: no
/// index file should be written (a no-op, not an error).
#[must_use]
pub fn render_index(modules: &[String]) -> Option<String> {
    if modules.is_empty() {
        return None;
    }

    let mut sorted: Vec<&str> = modules.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let exports: Vec<String> = sorted
        .iter()
        .map(|module| format!("export * from './{module}';"))
        .collect();

    Some(format!("{}\n", exports.join("\n")))
}
