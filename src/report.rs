use crate::scenario::SessionSummary;
use std::fmt::Write;

/// Render a textual summary of an adapter session.
///
/// Link constraints are listed with their coupled degrees of freedom, followed
/// by the outcome of each material update, the write counts, and every note or
/// warning in the order it was recorded.
#[must_use]
pub fn render_summary(summary: &SessionSummary) -> String {
    let mut output = String::new();

    writeln!(&mut output, "Link constraints read: {}", summary.links.len())
        .expect("writing to string cannot fail");
    for link in &summary.links {
        let id = link
            .adapter_id
            .as_ref()
            .map_or("<untagged>", |id| id.as_str());
        let coupled: Vec<&str> = ["X", "Y", "Z", "XX", "YY", "ZZ"]
            .into_iter()
            .zip(link.flags())
            .filter_map(|(label, fixed)| fixed.then_some(label))
            .collect();
        if link.name.is_empty() {
            writeln!(&mut output, "  {id}: not mapped").expect("writing to string cannot fail");
        } else {
            writeln!(&mut output, "  {id}: fixed [{}]", coupled.join(", "))
                .expect("writing to string cannot fail");
        }
    }

    writeln!(&mut output, "Material updates:").expect("writing to string cannot fail");
    for (name, outcome) in &summary.materials {
        writeln!(&mut output, "  {name}: {outcome:?}").expect("writing to string cannot fail");
    }

    writeln!(
        &mut output,
        "Supports written: {}, releases written: {}",
        summary.supports_written, summary.releases_written
    )
    .expect("writing to string cannot fail");

    if summary.diagnostics.is_empty() {
        output.push_str("No diagnostics recorded\n");
    } else {
        writeln!(&mut output, "Diagnostics:").expect("writing to string cannot fail");
        for diagnostic in &summary.diagnostics {
            writeln!(&mut output, "  {diagnostic}").expect("writing to string cannot fail");
        }
    }

    output
}
