use std::fmt::Write;

/// Generates a query whose selection sets nest `depth` levels deep.
///
/// Each level selects `id` next to a `child` field holding the next
/// level; the innermost level selects `name`. Depths past the parser's
/// nesting limit fail to parse.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::with_capacity(depth * 30);
    out.push_str("query DeeplyNested {\n");
    for level in 0..depth {
        let indent = "  ".repeat(level + 1);
        let field = if level == 0 { "root" } else { "child" };
        writeln!(out, "{indent}{field} {{").unwrap();
        writeln!(out, "{indent}  id").unwrap();
    }
    let inner_indent = "  ".repeat(depth + 1);
    writeln!(out, "{inner_indent}name").unwrap();
    for level in (0..depth).rev() {
        let indent = "  ".repeat(level + 1);
        writeln!(out, "{indent}}}").unwrap();
    }
    out.push_str("}\n");
    out
}

/// Generates a document of `count` named queries followed by one shared
/// fragment.
pub fn many_operations(count: usize) -> String {
    let mut out = String::with_capacity(count * 100);
    for i in 0..count {
        writeln!(out, "query Operation{i}($id: ID!) {{").unwrap();
        writeln!(out, "  node(id: $id) {{").unwrap();
        writeln!(out, "    ...NodeFields").unwrap();
        writeln!(out, "    field{i}: description").unwrap();
        writeln!(out, "  }}").unwrap();
        writeln!(out, "}}\n").unwrap();
    }
    out.push_str("fragment NodeFields on Node {\n  id\n  name\n}\n");
    out
}

/// Generates a single argument holding a list of `count` objects, for
/// measuring value parsing and printing.
pub fn large_input_value(count: usize) -> String {
    let mut out = String::with_capacity(count * 60);
    out.push_str("mutation Import {\n  import(rows: [\n");
    for i in 0..count {
        writeln!(
            out,
            "    {{id: {i}, label: \"row {i}\", score: {i}.5, tags: [A, B], active: true}}",
        )
        .unwrap();
    }
    out.push_str("  ]) {\n    imported\n  }\n}\n");
    out
}
