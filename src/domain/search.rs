//! Search query construction

/// Build the store's text-query syntax from field lists.
///
/// Required fields become literal `tag:<field>` clauses; secondary fields
/// are inserted verbatim as free-text fragments. Required clauses come
/// first, each list in input order, all joined by single spaces. Nothing is
/// quoted or escaped here; callers pre-escape characters meaningful to the
/// store's query grammar.
pub fn to_search_query(required_fields: &[String], secondary_fields: &[String]) -> String {
    required_fields
        .iter()
        .map(|field| format!("tag:{}", field))
        .chain(secondary_fields.iter().cloned())
        .collect::<Vec<_>>()
        .join(" ")
}
