pub mod applicants;
pub mod applications;
pub mod employers;
pub mod jobs;

/// Builds the SET fragment of a partial UPDATE from (column, supplied) pairs.
/// Placeholders start at $2; $1 is reserved for the row id. Returns None when
/// no field was supplied.
pub(crate) fn build_update(columns: &[(&str, bool)]) -> Option<String> {
    let mut clauses = Vec::new();
    let mut param_count = 1;
    for (column, supplied) in columns {
        if *supplied {
            param_count += 1;
            clauses.push(format!("{} = ${}", column, param_count));
        }
    }
    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::build_update;

    #[test]
    fn test_build_update_only_supplied_fields() {
        let clause = build_update(&[("first_name", true), ("last_name", false)]);
        assert_eq!(clause.as_deref(), Some("first_name = $2"));

        let clause = build_update(&[("first_name", true), ("last_name", true)]);
        assert_eq!(clause.as_deref(), Some("first_name = $2, last_name = $3"));
    }

    #[test]
    fn test_build_update_nothing_supplied() {
        assert_eq!(build_update(&[("company_name", false)]), None);
    }
}
