use sqlx::{QueryBuilder, Sqlite};

/// Appends `(?, ?, ...)` binding every id.
///
/// Callers must not pass an empty slice; `IN ()` never matches.
pub fn push_in_list(query: &mut QueryBuilder<'_, Sqlite>, ids: &[String]) {
    query.push("(");
    let mut separated = query.separated(", ");
    for id in ids {
        separated.push_bind(id.clone());
    }
    separated.push_unseparated(")");
}

/// Appends a case-sensitive substring filter on `name` when a keyword is given.
pub fn push_name_filter(query: &mut QueryBuilder<'_, Sqlite>, keyword: Option<&str>) {
    if let Some(kw) = keyword {
        query
            .push(" WHERE instr(name, ")
            .push_bind(kw.to_string())
            .push(") > 0");
    }
}
