//! Builds parameterized INSERT, SELECT, UPDATE, DELETE text from static table metadata.
//! Identifiers come only from compile-time constants; values are always `$n` parameters.

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn placeholders(from: usize, count: usize) -> String {
    (from..from + count)
        .map(|n| format!("${}", n))
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row ordered by primary key.
pub fn select_all(table: &str, pk: &str, projection: &str) -> String {
    format!("SELECT {} FROM {} ORDER BY {}", projection, quoted(table), quoted(pk))
}

/// SELECT by primary key. Caller binds the id as `$1`.
pub fn select_by_id(table: &str, pk: &str, projection: &str) -> String {
    format!("SELECT {} FROM {} WHERE {} = $1", projection, quoted(table), quoted(pk))
}

/// SELECT by primary key holding a row lock until the transaction ends.
pub fn select_for_update(table: &str, pk: &str) -> String {
    format!("SELECT * FROM {} WHERE {} = $1 FOR UPDATE", quoted(table), quoted(pk))
}

/// INSERT with `$1..$n` bound in column order.
pub fn insert(table: &str, columns: &[&str], projection: &str) -> String {
    let cols = columns.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(table),
        cols,
        placeholders(1, columns.len()),
        projection
    )
}

/// UPDATE every listed column; values are `$1..$n` in column order and the id is `$n+1`.
pub fn update(table: &str, pk: &str, columns: &[&str], projection: &str) -> String {
    let sets = columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = ${}", quoted(c), i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        quoted(table),
        sets,
        quoted(pk),
        columns.len() + 1,
        projection
    )
}

/// DELETE by primary key returning the removed row.
pub fn delete(table: &str, pk: &str, projection: &str) -> String {
    format!("DELETE FROM {} WHERE {} = $1 RETURNING {}", quoted(table), quoted(pk), projection)
}

/// DELETE by primary key without returning; callers inspect `rows_affected`.
pub fn delete_quiet(table: &str, pk: &str) -> String {
    format!("DELETE FROM {} WHERE {} = $1", quoted(table), quoted(pk))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_numbers_placeholders_in_column_order() {
        let sql = insert("donor", &["firstname", "lastname", "bloodtype"], "*");
        assert_eq!(
            sql,
            r#"INSERT INTO "donor" ("firstname", "lastname", "bloodtype") VALUES ($1, $2, $3) RETURNING *"#
        );
    }

    #[test]
    fn update_binds_id_after_columns() {
        let sql = update("request", "id_request", &["status", "quantity"], "*");
        assert_eq!(
            sql,
            r#"UPDATE "request" SET "status" = $1, "quantity" = $2 WHERE "id_request" = $3 RETURNING *"#
        );
    }

    #[test]
    fn select_and_delete_use_single_id_param() {
        assert_eq!(
            select_by_id("bloodunit", "id_unit", "*"),
            r#"SELECT * FROM "bloodunit" WHERE "id_unit" = $1"#
        );
        assert_eq!(
            delete("users", "id_user", "*"),
            r#"DELETE FROM "users" WHERE "id_user" = $1 RETURNING *"#
        );
        assert!(select_for_update("request", "id_request").ends_with("FOR UPDATE"));
    }

    #[test]
    fn projection_is_passed_through() {
        let sql = select_all("patient", "id_patient", "*, concat_ws(' ', firstname, lastname) AS fullname");
        assert!(sql.starts_with("SELECT *, concat_ws(' ', firstname, lastname) AS fullname FROM \"patient\""));
        assert!(sql.ends_with("ORDER BY \"id_patient\""));
    }

    #[test]
    fn embedded_quotes_in_identifiers_are_doubled() {
        assert_eq!(quoted("we\"ird"), "\"we\"\"ird\"");
    }
}
