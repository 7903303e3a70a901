//! Partition-scoped document access shared by both store flavours.
//!
//! Rows look like `{ <partition_field>: string, doc: object }`, keyed by
//! `[partition, entity id]`, so ids only need to be unique per partition.
//! Every statement issued here carries the partition condition; filters
//! are rendered as an additional conjunct with their literals bound as
//! parameters.

use studio_core::filter::{Filter, FilterValue};
use studio_core::repository::HasIdentifier;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;

use crate::error::DbError;

/// Row projection: only the stored entity document.
#[derive(Debug, SurrealValue)]
struct DocRow {
    doc: serde_json::Value,
}

/// One entity prepared for a batch insert.
#[derive(Debug, serde::Serialize)]
struct PendingDoc {
    id: String,
    doc: serde_json::Value,
}

pub(crate) struct DocumentStore<C: Connection> {
    db: Surreal<C>,
    table: &'static str,
    partition_field: &'static str,
}

impl<C: Connection> Clone for DocumentStore<C> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            table: self.table,
            partition_field: self.partition_field,
        }
    }
}

impl<C: Connection> DocumentStore<C> {
    pub(crate) fn new(db: Surreal<C>, table: &'static str, partition_field: &'static str) -> Self {
        Self {
            db,
            table,
            partition_field,
        }
    }

    /// Documents in `partition` matching `filter`, at most `limit` of them.
    pub(crate) async fn find<T: HasIdentifier>(
        &self,
        partition: &str,
        filter: &Filter,
        limit: Option<u32>,
    ) -> Result<Vec<T>, DbError> {
        let mut args = Vec::new();
        let condition = render_filter(filter, &mut args)?;
        let mut query = format!(
            "SELECT doc FROM {} WHERE {} = $partition AND ({condition})",
            self.table, self.partition_field
        );
        if let Some(limit) = limit {
            query.push_str(&format!(" LIMIT {limit}"));
        }

        let mut result = self
            .db
            .query(query)
            .bind(("partition", partition.to_string()))
            .bind(("args", serde_json::Value::Array(args)))
            .await?
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<DocRow> = result.take(0)?;
        rows.into_iter()
            .map(|row| serde_json::from_value(row.doc).map_err(DbError::from))
            .collect()
    }

    /// Insert one new document. Fails if the partition already holds its id.
    pub(crate) async fn create<T: HasIdentifier>(
        &self,
        partition: &str,
        entity: &T,
    ) -> Result<(), DbError> {
        let query = format!(
            "CREATE type::record('{}', [$partition, $id]) SET {} = $partition, doc = $doc",
            self.table, self.partition_field
        );

        self.db
            .query(query)
            .bind(("id", entity.id().to_string()))
            .bind(("partition", partition.to_string()))
            .bind(("doc", serde_json::to_value(entity)?))
            .await?
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        Ok(())
    }

    /// Insert several documents in one transaction; either all are
    /// written or none.
    pub(crate) async fn create_many<T: HasIdentifier>(
        &self,
        partition: &str,
        entities: &[T],
    ) -> Result<(), DbError> {
        if entities.is_empty() {
            return Ok(());
        }

        let items = entities
            .iter()
            .map(|entity| {
                Ok(PendingDoc {
                    id: entity.id().to_string(),
                    doc: serde_json::to_value(entity)?,
                })
            })
            .collect::<Result<Vec<_>, DbError>>()?;

        let query = format!(
            "BEGIN TRANSACTION; \
             FOR $item IN $items {{ \
                 CREATE type::record('{}', [$partition, $item.id]) SET {} = $partition, doc = $item.doc; \
             }}; \
             COMMIT TRANSACTION;",
            self.table, self.partition_field
        );

        self.db
            .query(query)
            .bind(("partition", partition.to_string()))
            .bind(("items", serde_json::to_value(items)?))
            .await?
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        Ok(())
    }

    /// Replace the document of an existing record in `partition`.
    pub(crate) async fn replace<T: HasIdentifier>(
        &self,
        partition: &str,
        entity: &T,
    ) -> Result<(), DbError> {
        let id = entity.id().to_string();
        let query = format!(
            "UPDATE type::record('{}', [$partition, $id]) SET doc = $doc WHERE {} = $partition",
            self.table, self.partition_field
        );

        let mut result = self
            .db
            .query(query)
            .bind(("id", id.clone()))
            .bind(("partition", partition.to_string()))
            .bind(("doc", serde_json::to_value(entity)?))
            .await?
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<DocRow> = result.take(0)?;
        if rows.is_empty() {
            return Err(self.not_found(id));
        }
        Ok(())
    }

    /// Delete an existing record in `partition`.
    pub(crate) async fn remove<T: HasIdentifier>(
        &self,
        partition: &str,
        entity: &T,
    ) -> Result<(), DbError> {
        let id = entity.id().to_string();
        let query = format!(
            "DELETE type::record('{}', [$partition, $id]) WHERE {} = $partition RETURN BEFORE",
            self.table, self.partition_field
        );

        let mut result = self
            .db
            .query(query)
            .bind(("id", id.clone()))
            .bind(("partition", partition.to_string()))
            .await?
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<DocRow> = result.take(0)?;
        if rows.is_empty() {
            return Err(self.not_found(id));
        }
        Ok(())
    }

    fn not_found(&self, id: String) -> DbError {
        DbError::NotFound {
            entity: self.table.into(),
            id,
        }
    }
}

/// Render `filter` as a SurrealQL condition over `doc`, pushing literals
/// onto `args` (referenced as `$args[i]`).
fn render_filter(filter: &Filter, args: &mut Vec<serde_json::Value>) -> Result<String, DbError> {
    match filter {
        Filter::All => Ok("true".into()),
        Filter::Eq { field, value } => {
            check_field(field)?;
            let slot = push_arg(args, filter_value(value));
            Ok(format!("doc.{field} = $args[{slot}]"))
        }
        Filter::EqIgnoreCase { field, value } => {
            check_field(field)?;
            let slot = push_arg(args, serde_json::Value::String(value.to_lowercase()));
            Ok(format!("string::lowercase(doc.{field}) = $args[{slot}]"))
        }
        Filter::And(terms) if terms.is_empty() => Ok("true".into()),
        Filter::And(terms) => {
            let parts = terms
                .iter()
                .map(|term| render_filter(term, args).map(|sql| format!("({sql})")))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(parts.join(" AND "))
        }
    }
}

fn push_arg(args: &mut Vec<serde_json::Value>, value: serde_json::Value) -> usize {
    args.push(value);
    args.len() - 1
}

fn filter_value(value: &FilterValue) -> serde_json::Value {
    match value {
        FilterValue::String(s) => serde_json::Value::String(s.clone()),
        FilterValue::Bool(b) => serde_json::Value::Bool(*b),
        FilterValue::Uuid(id) => serde_json::Value::String(id.to_string()),
    }
}

/// Field paths are interpolated into the query text, so only plain
/// dotted identifiers are accepted.
fn check_field(field: &str) -> Result<(), DbError> {
    let valid = !field.is_empty()
        && field.split('.').all(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        });
    if valid {
        Ok(())
    } else {
        Err(DbError::InvalidFilter(field.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn renders_conjunction_with_bound_literals() {
        let website_id = Uuid::new_v4();
        let filter = Filter::eq("websiteId", website_id).and(Filter::eq("isPublished", true));
        let mut args = Vec::new();

        let sql = render_filter(&filter, &mut args).unwrap();

        assert_eq!(sql, "(doc.websiteId = $args[0]) AND (doc.isPublished = $args[1])");
        assert_eq!(
            args,
            vec![
                serde_json::Value::String(website_id.to_string()),
                serde_json::Value::Bool(true),
            ]
        );
    }

    #[test]
    fn case_insensitive_match_lowercases_the_literal() {
        let mut args = Vec::new();
        let sql = render_filter(&Filter::eq_ignore_case("name", "AcMe"), &mut args).unwrap();

        assert_eq!(sql, "string::lowercase(doc.name) = $args[0]");
        assert_eq!(args, vec![serde_json::Value::String("acme".into())]);
    }

    #[test]
    fn all_renders_as_true() {
        let mut args = Vec::new();
        assert_eq!(render_filter(&Filter::all(), &mut args).unwrap(), "true");
        assert!(args.is_empty());
    }

    #[test]
    fn rejects_injected_field_paths() {
        let mut args = Vec::new();
        for field in ["", "name = 1 OR true", "a..b", "1abc", "doc;DELETE"] {
            let filter = Filter::eq(
                // Leak to satisfy the `'static` bound in this test only.
                Box::leak(field.to_string().into_boxed_str()),
                "x",
            );
            assert!(
                matches!(render_filter(&filter, &mut args), Err(DbError::InvalidFilter(_))),
                "{field:?} should be rejected"
            );
        }
    }
}
