use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::db::unicode_lower;
use crate::domain::contact::{Contact, SanitizedContact};
use crate::domain::types::ContactId;
use crate::models::contact::{
    Contact as DbContact, NewContact as DbNewContact, UpdateContact as DbUpdateContact,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ContactListQuery, ContactReader, ContactWriter, DieselRepository};
use crate::schema::contacts;

/// Rows per multi-row INSERT; keeps the bound parameter count well under
/// SQLite's limit.
const INSERT_CHUNK_SIZE: usize = 200;

/// Escape LIKE metacharacters (% _ \) so the term is matched literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Live (not soft-deleted) contacts, optionally narrowed by a search term.
///
/// Both sides are folded with `unicode_lower`, so accented letters match
/// regardless of case.
fn live_contacts(search: Option<&str>) -> contacts::BoxedQuery<'static, Sqlite> {
    let query = contacts::table
        .filter(contacts::deleted_at.is_null())
        .into_boxed();

    let Some(term) = search else {
        return query;
    };

    let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
    query.filter(
        unicode_lower(contacts::first)
            .like(pattern.clone())
            .escape('\\')
            .or(unicode_lower(contacts::last)
                .like(pattern.clone())
                .escape('\\'))
            .or(unicode_lower(contacts::email)
                .like(pattern.clone())
                .escape('\\'))
            .or(unicode_lower(contacts::phone)
                .like(pattern.clone())
                .escape('\\'))
            .or(unicode_lower(contacts::first.concat(" ").concat(contacts::last))
                .like(pattern)
                .escape('\\')),
    )
}

/// Converts SQLite's `COUNT(*)` into a row count.
fn row_count(total: i64) -> RepositoryResult<usize> {
    usize::try_from(total)
        .map_err(|_| RepositoryError::Unexpected(format!("invalid contact count {total}")))
}

fn into_domain(rows: Vec<DbContact>) -> RepositoryResult<Vec<Contact>> {
    rows.into_iter()
        .map(|row| Contact::try_from(row).map_err(RepositoryError::from))
        .collect()
}

impl ContactReader for DieselRepository {
    fn get_contact_by_id(&self, id: ContactId) -> RepositoryResult<Option<Contact>> {
        let mut conn = self.conn()?;
        let contact = contacts::table
            .find(id.get())
            .filter(contacts::deleted_at.is_null())
            .first::<DbContact>(&mut conn)
            .optional()?;

        contact
            .map(|c| Contact::try_from(c).map_err(RepositoryError::from))
            .transpose()
    }

    fn find_contact_by_email(
        &self,
        email: &str,
        exclude: Option<ContactId>,
    ) -> RepositoryResult<Option<Contact>> {
        let mut conn = self.conn()?;
        let mut query = contacts::table
            .filter(contacts::deleted_at.is_null())
            .filter(contacts::email.eq(email))
            .into_boxed();

        if let Some(id) = exclude {
            query = query.filter(contacts::id.ne(id.get()));
        }

        let contact = query.first::<DbContact>(&mut conn).optional()?;

        contact
            .map(|c| Contact::try_from(c).map_err(RepositoryError::from))
            .transpose()
    }

    fn count_contacts(&self, query: &ContactListQuery) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let total: i64 = live_contacts(query.search.as_deref())
            .count()
            .get_result(&mut conn)?;

        row_count(total)
    }

    fn list_contacts(&self, query: &ContactListQuery) -> RepositoryResult<Vec<Contact>> {
        let mut conn = self.conn()?;
        let mut items = live_contacts(query.search.as_deref()).order(contacts::id.asc());

        if let Some(pagination) = &query.pagination {
            items = items
                .limit(i64::try_from(pagination.per_page).unwrap_or(i64::MAX))
                .offset(i64::try_from(pagination.offset()).unwrap_or(i64::MAX));
        }

        into_domain(items.load::<DbContact>(&mut conn)?)
    }
}

impl ContactWriter for DieselRepository {
    fn create_contact(&self, contact: &SanitizedContact) -> RepositoryResult<Contact> {
        let mut conn = self.conn()?;
        let created = diesel::insert_into(contacts::table)
            .values(DbNewContact::from(contact))
            .get_result::<DbContact>(&mut conn)?;

        Ok(Contact::try_from(created)?)
    }

    fn create_contacts(&self, new_contacts: &[SanitizedContact]) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        conn.transaction::<_, RepositoryError, _>(|conn| {
            let mut inserted = 0;
            for chunk in new_contacts.chunks(INSERT_CHUNK_SIZE) {
                let rows: Vec<DbNewContact> = chunk.iter().map(Into::into).collect();
                inserted += diesel::insert_into(contacts::table)
                    .values(&rows)
                    .execute(conn)?;
            }
            Ok(inserted)
        })
    }

    fn update_contact(
        &self,
        id: ContactId,
        contact: &SanitizedContact,
    ) -> RepositoryResult<Contact> {
        let mut conn = self.conn()?;
        let changes = DbUpdateContact::new(contact, Utc::now().naive_utc());

        let updated = diesel::update(
            contacts::table
                .find(id.get())
                .filter(contacts::deleted_at.is_null()),
        )
        .set(&changes)
        .get_result::<DbContact>(&mut conn)?;

        Ok(Contact::try_from(updated)?)
    }

    fn delete_contact(&self, id: ContactId) -> RepositoryResult<()> {
        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let affected = diesel::update(
            contacts::table
                .find(id.get())
                .filter(contacts::deleted_at.is_null()),
        )
        .set((contacts::deleted_at.eq(now), contacts::updated_at.eq(now)))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    fn purge_contacts(&self) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        conn.transaction::<_, RepositoryError, _>(|conn| {
            let removed = diesel::delete(contacts::table).execute(conn)?;
            diesel::sql_query("DELETE FROM sqlite_sequence WHERE name = 'contacts'")
                .execute(conn)?;
            Ok(removed)
        })
    }
}
