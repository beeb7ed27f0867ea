use contact_book::domain::contact::SanitizedContact;
use contact_book::domain::types::ContactId;
use contact_book::pagination::DEFAULT_ITEMS_PER_PAGE;
use contact_book::repository::errors::RepositoryError;
use contact_book::repository::{ContactListQuery, ContactReader, ContactWriter, DieselRepository};
use contact_book::services::contacts::{IndexQuery, load_index_page, paginate_contacts};
use contact_book::services::seed::{DEFAULT_SEED_COUNT, seed_contacts};

mod common;

fn contact(first: &str, last: &str, email: &str, phone: &str) -> SanitizedContact {
    SanitizedContact {
        first: first.to_string(),
        last: last.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
    }
}

fn seeded_repo(name: &str) -> (common::TestDb, DieselRepository) {
    let test_db = common::TestDb::new(name);
    let repo = DieselRepository::new(test_db.pool());
    assert_eq!(
        seed_contacts(&repo, DEFAULT_SEED_COUNT).unwrap(),
        DEFAULT_SEED_COUNT
    );
    (test_db, repo)
}

fn search_count(repo: &DieselRepository, term: &str) -> usize {
    repo.count_contacts(&ContactListQuery::new().search(term))
        .unwrap()
}

#[test]
fn test_seeded_pagination() {
    let (_db, repo) = seeded_repo("test_seeded_pagination.db");

    let first = paginate_contacts(&repo, None, 1, DEFAULT_ITEMS_PER_PAGE).unwrap();
    assert_eq!(first.total, 8192);
    assert_eq!(first.items.len(), 25);
    assert_eq!(first.items[0].id.get(), 1);
    assert_eq!(first.items[24].id.get(), 25);
    assert_eq!(first.items[0].first, "FirstName1");
    assert_eq!(first.shown, 25);
    assert!(first.has_more);

    let last = paginate_contacts(&repo, None, 10_000, DEFAULT_ITEMS_PER_PAGE).unwrap();
    assert_eq!(last.page, 328);
    assert_eq!(last.items.len(), 17);
    assert_eq!(last.items[0].id.get(), 8176);
    assert_eq!(last.items[16].id.get(), 8192);
    assert_eq!(last.shown, 8192);
    assert!(!last.has_more);
}

#[test]
fn test_search_matches_each_field() {
    let (_db, repo) = seeded_repo("test_search_matches_each_field.db");

    assert_eq!(search_count(&repo, "5550000042"), 1);
    assert_eq!(search_count(&repo, "5551234567"), 0);
    assert_eq!(search_count(&repo, "firstname42 lastname42"), 1);
    assert_eq!(search_count(&repo, "USER100@"), 1);
    assert_eq!(search_count(&repo, "LastName8192"), 1);
    assert_eq!(search_count(&repo, "   "), 8192);

    let page = paginate_contacts(&repo, Some("FirstName42"), 1, DEFAULT_ITEMS_PER_PAGE).unwrap();
    // FirstName42, FirstName420..429, FirstName4200..4299
    assert_eq!(page.total, 111);
    assert_eq!(page.items[0].first, "FirstName42");
    assert!(page.has_more);
}

#[test]
fn test_search_wildcards_are_literal() {
    let test_db = common::TestDb::new("test_search_wildcards_are_literal.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_contact(&contact("Ada", "Lovelace", "ada@example.com", ""))
        .unwrap();
    repo.create_contact(&contact("Grace", "Hopper", "grace_h@example.com", ""))
        .unwrap();

    assert_eq!(search_count(&repo, "%"), 0);
    assert_eq!(search_count(&repo, "_"), 1);
    assert_eq!(search_count(&repo, "ada lovelace"), 1);
}

#[test]
fn test_search_folds_accented_case() {
    let test_db = common::TestDb::new("test_search_folds_accented_case.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_contact(&contact("Émile", "Zola", "emile@example.com", ""))
        .unwrap();
    repo.create_contact(&contact("Ада", "ЛАВЛЕЙС", "", "")).unwrap();

    assert_eq!(search_count(&repo, "Émile"), 1);
    assert_eq!(search_count(&repo, "émile"), 1);
    assert_eq!(search_count(&repo, "ÉMILE ZOLA"), 1);
    assert_eq!(search_count(&repo, "лавлейс"), 1);
    assert_eq!(search_count(&repo, "ада лавлейс"), 1);
}

#[test]
fn test_huge_page_on_empty_result() {
    let test_db = common::TestDb::new("test_huge_page_on_empty_result.db");
    let repo = DieselRepository::new(test_db.pool());

    let data = load_index_page(
        &repo,
        IndexQuery {
            search: Some("nobody".to_string()),
            page: Some("9223372036854775807".to_string()),
        },
    )
    .unwrap();

    assert!(data.contacts.items.is_empty());
    assert_eq!(data.contacts.total, 0);
    assert_eq!(data.contacts.shown, 0);
    assert!(!data.contacts.has_more);
}

#[test]
fn test_contact_crud_and_soft_delete() {
    let test_db = common::TestDb::new("test_contact_crud_and_soft_delete.db");
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_contact(&contact("Ada", "Lovelace", "ada@example.com", "5551234567"))
        .unwrap();
    assert_eq!(created.id.get(), 1);
    assert_eq!(created.phone, "5551234567");
    assert!(created.deleted_at.is_none());

    let fetched = repo.get_contact_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched, created);

    let updated = repo
        .update_contact(
            created.id,
            &contact("Ada", "King", "ada@example.com", "15551234567"),
        )
        .unwrap();
    assert_eq!(updated.last, "King");
    assert_eq!(updated.phone, "15551234567");
    assert!(updated.updated_at >= created.updated_at);

    repo.delete_contact(created.id).unwrap();
    assert!(repo.get_contact_by_id(created.id).unwrap().is_none());
    assert_eq!(repo.count_contacts(&ContactListQuery::new()).unwrap(), 0);
    assert!(
        repo.list_contacts(&ContactListQuery::new().paginate(1, 25))
            .unwrap()
            .is_empty()
    );

    assert!(matches!(
        repo.delete_contact(created.id),
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(
        repo.update_contact(created.id, &contact("Ada", "King", "", "")),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_email_uniqueness_among_live_contacts() {
    let test_db = common::TestDb::new("test_email_uniqueness_among_live_contacts.db");
    let repo = DieselRepository::new(test_db.pool());

    let ada = repo
        .create_contact(&contact("Ada", "Lovelace", "ada@example.com", ""))
        .unwrap();

    let duplicate = repo.create_contact(&contact("Other", "Ada", "ada@example.com", ""));
    assert!(matches!(duplicate, Err(RepositoryError::UniqueViolation(_))));

    assert_eq!(
        repo.find_contact_by_email("ada@example.com", None)
            .unwrap()
            .map(|c| c.id),
        Some(ada.id)
    );
    assert!(
        repo.find_contact_by_email("ada@example.com", Some(ada.id))
            .unwrap()
            .is_none()
    );

    // Blank emails never collide.
    repo.create_contact(&contact("No", "Email", "", "")).unwrap();
    repo.create_contact(&contact("Also", "Blank", "", "")).unwrap();

    repo.delete_contact(ada.id).unwrap();
    let reused = repo
        .create_contact(&contact("New", "Owner", "ada@example.com", ""))
        .unwrap();
    assert_ne!(reused.id, ada.id);
}

#[test]
fn test_seed_replaces_existing_contacts() {
    let test_db = common::TestDb::new("test_seed_replaces_existing_contacts.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_contact(&contact("Ada", "Lovelace", "ada@example.com", ""))
        .unwrap();
    repo.create_contact(&contact("Grace", "Hopper", "grace@example.com", ""))
        .unwrap();

    assert_eq!(seed_contacts(&repo, 3).unwrap(), 3);
    assert_eq!(repo.count_contacts(&ContactListQuery::new()).unwrap(), 3);

    let first = repo
        .get_contact_by_id(ContactId::new(1).unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(first.email, "user1@example.com");
    assert_eq!(first.phone, "5550000001");
}
