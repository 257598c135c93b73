use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::profile::{
    GetProfileDTO, GetProfileListDTO, ImportProfilesDTO, ImportResultDTO, ProfileDTO, ProfileListDTO,
    RawProfileRecord,
};
use crate::application::interface::db::DBSession;
use crate::application::interface::fetcher::ProfileFetcher;
use crate::application::interface::gateway::profile::{ProfileReader, ProfileWriter};
use crate::domain::entities::id::Id;
use crate::domain::entities::profile::{NewProfile, Profile};

/// Fetch + map + store pipeline shared by every use case that creates profiles.
#[derive(Clone)]
pub struct ProfileImporter {
    db_session: Arc<dyn DBSession>,
    profile_writer: Arc<dyn ProfileWriter>,
    fetcher: Arc<dyn ProfileFetcher>,
}

impl ProfileImporter {
    pub fn new(
        db_session: Arc<dyn DBSession>,
        profile_writer: Arc<dyn ProfileWriter>,
        fetcher: Arc<dyn ProfileFetcher>,
    ) -> Self {
        Self {
            db_session,
            profile_writer,
            fetcher,
        }
    }

    /// Stores every record that maps cleanly and returns how many were committed.
    /// A bad record is logged and skipped; it never aborts the batch.
    pub async fn save(&self, records: Vec<RawProfileRecord>) -> usize {
        let mut saved = 0;
        for record in records {
            match self.save_one(record).await {
                Ok(id) => {
                    debug!("Saved profile {}", id.value);
                    saved += 1;
                }
                Err(err) => {
                    warn!("Error saving profile: {}", err);
                    if let Err(err) = self.db_session.rollback().await {
                        warn!("Failed to roll back profile insert: {}", err);
                    }
                }
            }
        }
        saved
    }

    async fn save_one(&self, record: RawProfileRecord) -> AppResult<Id<Profile>> {
        let profile = NewProfile::try_from(record)?;
        let id = self.profile_writer.insert(profile).await?;
        self.db_session.commit().await?;
        Ok(id)
    }

    /// Ends any open read transaction before the upstream call, then saves what arrives.
    pub async fn import(&self, count: u32) -> usize {
        if let Err(err) = self.db_session.rollback().await {
            warn!("Failed to release session before fetching profiles: {}", err);
        }
        let records = self.fetcher.fetch(count).await;
        self.save(records).await
    }
}

#[derive(Clone)]
pub struct ImportProfilesInteractor {
    importer: ProfileImporter,
}

impl ImportProfilesInteractor {
    pub fn new(importer: ProfileImporter) -> Self {
        Self { importer }
    }

    pub async fn execute(&self, dto: ImportProfilesDTO) -> AppResult<ImportResultDTO> {
        let saved = self.importer.import(dto.count).await;
        info!("Imported {} of {} requested profiles", saved, dto.count);
        Ok(ImportResultDTO { saved })
    }
}

#[derive(Clone)]
pub struct GetProfileListInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetProfileListInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self, dto: GetProfileListDTO) -> AppResult<ProfileListDTO> {
        let per_page = dto.per_page.max(1);
        let total = self.profile_reader.count().await?;
        // An empty store still has one (empty) first page.
        let num_pages = ((total + per_page - 1) / per_page).max(1);

        let page = match dto.page.as_deref().map(str::trim) {
            None | Some("") => 1,
            Some("last") => num_pages,
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| AppError::PageNotFound(format!("`{}` is not a page number", raw)))?,
        };

        if page < 1 || page > num_pages {
            return Err(AppError::PageNotFound(format!("page {} is out of range", page)));
        }

        let offset = (page - 1) * per_page;
        let profiles = self.profile_reader.get_all(per_page, offset).await?;

        Ok(ProfileListDTO {
            total,
            page,
            per_page,
            num_pages,
            has_next: page < num_pages,
            has_previous: page > 1,
            items: profiles.into_iter().map(ProfileDTO::from).collect(),
        })
    }
}

#[derive(Clone)]
pub struct GetProfileInteractor {
    profile_reader: Arc<dyn ProfileReader>,
}

impl GetProfileInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>) -> Self {
        Self { profile_reader }
    }

    pub async fn execute(&self, dto: GetProfileDTO) -> AppResult<ProfileDTO> {
        let profile_id: Id<Profile> = dto.profile_id.try_into()?;

        let profile = self
            .profile_reader
            .find_by_id(&profile_id)
            .await?
            .ok_or(AppError::ProfileNotFound)?;

        Ok(profile.into())
    }
}

#[derive(Clone)]
pub struct GetRandomProfileInteractor {
    profile_reader: Arc<dyn ProfileReader>,
    importer: ProfileImporter,
}

impl GetRandomProfileInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>, importer: ProfileImporter) -> Self {
        Self {
            profile_reader,
            importer,
        }
    }

    pub async fn execute(&self) -> AppResult<ProfileDTO> {
        let count = self.profile_reader.count().await?;

        let profile = if count == 0 {
            info!("No profiles stored yet, fetching one");
            self.importer.import(1).await;
            self.profile_reader.first().await?
        } else {
            let offset = fastrand::i64(0..count);
            self.profile_reader.find_at_offset(offset).await?
        };

        profile.map(ProfileDTO::from).ok_or(AppError::ProfileNotFound)
    }
}

#[derive(Clone)]
pub struct SeedProfilesInteractor {
    profile_reader: Arc<dyn ProfileReader>,
    importer: ProfileImporter,
    initial_count: u32,
}

impl SeedProfilesInteractor {
    pub fn new(profile_reader: Arc<dyn ProfileReader>, importer: ProfileImporter, initial_count: u32) -> Self {
        Self {
            profile_reader,
            importer,
            initial_count,
        }
    }

    /// Returns the number of seeded profiles, or `None` when the store already had data.
    pub async fn execute(&self) -> AppResult<Option<usize>> {
        if self.profile_reader.count().await? > 0 {
            return Ok(None);
        }

        info!("Loading initial {} profiles from API...", self.initial_count);
        let saved = self.importer.import(self.initial_count).await;
        info!("Successfully loaded {} profiles", saved);
        Ok(Some(saved))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use mockall::{Sequence, mock};
    use mockall::predicate::eq;
    use rstest::{fixture, rstest};
    use serde_json::json;

    use crate::application::app_error::{AppError, AppResult};
    use crate::application::dto::profile::{GetProfileDTO, GetProfileListDTO, ImportProfilesDTO, RawProfileRecord};
    use crate::application::interactors::profile::{
        GetProfileInteractor, GetProfileListInteractor, GetRandomProfileInteractor, ImportProfilesInteractor,
        ProfileImporter, SeedProfilesInteractor,
    };
    use crate::application::interface::db::DBSession;
    use crate::application::interface::fetcher::ProfileFetcher;
    use crate::tests::fakes::{InMemoryProfileStore, raw_record};

    // Mocks
    mock! {
        pub DBSessionMock {}

        #[async_trait]
        impl DBSession for DBSessionMock {
            async fn commit(&self) -> AppResult<()>;
            async fn rollback(&self) -> AppResult<()>;
        }
    }

    mock! {
        pub FetcherMock {}

        #[async_trait]
        impl ProfileFetcher for FetcherMock {
            async fn fetch(&self, count: u32) -> Vec<RawProfileRecord>;
        }
    }

    // Fixtures
    #[fixture]
    fn db_session() -> MockDBSessionMock {
        let mut db_session = MockDBSessionMock::new();
        db_session.expect_commit().returning(|| Ok(()));
        db_session.expect_rollback().returning(|| Ok(()));
        db_session
    }

    #[fixture]
    fn store() -> Arc<InMemoryProfileStore> {
        Arc::new(InMemoryProfileStore::default())
    }

    fn importer(
        db_session: MockDBSessionMock,
        store: &Arc<InMemoryProfileStore>,
        fetcher: MockFetcherMock,
    ) -> ProfileImporter {
        ProfileImporter::new(Arc::new(db_session), store.clone(), Arc::new(fetcher))
    }

    fn silent_fetcher() -> MockFetcherMock {
        let mut fetcher = MockFetcherMock::new();
        fetcher.expect_fetch().never();
        fetcher
    }

    // ProfileImporter::save
    #[rstest]
    #[tokio::test]
    async fn test_save_single_record(db_session: MockDBSessionMock, store: Arc<InMemoryProfileStore>) {
        let importer = importer(db_session, &store, silent_fetcher());
        let records = vec![RawProfileRecord(json!({
            "gender": "male",
            "name": { "first": "Test", "last": "User1" },
            "phone": "111",
            "email": "test1@example.com",
            "location": { "country": "US", "city": "LA" },
            "picture": { "large": "pic1.jpg" }
        }))];

        let saved = importer.save(records).await;

        assert_eq!(saved, 1);
        assert_eq!(store.len(), 1);
        let profile = store.find_by_email("test1@example.com").expect("profile stored");
        assert_eq!(profile.location, "US, LA");
    }

    #[rstest]
    #[tokio::test]
    async fn test_save_skips_malformed_records(db_session: MockDBSessionMock, store: Arc<InMemoryProfileStore>) {
        let importer = importer(db_session, &store, silent_fetcher());
        let records = vec![
            raw_record("Good", "good@example.com"),
            RawProfileRecord(json!({ "gender": "female", "name": {}, "phone": "222", "email": "bad@example.com" })),
        ];

        let saved = importer.save(records).await;

        assert_eq!(saved, 1);
        assert!(store.find_by_email("good@example.com").is_some());
        assert!(store.find_by_email("bad@example.com").is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn test_save_continues_after_store_error(store: Arc<InMemoryProfileStore>) {
        let mut db_session = MockDBSessionMock::new();
        db_session.expect_commit().times(2).returning(|| Ok(()));
        db_session.expect_rollback().times(1).returning(|| Ok(()));

        store.reject_email("broken@example.com");
        let importer = importer(db_session, &store, silent_fetcher());
        let records = vec![
            raw_record("First", "first@example.com"),
            raw_record("Broken", "broken@example.com"),
            raw_record("Third", "third@example.com"),
        ];

        let saved = importer.save(records).await;

        assert_eq!(saved, 2);
        assert_eq!(store.len(), 2);
        assert!(store.find_by_email("broken@example.com").is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn test_save_counts_only_committed_records(store: Arc<InMemoryProfileStore>) {
        let mut db_session = MockDBSessionMock::new();
        db_session
            .expect_commit()
            .returning(|| Err(AppError::DatabaseError(sqlx::Error::PoolClosed)));
        db_session.expect_rollback().returning(|| Ok(()));

        let importer = importer(db_session, &store, silent_fetcher());
        let saved = importer.save(vec![raw_record("Lost", "lost@example.com")]).await;

        assert_eq!(saved, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn test_save_empty_batch(db_session: MockDBSessionMock, store: Arc<InMemoryProfileStore>) {
        let importer = importer(db_session, &store, silent_fetcher());
        assert_eq!(importer.save(Vec::new()).await, 0);
        assert_eq!(store.len(), 0);
    }

    // ImportProfilesInteractor
    #[rstest]
    #[tokio::test]
    async fn test_import_fetches_requested_count(db_session: MockDBSessionMock, store: Arc<InMemoryProfileStore>) {
        let mut fetcher = MockFetcherMock::new();
        fetcher
            .expect_fetch()
            .with(eq(5))
            .times(1)
            .returning(|_| vec![raw_record("A", "a@example.com"), raw_record("B", "b@example.com")]);

        let interactor = ImportProfilesInteractor::new(importer(db_session, &store, fetcher));
        let result = interactor.execute(ImportProfilesDTO { count: 5 }).await.unwrap();

        // Upstream returned fewer than requested; only what arrived is saved.
        assert_eq!(result.saved, 2);
        assert_eq!(store.len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn test_import_is_not_idempotent(db_session: MockDBSessionMock, store: Arc<InMemoryProfileStore>) {
        let mut fetcher = MockFetcherMock::new();
        fetcher
            .expect_fetch()
            .times(2)
            .returning(|_| vec![raw_record("Same", "same@example.com")]);

        let interactor = ImportProfilesInteractor::new(importer(db_session, &store, fetcher));
        interactor.execute(ImportProfilesDTO { count: 1 }).await.unwrap();
        interactor.execute(ImportProfilesDTO { count: 1 }).await.unwrap();

        assert_eq!(store.len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn test_import_with_failed_fetch(db_session: MockDBSessionMock, store: Arc<InMemoryProfileStore>) {
        let mut fetcher = MockFetcherMock::new();
        fetcher.expect_fetch().returning(|_| Vec::new());

        let interactor = ImportProfilesInteractor::new(importer(db_session, &store, fetcher));
        let result = interactor.execute(ImportProfilesDTO { count: 10 }).await.unwrap();

        assert_eq!(result.saved, 0);
    }

    // GetProfileListInteractor
    fn list_dto(page: Option<&str>) -> GetProfileListDTO {
        GetProfileListDTO {
            page: page.map(str::to_string),
            per_page: 10,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_list_newest_first(store: Arc<InMemoryProfileStore>) {
        store.seed(25);
        let interactor = GetProfileListInteractor::new(store.clone());

        let result = interactor.execute(list_dto(None)).await.unwrap();

        assert_eq!(result.total, 25);
        assert_eq!(result.num_pages, 3);
        assert_eq!(result.page, 1);
        assert!(result.has_next);
        assert!(!result.has_previous);
        let ids: Vec<i64> = result.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, (16..=25).rev().collect::<Vec<_>>());
    }

    #[rstest]
    #[case(Some("2"), 2, 10)]
    #[case(Some("3"), 3, 5)]
    #[case(Some("last"), 3, 5)]
    #[case(Some(""), 1, 10)]
    #[tokio::test]
    async fn test_list_pages(
        store: Arc<InMemoryProfileStore>,
        #[case] page: Option<&str>,
        #[case] expected_page: i64,
        #[case] expected_items: usize,
    ) {
        store.seed(25);
        let interactor = GetProfileListInteractor::new(store.clone());

        let result = interactor.execute(list_dto(page)).await.unwrap();

        assert_eq!(result.page, expected_page);
        assert_eq!(result.items.len(), expected_items);
    }

    #[rstest]
    #[case("0")]
    #[case("4")]
    #[case("-1")]
    #[case("abc")]
    #[tokio::test]
    async fn test_list_invalid_page(store: Arc<InMemoryProfileStore>, #[case] page: &str) {
        store.seed(25);
        let interactor = GetProfileListInteractor::new(store.clone());

        let result = interactor.execute(list_dto(Some(page))).await;

        assert!(matches!(result.unwrap_err(), AppError::PageNotFound(_)));
    }

    #[rstest]
    #[tokio::test]
    async fn test_list_empty_store_first_page(store: Arc<InMemoryProfileStore>) {
        let interactor = GetProfileListInteractor::new(store.clone());

        let result = interactor.execute(list_dto(None)).await.unwrap();

        assert_eq!(result.total, 0);
        assert_eq!(result.num_pages, 1);
        assert!(result.items.is_empty());
        assert!(!result.has_next);
    }

    // GetProfileInteractor
    #[rstest]
    #[tokio::test]
    async fn test_get_profile_success(store: Arc<InMemoryProfileStore>) {
        store.seed(3);
        let interactor = GetProfileInteractor::new(store.clone());

        let result = interactor
            .execute(GetProfileDTO {
                profile_id: "2".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.id, 2);
        assert_eq!(result.first_name, "Person2");
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_profile_not_found(store: Arc<InMemoryProfileStore>) {
        store.seed(3);
        let interactor = GetProfileInteractor::new(store.clone());

        let result = interactor
            .execute(GetProfileDTO {
                profile_id: "999".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::ProfileNotFound));
    }

    #[rstest]
    #[tokio::test]
    async fn test_get_profile_invalid_id(store: Arc<InMemoryProfileStore>) {
        let interactor = GetProfileInteractor::new(store.clone());

        let result = interactor
            .execute(GetProfileDTO {
                profile_id: "abc".to_string(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), AppError::InvalidId(_)));
    }

    // GetRandomProfileInteractor
    #[rstest]
    #[tokio::test]
    async fn test_random_profile_from_populated_store(store: Arc<InMemoryProfileStore>) {
        store.seed(5);
        let importer = importer(MockDBSessionMock::new(), &store, silent_fetcher());
        let interactor = GetRandomProfileInteractor::new(store.clone(), importer);

        for _ in 0..20 {
            let result = interactor.execute().await.unwrap();
            assert!((1..=5).contains(&result.id));
        }
        assert_eq!(store.len(), 5);
    }

    #[rstest]
    #[tokio::test]
    async fn test_random_profile_seeds_empty_store(db_session: MockDBSessionMock, store: Arc<InMemoryProfileStore>) {
        let mut fetcher = MockFetcherMock::new();
        fetcher
            .expect_fetch()
            .with(eq(1))
            .times(1)
            .returning(|_| vec![raw_record("Random", "random@example.com")]);

        let interactor = GetRandomProfileInteractor::new(store.clone(), importer(db_session, &store, fetcher));
        let result = interactor.execute().await.unwrap();

        assert_eq!(result.email, "random@example.com");
        assert_eq!(store.len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn test_random_profile_empty_after_failed_seed(
        db_session: MockDBSessionMock,
        store: Arc<InMemoryProfileStore>,
    ) {
        let mut fetcher = MockFetcherMock::new();
        fetcher.expect_fetch().with(eq(1)).times(1).returning(|_| Vec::new());

        let interactor = GetRandomProfileInteractor::new(store.clone(), importer(db_session, &store, fetcher));
        let result = interactor.execute().await;

        assert!(matches!(result.unwrap_err(), AppError::ProfileNotFound));
    }

    fn released_session_then_fetch(count: u32, records: Vec<RawProfileRecord>) -> (MockDBSessionMock, MockFetcherMock) {
        let mut seq = Sequence::new();
        let mut db_session = MockDBSessionMock::new();
        let mut fetcher = MockFetcherMock::new();
        let saved = records.len();

        db_session.expect_rollback().times(1).in_sequence(&mut seq).returning(|| Ok(()));
        fetcher
            .expect_fetch()
            .with(eq(count))
            .times(1)
            .in_sequence(&mut seq)
            .return_once(move |_| records);
        db_session.expect_commit().times(saved).returning(|| Ok(()));

        (db_session, fetcher)
    }

    #[rstest]
    #[tokio::test]
    async fn test_random_profile_releases_session_before_fetch(store: Arc<InMemoryProfileStore>) {
        let (db_session, fetcher) = released_session_then_fetch(1, vec![raw_record("Random", "random@example.com")]);

        let interactor = GetRandomProfileInteractor::new(store.clone(), importer(db_session, &store, fetcher));
        let result = interactor.execute().await.unwrap();

        assert_eq!(result.email, "random@example.com");
    }

    // SeedProfilesInteractor
    #[rstest]
    #[tokio::test]
    async fn test_seed_releases_session_before_fetch(store: Arc<InMemoryProfileStore>) {
        let (db_session, fetcher) = released_session_then_fetch(
            1000,
            vec![raw_record("One", "one@example.com"), raw_record("Two", "two@example.com")],
        );

        let interactor = SeedProfilesInteractor::new(store.clone(), importer(db_session, &store, fetcher), 1000);
        let result = interactor.execute().await.unwrap();

        assert_eq!(result, Some(2));
    }

    #[rstest]
    #[tokio::test]
    async fn test_seed_empty_store(db_session: MockDBSessionMock, store: Arc<InMemoryProfileStore>) {
        let mut fetcher = MockFetcherMock::new();
        fetcher.expect_fetch().with(eq(1000)).times(1).returning(|_| {
            (0..3)
                .map(|i| raw_record(&format!("Seed{}", i), &format!("seed{}@example.com", i)))
                .collect()
        });

        let interactor = SeedProfilesInteractor::new(store.clone(), importer(db_session, &store, fetcher), 1000);
        let result = interactor.execute().await.unwrap();

        assert_eq!(result, Some(3));
        assert_eq!(store.len(), 3);
    }

    #[rstest]
    #[tokio::test]
    async fn test_seed_skips_populated_store(store: Arc<InMemoryProfileStore>) {
        store.seed(1);
        let interactor = SeedProfilesInteractor::new(
            store.clone(),
            importer(MockDBSessionMock::new(), &store, silent_fetcher()),
            1000,
        );

        let result = interactor.execute().await.unwrap();

        assert_eq!(result, None);
        assert_eq!(store.len(), 1);
    }
}
