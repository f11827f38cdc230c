//! Song service tests
//! Verifies how creation sequences lookup and storage, using mocked collaborators
use async_trait::async_trait;
use mockall::{mock, predicate::eq};
use songbook_core::{
    CreateSong, ExternalServiceError, NewSong, Pagination, Result, Song, SongDetails, SongEnricher,
    SongFilter, SongId, SongStore, SongbookError, UpdateSong,
};
use songbook_server::services::SongService;
use std::sync::Arc;

mock! {
    pub Store {}

    #[async_trait]
    impl SongStore for Store {
        async fn list_songs(&self, filter: &SongFilter, pagination: Pagination) -> Result<Vec<Song>>;
        async fn get_song(&self, id: SongId) -> Result<Option<Song>>;
        async fn get_song_text(&self, id: SongId, pagination: Pagination) -> Result<String>;
        async fn add_song(&self, song: NewSong) -> Result<Song>;
        async fn update_song(&self, id: SongId, song: UpdateSong) -> Result<Song>;
        async fn delete_song(&self, id: SongId) -> Result<()>;
    }
}

mock! {
    pub Enricher {}

    #[async_trait]
    impl SongEnricher for Enricher {
        async fn fetch_details(&self, group: &str, song: &str) -> Result<SongDetails>;
    }
}

fn service(store: MockStore, enricher: MockEnricher) -> SongService {
    SongService::new(Arc::new(store), Arc::new(enricher))
}

fn stored(id: SongId, song: &NewSong) -> Song {
    Song {
        id,
        group_name: song.group_name.clone(),
        song_name: song.song_name.clone(),
        release_date: song.release_date.clone(),
        text: song.text.clone(),
        link: song.link.clone(),
    }
}

#[tokio::test]
async fn test_failed_enrichment_never_touches_store() {
    let mut store = MockStore::new();
    store.expect_add_song().never();

    let mut enricher = MockEnricher::new();
    enricher
        .expect_fetch_details()
        .withf(|group, song| group.to_string() == "X" && song.to_string() == "Y")
        .times(1)
        .returning(|_, _| {
            Err(SongbookError::ExternalService(ExternalServiceError::Status {
                status: 500,
                message: "down".to_string(),
            }))
        });

    let result = service(store, enricher)
        .create_song(CreateSong::new("X", "Y"))
        .await;

    assert!(matches!(
        result,
        Err(SongbookError::ExternalService(ExternalServiceError::Status { status: 500, .. }))
    ));
}

#[tokio::test]
async fn test_invalid_request_touches_nothing() {
    let mut store = MockStore::new();
    store.expect_add_song().never();
    let mut enricher = MockEnricher::new();
    enricher.expect_fetch_details().never();

    let result = service(store, enricher)
        .create_song(CreateSong::new("  ", "Supremacy"))
        .await;

    assert!(matches!(result, Err(SongbookError::Validation(_))));
}

#[tokio::test]
async fn test_create_stores_enriched_song() {
    let mut enricher = MockEnricher::new();
    enricher.expect_fetch_details().times(1).returning(|_, _| {
        Ok(SongDetails {
            release_date: "16.07.2006".to_string(),
            text: "verse1\n\nverse2".to_string(),
            link: "https://example.com/supremacy".to_string(),
        })
    });

    let mut store = MockStore::new();
    store
        .expect_add_song()
        .withf(|song| {
            song.group_name == "Muse"
                && song.song_name == "Supremacy"
                && song.release_date == "16.07.2006"
                && song.text == "verse1\n\nverse2"
                && song.link == "https://example.com/supremacy"
        })
        .times(1)
        .returning(|song| Ok(stored(1, &song)));

    let song = service(store, enricher)
        .create_song(CreateSong::new("Muse", "Supremacy"))
        .await
        .unwrap();

    assert_eq!(song.id, 1);
    assert_eq!(song.text, "verse1\n\nverse2");
}

#[tokio::test]
async fn test_store_failure_after_enrichment_propagates() {
    let mut enricher = MockEnricher::new();
    enricher.expect_fetch_details().returning(|_, _| {
        Ok(SongDetails {
            release_date: String::new(),
            text: String::new(),
            link: String::new(),
        })
    });

    let mut store = MockStore::new();
    store
        .expect_add_song()
        .times(1)
        .returning(|_| Err(SongbookError::storage("database is locked")));

    let result = service(store, enricher)
        .create_song(CreateSong::new("Muse", "Supremacy"))
        .await;

    assert!(matches!(result, Err(SongbookError::Storage(_))));
}

#[tokio::test]
async fn test_get_missing_song_is_not_found() {
    let mut store = MockStore::new();
    store
        .expect_get_song()
        .with(eq(7))
        .returning(|_| Ok(None));

    let result = service(store, MockEnricher::new()).get_song(7).await;
    assert!(matches!(result, Err(SongbookError::NotFound { .. })));
}

#[tokio::test]
async fn test_update_validates_before_store() {
    let mut store = MockStore::new();
    store.expect_update_song().never();

    let result = service(store, MockEnricher::new())
        .update_song(
            1,
            UpdateSong {
                group_name: "Muse".to_string(),
                song_name: String::new(),
                ..UpdateSong::default()
            },
        )
        .await;

    assert!(matches!(result, Err(SongbookError::Validation(_))));
}

#[tokio::test]
async fn test_update_and_delete_pass_not_found_through() {
    let mut store = MockStore::new();
    store
        .expect_update_song()
        .returning(|id, _| Err(SongbookError::not_found("Song", id)));
    store
        .expect_delete_song()
        .returning(|id| Err(SongbookError::not_found("Song", id)));

    let service = service(store, MockEnricher::new());

    let update = service
        .update_song(
            404,
            UpdateSong {
                group_name: "Muse".to_string(),
                song_name: "Supremacy".to_string(),
                ..UpdateSong::default()
            },
        )
        .await;
    let delete = service.delete_song(404).await;

    assert!(matches!(update, Err(SongbookError::NotFound { .. })));
    assert!(matches!(delete, Err(SongbookError::NotFound { .. })));
}

#[tokio::test]
async fn test_text_and_list_pass_through() {
    let mut store = MockStore::new();
    store
        .expect_get_song_text()
        .withf(|id, pagination| *id == 3 && pagination.page() == 2 && pagination.limit() == 2)
        .returning(|_, _| Ok("verse3".to_string()));
    store
        .expect_list_songs()
        .withf(|filter, _| filter.group.as_deref() == Some("muse"))
        .returning(|_, _| Ok(Vec::new()));

    let service = service(store, MockEnricher::new());

    let text = service
        .get_song_text(3, Pagination::new(2, 2).unwrap())
        .await
        .unwrap();
    assert_eq!(text, "verse3");

    let songs = service
        .list_songs(&SongFilter::by_group("muse"), Pagination::new(1, 10).unwrap())
        .await
        .unwrap();
    assert!(songs.is_empty());
}
