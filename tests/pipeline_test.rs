mod common;

use artistmix::{
    mix::{ArtistStatus, ClassifiedArtist, Pipeline, discography, playlist, resolver},
    types::Track,
};
use common::{Call, FakeSpotify, ids};

fn numbered_tracks(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("t{:03}", i)).collect()
}

#[tokio::test]
async fn test_build_sends_tracks_in_chunks_of_100() {
    let fake = FakeSpotify::new();
    let tracks = numbered_tracks(250);

    let playlist = playlist::build(&fake, "Big Mix", &tracks).await.unwrap();

    let chunks = fake.added_chunks();
    assert_eq!(
        chunks.iter().map(Vec::len).collect::<Vec<_>>(),
        vec![100, 100, 50]
    );
    assert_eq!(chunks.concat(), tracks);
    assert_eq!(playlist.track_count, 250);
    assert_eq!(playlist.url, "https://open.spotify.com/playlist/pl1");
}

#[tokio::test]
async fn test_build_creates_playlist_for_current_user_first() {
    let fake = FakeSpotify::new();

    playlist::build(&fake, "Mix", &ids(&["a"])).await.unwrap();

    let calls = fake.calls();
    assert_eq!(calls[0], Call::CurrentUser);
    assert_eq!(
        calls[1],
        Call::CreatePlaylist("listener".to_string(), "Mix".to_string())
    );
    assert_eq!(calls[2], Call::AddTracks("pl1".to_string(), ids(&["a"])));
}

#[tokio::test]
async fn test_build_with_no_tracks_only_creates_playlist() {
    let fake = FakeSpotify::new();

    let playlist = playlist::build(&fake, "Empty", &[]).await.unwrap();

    assert!(fake.added_chunks().is_empty());
    assert_eq!(fake.created_playlists(), vec!["Empty".to_string()]);
    assert_eq!(playlist.track_count, 0);
}

#[tokio::test]
async fn test_build_stops_when_creation_fails() {
    let mut fake = FakeSpotify::new();
    fake.fail_create = true;

    let result = playlist::build(&fake, "Mix", &numbered_tracks(10)).await;

    assert!(result.is_err());
    assert!(fake.added_chunks().is_empty());
}

#[tokio::test]
async fn test_build_propagates_failed_append_without_further_calls() {
    let mut fake = FakeSpotify::new();
    fake.fail_add_after = Some(1);

    let result = playlist::build(&fake, "Mix", &numbered_tracks(250)).await;

    assert!(result.is_err());
    // first chunk went through, second failed, third never sent
    assert_eq!(fake.added_chunks().len(), 2);
}

#[tokio::test]
async fn test_resolve_returns_top_match() {
    let fake = FakeSpotify::new()
        .with_artist("id-eve", "Eve")
        .with_artist("id-steve", "Steve Eves");

    let id = resolver::resolve(&fake, "Eve").await.unwrap();

    assert_eq!(id, Some("id-eve".to_string()));
    assert_eq!(fake.searches(), vec!["Eve".to_string()]);
}

#[tokio::test]
async fn test_resolve_unknown_and_empty_queries() {
    let fake = FakeSpotify::new().with_artist("id-eve", "Eve");

    assert_eq!(resolver::resolve(&fake, "Nobody").await.unwrap(), None);
    assert_eq!(resolver::resolve(&fake, "   ").await.unwrap(), None);
    assert_eq!(fake.searches(), vec!["Nobody".to_string()]);
}

#[tokio::test]
async fn test_collect_requests_albums_and_singles_only() {
    let fake = FakeSpotify::new()
        .with_artist("a1", "Artist")
        .with_album("a1", "alb", "album", &["t1", "t2"])
        .with_album("a1", "sgl", "single", &["t3"])
        .with_album("a1", "cmp", "compilation", &["x1", "x2"])
        .with_album("a1", "app", "appears_on", &["y1"]);

    let tracks = discography::collect(&fake, "a1").await.unwrap();

    assert_eq!(tracks, ids(&["t1", "t2", "t3"]));
    assert!(fake.calls().contains(&Call::ArtistAlbums(
        "a1".to_string(),
        "album,single".to_string()
    )));
    assert!(!fake.calls().contains(&Call::AlbumTracks("cmp".to_string())));
}

#[tokio::test]
async fn test_collect_keeps_duplicates_and_skips_local_files() {
    let fake = FakeSpotify::new()
        .with_artist("a1", "Artist")
        .with_album("a1", "alb", "album", &["t1", "t2"])
        .with_album("a1", "sgl", "single", &[])
        .with_album_tracks(
            "sgl",
            vec![
                Track {
                    id: Some("t2".to_string()),
                    name: "Single version".to_string(),
                },
                Track {
                    id: None,
                    name: "Local file".to_string(),
                },
            ],
        );

    let tracks = discography::collect(&fake, "a1").await.unwrap();

    assert_eq!(tracks, ids(&["t1", "t2", "t2"]));
}

#[tokio::test]
async fn test_collect_unknown_or_empty_artist_is_empty() {
    let fake = FakeSpotify::new();

    assert!(discography::collect(&fake, "doesnotexist").await.unwrap().is_empty());
    assert!(discography::collect(&fake, "").await.unwrap().is_empty());
    // the empty ID never reaches the API
    assert_eq!(fake.calls().len(), 1);
}

#[tokio::test]
async fn test_run_merges_artists_in_input_order_without_duplicates() {
    let fake = FakeSpotify::new()
        .with_artist("4QvgGvpgzgyUOo8Yp8LDm9", "YOASOBI")
        .with_album("4QvgGvpgzgyUOo8Yp8LDm9", "y1", "album", &["a", "b", "c"])
        .with_album("4QvgGvpgzgyUOo8Yp8LDm9", "y2", "single", &["b"])
        .with_artist("eve", "Eve")
        .with_album("eve", "e1", "album", &["d", "a", "e"]);

    let tokens = ids(&["spotify:artist:4QvgGvpgzgyUOo8Yp8LDm9", "Eve"]);
    let report = Pipeline::new(&fake)
        .show_progress(false)
        .run(&tokens, "My Mix")
        .await
        .unwrap();

    assert_eq!(fake.added_chunks(), vec![ids(&["a", "b", "c", "d", "e"])]);
    assert_eq!(report.total_tracks, 7);
    assert_eq!(report.unique_tracks, 5);
    assert_eq!(report.playlist.name, "My Mix");
    assert!(report.not_found().is_empty());

    // the URI token never triggers a search
    assert_eq!(fake.searches(), vec!["Eve".to_string()]);
    assert_eq!(
        report.outcomes[0].classified,
        ClassifiedArtist::ResolvedId("4QvgGvpgzgyUOo8Yp8LDm9".to_string())
    );
    assert_eq!(
        report.outcomes[1].status,
        ArtistStatus::Collected {
            artist_id: "eve".to_string(),
            tracks: 3
        }
    );
}

#[tokio::test]
async fn test_run_skips_unknown_artists_and_keeps_going() {
    let fake = FakeSpotify::new()
        .with_artist("eve", "Eve")
        .with_album("eve", "e1", "album", &["d", "e"]);

    let tokens = ids(&["Nobody At All", "Eve"]);
    let report = Pipeline::new(&fake)
        .show_progress(false)
        .run(&tokens, "Mix")
        .await
        .unwrap();

    assert_eq!(report.not_found(), vec!["Nobody At All"]);
    assert_eq!(fake.added_chunks(), vec![ids(&["d", "e"])]);
}

#[tokio::test]
async fn test_run_with_no_resolvable_artist_still_creates_empty_playlist() {
    let fake = FakeSpotify::new();

    let tokens = ids(&["Ghost One", "Ghost Two"]);
    let report = Pipeline::new(&fake)
        .show_progress(false)
        .run(&tokens, "Nothing")
        .await
        .unwrap();

    assert_eq!(report.not_found(), vec!["Ghost One", "Ghost Two"]);
    assert!(
        report
            .outcomes
            .iter()
            .all(|o| o.status == ArtistStatus::NotFound)
    );
    assert_eq!(fake.created_playlists(), vec!["Nothing".to_string()]);
    assert!(fake.added_chunks().is_empty());
    assert_eq!(report.unique_tracks, 0);
}

#[tokio::test]
async fn test_run_treats_unknown_id_as_empty_contribution() {
    let fake = FakeSpotify::new();

    let tokens = ids(&["id:doesnotexist"]);
    let report = Pipeline::new(&fake)
        .show_progress(false)
        .run(&tokens, "Mix")
        .await
        .unwrap();

    assert!(report.not_found().is_empty());
    assert_eq!(
        report.outcomes[0].status,
        ArtistStatus::Collected {
            artist_id: "doesnotexist".to_string(),
            tracks: 0
        }
    );
    assert!(fake.searches().is_empty());
}

#[tokio::test]
async fn test_run_aborts_on_api_error_without_playlist() {
    let mut fake = FakeSpotify::new().with_artist("eve", "Eve");
    fake.fail_search = true;

    let tokens = ids(&["Eve"]);
    let result = Pipeline::new(&fake)
        .show_progress(false)
        .run(&tokens, "Mix")
        .await;

    assert!(result.is_err());
    assert!(fake.created_playlists().is_empty());
}

#[tokio::test]
async fn test_report_table_rows() {
    let fake = FakeSpotify::new()
        .with_artist("eve", "Eve")
        .with_album("eve", "e1", "album", &["d"]);

    let tokens = ids(&["Eve", "Ghost"]);
    let report = Pipeline::new(&fake)
        .show_progress(false)
        .run(&tokens, "Mix")
        .await
        .unwrap();

    let rows = report.table_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].artist, "Eve");
    assert_eq!(rows[0].lookup, "search");
    assert_eq!(rows[0].id, "eve");
    assert_eq!(rows[0].tracks, "1");
    assert_eq!(rows[1].tracks, "not found");
}
