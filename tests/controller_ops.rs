use videodeck::controller::Controller;
use videodeck::interact::{FixedPicker, FixedSelection, NoSelection, SelectionInput};
use videodeck::model::{Video, VideoLibrary};
use videodeck::CommandError;

/// Create a small test library with the usual suspects
fn create_test_library() -> VideoLibrary {
    let mut lib = VideoLibrary::new();
    lib.add_video(Video::new(
        "amazing_cats_video_id",
        "Amazing Cats",
        vec!["#cat".to_string(), "#animal".to_string()],
    ));
    lib.add_video(Video::new(
        "funny_dogs_video_id",
        "Funny Dogs",
        vec!["#dog".to_string(), "#animal".to_string()],
    ));
    lib.add_video(Video::new(
        "life_at_google_video_id",
        "Life at Google",
        vec!["#google".to_string(), "#career".to_string()],
    ));
    lib
}

fn controller() -> Controller<FixedPicker, NoSelection> {
    Controller::new(create_test_library(), FixedPicker(0), NoSelection)
}

fn controller_with<S: SelectionInput>(selector: S) -> Controller<FixedPicker, S> {
    Controller::new(create_test_library(), FixedPicker(0), selector)
}

#[test]
fn test_unknown_id_reports_not_found_and_mutates_nothing() {
    let mut c = controller();
    c.create_playlist("mix").unwrap();

    assert_eq!(
        c.play("missing_id").unwrap_err(),
        CommandError::VideoNotFound("missing_id".to_string())
    );
    assert_eq!(
        c.flag("missing_id", "spam").unwrap_err(),
        CommandError::VideoNotFound("missing_id".to_string())
    );
    assert_eq!(
        c.allow("missing_id").unwrap_err(),
        CommandError::VideoNotFound("missing_id".to_string())
    );
    assert_eq!(
        c.add_to_playlist("mix", "missing_id").unwrap_err(),
        CommandError::VideoNotFound("missing_id".to_string())
    );

    // nothing playing, playlist still empty
    assert_eq!(c.now_playing().unwrap_err(), CommandError::NothingPlaying);
    assert!(c.show_playlist("mix").unwrap().videos.is_empty());
}

#[test]
fn test_play_replaces_previous_without_extra_signal() {
    let mut c = controller();
    c.play("amazing_cats_video_id").unwrap();
    let second = c.play("funny_dogs_video_id").unwrap();

    assert_eq!(second.id, "funny_dogs_video_id");
    let playing = c.now_playing().unwrap();
    assert_eq!(playing.video.id, "funny_dogs_video_id");
    assert!(!playing.paused);
}

#[test]
fn test_double_pause_reports_already_paused() {
    let mut c = controller();
    c.play("amazing_cats_video_id").unwrap();

    c.pause().unwrap();
    assert_eq!(c.pause().unwrap_err(), CommandError::AlreadyPaused);
    assert!(c.now_playing().unwrap().paused);
}

#[test]
fn test_pause_resume_cycle() {
    let mut c = controller();
    assert_eq!(c.pause().unwrap_err(), CommandError::NothingPlaying);
    assert_eq!(c.resume().unwrap_err(), CommandError::NothingPlaying);

    c.play("amazing_cats_video_id").unwrap();
    assert_eq!(c.resume().unwrap_err(), CommandError::AlreadyPlaying);
    c.pause().unwrap();
    c.resume().unwrap();
    assert!(!c.now_playing().unwrap().paused);
}

#[test]
fn test_stop_semantics() {
    let mut c = controller();
    assert_eq!(c.stop().unwrap_err(), CommandError::NothingToStop);

    c.play("amazing_cats_video_id").unwrap();
    let stopped = c.stop().unwrap();
    assert_eq!(stopped.id, "amazing_cats_video_id");
    assert_eq!(c.stop().unwrap_err(), CommandError::NothingToStop);
}

#[test]
fn test_flagging_current_video_stops_session() {
    let mut c = controller();
    c.play("amazing_cats_video_id").unwrap();

    let flagged = c.flag("amazing_cats_video_id", "dont_like_cats").unwrap();
    assert!(flagged.stopped);
    assert_eq!(flagged.video.flag.as_deref(), Some("dont_like_cats"));
    assert_eq!(c.now_playing().unwrap_err(), CommandError::NothingPlaying);
}

#[test]
fn test_flagging_other_video_leaves_session_untouched() {
    let mut c = controller();
    c.play("amazing_cats_video_id").unwrap();

    let flagged = c.flag("funny_dogs_video_id", "spam").unwrap();
    assert!(!flagged.stopped);
    assert_eq!(c.now_playing().unwrap().video.id, "amazing_cats_video_id");
}

#[test]
fn test_flag_precedence_and_allow() {
    let mut c = controller();
    c.flag("funny_dogs_video_id", "spam").unwrap();

    assert_eq!(
        c.flag("funny_dogs_video_id", "again").unwrap_err(),
        CommandError::AlreadyFlagged
    );
    assert_eq!(
        c.play("funny_dogs_video_id").unwrap_err(),
        CommandError::VideoFlagged {
            id: "funny_dogs_video_id".to_string(),
            reason: "spam".to_string(),
        }
    );

    let allowed = c.allow("funny_dogs_video_id").unwrap();
    assert!(allowed.flag.is_none());
    assert_eq!(
        c.allow("funny_dogs_video_id").unwrap_err(),
        CommandError::NotFlagged
    );

    // allow never resumes anything
    assert_eq!(c.now_playing().unwrap_err(), CommandError::NothingPlaying);
    // playable again after allow
    c.play("funny_dogs_video_id").unwrap();
}

#[test]
fn test_playlist_names_are_case_insensitive() {
    let mut c = controller();
    c.create_playlist("My List").unwrap();

    assert_eq!(
        c.create_playlist("my list").unwrap_err(),
        CommandError::PlaylistAlreadyExists("my list".to_string())
    );
    // lookup ignores case, display keeps the original
    assert_eq!(c.show_playlist("MY LIST").unwrap().name, "My List");
}

#[test]
fn test_add_same_video_twice() {
    let mut c = controller();
    c.create_playlist("mix").unwrap();

    c.add_to_playlist("mix", "amazing_cats_video_id").unwrap();
    assert_eq!(
        c.add_to_playlist("mix", "amazing_cats_video_id").unwrap_err(),
        CommandError::VideoAlreadyInPlaylist
    );
    assert_eq!(c.show_playlist("mix").unwrap().videos.len(), 1);
}

#[test]
fn test_playlist_existence_checked_before_video() {
    let mut c = controller();
    assert_eq!(
        c.add_to_playlist("ghost", "missing_id").unwrap_err(),
        CommandError::PlaylistNotFound("ghost".to_string())
    );
    assert_eq!(
        c.remove_from_playlist("ghost", "missing_id").unwrap_err(),
        CommandError::PlaylistNotFound("ghost".to_string())
    );
}

#[test]
fn test_flagged_video_cannot_be_added_but_stays_listed() {
    let mut c = controller();
    c.create_playlist("mix").unwrap();
    c.add_to_playlist("mix", "amazing_cats_video_id").unwrap();

    c.flag("amazing_cats_video_id", "dont_like_cats").unwrap();

    // still visible in the playlist, with its flag
    let view = c.show_playlist("mix").unwrap();
    assert_eq!(view.videos.len(), 1);
    assert!(view.videos[0].is_flagged());

    // but cannot be newly added elsewhere
    c.create_playlist("other").unwrap();
    assert_eq!(
        c.add_to_playlist("other", "amazing_cats_video_id").unwrap_err(),
        CommandError::VideoFlagged {
            id: "amazing_cats_video_id".to_string(),
            reason: "dont_like_cats".to_string(),
        }
    );

    // removal while flagged is fine
    c.remove_from_playlist("mix", "amazing_cats_video_id").unwrap();
    assert!(c.show_playlist("mix").unwrap().videos.is_empty());
}

#[test]
fn test_add_remove_round_trip() {
    let mut c = controller();
    c.create_playlist("mix").unwrap();
    c.add_to_playlist("mix", "funny_dogs_video_id").unwrap();

    let before: Vec<String> = c
        .show_playlist("mix")
        .unwrap()
        .videos
        .iter()
        .map(|v| v.id.clone())
        .collect();

    c.add_to_playlist("mix", "amazing_cats_video_id").unwrap();
    c.remove_from_playlist("mix", "amazing_cats_video_id").unwrap();

    let after: Vec<String> = c
        .show_playlist("mix")
        .unwrap()
        .videos
        .iter()
        .map(|v| v.id.clone())
        .collect();
    assert_eq!(before, after);

    assert_eq!(
        c.remove_from_playlist("mix", "amazing_cats_video_id").unwrap_err(),
        CommandError::VideoNotInPlaylist
    );
}

#[test]
fn test_clear_and_delete_playlist() {
    let mut c = controller();
    assert_eq!(
        c.clear_playlist("ghost").unwrap_err(),
        CommandError::PlaylistNotFound("ghost".to_string())
    );

    c.create_playlist("mix").unwrap();
    c.add_to_playlist("mix", "funny_dogs_video_id").unwrap();
    c.clear_playlist("mix").unwrap();
    assert!(c.show_playlist("mix").unwrap().videos.is_empty());
    // playlist survives clearing, idempotently
    c.clear_playlist("mix").unwrap();

    c.delete_playlist("MIX").unwrap();
    assert_eq!(
        c.delete_playlist("mix").unwrap_err(),
        CommandError::PlaylistNotFound("mix".to_string())
    );
}

#[test]
fn test_list_playlists_sorted_by_name() {
    let mut c = controller();
    c.create_playlist("zeta").unwrap();
    c.create_playlist("Alpha").unwrap();
    c.add_to_playlist("alpha", "funny_dogs_video_id").unwrap();

    let summaries = c.list_playlists();
    let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Alpha", "zeta"]);
    assert_eq!(summaries[0].video_count, 1);
    assert_eq!(summaries[1].video_count, 0);
}

#[test]
fn test_list_videos_sorted_by_title() {
    let c = controller();
    let titles: Vec<String> = c.list_videos().into_iter().map(|v| v.title).collect();
    assert_eq!(titles, ["Amazing Cats", "Funny Dogs", "Life at Google"]);
    assert_eq!(c.video_count(), 3);
}

#[test]
fn test_search_by_title_sorts_and_plays_selection() {
    let mut lib = VideoLibrary::new();
    lib.add_video(Video::new("cat_video_id", "Cat Video", vec![]));
    lib.add_video(Video::new("dog_video_id", "Dog Video", vec![]));
    lib.add_video(Video::new("concat_video_id", "Concatenate", vec![]));
    let mut c = Controller::new(lib, FixedPicker(0), FixedSelection(1));

    let outcome = c.search_by_title("cat").unwrap();
    let titles: Vec<&str> = outcome.results.iter().map(|v| v.title.as_str()).collect();
    assert_eq!(titles, ["Cat Video", "Concatenate"]);

    // selection 1 plays the alphabetically-first result
    assert_eq!(outcome.played.unwrap().id, "cat_video_id");
    assert_eq!(c.now_playing().unwrap().video.id, "cat_video_id");
}

#[test]
fn test_search_without_selection_plays_nothing() {
    let mut c = controller_with(NoSelection);
    let outcome = c.search_by_title("cat").unwrap();
    assert_eq!(outcome.results.len(), 1);
    assert!(outcome.played.is_none());
    assert_eq!(c.now_playing().unwrap_err(), CommandError::NothingPlaying);
}

#[test]
fn test_search_out_of_range_selection_is_ignored() {
    let mut c = controller_with(FixedSelection(99));
    let outcome = c.search_by_title("cat").unwrap();
    assert!(outcome.played.is_none());
    assert_eq!(c.now_playing().unwrap_err(), CommandError::NothingPlaying);
}

#[test]
fn test_search_excludes_flagged_videos() {
    let mut c = controller_with(NoSelection);
    c.flag("amazing_cats_video_id", "dont_like_cats").unwrap();

    assert_eq!(
        c.search_by_title("cat").unwrap_err(),
        CommandError::NoSearchResults("cat".to_string())
    );
}

#[test]
fn test_search_by_tag_is_exact_and_case_insensitive() {
    let mut c = controller_with(NoSelection);

    let outcome = c.search_by_tag("#ANIMAL").unwrap();
    let titles: Vec<&str> = outcome.results.iter().map(|v| v.title.as_str()).collect();
    assert_eq!(titles, ["Amazing Cats", "Funny Dogs"]);

    // substring of a tag is not a match
    assert_eq!(
        c.search_by_tag("#anim").unwrap_err(),
        CommandError::NoSearchResults("#anim".to_string())
    );
}

#[test]
fn test_play_random_draws_from_unflagged_set() {
    let mut c = controller();
    // FixedPicker(0) picks the first candidate in id order
    let played = c.play_random().unwrap();
    assert_eq!(played.id, "amazing_cats_video_id");

    c.flag("amazing_cats_video_id", "dont_like_cats").unwrap();
    let played = c.play_random().unwrap();
    assert_eq!(played.id, "funny_dogs_video_id");
}

#[test]
fn test_play_random_with_everything_flagged() {
    let mut c = controller();
    c.flag("amazing_cats_video_id", "a").unwrap();
    c.flag("funny_dogs_video_id", "b").unwrap();
    c.flag("life_at_google_video_id", "c").unwrap();

    assert_eq!(c.play_random().unwrap_err(), CommandError::NoAvailableVideos);
    assert_eq!(c.now_playing().unwrap_err(), CommandError::NothingPlaying);
}

#[test]
fn test_play_random_on_empty_library() {
    let mut c = Controller::new(VideoLibrary::new(), FixedPicker(0), NoSelection);
    assert_eq!(c.play_random().unwrap_err(), CommandError::NoAvailableVideos);
}

#[test]
fn test_failed_play_keeps_previous_video_running() {
    let mut c = controller();
    c.play("amazing_cats_video_id").unwrap();
    c.flag("funny_dogs_video_id", "spam").unwrap();

    assert!(c.play("funny_dogs_video_id").is_err());
    assert!(c.play("missing_id").is_err());
    assert_eq!(c.now_playing().unwrap().video.id, "amazing_cats_video_id");
}
