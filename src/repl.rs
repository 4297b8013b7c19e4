//! Interactive command loop
//!
//! Owns all user-facing text: command parsing, video formatting and
//! the rendering of controller payloads and failure reasons. The
//! controller itself never prints.

use crate::controller::Controller;
use crate::interact::{RandomPicker, SelectionInput};
use crate::model::Video;
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// One parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    Stop,
    PlayRandom,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    DeletePlaylist(String),
    AddToPlaylist(String, String),
    RemoveFromPlaylist(String, String),
    ClearPlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo(String, String),
    AllowVideo(String),
    Exit,
}

/// Render a video for display: `Title (id) [#tag ...]`, plus the flag
/// reason when one is attached
pub fn format_video(video: &Video) -> String {
    let mut out = format!("{} ({}) [{}]", video.title, video.id, video.tags.join(" "));
    if let Some(reason) = &video.flag {
        let reason = if reason.is_empty() { "Not supplied" } else { reason };
        out.push_str(&format!(" - FLAGGED (reason: {reason})"));
    }
    out
}

/// Parse one input line. `Err` carries a usage hint for the user.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let head = match parts.next() {
        Some(head) => head.to_lowercase(),
        None => return Err("Please enter a command. Try HELP.".to_string()),
    };
    let mut arg = |usage: &str| -> Result<String, String> {
        parts
            .next()
            .map(str::to_string)
            .ok_or_else(|| format!("Usage: {usage}"))
    };

    let command = match head.as_str() {
        "help" => Command::Help,
        "number_of_videos" => Command::NumberOfVideos,
        "show_all_videos" => Command::ShowAllVideos,
        "play" => Command::Play(arg("PLAY <video_id>")?),
        "stop" => Command::Stop,
        "play_random" => Command::PlayRandom,
        "pause" => Command::Pause,
        "continue" | "resume" => Command::Continue,
        "show_playing" => Command::ShowPlaying,
        "create_playlist" => Command::CreatePlaylist(arg("CREATE_PLAYLIST <name>")?),
        "delete_playlist" => Command::DeletePlaylist(arg("DELETE_PLAYLIST <name>")?),
        "add_to_playlist" => Command::AddToPlaylist(
            arg("ADD_TO_PLAYLIST <name> <video_id>")?,
            arg("ADD_TO_PLAYLIST <name> <video_id>")?,
        ),
        "remove_from_playlist" => Command::RemoveFromPlaylist(
            arg("REMOVE_FROM_PLAYLIST <name> <video_id>")?,
            arg("REMOVE_FROM_PLAYLIST <name> <video_id>")?,
        ),
        "clear_playlist" => Command::ClearPlaylist(arg("CLEAR_PLAYLIST <name>")?),
        "show_playlist" => Command::ShowPlaylist(arg("SHOW_PLAYLIST <name>")?),
        "show_all_playlists" => Command::ShowAllPlaylists,
        "search_videos" => Command::SearchVideos(arg("SEARCH_VIDEOS <term>")?),
        "search_videos_with_tag" => {
            Command::SearchVideosWithTag(arg("SEARCH_VIDEOS_WITH_TAG <tag>")?)
        }
        "flag_video" => {
            let id = arg("FLAG_VIDEO <video_id> [reason]")?;
            let reason = parts.collect::<Vec<_>>().join(" ");
            Command::FlagVideo(id, reason)
        }
        "allow_video" => Command::AllowVideo(arg("ALLOW_VIDEO <video_id>")?),
        "exit" | "quit" => Command::Exit,
        other => return Err(format!("Unknown command: {other}. Try HELP.")),
    };
    Ok(command)
}

/// Run the interactive loop until EXIT or end of input
pub fn run<R: RandomPicker, S: SelectionInput>(controller: &mut Controller<R, S>) -> Result<()> {
    println!("{} videos in the current library", controller.video_count());
    println!("Type HELP for the command list.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(Command::Exit) => break,
            Ok(command) => execute(controller, command),
            Err(hint) => println!("{hint}"),
        }
    }
    println!("Goodbye!");
    Ok(())
}

fn execute<R: RandomPicker, S: SelectionInput>(
    controller: &mut Controller<R, S>,
    command: Command,
) {
    match command {
        Command::Help => print_help(),
        Command::NumberOfVideos => {
            println!("{} videos in the current library", controller.video_count());
        }
        Command::ShowAllVideos => {
            println!("All available videos in current library:");
            for video in controller.list_videos() {
                println!("  {}", format_video(&video));
            }
        }
        Command::Play(id) => match controller.play(&id) {
            Ok(video) => println!("Playing video: {}", video.title),
            Err(e) => println!("Unable to play video: {e}"),
        },
        Command::Stop => match controller.stop() {
            Ok(video) => println!("Stopping video: {}", video.title),
            Err(e) => println!("Unable to stop video: {e}"),
        },
        Command::PlayRandom => match controller.play_random() {
            Ok(video) => println!("Playing video: {}", video.title),
            Err(e) => println!("Unable to play a random video: {e}"),
        },
        Command::Pause => match controller.pause() {
            Ok(video) => println!("Pausing video: {}", video.title),
            Err(e) => println!("Unable to pause video: {e}"),
        },
        Command::Continue => match controller.resume() {
            Ok(video) => println!("Continuing video: {}", video.title),
            Err(e) => println!("Unable to continue video: {e}"),
        },
        Command::ShowPlaying => match controller.now_playing() {
            Ok(playing) => {
                let suffix = if playing.paused { " - PAUSED" } else { "" };
                println!("Currently playing: {}{suffix}", format_video(&playing.video));
            }
            Err(e) => println!("{e}"),
        },
        Command::CreatePlaylist(name) => match controller.create_playlist(&name) {
            Ok(()) => println!("Successfully created new playlist: {name}"),
            Err(e) => println!("Cannot create playlist: {e}"),
        },
        Command::DeletePlaylist(name) => match controller.delete_playlist(&name) {
            Ok(()) => println!("Deleted playlist: {name}"),
            Err(e) => println!("Cannot delete playlist {name}: {e}"),
        },
        Command::AddToPlaylist(name, id) => match controller.add_to_playlist(&name, &id) {
            Ok(video) => println!("Added video to {name}: {}", video.title),
            Err(e) => println!("Cannot add video to {name}: {e}"),
        },
        Command::RemoveFromPlaylist(name, id) => {
            match controller.remove_from_playlist(&name, &id) {
                Ok(video) => println!("Removed video from {name}: {}", video.title),
                Err(e) => println!("Cannot remove video from {name}: {e}"),
            }
        }
        Command::ClearPlaylist(name) => match controller.clear_playlist(&name) {
            Ok(()) => println!("Successfully removed all videos from {name}"),
            Err(e) => println!("Cannot clear playlist {name}: {e}"),
        },
        Command::ShowPlaylist(name) => match controller.show_playlist(&name) {
            Ok(view) => {
                println!("Showing playlist: {name}");
                if view.videos.is_empty() {
                    println!("  No videos here yet");
                }
                for video in &view.videos {
                    println!("  {}", format_video(video));
                }
            }
            Err(e) => println!("Cannot show playlist {name}: {e}"),
        },
        Command::ShowAllPlaylists => {
            let summaries = controller.list_playlists();
            if summaries.is_empty() {
                println!("No playlists exist yet");
            } else {
                println!("Showing all playlists:");
                for summary in summaries {
                    println!("  {} ({} videos)", summary.name, summary.video_count);
                }
            }
        }
        Command::SearchVideos(term) => match controller.search_by_title(&term) {
            Ok(outcome) => {
                if let Some(video) = outcome.played {
                    println!("Playing video: {}", video.title);
                }
            }
            Err(e) => println!("{e}"),
        },
        Command::SearchVideosWithTag(tag) => match controller.search_by_tag(&tag) {
            Ok(outcome) => {
                if let Some(video) = outcome.played {
                    println!("Playing video: {}", video.title);
                }
            }
            Err(e) => println!("{e}"),
        },
        Command::FlagVideo(id, reason) => match controller.flag(&id, &reason) {
            Ok(flagged) => {
                if flagged.stopped {
                    println!("Stopping video: {}", flagged.video.title);
                }
                let reason = flagged.video.flag.as_deref().unwrap_or_default();
                let reason = if reason.is_empty() { "Not supplied" } else { reason };
                println!(
                    "Successfully flagged video: {} (reason: {reason})",
                    flagged.video.title
                );
            }
            Err(e) => println!("Cannot flag video: {e}"),
        },
        Command::AllowVideo(id) => match controller.allow(&id) {
            Ok(video) => println!("Successfully removed flag from video: {}", video.title),
            Err(e) => println!("Cannot remove flag from video: {e}"),
        },
        Command::Exit => {}
    }
}

fn print_help() {
    println!("Available commands:");
    println!("  NUMBER_OF_VIDEOS                        - library size");
    println!("  SHOW_ALL_VIDEOS                         - list every video by title");
    println!("  PLAY <video_id>                         - play a video");
    println!("  PLAY_RANDOM                             - play a random unflagged video");
    println!("  STOP                                    - stop the current video");
    println!("  PAUSE / CONTINUE                        - pause or resume playback");
    println!("  SHOW_PLAYING                            - what is playing right now");
    println!("  CREATE_PLAYLIST <name>                  - create a playlist");
    println!("  DELETE_PLAYLIST <name>                  - delete a playlist");
    println!("  ADD_TO_PLAYLIST <name> <video_id>       - add a video to a playlist");
    println!("  REMOVE_FROM_PLAYLIST <name> <video_id>  - remove a video from a playlist");
    println!("  CLEAR_PLAYLIST <name>                   - empty a playlist");
    println!("  SHOW_PLAYLIST <name>                    - list a playlist's videos");
    println!("  SHOW_ALL_PLAYLISTS                      - list all playlists");
    println!("  SEARCH_VIDEOS <term>                    - search titles, then pick one to play");
    println!("  SEARCH_VIDEOS_WITH_TAG <tag>            - search tags, then pick one to play");
    println!("  FLAG_VIDEO <video_id> [reason]          - attach a moderation flag");
    println!("  ALLOW_VIDEO <video_id>                  - remove a moderation flag");
    println!("  EXIT                                    - quit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("stop"), Ok(Command::Stop));
        assert_eq!(parse_command("PLAY_RANDOM"), Ok(Command::PlayRandom));
        assert_eq!(
            parse_command("play amazing_cats_video_id"),
            Ok(Command::Play("amazing_cats_video_id".to_string()))
        );
        assert_eq!(parse_command("resume"), Ok(Command::Continue));
    }

    #[test]
    fn test_parse_two_argument_commands() {
        assert_eq!(
            parse_command("add_to_playlist myPL some_id"),
            Ok(Command::AddToPlaylist(
                "myPL".to_string(),
                "some_id".to_string()
            ))
        );
        assert!(parse_command("add_to_playlist myPL").is_err());
    }

    #[test]
    fn test_parse_flag_reason_keeps_rest_of_line() {
        assert_eq!(
            parse_command("flag_video vid_id not suitable here"),
            Ok(Command::FlagVideo(
                "vid_id".to_string(),
                "not suitable here".to_string()
            ))
        );
        assert_eq!(
            parse_command("flag_video vid_id"),
            Ok(Command::FlagVideo("vid_id".to_string(), String::new()))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_and_empty() {
        assert!(parse_command("").is_err());
        assert!(parse_command("   ").is_err());
        assert!(parse_command("rewind").unwrap_err().contains("Unknown command"));
    }

    #[test]
    fn test_format_video() {
        let mut video = Video::new(
            "cat_id",
            "Amazing Cats",
            vec!["#cat".to_string(), "#animal".to_string()],
        );
        assert_eq!(format_video(&video), "Amazing Cats (cat_id) [#cat #animal]");

        video.flag = Some("dont_like_cats".to_string());
        assert_eq!(
            format_video(&video),
            "Amazing Cats (cat_id) [#cat #animal] - FLAGGED (reason: dont_like_cats)"
        );

        video.flag = Some(String::new());
        assert!(format_video(&video).ends_with("(reason: Not supplied)"));
    }
}
