// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

mod common;

use crate::common::utils;

use hydropath::app::App;
use hydropath::hydropathy::Profile;

#[test]
fn renders_without_panic() {
    let profile = Profile::new("R1", "MKTAYIAKQRQISFVKSHFSRQ", 9).expect("profile");
    let mut app = App::new("TEST", 9, vec![profile]);
    let buf = utils::render(&mut app, 40, 30);
    let screen = utils::buffer_text(&buf);

    assert!(!screen.trim().is_empty());
}

#[test]
fn renders_title_and_axes() {
    let mut app = utils::load_app("tests/data/three.pep", 9);
    let buf = utils::render(&mut app, 100, 30);
    let screen = utils::buffer_text(&buf);

    let top_line = utils::screen_line(&buf, 0);
    assert!(
        top_line.contains("Hydropathy Plot for hba_frag"),
        "title not found on first line: {}",
        top_line
    );
    assert!(screen.contains("Amino Acid Position"), "{}", screen);
    assert!(screen.contains("Hydropathy Score"), "{}", screen);
}

#[test]
fn renders_status_line() {
    let mut app = utils::load_app("tests/data/three.pep", 9);
    let buf = utils::render(&mut app, 100, 30);
    let last_line = utils::screen_line(&buf, 29);

    assert!(last_line.contains("1/3"), "{}", last_line);
    assert!(last_line.contains("47 aa"), "{}", last_line);
    assert!(last_line.contains("window 9"), "{}", last_line);
}

#[test]
fn renders_short_sequence_without_data() {
    let profile = Profile::new("tiny", "MKV", 9).expect("profile");
    let mut app = App::new("TEST", 9, vec![profile]);
    let buf = utils::render(&mut app, 140, 30);
    let screen = utils::buffer_text(&buf);

    assert!(screen.contains("Hydropathy Plot for tiny"), "{}", screen);
    assert!(screen.contains("nothing to plot"), "{}", screen);
}

#[test]
fn renders_when_nothing_left() {
    let mut app = App::new("TEST", 9, Vec::new());
    let buf = utils::render(&mut app, 60, 10);
    let screen = utils::buffer_text(&buf);

    assert!(screen.contains("No more sequences"), "{}", screen);
}
