//! Associates radar frames with a selected weather hour.

use chrono::NaiveTime;

use crate::model::RadarFrame;

/// Frames farther than this from the weather sample are dropped.
pub const TOLERANCE_MS: i64 = 600_000;

/// Whether two times of day fall within the tolerance window of each other.
/// The bound is exclusive: exactly ten minutes apart is out.
pub fn within_tolerance(a: NaiveTime, b: NaiveTime) -> bool {
    (a - b).num_milliseconds().abs() < TOLERANCE_MS
}

/// Keep the frames whose time of day falls within the tolerance window of
/// `weather_time`. Both sides are `HH:MM` strings on the same archive day,
/// so comparing times of day suffices. Frames whose time fails to parse are
/// dropped.
pub fn matching_frames(weather_time: &str, frames: &[RadarFrame]) -> Vec<RadarFrame> {
    let Some(anchor) = parse_hhmm(weather_time) else {
        return Vec::new();
    };

    frames
        .iter()
        .filter(|frame| parse_hhmm(&frame.time).is_some_and(|t| within_tolerance(t, anchor)))
        .cloned()
        .collect()
}

fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn frame(t: &str) -> RadarFrame {
        RadarFrame {
            time: t.to_string(),
            tile_url: format!("https://host/v2/radar/{t}/256/0/0/0/1/0_0.png"),
        }
    }

    #[test]
    fn exactly_ten_minutes_apart_is_excluded() {
        assert!(!within_tolerance(time(13, 0, 0), time(13, 10, 0)));
    }

    #[test]
    fn just_inside_the_window_is_included() {
        assert!(within_tolerance(time(13, 0, 0), time(13, 9, 59)));
    }

    #[test]
    fn identical_times_are_included() {
        assert!(within_tolerance(time(13, 0, 0), time(13, 0, 0)));
    }

    #[test]
    fn window_is_symmetric() {
        assert!(within_tolerance(time(13, 9, 59), time(13, 0, 0)));
        assert!(!within_tolerance(time(13, 10, 0), time(13, 0, 0)));
    }

    #[test]
    fn keeps_only_frames_inside_the_window() {
        let frames = vec![
            frame("12:50"),
            frame("12:55"),
            frame("13:00"),
            frame("13:05"),
            frame("13:10"),
        ];

        let kept = matching_frames("13:00", &frames);
        let times: Vec<&str> = kept.iter().map(|f| f.time.as_str()).collect();

        // both ten-minute boundaries are out
        assert_eq!(times, vec!["12:55", "13:00", "13:05"]);
    }

    #[test]
    fn unparseable_frame_times_are_dropped() {
        let frames = vec![frame("13:00"), frame("noonish")];

        let kept = matching_frames("13:00", &frames);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn unparseable_weather_time_keeps_nothing() {
        let frames = vec![frame("13:00")];

        assert!(matching_frames("noonish", &frames).is_empty());
    }
}
