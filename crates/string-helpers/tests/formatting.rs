use std::num::NonZeroUsize;

use string_helpers::{chunker, pretty_bytes, pretty_seconds_words, pretty_time};

#[test]
fn pretty_time_pads_and_keeps_large_hours() {
    assert_eq!(pretty_time(0), "00:00:00");
    assert_eq!(pretty_time(59), "00:00:59");
    assert_eq!(pretty_time(3661), "01:01:01");
    assert_eq!(pretty_time(100 * 3600 + 5), "100:00:05");
}

#[test]
fn seconds_words_below_one_second() {
    assert_eq!(pretty_seconds_words(0.0), "0 seconds");
    assert_eq!(pretty_seconds_words(0.99), "0 seconds");
    assert_eq!(pretty_seconds_words(-5.0), "0 seconds");
    assert_eq!(pretty_seconds_words(f64::NAN), "0 seconds");
}

#[test]
fn seconds_words_joins_last_part_with_and() {
    assert_eq!(pretty_seconds_words(1.0), "1 second");
    assert_eq!(pretty_seconds_words(65.0), "1 minute and 5 seconds");
    assert_eq!(pretty_seconds_words(120.0), "2 minutes");
    assert_eq!(
        pretty_seconds_words(90061.0),
        "1 day, 1 hour, 1 minute and 1 second"
    );
    assert_eq!(
        pretty_seconds_words((30 * 86400 + 2 * 86400 + 3) as f64),
        "1 month, 2 days and 3 seconds"
    );
}

#[test]
fn seconds_words_uses_360_day_years() {
    assert_eq!(pretty_seconds_words((360 * 86400) as f64), "1 year");
    assert_eq!(pretty_seconds_words((365 * 86400) as f64), "1 year and 5 days");
    assert_eq!(pretty_seconds_words(3600.7), "1 hour");
}

#[test]
fn pretty_bytes_small_values() {
    assert_eq!(pretty_bytes(0), "0 Bytes");
    assert_eq!(pretty_bytes(1), "1 Byte");
    assert_eq!(pretty_bytes(999), "999 Bytes");
}

#[test]
fn pretty_bytes_picks_shorter_rendering() {
    // 1.0 KB beats 1000 Bytes
    assert_eq!(pretty_bytes(1000), "1 KB");
    assert_eq!(pretty_bytes(1536), "1.5 KB");
    // 10 KiB is shorter than 10.2 KB
    assert_eq!(pretty_bytes(10 * 1024), "10 KiB");
    assert_eq!(pretty_bytes(5 * 1024 * 1024 * 1024), "5 GiB");
    assert_eq!(pretty_bytes(3_000_000_000), "3 GB");
    assert_eq!(pretty_bytes(999_999), "1 MB");
}

#[test]
fn chunker_yields_fixed_size_slices() {
    let items = [1, 2, 3, 4, 5, 6, 7];
    let size = NonZeroUsize::new(3).unwrap();
    let chunks = chunker(&items, size).collect::<Vec<_>>();
    assert_eq!(chunks, vec![&[1, 2, 3][..], &[4, 5, 6][..], &[7][..]]);

    let empty: [u8; 0] = [];
    assert_eq!(chunker(&empty, size).count(), 0);
}

#[test]
fn chunker_is_consumed_once() {
    let items = ["a", "b", "c", "d"];
    let mut chunks = chunker(&items, NonZeroUsize::new(2).unwrap());
    assert_eq!(chunks.next(), Some(&["a", "b"][..]));
    assert_eq!(chunks.next(), Some(&["c", "d"][..]));
    assert_eq!(chunks.next(), None);
    assert_eq!(chunks.next(), None);
}
