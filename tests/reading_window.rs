use enviro_dashboard_wasm::domain::environment::{
    Humidity, Reading, ReadingWindow, Temperature, WINDOW_CAPACITY,
};
use quickcheck_macros::quickcheck;

fn numbered(i: usize) -> Reading {
    Reading::new(Temperature::from_celsius(i as f64), Humidity::new(50.0), format!("#{i}"))
}

#[quickcheck]
fn length_is_min_of_appends_and_capacity(appends: u8) -> bool {
    let n = appends as usize;
    let mut window = ReadingWindow::default();
    for i in 1..=n {
        window.append(numbered(i));
    }
    window.len() == n.min(WINDOW_CAPACITY)
}

#[quickcheck]
fn custom_capacity_is_respected(capacity: u8, appends: u8) -> bool {
    let capacity = capacity as usize % 16 + 1;
    let mut window = ReadingWindow::new(capacity);
    for i in 1..=appends as usize {
        window.append(numbered(i));
        if window.len() > capacity {
            return false;
        }
    }
    window.len() == (appends as usize).min(capacity)
}

#[quickcheck]
fn keeps_the_newest_sixty_in_arrival_order(extra: u8) -> bool {
    let n = WINDOW_CAPACITY + 1 + extra as usize;
    let mut window = ReadingWindow::default();
    for i in 1..=n {
        window.append(numbered(i));
    }
    let expected: Vec<String> = (n - 59..=n).map(|i| format!("#{i}")).collect();
    let actual: Vec<String> = window.iter().map(|r| r.timestamp.clone()).collect();
    actual == expected
}

#[test]
fn eviction_returns_each_reading_once() {
    let mut window = ReadingWindow::new(3);
    let evicted: Vec<String> =
        (1..=7).filter_map(|i| window.append(numbered(i))).map(|r| r.timestamp).collect();
    assert_eq!(evicted, vec!["#1", "#2", "#3", "#4"]);
    assert_eq!(window.oldest().unwrap().timestamp, "#5");
    assert_eq!(window.latest().unwrap().timestamp, "#7");
}

#[test]
fn empty_window_has_no_latest() {
    let window = ReadingWindow::default();
    assert!(window.is_empty());
    assert!(window.latest().is_none());
    assert!(window.oldest().is_none());
}
