use super::*;

#[test]
fn first_frame_is_pending() {
    let inbox = SignalInbox::new(800.0);
    assert!(inbox.has_pending());
    let f = inbox.take().unwrap();
    assert_eq!(f.signal, ScrollSignal::new(0.0, 800.0));
    assert_eq!(f.events, 0);
    assert!(inbox.take().is_none());
}

#[test]
fn scroll_events_coalesce_last_write_wins() {
    let inbox = SignalInbox::new(1000.0);
    let _ = inbox.take();
    for offset in [10.0, 250.0, 90.0, 1200.0] {
        inbox.push_scroll(offset);
    }
    let f = inbox.take().unwrap();
    assert_eq!(f.signal.scroll_offset, 1200.0);
    assert_eq!(f.events, 4);
    assert!(inbox.take().is_none());
}

#[test]
fn resize_marks_frame_dirty_and_keeps_offset() {
    let inbox = SignalInbox::new(1000.0);
    inbox.push_scroll(500.0);
    let _ = inbox.take();
    inbox.push_resize(600.0);
    let f = inbox.take().unwrap();
    assert_eq!(f.signal, ScrollSignal::new(500.0, 600.0));
}

#[test]
fn clones_share_the_mailbox() {
    let a = SignalInbox::new(1000.0);
    let b = a.clone();
    let _ = a.take();
    b.push_scroll(42.0);
    assert_eq!(a.peek().scroll_offset, 42.0);
    assert!(a.take().is_some());
    assert!(!b.has_pending());
}

#[test]
fn producer_thread_feeds_consumer() {
    let inbox = SignalInbox::new(1000.0);
    let _ = inbox.take();
    let producer = inbox.clone();
    std::thread::spawn(move || {
        for i in 0..100 {
            producer.push_scroll(f64::from(i));
        }
    })
    .join()
    .unwrap();
    let f = inbox.take().unwrap();
    assert_eq!(f.signal.scroll_offset, 99.0);
    assert_eq!(f.events, 100);
}
