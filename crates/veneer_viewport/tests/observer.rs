use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use veneer_viewport::{
    Breakpoint, ColorScheme, ManualMedia, MediaSource, MediaState, Responsive, Subscription,
    ViewportError, ViewportObserver, ViewportThresholds,
};

fn counter(observer: &ViewportObserver) -> (Arc<AtomicUsize>, Subscription) {
    let count = Arc::new(AtomicUsize::new(0));
    let c = count.clone();
    let sub = observer.subscribe(move |_| {
        c.fetch_add(1, Ordering::SeqCst);
    });
    (count, sub)
}

#[test]
fn resize_within_breakpoint_does_not_notify() {
    let observer = ViewportObserver::default();
    observer.update(MediaState::desktop(1100.0));
    let (count, _sub) = counter(&observer);

    assert!(!observer.update(MediaState::desktop(1150.0)));
    assert!(!observer.update(MediaState::desktop(1279.0)));
    assert_eq!(count.load(Ordering::SeqCst), 0);
    // The width is still recorded
    assert_eq!(observer.media().map(|m| m.width), Some(1279.0));

    assert!(observer.update(MediaState::desktop(1280.0)));
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(observer.breakpoint(), Breakpoint::Xl);
}

#[test]
fn every_subscriber_sees_the_new_classification() {
    let observer = ViewportObserver::default();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let subs: Vec<Subscription> = (0..3)
        .map(|_| {
            let seen = seen.clone();
            observer.subscribe(move |c| seen.lock().unwrap().push(c.breakpoint))
        })
        .collect();

    observer.update(MediaState::desktop(700.0));
    assert_eq!(*seen.lock().unwrap(), vec![Breakpoint::Md; 3]);

    for sub in &subs {
        sub.unsubscribe();
    }
    observer.update(MediaState::desktop(1600.0));
    assert_eq!(seen.lock().unwrap().len(), 3);
}

#[test]
fn preference_change_notifies_without_resize() {
    let observer = ViewportObserver::default();
    observer.update(MediaState::desktop(1024.0));
    let (count, _sub) = counter(&observer);

    observer.update(MediaState::desktop(1024.0).with_color_scheme(ColorScheme::Dark));
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(observer.current().prefers_dark);

    observer.update(
        MediaState::desktop(1024.0)
            .with_color_scheme(ColorScheme::Dark)
            .with_reduced_motion(true),
    );
    assert_eq!(count.load(Ordering::SeqCst), 2);
    assert!(observer.current().prefers_reduced_motion);
}

#[test]
fn callback_can_unsubscribe_itself() {
    let observer = ViewportObserver::default();
    let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
    let calls = Arc::new(AtomicUsize::new(0));

    let sub = {
        let slot = slot.clone();
        let calls = calls.clone();
        observer.subscribe(move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            if let Some(sub) = slot.lock().unwrap().as_ref() {
                sub.unsubscribe();
            }
        })
    };
    *slot.lock().unwrap() = Some(sub);

    observer.update(MediaState::desktop(400.0));
    observer.update(MediaState::desktop(1400.0));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(observer.subscriber_count(), 0);
}

#[test]
fn callback_removed_mid_pass_is_skipped() {
    let observer = ViewportObserver::default();
    let later: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

    let _first = {
        let later = later.clone();
        observer.subscribe(move |_| {
            if let Some(sub) = later.lock().unwrap().as_ref() {
                sub.unsubscribe();
            }
        })
    };
    let (count, second) = counter(&observer);
    *later.lock().unwrap() = Some(second);

    observer.update(MediaState::desktop(900.0));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn callback_reads_the_published_state() {
    let observer = ViewportObserver::default();
    let reader = observer.clone();
    let agreed = Arc::new(AtomicUsize::new(0));
    let a = agreed.clone();
    let _sub = observer.subscribe(move |c| {
        if *reader.current() == *c {
            a.fetch_add(1, Ordering::SeqCst);
        }
    });

    observer.update(MediaState::touch(390.0));
    assert_eq!(agreed.load(Ordering::SeqCst), 1);
    assert!(observer.current().is_touch);
}

#[test]
fn manual_media_drives_connected_observers() {
    let media = ManualMedia::with_state(MediaState::desktop(1440.0));
    let observer = ViewportObserver::with_source(ViewportThresholds::DEFAULT, &media);
    assert_eq!(observer.breakpoint(), Breakpoint::Xl);

    media.resize(500.0);
    assert!(observer.current().is_mobile);
    assert_eq!(media.snapshot().map(|m| m.width), Some(500.0));
}

#[test]
fn derive_follows_the_current_breakpoint() {
    let observer = ViewportObserver::default();
    let columns = Responsive::new().sm(1).md(2).lg(3);

    observer.update(MediaState::desktop(800.0));
    assert_eq!(observer.derive(&columns), Ok(&2));

    observer.update(MediaState::desktop(2000.0));
    assert_eq!(observer.derive(&columns), Ok(&3));

    let empty: Responsive<u8> = Responsive::new();
    assert_eq!(observer.derive(&empty), Err(ViewportError::NoApplicableValue));
}

#[test]
fn thresholds_load_from_toml() {
    let thresholds: ViewportThresholds = toml::from_str(
        r#"
        md = 768

        [frames]
        wide = 1600
        "#,
    )
    .unwrap();
    assert_eq!(thresholds.md, 768.0);
    assert_eq!(thresholds.lg, 1024.0);
    assert_eq!(thresholds.frames.wide, 1600.0);
    assert_eq!(thresholds.frames.tablet, 375.0);

    let observer = ViewportObserver::new(thresholds);
    observer.update(MediaState::desktop(700.0));
    assert_eq!(observer.breakpoint(), Breakpoint::Sm);
}

#[test]
fn responsive_values_load_from_json() {
    let gap: Responsive<String> =
        serde_json::from_str(r#"{"default": "4px", "lg": "12px"}"#).unwrap();
    assert_eq!(gap.resolve(Breakpoint::Sm).unwrap(), "4px");
    assert_eq!(gap.resolve(Breakpoint::Xl).unwrap(), "12px");
}

#[test]
fn misordered_thresholds_still_yield_one_size_class() {
    let observer = ViewportObserver::new(ViewportThresholds {
        md: 1000.0,
        lg: 800.0,
        ..ViewportThresholds::DEFAULT
    });
    observer.update(MediaState::desktop(900.0));

    let c = observer.current();
    assert_eq!(c.breakpoint, Breakpoint::Lg);
    assert!(c.is_desktop);
    assert!(!c.is_mobile && !c.is_tablet);
}
