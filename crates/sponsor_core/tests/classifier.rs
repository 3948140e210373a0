use sponsor_core::{Classifier, NavigationDecision};

#[test]
fn navigation_during_initial_load_stays_in_view() {
    let mut classifier = Classifier::new();
    assert_eq!(classifier.navigation("https://a/redirect"), NavigationDecision::Allow);

    assert!(classifier.page_finished());
    assert_eq!(classifier.navigation("https://tracker"), NavigationDecision::Allow);
    assert!(!classifier.is_loaded());
}

#[test]
fn only_first_page_finished_arms_the_deadline() {
    let mut classifier = Classifier::new();
    assert!(classifier.page_finished());
    assert!(!classifier.page_finished());
    assert!(!classifier.page_finished());

    assert!(classifier.deadline_elapsed());
    assert!(!classifier.deadline_elapsed());
    assert!(!classifier.page_finished());
}

#[test]
fn loaded_session_intercepts_every_navigation() {
    let mut classifier = Classifier::new();
    classifier.page_finished();
    classifier.deadline_elapsed();

    for target in ["https://b", "https://c", "https://b"] {
        let decision = classifier.navigation(target);
        assert_eq!(
            decision,
            NavigationDecision::Intercept {
                url: target.to_string()
            }
        );
        assert!(decision.suppresses_in_view());
    }
}

#[test]
fn stop_before_deadline_keeps_session_unloaded() {
    let mut classifier = Classifier::new();
    classifier.page_finished();
    assert!(classifier.stop());

    assert!(!classifier.deadline_elapsed());
    assert!(!classifier.is_loaded());
    assert_eq!(classifier.navigation("https://b"), NavigationDecision::Allow);
}
