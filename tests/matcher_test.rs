use flight_detect::*;

const FLIGHT_DESIGNATOR: &str = r"flight \w+\d+";

// --- SignalMatcher ---

#[test]
fn test_match_confirmation_email() {
    let matcher = SignalMatcher::default();
    let matched = matcher.match_signals(
        "Your Delta flight confirmation",
        "Flight DL123 confirmed for 14 Jan 2025",
    );

    assert_eq!(
        matched.as_slice(),
        ["flight confirmation", FLIGHT_DESIGNATOR, "delta"]
    );
}

#[test]
fn test_uppercase_shapes_never_match_folded_text() {
    let matcher = SignalMatcher::default();
    let matched = matcher.match_signals("AA1234 QXZTRW", "Ref ABCDEF on BA117");

    assert!(!matched.contains(FLIGHT_NUMBER_SIGNAL));
    assert!(!matched.contains(BOOKING_REFERENCE_SIGNAL));
    assert!(matched.is_empty());
}

#[test]
fn test_case_aware_catalog_matches_shapes() {
    let matcher = SignalMatcher::new(SignalCatalog::case_aware());
    let matched = matcher.match_signals(
        "Your Delta flight confirmation",
        "Flight DL123 confirmed for 14 Jan 2025",
    );

    assert_eq!(
        matched.as_slice(),
        [
            "flight confirmation",
            FLIGHT_DESIGNATOR,
            FLIGHT_NUMBER_SIGNAL,
            "delta"
        ]
    );
}

#[test]
fn test_case_aware_booking_reference() {
    let matcher = SignalMatcher::new(SignalCatalog::case_aware());
    let matched = matcher.match_signals("Trip details", "Your reference is QXZTRW");

    assert_eq!(matched.as_slice(), [BOOKING_REFERENCE_SIGNAL]);
}

#[test]
fn test_single_airline_newsletter() {
    let matcher = SignalMatcher::default();
    let matched = matcher.match_signals("Weekly Delta newsletter", "Check out our delta deals");

    assert_eq!(matched.as_slice(), ["delta"]);
}

#[test]
fn test_empty_message_matches_nothing() {
    let matched = SignalMatcher::default().match_signals("", "");
    assert!(matched.is_empty());
    assert_eq!(matched.len(), 0);
}

#[test]
fn test_airline_names_case_insensitive() {
    let matcher = SignalMatcher::default();
    let matched = matcher.match_signals("", "Thank you for flying LUFTHANSA and Air France");

    assert_eq!(matched.as_slice(), ["lufthansa", "air france"]);
}

#[test]
fn test_signal_counted_once_across_subject_and_body() {
    let matcher = SignalMatcher::default();
    let matched = matcher.match_signals("E-Ticket receipt", "Your e-ticket is attached. E-TICKET.");

    assert_eq!(matched.as_slice(), ["e-ticket"]);
}

#[test]
fn test_patterns_reported_before_airlines() {
    let matcher = SignalMatcher::default();
    let matched = matcher.match_signals("KLM", "Boarding pass and booking reference inside");

    assert_eq!(
        matched.as_slice(),
        ["boarding pass", "booking reference", "klm"]
    );
}

#[test]
fn test_airline_substring_inside_word() {
    // Substring matching has no word boundary
    let matcher = SignalMatcher::default();
    let matched = matcher.match_signals("Family reunited", "");

    assert_eq!(matched.as_slice(), ["united"]);
}

#[test]
fn test_custom_original_case_pattern() {
    let config = CatalogConfig {
        patterns: vec![PatternConfig::original("PNR"), PatternConfig::folded("pnr")],
        airlines: vec![],
    };
    let matcher = SignalMatcher::new(SignalCatalog::from_config(&config).unwrap());

    let upper = matcher.match_signals("", "PNR attached");
    assert_eq!(upper.as_slice(), ["PNR", "pnr"]);

    let lower = matcher.match_signals("", "pnr attached");
    assert_eq!(lower.as_slice(), ["pnr"]);
}

#[test]
fn test_matcher_is_deterministic() {
    let matcher = SignalMatcher::default();
    let a = matcher.match_signals("Booking confirmation", "Emirates flight EK202");
    let b = matcher.match_signals("Booking confirmation", "Emirates flight EK202");
    assert_eq!(a, b);
}

// --- BookingClassifier ---

fn signals(ids: &[&str]) -> MatchedSignals {
    MatchedSignals::from(ids.iter().map(|s| (*s).to_string()).collect::<Vec<_>>())
}

#[test]
fn test_classifier_default_threshold() {
    let classifier = BookingClassifier::default();
    assert_eq!(classifier.threshold(), DEFAULT_THRESHOLD);
    assert_eq!(classifier.threshold(), 2);
}

#[test]
fn test_classifier_threshold_boundary() {
    let classifier = BookingClassifier::default();
    assert!(!classifier.classify(&signals(&[])));
    assert!(!classifier.classify(&signals(&["delta"])));
    assert!(classifier.classify(&signals(&["delta", "e-ticket"])));
    assert!(classifier.classify(&signals(&["delta", "e-ticket", "boarding pass"])));
}

#[test]
fn test_classifier_weighs_signals_equally() {
    let classifier = BookingClassifier::default();
    assert!(classifier.classify(&signals(&["delta", "united"])));
    assert!(classifier.classify(&signals(&["e-ticket", "boarding pass"])));
}

#[test]
fn test_classifier_custom_threshold() {
    let classifier = BookingClassifier::new(3);
    assert!(!classifier.classify(&signals(&["delta", "e-ticket"])));
    assert!(classifier.classify(&signals(&["delta", "e-ticket", "klm"])));
}

#[test]
fn test_signal_set_drops_duplicates() {
    let matched = signals(&["delta", "delta", "e-ticket", "delta"]);
    assert_eq!(matched.as_slice(), ["delta", "e-ticket"]);
    assert_eq!(matched.len(), 2);
}

#[test]
fn test_classifier_ignores_repeated_signal() {
    let classifier = BookingClassifier::default();
    assert!(!classifier.classify(&signals(&["delta", "delta"])));
}

#[test]
fn test_signal_set_deserializes_without_duplicates() {
    let matched: MatchedSignals = serde_json::from_str(r#"["klm", "klm", "e-ticket"]"#).unwrap();
    assert_eq!(matched.as_slice(), ["klm", "e-ticket"]);
    assert_eq!(serde_json::to_string(&matched).unwrap(), r#"["klm","e-ticket"]"#);
}
