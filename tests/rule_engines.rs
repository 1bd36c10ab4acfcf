// tests/rule_engines.rs
// Behavioral checks for both classifiers through the public API

use cititrack::chatbot::{self, Intent, IntentResponder};
use cititrack::priority::{self, PriorityClassifier, PriorityLevel, CRITICAL_KEYWORDS, HIGH_KEYWORDS, MEDIUM_KEYWORDS};

#[test]
fn test_priority_examples() {
    let cases = [
        ("fire and also a small hole", PriorityLevel::Critical),
        ("Tree fell on a power line", PriorityLevel::Critical),
        ("there is a large pothole", PriorityLevel::High),
        ("sewage smell near the market", PriorityLevel::High),
        ("minor crack on the sidewalk", PriorityLevel::Medium),
        ("the road surface is uneven", PriorityLevel::Medium),
        ("everything looks fine", PriorityLevel::Low),
        ("", PriorityLevel::Low),
    ];

    for (text, expected) in cases {
        assert_eq!(priority::classify(text), expected, "{text:?}");
    }
}

#[test]
fn test_duplicate_keywords_resolve_to_critical() {
    assert_eq!(priority::classify("street flooding"), PriorityLevel::Critical);
    assert_eq!(priority::classify("a dangerous curve"), PriorityLevel::Critical);
}

#[test]
fn test_each_tier_keyword_alone() {
    let classifier = PriorityClassifier::builtin();

    for keyword in CRITICAL_KEYWORDS {
        assert_eq!(classifier.classify(keyword), PriorityLevel::Critical, "{keyword}");
    }
    for keyword in HIGH_KEYWORDS {
        assert!(classifier.classify(keyword) >= PriorityLevel::High, "{keyword}");
    }
    for keyword in MEDIUM_KEYWORDS {
        assert!(classifier.classify(keyword) >= PriorityLevel::Medium, "{keyword}");
    }
}

#[test]
fn test_uppercase_matches_lowercase() {
    for text in ["POTHOLE", "Gas Leak", "Minor Crack", "DIRTY park"] {
        assert_eq!(priority::classify(text), priority::classify(&text.to_lowercase()));
    }
}

#[test]
fn test_chatbot_examples() {
    let responder = IntentResponder::builtin();

    assert_eq!(responder.detect("Hello"), Intent::Greeting);
    assert_eq!(responder.detect("how do I report an issue"), Intent::HowToReport);
    assert_eq!(responder.detect("track my report"), Intent::Tracking);
    assert_eq!(responder.detect("asdkjasd"), Intent::Default);
    assert_eq!(chatbot::respond("asdkjasd"), chatbot::respond("help"));
}

#[test]
fn test_new_issue_phrasing_is_not_tracking() {
    let responder = IntentResponder::builtin();

    assert_ne!(responder.detect("follow up: how to report a new issue"), Intent::Tracking);
    assert_eq!(
        responder.detect("follow up: how to report a new issue"),
        Intent::HowToReport
    );
}

#[test]
fn test_chatbot_is_idempotent() {
    for message in ["Hello", "what can i report?", "", "GPS?", "status"] {
        assert_eq!(chatbot::respond(message), chatbot::respond(message));
    }
}

#[test]
fn test_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(|| {
                (
                    priority::classify("gas leak"),
                    chatbot::IntentResponder::builtin().detect("bye"),
                )
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), (PriorityLevel::Critical, Intent::Farewell));
    }
}
